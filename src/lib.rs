//! Per-session state container for server-rendered pages.
//!
//! A [`host::Session`] owns one [`store::Store`] driven by the
//! [`app::AppReducer`]; pages read state and dispatch [`app::AppAction`]s
//! through explicitly passed handles.

pub mod app;
pub mod config;
pub mod host;
pub mod logging;
pub mod mvi;
pub mod pages;
pub mod store;
