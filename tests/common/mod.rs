//! Shared test utilities.

#![allow(dead_code)]

use pagestore::app::{AppAction, AppState};
use pagestore::store::{Dispatched, Observer};
use parking_lot::Mutex;
use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

/// Transitions captured by a [`Recorder`]: (sequence, action, next state).
pub type Recorded = Rc<RefCell<Vec<(u64, AppAction, AppState)>>>;

/// Observer that records every transition it sees.
pub struct Recorder {
    log: Recorded,
}

impl Observer<AppState, AppAction> for Recorder {
    fn observe(&mut self, d: &Dispatched<'_, AppState, AppAction>) {
        self.log
            .borrow_mut()
            .push((d.sequence, d.action.clone(), d.next.clone()));
    }
}

/// A recorder plus a handle to its log.
pub fn recorder() -> (Recorded, Recorder) {
    let log: Recorded = Rc::new(RefCell::new(Vec::new()));
    (log.clone(), Recorder { log })
}

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// The action sequence the index page produces: bootstrap then button.
pub fn page_actions() -> Vec<AppAction> {
    vec![
        AppAction::foo("foo"),
        AppAction::change_store_value("new store value"),
    ]
}

/// Writer handing formatted log lines to a shared buffer.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a `pagestore=debug` fmt subscriber installed for the
/// current thread and return its result together with the captured output.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("pagestore=debug"))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}
