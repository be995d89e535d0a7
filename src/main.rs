use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use pagestore::app::AppAction;
use pagestore::config::Config;
use pagestore::host::{
    make_store, PageRequest, Session, Snapshot, SnapshotStash, StoreOptions, View,
};
use pagestore::logging::init_tracing;
use pagestore::pages::{IndexPage, StoreValuePanel};

/// Render the index page through a server session, then rehydrate a
/// client session from the server's snapshot.
#[derive(Debug, Parser)]
#[command(name = "pagestore", version)]
struct Cli {
    /// Config file (default: platform config dir/pagestore/config.toml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Trace every dispatch.
    #[arg(long)]
    debug: bool,

    /// Initial state for the server session, as a JSON object.
    #[arg(long, value_name = "JSON")]
    initial_state: Option<String>,

    /// Skip the bootstrap action.
    #[arg(long)]
    no_bootstrap: bool,

    /// Press the store value button after the first render.
    #[arg(long)]
    click: bool,

    /// Extra action to dispatch after the first render (repeatable).
    #[arg(long = "action", value_name = "JSON")]
    actions: Vec<String>,

    /// Page path passed to the page while loading props.
    #[arg(long, default_value = "/")]
    pathname: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    let debug = cli.debug || config.debug_enabled();
    init_tracing(debug);

    let initial = cli
        .initial_state
        .as_deref()
        .map(|text| Snapshot::from_json(text).restore())
        .transpose()
        .context("invalid --initial-state")?;

    let actions = cli
        .actions
        .iter()
        .map(|text| serde_json::from_str::<AppAction>(text))
        .collect::<Result<Vec<_>, _>>()
        .context("invalid --action")?;

    let bootstrap = if cli.no_bootstrap {
        None
    } else {
        config.bootstrap.action()
    };

    let stash = SnapshotStash::new();
    let server_options = StoreOptions::from_config(&config, true).with_debug(debug);
    let request = PageRequest::new(&cli.pathname);

    let mut server = Session::begin(&make_store, initial, server_options.clone(), bootstrap);
    let props = server.load_page(&IndexPage, &request);
    print_view("server render", &server.render(&IndexPage, &props));

    let interacted = cli.click || !actions.is_empty();
    if cli.click {
        server.interact(|_, dispatch| StoreValuePanel::trigger_change(dispatch));
    }
    for action in actions {
        server.interact(move |_, dispatch| dispatch.dispatch(action));
    }
    if interacted {
        print_view("after interaction", &server.render(&IndexPage, &props));
    }

    let final_state = server.finish(&stash)?;
    println!("{}", serde_json::to_string_pretty(&final_state)?);

    let client_options = StoreOptions {
        is_server: false,
        ..server_options
    };
    let client = Session::rehydrate(&make_store, &stash, client_options)?;
    print_view("client render", &client.render(&IndexPage, &props));

    Ok(())
}

fn print_view(title: &str, view: &View) {
    println!("--- {} ---", title);
    for line in view {
        println!("{}", line);
    }
}
