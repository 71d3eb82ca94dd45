use std::process::exit;

use anyhow::Result;
use gopath_clone::{cli, clone_request, run, verbose, workspace_root, Config, DefaultCloner};
use tracing::{error, Level};

fn main() {
    let matches = cli().get_matches();

    let level = if verbose(&matches) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = handle(&matches) {
        error!("{}", err);
        exit(1);
    }
}

fn handle(matches: &clap::ArgMatches) -> Result<()> {
    let config = Config::from_env(workspace_root(matches))?;
    let request = clone_request(matches);

    run(&request, &config, &DefaultCloner::default())?;
    Ok(())
}
