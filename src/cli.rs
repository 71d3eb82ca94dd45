use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use crate::clone::CloneRequest;

pub fn cli() -> Command {
    Command::new("gopath-clone")
        .about("Clone a repository into <workspace root>/src/<host>/<path>")
        .arg_required_else_help(true)
        .arg(
            Arg::new("url")
                .required(true)
                .value_name("URL")
                .help("https://host/path or git@host:path"),
        )
        .arg(
            Arg::new("transport")
                .required(false)
                .value_name("ssh")
                .value_parser(PossibleValuesParser::new(["ssh"]))
                .help("Clone over ssh, rewriting an https url"),
        )
        .arg(
            Arg::new("workspace-root")
                .long("workspace-root")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Defaults to $WORKSPACE_ROOT, then $GOPATH, then ~/go"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue),
        )
}

pub fn clone_request(matches: &ArgMatches) -> CloneRequest {
    let url = matches
        .get_one::<String>("url")
        .cloned()
        .unwrap_or_default();
    let ssh = matches.get_one::<String>("transport").is_some();

    CloneRequest { url, ssh }
}

pub fn workspace_root(matches: &ArgMatches) -> Option<PathBuf> {
    matches.get_one::<PathBuf>("workspace-root").cloned()
}

pub fn verbose(matches: &ArgMatches) -> bool {
    matches.get_flag("verbose")
}
