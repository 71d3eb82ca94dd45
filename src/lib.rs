mod cli;
mod clone;
mod config;
mod credential;
mod error;
mod git;
mod remote;
mod workspace;

pub use cli::{cli, clone_request, verbose, workspace_root};
pub use clone::{run, CloneRequest};
pub use config::Config;
pub use credential::Credential;
pub use error::Error;
pub use git::{CloneFailure, Cloner, DefaultCloner};
pub use remote::{classify, normalize_path, rewrite_to_ssh, UrlKind};
pub use workspace::prepare_destination;
