use std::path::PathBuf;

use crate::Error;

pub const WORKSPACE_ROOT_VAR: &str = "WORKSPACE_ROOT";
pub const GOPATH_VAR: &str = "GOPATH";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub workspace_root: PathBuf,
    pub home_dir: PathBuf,
}

impl Config {
    pub fn from_env(workspace_root: Option<PathBuf>) -> Result<Config, Error> {
        Self::resolve(
            workspace_root,
            |key| std::env::var(key).ok(),
            dirs::home_dir(),
        )
    }

    /// Workspace root comes from the flag, then `WORKSPACE_ROOT`, then
    /// `GOPATH`, then `~/go`.
    pub fn resolve<F>(
        workspace_root: Option<PathBuf>,
        var: F,
        home_dir: Option<PathBuf>,
    ) -> Result<Config, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let home_dir = home_dir.ok_or(Error::NoHomeDir)?;

        let non_empty = |key: &str| var(key).filter(|value| !value.is_empty());

        let workspace_root = workspace_root
            .or_else(|| non_empty(WORKSPACE_ROOT_VAR).map(PathBuf::from))
            .or_else(|| non_empty(GOPATH_VAR).map(first_gopath_entry))
            .unwrap_or_else(|| home_dir.join("go"));

        Ok(Config {
            workspace_root,
            home_dir,
        })
    }
}

// GOPATH may be a list, the first entry is where sources go.
fn first_gopath_entry(gopath: String) -> PathBuf {
    let first = std::env::split_paths(&gopath).find(|path| !path.as_os_str().is_empty());
    first.unwrap_or_else(|| PathBuf::from(gopath))
}
