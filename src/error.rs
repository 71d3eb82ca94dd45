use std::error::Error as StdError;
use std::io::Error as IoError;
use std::path::PathBuf;

use crate::git::CloneFailure;

#[derive(Debug)]
pub enum Error {
    InvalidUrl(String),
    NoCredential(PathBuf),
    NoHomeDir,

    Filesystem(PathBuf, IoError),

    Clone { url: String, source: CloneFailure },
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        use Error::*;

        match self {
            Filesystem(_, err) => Some(err),
            Clone { source, .. } => Some(&**source),
            _ => None,
        }
    }
}

use std::fmt;
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;

        match self {
            InvalidUrl(url) => write!(f, "unknown url type \"{}\"", url),
            NoCredential(ssh_dir) => write!(
                f,
                "no ssh keys found, expected id_rsa or id_ed25519 in {}",
                ssh_dir.display()
            ),
            NoHomeDir => write!(f, "can't locate the home directory"),

            Filesystem(path, err) => write!(f, "can't prepare {}: {}", path.display(), err),

            Clone { url, source } => write!(f, "can't clone {}: {}", url, source),
        }
    }
}
