#[cfg(feature = "git-cli")]
mod git_cli {
    pub mod clone;
}

#[cfg(feature = "git-cli")]
pub use git_cli::clone::GitCliCloner as DefaultCloner;

#[cfg(not(feature = "git-cli"))]
mod libgit2 {
    pub mod clone;

    mod credential_helper;
}

#[cfg(not(feature = "git-cli"))]
pub use libgit2::clone::Libgit2Cloner as DefaultCloner;

use std::error::Error as StdError;
use std::path::Path;

use crate::credential::Credential;

pub type CloneFailure = Box<dyn StdError + Send + Sync + 'static>;

/// Performs the actual transfer of a remote repository into an empty directory.
pub trait Cloner {
    fn clone_repo(
        &self,
        url: &str,
        path: &Path,
        credential: Option<&Credential>,
    ) -> Result<(), CloneFailure>;
}
