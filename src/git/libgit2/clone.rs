use std::path::Path;

use git2::build::RepoBuilder;
use git2::{FetchOptions, RemoteCallbacks};

use super::credential_helper::CredentialHelper;
use crate::credential::Credential;
use crate::git::{CloneFailure, Cloner};

#[derive(Default)]
pub struct Libgit2Cloner;

impl Cloner for Libgit2Cloner {
    fn clone_repo(
        &self,
        url: &str,
        path: &Path,
        credential: Option<&Credential>,
    ) -> Result<(), CloneFailure> {
        let mut credential_helper = CredentialHelper::new(credential);

        let mut callbacks = RemoteCallbacks::new();
        callbacks.credentials(move |url, username_from_url, allowed_types| {
            credential_helper.credentials(url, username_from_url, allowed_types)
        });

        let mut fo = FetchOptions::new();
        fo.remote_callbacks(callbacks);

        RepoBuilder::new().fetch_options(fo).clone(url, path)?;
        Ok(())
    }
}
