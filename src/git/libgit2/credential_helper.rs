use git2::{Cred, CredentialType, Error};
use tracing::debug;

use crate::credential::Credential;

pub struct CredentialHelper<'a> {
    credential: Option<&'a Credential>,
    state: CredentialHelperState,
}

#[derive(Copy, Clone)]
enum CredentialHelperState {
    Initialized,
    SshKey,
    Anonymous,
}

use CredentialHelperState::*;

impl<'a> CredentialHelper<'a> {
    pub fn new(credential: Option<&'a Credential>) -> CredentialHelper<'a> {
        CredentialHelper {
            credential,
            state: Initialized,
        }
    }

    pub fn credentials(
        &mut self,
        url: &str,
        username_from_url: Option<&str>,
        allowed_types: CredentialType,
    ) -> Result<Cred, Error> {
        if let Initialized = self.state {
            debug!("requested authorization for url {}", url);
        }

        match (self.credential, self.state) {
            (Some(credential), _) if allowed_types.contains(CredentialType::USERNAME) => {
                Cred::username(&credential.username)
            }
            (Some(_), SshKey) => Err(Error::from_str("ssh key was rejected by the remote")),
            (Some(credential), _) if allowed_types.is_ssh_key() => {
                self.state = SshKey;

                let username = username_from_url.unwrap_or(&credential.username);
                let public_key = credential.public_key();

                debug!(
                    "offering {} as {}",
                    credential.private_key.display(),
                    username
                );

                Cred::ssh_key(
                    username,
                    public_key.as_deref(),
                    &credential.private_key,
                    None,
                )
            }
            (_, Anonymous) => Err(Error::from_str("remote requires authentication")),
            _ => {
                self.state = Anonymous;
                Cred::default()
            }
        }
    }
}
