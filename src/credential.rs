use std::path::{Path, PathBuf};

use crate::Error;

const KEY_NAMES: [&str; 2] = ["id_rsa", "id_ed25519"];
const DEFAULT_USERNAME: &str = "git";

#[derive(Clone, Debug, PartialEq)]
pub struct Credential {
    pub username: String,
    pub private_key: PathBuf,
}

impl Credential {
    pub fn new(username: Option<&str>, private_key: PathBuf) -> Credential {
        Credential {
            username: username.unwrap_or(DEFAULT_USERNAME).to_string(),
            private_key,
        }
    }

    pub fn public_key(&self) -> Option<PathBuf> {
        let mut public_key = self.private_key.clone();
        public_key.set_extension("pub");

        if public_key.is_file() {
            Some(public_key)
        } else {
            None
        }
    }
}

/// Looks for `~/.ssh/id_rsa`, then `~/.ssh/id_ed25519`.
pub fn find_private_key(home: &Path) -> Result<PathBuf, Error> {
    let ssh_dir = home.join(".ssh");

    let key = KEY_NAMES
        .iter()
        .map(|name| ssh_dir.join(name))
        .find(|path| path.exists());

    key.ok_or(Error::NoCredential(ssh_dir))
}
