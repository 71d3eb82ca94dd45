use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::credential::Credential;
use crate::git::{CloneFailure, Cloner};

#[derive(Default)]
pub struct GitCliCloner;

impl Cloner for GitCliCloner {
    fn clone_repo(
        &self,
        url: &str,
        path: &Path,
        credential: Option<&Credential>,
    ) -> Result<(), CloneFailure> {
        let mut git = Command::new("git");
        git.arg("clone").arg(url).arg(path);

        if let Some(credential) = credential {
            git.env("GIT_SSH_COMMAND", ssh_command(credential));
        }

        debug!("executing {:?}", git);

        let status = git
            .status()
            .map_err(|err| format!("failed to execute git: {}", err))?;

        if status.success() {
            Ok(())
        } else {
            match status.code() {
                Some(code) => Err(format!("git clone exited with code {}", code).into()),
                None => Err("git clone was terminated by a signal".into()),
            }
        }
    }
}

// GIT_SSH_COMMAND is run through `sh -c`.
fn ssh_command(credential: &Credential) -> String {
    format!(
        "ssh -i {} -o IdentitiesOnly=yes -l {}",
        quote(&credential.private_key.to_string_lossy()),
        quote(&credential.username)
    )
}

fn quote(word: &str) -> String {
    format!("'{}'", word.replace('\'', "'\\''"))
}
