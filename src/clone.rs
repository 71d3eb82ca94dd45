use std::path::PathBuf;

use tracing::info;

use crate::config::Config;
use crate::credential::{find_private_key, Credential};
use crate::git::Cloner;
use crate::remote::{classify, normalize_path, rewrite_to_ssh, ssh_username, UrlKind};
use crate::workspace::{destination, prepare_destination};
use crate::Error;

#[derive(Clone, Debug, PartialEq)]
pub struct CloneRequest {
    pub url: String,
    pub ssh: bool,
}

/// Clones `request.url` into `<workspace root>/src/<normalized url>` and
/// returns that path. Anything already at the path is removed first.
pub fn run<C>(request: &CloneRequest, config: &Config, cloner: &C) -> Result<PathBuf, Error>
where
    C: Cloner + ?Sized,
{
    let kind = classify(&request.url)?;

    let url = if request.ssh {
        info!("using ssh");
        rewrite_to_ssh(&request.url)?
    } else {
        request.url.clone()
    };

    let credential = if request.ssh || kind == UrlKind::Ssh {
        let private_key = find_private_key(&config.home_dir)?;
        info!("using ssh key {}", private_key.display());

        Some(Credential::new(ssh_username(&url), private_key))
    } else {
        None
    };

    let path = destination(&config.workspace_root, &normalize_path(&url)?);
    info!("path: {}", path.display());

    prepare_destination(&path)?;

    info!("cloning {}", url);
    cloner
        .clone_repo(&url, &path, credential.as_ref())
        .map_err(|source| Error::Clone {
            url: url.clone(),
            source,
        })?;

    Ok(path)
}
