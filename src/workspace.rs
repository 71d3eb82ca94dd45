use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::Error;

pub fn destination(workspace_root: &Path, normalized: &str) -> PathBuf {
    let mut path = workspace_root.join("src");
    path.extend(normalized.split('/').filter(|segment| !segment.is_empty()));
    path
}

/// Wipes whatever lives at `path` and creates it again as an empty directory.
pub fn prepare_destination(path: &Path) -> Result<(), Error> {
    remove_existing(path).map_err(|err| Error::Filesystem(path.to_path_buf(), err))?;
    fs::create_dir_all(path).map_err(|err| Error::Filesystem(path.to_path_buf(), err))
}

fn remove_existing(path: &Path) -> io::Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(err) => return Err(err),
    };

    debug!("removing existing {}", path.display());

    if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}
