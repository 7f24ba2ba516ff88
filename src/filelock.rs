use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use file_lock::{FileLock, FileOptions};

pub fn read_file_lock(path: &Path) -> Result<Option<Vec<u8>>> {
    let lock_opts = FileOptions::new().read(true);
    let mut file = match FileLock::lock(path, true, lock_opts) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err).with_context(|| format!("lock '{}'", path.display())),
    };

    let mut data = Vec::new();
    file.file
        .read_to_end(&mut data)
        .with_context(|| format!("read '{}'", path.display()))?;
    Ok(Some(data))
}

pub fn write_file_lock(path: &Path, data: &[u8]) -> Result<()> {
    let lock_opts = FileOptions::new().write(true).truncate(true).create(true);
    let mut file = FileLock::lock(path, true, lock_opts)
        .with_context(|| format!("lock '{}'", path.display()))?;
    file.file
        .write_all(data)
        .with_context(|| format!("write '{}'", path.display()))?;
    Ok(())
}

/// Removes the file, a file that is already gone is not an error.
pub fn remove_file(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err).with_context(|| format!("remove '{}'", path.display())),
    }
}
