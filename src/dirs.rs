use std::fs;
use std::path::Path;

use anyhow::Result;

/// Creates the directory and its parents if it doesn't exist yet.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
