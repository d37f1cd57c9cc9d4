use std::fs;
use std::path::Path;

use crate::error::Result;

/// Reports whether `path` is an existing directory, creating it (and any
/// missing parents) when `create` is set. Returns whether the directory
/// exists afterwards.
pub fn dir_exists(path: impl AsRef<Path>, create: bool) -> Result<bool> {
    let path = path.as_ref();
    if path.is_dir() {
        tracing::info!("Directory {} exists!", path.display());
        return Ok(true);
    }

    tracing::info!("Directory {} does not exist!", path.display());
    if create {
        tracing::info!("Creating it now!");
        fs::create_dir_all(path)?;
        Ok(true)
    } else {
        tracing::info!("Not creating it.");
        Ok(false)
    }
}

/// Runs [`dir_exists`] over each directory, stopping at the first I/O error.
pub fn verify_app_directories<P: AsRef<Path>>(dirs: &[P], create: bool) -> Result<Vec<bool>> {
    dirs.iter().map(|dir| dir_exists(dir, create)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UtilError;
    use assert_matches::assert_matches;
    use tempfile::tempdir;

    #[test]
    fn test_dir_exists_existing() {
        let dir = tempdir().unwrap();
        assert!(dir_exists(dir.path(), false).unwrap());
    }

    #[test]
    fn test_dir_exists_missing_without_create() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("missing");
        assert!(!dir_exists(&target, false).unwrap());
        assert!(!target.exists());
    }

    #[test]
    fn test_dir_exists_creates() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("a").join("b");
        assert!(dir_exists(&target, true).unwrap());
        assert!(target.is_dir());
    }

    #[test]
    fn test_dir_exists_file_in_the_way() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("taken");
        fs::write(&file, b"x").unwrap();
        assert_matches!(dir_exists(&file, true), Err(UtilError::Io(_)));
    }

    #[test]
    fn test_verify_app_directories() {
        let dir = tempdir().unwrap();
        let dirs = [dir.path().join("logs"), dir.path().join("cache")];
        assert_eq!(verify_app_directories(&dirs, false).unwrap(), vec![false, false]);
        assert_eq!(verify_app_directories(&dirs, true).unwrap(), vec![true, true]);
        assert!(dirs.iter().all(|d| d.is_dir()));
    }
}
