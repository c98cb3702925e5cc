//! Directory provisioning for upload targets.

use std::io;
use std::path::Path;

use tokio::fs;

/// Create `path` and any missing parents. Succeeds if it already exists as a
/// directory; any other failure (permissions, a file in the way) is returned.
pub async fn ensure_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path).await?;
    tracing::debug!(path = %path.display(), "Upload directory ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_creates_nested_directories() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("a").join("b").join("c");

        ensure_dir(&target).await.unwrap();
        assert!(target.is_dir());
    }

    #[tokio::test]
    async fn test_idempotent() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("avatars");

        ensure_dir(&target).await.unwrap();
        ensure_dir(&target).await.unwrap();
        assert!(target.is_dir());
    }

    #[tokio::test]
    async fn test_file_in_the_way_is_an_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("taken");
        std::fs::write(&blocker, b"not a directory").unwrap();

        assert!(ensure_dir(&blocker).await.is_err());
        assert!(ensure_dir(&blocker.join("child")).await.is_err());
    }
}
