use std::path::{Path, PathBuf};

use tracing::info;

use crate::upload::config::UploadConfig;

/// Writes an upload into `config.upload_dir`, replacing any file of the same
/// name, and returns the stored path.
///
/// `name` must already be sanitized (see `storage_name`).
pub fn store(config: &UploadConfig, name: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(&config.upload_dir)?;
    let path = config.upload_dir.join(name);
    std::fs::write(&path, bytes)?;
    info!(path = %path.display(), bytes = bytes.len(), "stored upload");
    Ok(path)
}

/// Resolves a name requested over HTTP to a stored file, or `None` if the
/// name could leave the upload directory or the file does not exist.
pub fn resolve(config: &UploadConfig, name: &str) -> Option<PathBuf> {
    if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..") {
        return None;
    }
    let path = config.upload_dir.join(name);
    path.is_file().then_some(path)
}

/// Renders a stored path the way it is reported to clients: `/`-separated.
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &Path) -> UploadConfig {
        UploadConfig { upload_dir: dir.join("uploads"), ..UploadConfig::default() }
    }

    #[test]
    fn store_creates_directory_and_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_in(tmp.path());

        let path = store(&config, "plum.png", b"first").unwrap();
        assert_eq!(path, config.upload_dir.join("plum.png"));
        store(&config, "plum.png", b"second").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn resolve_finds_stored_files_only() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_in(tmp.path());
        store(&config, "plum.png", b"x").unwrap();

        assert!(resolve(&config, "plum.png").is_some());
        assert!(resolve(&config, "fig.png").is_none());
        assert!(resolve(&config, "").is_none());
        assert!(resolve(&config, "../plum.png").is_none());
        assert!(resolve(&config, "a/plum.png").is_none());
    }

    #[test]
    fn display_path_uses_forward_slashes() {
        let path = Path::new("static").join("uploads").join("kale.jpg");
        assert_eq!(display_path(&path), "static/uploads/kale.jpg");
    }
}
