use std::path::PathBuf;

pub const DEFAULT_UPLOAD_DIR: &str = "static/uploads";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024; // 16 MB

/// Where and what the upload endpoint accepts.
///
/// Built once at startup and handed to the server; nothing here is global.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Directory accepted files are written to.
    pub upload_dir: PathBuf,
    /// Lowercase extensions without the leading dot.
    pub allowed_extensions: Vec<String>,
    /// Request bodies larger than this are rejected before parsing.
    pub max_upload_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        UploadConfig {
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            allowed_extensions: vec!["png".into(), "jpg".into(), "jpeg".into()],
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl UploadConfig {
    /// Returns the lowercased extension of `filename` if it is on the allow-list.
    ///
    /// The extension is whatever follows the last `.`; a name without a dot
    /// is never allowed.
    pub fn allowed_extension(&self, filename: &str) -> Option<String> {
        let (_, ext) = filename.rsplit_once('.')?;
        let ext = ext.to_lowercase();
        self.allowed_extensions.iter().any(|a| *a == ext).then_some(ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_allowed(config: &UploadConfig, filename: &str) -> bool {
        config.allowed_extension(filename).is_some()
    }

    #[test]
    fn accepts_listed_extensions_case_insensitively() {
        let config = UploadConfig::default();
        assert!(is_allowed(&config, "banana.png"));
        assert!(is_allowed(&config, "banana.JPG"));
        assert!(is_allowed(&config, "my.banana.jpeg"));
        assert_eq!(config.allowed_extension("Kiwi.JpEg").as_deref(), Some("jpeg"));
    }

    #[test]
    fn rejects_other_or_missing_extensions() {
        let config = UploadConfig::default();
        assert!(!is_allowed(&config, "banana.gif"));
        assert!(!is_allowed(&config, "banana"));
        assert!(!is_allowed(&config, "banana.png.exe"));
        assert!(!is_allowed(&config, "banana."));
    }

    #[test]
    fn allow_list_is_configurable() {
        let config = UploadConfig {
            allowed_extensions: vec!["webp".into()],
            ..UploadConfig::default()
        };
        assert!(is_allowed(&config, "pear.webp"));
        assert!(!is_allowed(&config, "pear.png"));
    }
}
