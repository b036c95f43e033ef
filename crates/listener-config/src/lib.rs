use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;

pub mod dictionary;

pub use dictionary::{STORAGE_SUFFIX, storage_path_for};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
}

impl Config {
    /// Configuration from `LISTENER_*` environment variables
    pub fn new() -> Self {
        Config {
            dictionary: DictionaryConfig::new(),
        }
    }

    /// Load a JSON profile; missing fields take their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_from_file_partial_profile() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "dictionary": {{ "dictionary_file": "/srv/cmudict.dict" }} }}"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(
            config.dictionary.dictionary_file,
            PathBuf::from("/srv/cmudict.dict")
        );
        assert_eq!(
            config.dictionary.custom_dictionary_file,
            Some(PathBuf::from("custom.dict"))
        );
        assert_eq!(config.dictionary.separator, '\t');
    }

    #[test]
    fn test_from_file_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Config::from_file(Path::new("/nonexistent/listener.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
