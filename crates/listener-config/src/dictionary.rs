use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Suffix appended to the dictionary file name to locate its SQLite cache
pub const STORAGE_SUFFIX: &str = ".sqlite";

fn default_dictionary_file() -> PathBuf {
    PathBuf::from("dictionary.dict")
}

fn default_custom_dictionary_file() -> Option<PathBuf> {
    Some(PathBuf::from("custom.dict"))
}

fn default_separator() -> char {
    '\t'
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Primary `WORD<sep>ARPABET` dictionary
    #[serde(default = "default_dictionary_file")]
    pub dictionary_file: PathBuf,
    /// Merged in after the primary dictionary when the file exists
    #[serde(default = "default_custom_dictionary_file")]
    pub custom_dictionary_file: Option<PathBuf>,
    #[serde(default = "default_separator")]
    pub separator: char,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            dictionary_file: default_dictionary_file(),
            custom_dictionary_file: default_custom_dictionary_file(),
            separator: default_separator(),
        }
    }
}

impl DictionaryConfig {
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, falling back to defaults for missing keys
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let dictionary_file = lookup("LISTENER_DICTIONARY_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(default_dictionary_file);

        // An empty value disables the custom dictionary
        let custom_dictionary_file = match lookup("LISTENER_CUSTOM_DICTIONARY_FILE") {
            Some(value) if value.is_empty() => None,
            Some(value) => Some(PathBuf::from(value)),
            None => default_custom_dictionary_file(),
        };

        let separator = lookup("LISTENER_DICTIONARY_SEPARATOR")
            .and_then(|v| parse_separator(&v))
            .unwrap_or_else(default_separator);

        Self {
            dictionary_file,
            custom_dictionary_file,
            separator,
        }
    }

    pub fn storage_path(&self) -> PathBuf {
        storage_path_for(&self.dictionary_file)
    }
}

/// `words.dict` -> `words.dict.sqlite`
pub fn storage_path_for(dictionary_file: &Path) -> PathBuf {
    let mut path = OsString::from(dictionary_file.as_os_str());
    path.push(STORAGE_SUFFIX);
    PathBuf::from(path)
}

/// Accepts a single character or the escaped forms `\t` and `\s`
fn parse_separator(value: &str) -> Option<char> {
    match value {
        "\\t" => Some('\t'),
        "\\s" => Some(' '),
        _ => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = DictionaryConfig::from_lookup(|_| None);
        assert_eq!(config, DictionaryConfig::default());
        assert_eq!(config.separator, '\t');
    }

    #[test]
    fn test_lookup_overrides() {
        let config = DictionaryConfig::from_lookup(lookup_from(&[
            ("LISTENER_DICTIONARY_FILE", "/data/cmu.dict"),
            ("LISTENER_CUSTOM_DICTIONARY_FILE", ""),
            ("LISTENER_DICTIONARY_SEPARATOR", "\\s"),
        ]));
        assert_eq!(config.dictionary_file, PathBuf::from("/data/cmu.dict"));
        assert_eq!(config.custom_dictionary_file, None);
        assert_eq!(config.separator, ' ');
    }

    #[test]
    fn test_invalid_separator_falls_back() {
        let config =
            DictionaryConfig::from_lookup(lookup_from(&[("LISTENER_DICTIONARY_SEPARATOR", "::")]));
        assert_eq!(config.separator, '\t');
    }

    #[test]
    fn test_storage_path_appends_suffix() {
        assert_eq!(
            storage_path_for(Path::new("/tmp/words.dict")),
            PathBuf::from("/tmp/words.dict.sqlite")
        );
        assert_eq!(
            storage_path_for(Path::new("words")),
            PathBuf::from("words.sqlite")
        );
    }
}
