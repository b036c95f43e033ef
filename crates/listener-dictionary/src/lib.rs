//! Persistent word -> ARPAbet pronunciation cache.
//!
//! The cache is a single SQLite table built from a `WORD<tab>PRONUNCIATION`
//! dictionary file the first time it is needed:
//!
//! ```no_run
//! use listener_config::dictionary::DictionaryConfig;
//! use listener_dictionary::DictionaryCache;
//!
//! # fn main() -> listener_dictionary::Result<()> {
//! let mut cache = DictionaryCache::new(DictionaryConfig::new());
//! let found = cache.lookup(["hello", "world"])?;
//! println!("{:?}", found.get("hello"));
//! cache.close()?;
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod error;
pub mod loaders;
pub mod types;


pub use cache::{DictionaryCache, bulk_load, create_schema};
pub use error::{DictionaryError, Result};
pub use loaders::parse_dictionary_file;
pub use types::{DictionaryEntry, Pronunciations, PronunciationDictionary};
