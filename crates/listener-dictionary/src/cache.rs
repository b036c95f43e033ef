use std::path::{Path, PathBuf};

use listener_config::dictionary::DictionaryConfig;
use rusqlite::{Connection, params};

use crate::error::Result;
use crate::loaders::parse_dictionary_file;
use crate::types::{DictionaryEntry, Pronunciations, PronunciationDictionary};

/// Schema statements, safe to re-run against an existing store
pub const DATABASE_CREATION: [&str; 4] = [
    "CREATE TABLE IF NOT EXISTS dictionary( word TEXT NOT NULL, arpa TEXT, ipa TEXT )",
    "CREATE INDEX IF NOT EXISTS dictionary_words ON dictionary( word )",
    "CREATE INDEX IF NOT EXISTS dictionary_arpa ON dictionary( arpa )",
    "CREATE INDEX IF NOT EXISTS dictionary_ipa ON dictionary( ipa )",
];

const INSERT_ENTRY: &str = "INSERT INTO dictionary( word, arpa ) VALUES ( ?1, ?2 )";
const SELECT_ARPA: &str = "SELECT arpa FROM dictionary WHERE word = ?1";
const SELECT_ENTRIES: &str = "SELECT word, arpa, ipa FROM dictionary WHERE word = ?1";

/// SQLite-backed word -> ARPAbet cache built from a dictionary file
///
/// The store lives next to the dictionary file (see
/// [`DictionaryCache::resolve_storage_path`]) and is built on first access.
/// An existing store file is trusted as fully built: it is never validated or
/// refreshed from the source dictionary.
pub struct DictionaryCache {
    config: DictionaryConfig,
    connection: Option<Connection>,
    span: tracing::Span,
}

impl DictionaryCache {
    pub fn new(config: DictionaryConfig) -> Self {
        let span = tracing::info_span!(
            "dictionary_cache",
            storage = %config.storage_path().display()
        );
        Self {
            config,
            connection: None,
            span,
        }
    }

    pub fn config(&self) -> &DictionaryConfig {
        &self.config
    }

    pub fn resolve_storage_path(&self) -> PathBuf {
        self.config.storage_path()
    }

    /// Connection to the store, creating and loading it if the file is missing
    pub fn open_or_initialize(&mut self) -> Result<&mut Connection> {
        let connection = match self.connection.take() {
            Some(connection) => connection,
            None => self.open()?,
        };
        Ok(self.connection.insert(connection))
    }

    fn open(&self) -> Result<Connection> {
        let _enter = self.span.enter();
        let path = self.resolve_storage_path();

        if path.exists() {
            tracing::debug!("Opening existing dictionary cache");
            return Ok(Connection::open(&path)?);
        }

        let mut connection = Connection::open(&path)?;
        self.initialize(&mut connection)?;
        Ok(connection)
    }

    fn initialize(&self, connection: &mut Connection) -> Result<()> {
        tracing::warn!("Creating dictionary cache, may take a few seconds");
        create_schema(connection)?;

        // TODO: load parent dictionaries of the configured one, recursively
        let DictionaryConfig {
            dictionary_file,
            custom_dictionary_file,
            separator,
        } = &self.config;

        load_file(connection, dictionary_file, *separator)?;
        if let Some(custom) = custom_dictionary_file.as_deref().filter(|p| p.exists()) {
            load_file(connection, custom, *separator)?;
        }

        tracing::warn!("Dictionary cache created");
        Ok(())
    }

    /// Append every line of `path` to the store
    pub fn add_dictionary_file(&mut self, path: &Path, separator: char) -> Result<usize> {
        let span = self.span.clone();
        let _enter = span.enter();
        let connection = self.open_or_initialize()?;
        load_file(connection, path, separator)
    }

    /// Pronunciations for each word, in storage order
    ///
    /// Words may be text or UTF-8 bytes. Empty words produce no key; unknown
    /// words map to an empty list.
    pub fn lookup<I, W>(&mut self, words: I) -> Result<Pronunciations>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<[u8]>,
    {
        let span = self.span.clone();
        let _enter = span.enter();
        let connection = self.open_or_initialize()?;
        let mut statement = connection.prepare_cached(SELECT_ARPA)?;

        let mut results = Pronunciations::new();
        for word in words {
            let word = std::str::from_utf8(word.as_ref())?;
            if word.is_empty() {
                continue;
            }
            let word = word.to_lowercase();

            let arpa = statement
                .query_map([&word], |row| row.get::<_, Option<String>>(0))?
                .filter_map(|row| row.transpose())
                .collect::<rusqlite::Result<Vec<_>>>()?;

            tracing::debug!(word = %word, found = arpa.len(), "Dictionary lookup");
            results.insert(word, arpa);
        }

        Ok(results)
    }

    pub fn contains(&mut self, word: &str) -> Result<bool> {
        let word = word.to_lowercase();
        let results = self.lookup([word.as_str()])?;
        Ok(results.get(&word).is_some_and(|arpa| !arpa.is_empty()))
    }

    /// Every stored row for `word`, including the reserved `ipa` column
    pub fn entries(&mut self, word: &str) -> Result<Vec<DictionaryEntry>> {
        let word = word.to_lowercase();
        let connection = self.open_or_initialize()?;
        let mut statement = connection.prepare_cached(SELECT_ENTRIES)?;

        let entries = statement
            .query_map([&word], |row| {
                Ok(DictionaryEntry {
                    word: row.get(0)?,
                    arpa: row.get(1)?,
                    ipa: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(entries)
    }

    /// Number of rows in the store
    pub fn entry_count(&mut self) -> Result<usize> {
        let connection = self.open_or_initialize()?;
        let count: i64 =
            connection.query_row("SELECT COUNT(*) FROM dictionary", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Release the connection, reporting any error SQLite hits while closing
    pub fn close(mut self) -> Result<()> {
        match self.connection.take() {
            Some(connection) => connection.close().map_err(|(_, e)| e.into()),
            None => Ok(()),
        }
    }
}

impl PronunciationDictionary for DictionaryCache {
    fn pronunciations(&mut self, words: &[&str]) -> Result<Pronunciations> {
        self.lookup(words)
    }

    fn has_word(&mut self, word: &str) -> Result<bool> {
        self.contains(word)
    }
}

/// Create the table and its indexes if they do not exist yet
pub fn create_schema(connection: &Connection) -> Result<()> {
    for statement in DATABASE_CREATION {
        connection.execute(statement, [])?;
    }
    Ok(())
}

/// Insert all pairs in one transaction
///
/// The first failing item rolls back the whole batch.
pub fn bulk_load<I>(connection: &mut Connection, entries: I) -> Result<usize>
where
    I: IntoIterator<Item = Result<(String, String)>>,
{
    let tx = connection.transaction()?;
    let mut count = 0;
    {
        let mut statement = tx.prepare(INSERT_ENTRY)?;
        for entry in entries {
            let (word, arpa) = entry?;
            statement.execute(params![word, arpa])?;
            count += 1;
        }
    }
    tx.commit()?;
    Ok(count)
}

fn load_file(connection: &mut Connection, path: &Path, separator: char) -> Result<usize> {
    tracing::info!("Loading dictionary file: {}", path.display());
    let count = bulk_load(connection, parse_dictionary_file(path, separator)?)?;
    tracing::info!("Loaded {} dictionary entries from {}", count, path.display());
    Ok(count)
}
