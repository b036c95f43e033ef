use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::error::{DictionaryError, Result};

/// Lazily parsed `WORD<sep>PRONUNCIATION` lines of a dictionary file
///
/// Yields `(word, pronunciation)` pairs with the word lowercased and its
/// `(N)` variant marker removed, and the pronunciation uppercased. Consuming
/// the iterator is one pass over the file; call [`parse_dictionary_file`]
/// again to re-read it.
pub struct DictionaryLines {
    path: PathBuf,
    separator: char,
    lines: Lines<BufReader<File>>,
    line_number: usize,
}

/// Open `path` for parsing
pub fn parse_dictionary_file(path: &Path, separator: char) -> Result<DictionaryLines> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DictionaryError::FileNotFound(path.to_path_buf()),
        _ => DictionaryError::Io(e),
    })?;

    Ok(DictionaryLines {
        path: path.to_path_buf(),
        separator,
        lines: BufReader::new(file).lines(),
        line_number: 0,
    })
}

impl DictionaryLines {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Iterator for DictionaryLines {
    type Item = Result<(String, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(e.into())),
        };
        self.line_number += 1;

        Some(
            parse_line(&line, self.separator).ok_or_else(|| DictionaryError::MalformedLine {
                path: self.path.clone(),
                line_number: self.line_number,
                separator: self.separator,
            }),
        )
    }
}

/// Split a single line into `(word, pronunciation)`, `None` without a separator
pub fn parse_line(line: &str, separator: char) -> Option<(String, String)> {
    let (head, description) = line.trim().split_once(separator)?;
    Some((
        strip_variant(head).to_lowercase(),
        description.to_uppercase(),
    ))
}

/// `READ(2)` -> `READ`
fn strip_variant(head: &str) -> &str {
    if !head.ends_with(')') {
        return head;
    }
    match head.rfind('(') {
        Some(open) => &head[..open],
        None => head,
    }
}
