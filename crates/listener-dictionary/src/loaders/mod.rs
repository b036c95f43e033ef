pub mod arpabet;

pub use arpabet::{DictionaryLines, parse_dictionary_file, parse_line};
