mod blacklist;
mod error;
mod kobo;
mod word_file;

pub use blacklist::load_blacklist;
pub use error::SourceError;
pub use kobo::{KOBO_DB_RELATIVE_PATH, kobo_db_path, read_kobo_words};
pub use word_file::read_word_file;
