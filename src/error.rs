use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkipscanError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Unknown strategy: {0} (expected forward-haystack, forward-needle, backward-needle or horspool)")]
    UnknownStrategy(String),

    #[error("No text to search: pass TEXT or --file")]
    MissingHaystack,
}

pub type Result<T> = std::result::Result<T, SkipscanError>;
