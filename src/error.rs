use thiserror::Error;

#[derive(Error, Debug)]
pub enum TypoError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("vocabulary `{0}` is not bundled")]
    VocabularyNotFound(String),

    #[error("vocabulary `{0}` is not valid utf-8")]
    VocabularyEncoding(String),

    #[error("vocabulary `{name}` declares {declared} words but lists {actual}")]
    VocabularySize {
        name: String,
        declared: u32,
        actual: usize,
    },

    #[error("unsupported word count {0}, expected one of 10, 25, 50, 100")]
    UnsupportedWordCount(usize),
}

pub type Result<T> = std::result::Result<T, TypoError>;
