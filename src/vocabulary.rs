use include_dir::{include_dir, Dir};
use serde::Deserialize;

use crate::error::{Result, TypoError};

static LANG_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/lang");

/// Fixed word list that test prompts are drawn from
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Vocabulary {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl Vocabulary {
    pub fn english() -> Result<Self> {
        Self::bundled("english")
    }

    pub fn bundled(name: &str) -> Result<Self> {
        let file = LANG_DIR
            .get_file(format!("{name}.json"))
            .ok_or_else(|| TypoError::VocabularyNotFound(name.to_string()))?;

        let contents = file
            .contents_utf8()
            .ok_or_else(|| TypoError::VocabularyEncoding(name.to_string()))?;

        Self::parse(contents)
    }

    /// Parses a word list, rejecting files whose `size` disagrees with `words`
    pub fn parse(json: &str) -> Result<Self> {
        let vocab: Self = serde_json::from_str(json)?;
        if vocab.words.len() != vocab.size as usize {
            return Err(TypoError::VocabularySize {
                name: vocab.name,
                declared: vocab.size,
                actual: vocab.words.len(),
            });
        }

        Ok(vocab)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}
