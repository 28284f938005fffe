use itertools::Itertools;
use rand::{rngs::ThreadRng, seq::SliceRandom, Rng};

use crate::{config::WordCount, vocabulary::Vocabulary};

/// Builds test prompts by drawing words uniformly, with replacement
#[derive(Debug)]
pub struct WordGenerator<R: Rng = ThreadRng> {
    vocabulary: Vocabulary,
    rng: R,
}

impl WordGenerator<ThreadRng> {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self::with_rng(vocabulary, rand::thread_rng())
    }
}

impl<R: Rng> WordGenerator<R> {
    pub fn with_rng(vocabulary: Vocabulary, rng: R) -> Self {
        Self { vocabulary, rng }
    }

    pub fn generate_prompt(&mut self, word_count: WordCount) -> String {
        self.generate_words(word_count.get())
    }

    pub fn generate_words(&mut self, count: usize) -> String {
        let words = &self.vocabulary.words;
        let rng = &mut self.rng;

        (0..count)
            .filter_map(|_| words.choose(&mut *rng))
            .join(" ")
    }
}
