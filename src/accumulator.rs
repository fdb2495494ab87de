//! Overload accumulation across all documents of a corpus.
//!
//! Documents must be fed in a fixed order: overload order within an entry is
//! the order in which blocks reach the accumulator.

use crate::model::{Block, FunctionTable, Overload};
use crate::parser::normalize_description;

/// Everything extracted from a corpus, ready for token collection and encoding.
#[derive(Debug, Default)]
pub struct Corpus {
    pub table: FunctionTable,
    /// Names long enough for autocompletion, in first-seen order
    pub token_names: Vec<String>,
}

/// Explicit context object that blocks from every document are merged into.
#[derive(Debug)]
pub struct Accumulator {
    corpus: Corpus,
    min_token_len: usize,
}

impl Accumulator {
    /// Names shorter than `min_token_len` characters still get call tips but
    /// stay out of the autocompletion list.
    pub fn new(min_token_len: usize) -> Self {
        Self {
            corpus: Corpus::default(),
            min_token_len,
        }
    }

    /// Record one block as a new overload of its function.
    pub fn absorb(&mut self, block: Block<'_>) {
        let overload = Overload {
            signature: block.signature.to_string(),
            description: normalize_description(block.description),
        };
        let is_new = self.corpus.table.push(block.name, overload);
        if is_new && block.name.chars().count() >= self.min_token_len {
            self.corpus.token_names.push(block.name.to_string());
        }
    }

    /// Record every block of one document; returns how many there were.
    pub fn absorb_all<'a>(&mut self, blocks: impl IntoIterator<Item = Block<'a>>) -> usize {
        let mut count = 0;
        for block in blocks {
            self.absorb(block);
            count += 1;
        }
        count
    }

    pub fn finish(self) -> Corpus {
        self.corpus
    }
}
