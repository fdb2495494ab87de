//! Function block extractor — explicit state machine over normalized text.
//!
//! Recognizes exactly one block shape:
//!
//! ```text
//! .. function:: NAME(ARGUMENTS)
//!
//! DESCRIPTION ENDING AT THE FIRST PERIOD.
//! ```
//!
//! The description may run onto one more physical line, optionally after a
//! single blank line. Anything else is a miss: the block is skipped and
//! scanning moves on to the next directive.

use crate::model::Block;
use std::ops::Range;

/// Marker that opens every function block.
pub const DIRECTIVE: &str = ".. function:: ";

/// Scanner states after a directive marker has been found.
#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    /// Name runs from `start` to the first `(` on the line.
    Name { start: usize },
    /// Signature runs from `open` to the end of the line and must close it.
    Signature { name: Range<usize>, open: usize },
    /// Exactly one empty line starting at `at`.
    BlankLine {
        name: Range<usize>,
        signature: Range<usize>,
        at: usize,
    },
    /// Text from `start` through the first period, across at most one break.
    Description {
        name: Range<usize>,
        signature: Range<usize>,
        start: usize,
    },
    Done {
        name: Range<usize>,
        signature: Range<usize>,
        description: Range<usize>,
    },
    Miss,
}

/// Lazy iterator over the blocks of one normalized document.
pub struct Blocks<'a> {
    text: &'a str,
    pos: usize,
}

/// Iterate over the function blocks in `text`.
///
/// `text` is expected to have gone through
/// [`normalize_document`](crate::parser::normalize_document) already.
pub fn blocks(text: &str) -> Blocks<'_> {
    Blocks { text, pos: 0 }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Block<'a>> {
        let text = self.text;
        // Seeking the directive marker
        while let Some(offset) = text[self.pos..].find(DIRECTIVE) {
            let marker = self.pos + offset;
            match scan(text, marker + DIRECTIVE.len()) {
                State::Done {
                    name,
                    signature,
                    description,
                } => {
                    self.pos = description.end;
                    return Some(Block {
                        name: &text[name],
                        signature: &text[signature],
                        description: &text[description],
                    });
                }
                // Retry one byte past the marker; '.' is ASCII so this stays on a char boundary
                _ => self.pos = marker + 1,
            }
        }
        self.pos = text.len();
        None
    }
}

/// Run the state machine from just after a directive marker until it
/// reaches `Done` or `Miss`.
fn scan(text: &str, after_marker: usize) -> State {
    let mut state = State::Name {
        start: after_marker,
    };
    loop {
        state = match state {
            State::Name { start } => {
                let line = &text[start..line_end(text, start)];
                match line.find('(') {
                    Some(0) | None => State::Miss,
                    Some(i) => State::Signature {
                        name: start..start + i,
                        open: start + i,
                    },
                }
            }
            State::Signature { name, open } => {
                let end = line_end(text, open);
                if end >= text.len() || !text[open..end].ends_with(')') {
                    State::Miss
                } else {
                    State::BlankLine {
                        name,
                        signature: open..end,
                        at: end + 1,
                    }
                }
            }
            State::BlankLine {
                name,
                signature,
                at,
            } => {
                if text[at..].starts_with('\n') {
                    State::Description {
                        name,
                        signature,
                        start: at + 1,
                    }
                } else {
                    State::Miss
                }
            }
            State::Description {
                name,
                signature,
                start,
            } => match description_end(text, start) {
                Some(end) => State::Done {
                    name,
                    signature,
                    description: start..end,
                },
                None => State::Miss,
            },
            done @ (State::Done { .. } | State::Miss) => return done,
        };
    }
}

/// End (exclusive) of the description starting at `start`: one past the first
/// period on its first line, or on the following line when the first has none.
fn description_end(text: &str, start: usize) -> Option<usize> {
    let first_end = line_end(text, start);
    if let Some(dot) = text[start..first_end].find('.') {
        return Some(start + dot + 1);
    }
    // An empty first line means more than one blank line after the signature
    if first_end == start || first_end >= text.len() {
        return None;
    }

    let mut next = first_end + 1;
    // A blank line between the two description lines is allowed
    if text[next..].starts_with('\n') {
        next += 1;
    }
    let second_end = line_end(text, next);
    text[next..second_end].find('.').map(|dot| next + dot + 1)
}

/// Index of the `\n` terminating the line containing `from`, or the text length.
fn line_end(text: &str, from: usize) -> usize {
    text[from..].find('\n').map_or(text.len(), |i| from + i)
}
