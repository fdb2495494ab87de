//! Call-tip encoding with overload navigation sentinels.
//!
//! Each overload becomes `NAME + SIGNATURE + "\n" + DESCRIPTION` (the `\n`
//! being two literal characters), followed by sentinel bytes telling the
//! call-tip widget which arrows to show: `\x01` when a previous overload
//! exists, `\x02` when a next one does.

use crate::model::{FunctionEntry, FunctionTable, Overload};

/// "There is a previous overload to page back to."
pub const PREV: char = '\u{1}';
/// "There is a next overload to page forward to."
pub const NEXT: char = '\u{2}';

/// Where an overload sits among the overloads of its function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjacency {
    Only,
    First,
    Middle,
    Last,
}

impl Adjacency {
    pub fn of(index: usize, count: usize) -> Self {
        match (index, count) {
            (_, 1) => Adjacency::Only,
            (0, _) => Adjacency::First,
            (i, n) if i + 1 == n => Adjacency::Last,
            _ => Adjacency::Middle,
        }
    }

    pub fn sentinel(self) -> &'static str {
        match self {
            Adjacency::Only => "",
            Adjacency::First => "\u{2}",
            Adjacency::Middle => "\u{1}\u{2}",
            Adjacency::Last => "\u{1}",
        }
    }
}

/// Encoded call tips for one function, one payload per overload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallTip {
    pub name: String,
    pub payloads: Vec<String>,
}

/// Encode every function of the table, in table order.
pub fn encode_table(table: &FunctionTable) -> Vec<CallTip> {
    table.iter().map(encode_entry).collect()
}

pub fn encode_entry(entry: &FunctionEntry) -> CallTip {
    let count = entry.overloads.len();
    let payloads = entry
        .overloads
        .iter()
        .enumerate()
        .map(|(i, overload)| encode_overload(&entry.name, overload, Adjacency::of(i, count)))
        .collect();
    CallTip {
        name: entry.name.clone(),
        payloads,
    }
}

fn encode_overload(name: &str, overload: &Overload, adjacency: Adjacency) -> String {
    format!(
        "{}{}\\n{}{}",
        name,
        overload.signature,
        overload.description,
        adjacency.sentinel()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, n: usize) -> FunctionEntry {
        FunctionEntry {
            name: name.to_string(),
            overloads: (0..n)
                .map(|i| Overload {
                    signature: format!("(x{})", i),
                    description: format!("Variant {}.", i),
                })
                .collect(),
        }
    }

    /// Trailing sentinel bytes of each payload.
    fn sentinels(tip: &CallTip) -> Vec<String> {
        tip.payloads
            .iter()
            .map(|p| p.chars().rev().take_while(|c| *c == PREV || *c == NEXT).collect::<Vec<_>>())
            .map(|rev| rev.into_iter().rev().collect())
            .collect()
    }

    #[test]
    fn one_overload_has_no_sentinel() {
        let tip = encode_entry(&entry("read_file", 1));
        assert_eq!(tip.payloads, ["read_file(x0)\\nVariant 0."]);
    }

    #[test]
    fn two_overloads() {
        let tip = encode_entry(&entry("clear", 2));
        assert_eq!(
            tip.payloads,
            ["clear(x0)\\nVariant 0.\u{2}", "clear(x1)\\nVariant 1.\u{1}"]
        );
    }

    #[test]
    fn three_overloads() {
        let tip = encode_entry(&entry("remove", 3));
        assert_eq!(sentinels(&tip), ["\u{2}", "\u{1}\u{2}", "\u{1}"]);
        assert_eq!(tip.payloads[1], "remove(x1)\\nVariant 1.\u{1}\u{2}");
    }

    #[test]
    fn four_overloads() {
        let tip = encode_entry(&entry("len", 4));
        assert_eq!(
            sentinels(&tip),
            ["\u{2}", "\u{1}\u{2}", "\u{1}\u{2}", "\u{1}"]
        );
    }

    #[test]
    fn adjacency_positions() {
        assert_eq!(Adjacency::of(0, 1), Adjacency::Only);
        assert_eq!(Adjacency::of(0, 2), Adjacency::First);
        assert_eq!(Adjacency::of(1, 2), Adjacency::Last);
        assert_eq!(Adjacency::of(1, 5), Adjacency::Middle);
        assert_eq!(Adjacency::of(4, 5), Adjacency::Last);
    }

    #[test]
    fn table_order_preserved() {
        let mut table = FunctionTable::default();
        for name in ["open", "close", "eof"] {
            table.push(name, Overload {
                signature: "(f)".to_string(),
                description: "File op.".to_string(),
            });
        }
        let names: Vec<_> = encode_table(&table).into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["open", "close", "eof"]);
    }
}
