//! Names-only extraction — directive and name, no block shape required.

use regex::Regex;
use std::sync::LazyLock;

static RE_DIRECTIVE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\. function:: ([^\n(]+)\(").unwrap());

/// Iterate over every function name declared with a directive in `text`,
/// whether or not the block that follows is well-formed.
pub fn names<'a>(text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    RE_DIRECTIVE_NAME
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}
