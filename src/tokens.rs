//! Autocompletion token collection.

/// Built-in type names offered for completion.
pub const TYPES: &[&str] = &[
    "Annotation", "Array", "Boolean", "Concordance", "Dataset", "DataTable", "Directory",
    "Document", "Element", "Float", "Function", "Integer", "List", "Module", "Number", "Object",
    "Query", "Regex", "Script", "Set", "Sound", "String", "Table",
];

/// Language keywords offered for completion.
pub const KEYWORDS: &[&str] = &[
    "assert", "break", "class", "continue", "debug", "do", "downto", "else", "elsif", "false",
    "field", "foreach", "function", "inherits", "json", "local", "method", "null", "option",
    "pass", "phon", "print", "repeat", "return", "step", "super", "then", "this", "throw",
    "true", "until", "while",
];

/// Merge keywords, types and function names into one completion list.
///
/// Ordering is case-insensitive; tokens equal ignoring case are ordered by
/// their original spelling, and exact duplicates are dropped.
pub fn collect_tokens(keywords: &[&str], types: &[&str], names: &[String]) -> Vec<String> {
    let mut tokens: Vec<String> = types
        .iter()
        .chain(keywords)
        .map(|s| s.to_string())
        .chain(names.iter().cloned())
        .collect();
    tokens.sort_by_cached_key(|t| (t.to_lowercase(), t.clone()));
    tokens.dedup();
    tokens
}
