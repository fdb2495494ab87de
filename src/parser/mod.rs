//! Parser module — text normalization and function block extraction.

pub mod block;
pub mod names;

/// Inline math annotation that leaks into descriptions from the chi-square docs.
const MATH_ANNOTATION: &str = " (:math:`\\chi^2`)";

/// Rewrite a whole document before matching.
///
/// CRLF line endings become `\n`. Double quotes become single quotes (the
/// host format delimits strings with `"`), doubled back-ticks collapse to one,
/// and `\_` is unescaped.
pub fn normalize_document(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('"', "'")
        .replace("``", "`")
        .replace("\\_", "_")
}

/// Render a raw block description as a single logical line.
///
/// A blank line inside the description collapses to one break, and every
/// remaining break becomes the two characters `\n`.
pub fn normalize_description(raw: &str) -> String {
    raw.replace("\n\n", "\n")
        .replace('\n', "\\n")
        .replace(MATH_ANNOTATION, "")
}
