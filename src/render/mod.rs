//! Renderer module — trait-based dispatch for the host output format.

pub mod cpp;

use crate::calltip::CallTip;

/// Trait for rendering the two generated artifacts.
pub trait Renderer {
    /// Sorted autocompletion tokens.
    fn render_tokens(&self, tokens: &[String]) -> String;
    /// Encoded call tips, one entry per function.
    fn render_calltips(&self, tips: &[CallTip]) -> String;
    fn tokens_file_name(&self) -> &str;
    fn calltips_file_name(&self) -> &str;
}
