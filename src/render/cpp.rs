//! C++ header renderer — string and table literals for the host editor.

use crate::calltip::{CallTip, NEXT, PREV};
use crate::render::Renderer;

pub struct CppRenderer {
    /// Cosmetic wrap width of the token string constant
    pub tokens_per_line: usize,
}

impl Renderer for CppRenderer {
    fn render_tokens(&self, tokens: &[String]) -> String {
        let mut out = String::from("static const char *autocompletion_list =\n");
        if tokens.is_empty() {
            out.push_str("\t\"\";\n");
            return out;
        }

        let lines: Vec<&[String]> = tokens.chunks(self.tokens_per_line.max(1)).collect();
        for (i, line) in lines.iter().enumerate() {
            out.push_str("\t\"");
            out.push_str(&line.join(" "));
            if i + 1 == lines.len() {
                out.push_str("\";\n");
            } else {
                out.push_str(" \"\n");
            }
        }
        out
    }

    fn render_calltips(&self, tips: &[CallTip]) -> String {
        let mut out = String::from(
            "static std::vector<std::pair<const char*, std::vector<wxString>>> function_declarations = {\n",
        );
        for (i, tip) in tips.iter().enumerate() {
            out.push_str(&format!("\t{{ \"{}\",  {{\n", tip.name));
            for (j, payload) in tip.payloads.iter().enumerate() {
                let comma = if j + 1 < tip.payloads.len() { "," } else { "" };
                out.push_str(&format!("\t\t\"{}\"{}\n", escape_sentinels(payload), comma));
            }
            if i + 1 < tips.len() {
                out.push_str("\t}},\n");
            } else {
                out.push_str("\t}}\n");
            }
        }
        out.push_str("};\n");
        out
    }

    fn tokens_file_name(&self) -> &str {
        "autocompletion_list.hpp"
    }

    fn calltips_file_name(&self) -> &str {
        "function_declarations.hpp"
    }
}

/// Write sentinel bytes as C octal escapes; everything else is already
/// literal-safe after document normalization.
fn escape_sentinels(payload: &str) -> String {
    payload
        .replace(PREV, "\\001")
        .replace(NEXT, "\\002")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> CppRenderer {
        CppRenderer { tokens_per_line: 3 }
    }

    fn tokens(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn tokens_single_line() {
        let out = renderer().render_tokens(&tokens(&["Array", "break"]));
        assert_eq!(
            out,
            "static const char *autocompletion_list =\n\t\"Array break\";\n"
        );
    }

    #[test]
    fn tokens_wrap_every_n() {
        let out = renderer().render_tokens(&tokens(&["a1", "a2", "a3", "a4", "a5"]));
        assert_eq!(
            out,
            "static const char *autocompletion_list =\n\t\"a1 a2 a3 \"\n\t\"a4 a5\";\n"
        );
    }

    #[test]
    fn tokens_last_alone_on_line() {
        let out = renderer().render_tokens(&tokens(&["a1", "a2", "a3", "a4"]));
        assert_eq!(
            out,
            "static const char *autocompletion_list =\n\t\"a1 a2 a3 \"\n\t\"a4\";\n"
        );
    }

    #[test]
    fn tokens_exact_multiple() {
        let out = renderer().render_tokens(&tokens(&["a1", "a2", "a3"]));
        assert_eq!(
            out,
            "static const char *autocompletion_list =\n\t\"a1 a2 a3\";\n"
        );
    }

    #[test]
    fn tokens_empty() {
        let out = renderer().render_tokens(&[]);
        assert_eq!(out, "static const char *autocompletion_list =\n\t\"\";\n");
    }

    #[test]
    fn calltips_layout() {
        let tips = vec![
            CallTip {
                name: "clear".to_string(),
                payloads: vec![
                    "clear(t)\\nEmpties t.\u{2}".to_string(),
                    "clear(l)\\nEmpties l.\u{1}".to_string(),
                ],
            },
            CallTip {
                name: "eof".to_string(),
                payloads: vec!["eof(f)\\nAt end.".to_string()],
            },
        ];
        let out = renderer().render_calltips(&tips);
        let expected = "\
static std::vector<std::pair<const char*, std::vector<wxString>>> function_declarations = {
\t{ \"clear\",  {
\t\t\"clear(t)\\nEmpties t.\\002\",
\t\t\"clear(l)\\nEmpties l.\\001\"
\t}},
\t{ \"eof\",  {
\t\t\"eof(f)\\nAt end.\"
\t}}
};
";
        assert_eq!(out, expected);
    }

    #[test]
    fn calltips_empty_table() {
        let out = renderer().render_calltips(&[]);
        assert_eq!(
            out,
            "static std::vector<std::pair<const char*, std::vector<wxString>>> function_declarations = {\n};\n"
        );
    }

    #[test]
    fn middle_sentinel_escaped_in_order() {
        assert_eq!(escape_sentinels("f(x)\\nMid.\u{1}\u{2}"), "f(x)\\nMid.\\001\\002");
    }
}
