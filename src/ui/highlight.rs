use colored::*;
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::{as_24_bit_terminal_escaped, LinesWithEndings};

const FENCE: &str = "```";
const THEME: &str = "Solarized (dark)";

/// Terminal renderer for answers: prose passes through, fenced code blocks
/// are boxed and syntax highlighted.
pub struct Highlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let Some(theme) = self.theme_set.themes.get(THEME) else {
            return code.to_string();
        };

        let syntax = lang
            .and_then(|lang| {
                self.syntax_set
                    .find_syntax_by_token(lang)
                    .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            })
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut output = String::new();

        for line in LinesWithEndings::from(code) {
            match highlighter.highlight_line(line, &self.syntax_set) {
                Ok(ranges) => output.push_str(&as_24_bit_terminal_escaped(&ranges[..], false)),
                Err(_) => output.push_str(line),
            }
        }
        // Reset colours so the footer is not tinted by the last token.
        output.push_str("\x1b[0m");

        output
    }

    pub fn render(&self, content: &str) -> String {
        let mut output = String::new();
        let mut rest = content;

        while let Some(start) = rest.find(FENCE) {
            output.push_str(&rest[..start]);
            let after = &rest[start + FENCE.len()..];

            let (lang_line, body) = match after.split_once('\n') {
                Some(split) => split,
                None => {
                    // A lone fence on the last line is just text.
                    output.push_str(&rest[start..]);
                    return output;
                }
            };
            let lang = Some(lang_line.trim()).filter(|l| !l.is_empty());

            let (code, remainder) = match body.find(FENCE) {
                Some(end) => (&body[..end], &body[end + FENCE.len()..]),
                None => (body, ""),
            };

            output.push_str(&format!(
                "{}[{}]{}\n",
                "┌─".dimmed(),
                lang.unwrap_or("code").cyan(),
                "─────────────────────────────────────────────────".dimmed()
            ));
            output.push_str(&self.highlight_code(code, lang));
            if !code.is_empty() && !code.ends_with('\n') {
                output.push('\n');
            }
            output.push_str(
                &"└──────────────────────────────────────────────────────────"
                    .dimmed()
                    .to_string(),
            );

            rest = remainder;
        }

        output.push_str(rest);
        output
    }
}
