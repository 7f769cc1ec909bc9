use crate::error::{CliGptError, Result};
use crate::models::{FrontMatter, Message};
use std::fs;
use std::path::Path;

const QUESTION_DELIMITER: &str = "Question:\n---------\n";
const ANSWER_DELIMITER: &str = "\n\nAnswer:\n-------\n";
const SUMMARY_MARKER: &str = "\n\nSummary Keywords\n";
const BLOCK_TERMINATOR: &str = "\n\n\n";
const FRONT_MATTER_FENCE: &str = "---";

/// History and metadata recovered from a log file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedLog {
    /// User/assistant pairs in file order. Never contains a system message.
    pub messages: Vec<Message>,
    pub front_matter: FrontMatter,
}

pub fn parse(text: &str) -> Result<ParsedLog> {
    let front_matter = parse_front_matter(text);

    if text.trim().is_empty() {
        return Ok(ParsedLog {
            messages: Vec::new(),
            front_matter,
        });
    }

    let mut sections = text.split(QUESTION_DELIMITER);
    // Whatever precedes the first question is front matter or noise.
    sections.next();

    let mut messages = Vec::new();
    for (index, section) in sections.enumerate() {
        let (question, rest) = section.split_once(ANSWER_DELIMITER).ok_or_else(|| {
            CliGptError::format(format!("question {} has no Answer: section", index + 1))
        })?;
        messages.push(Message::user(question));
        messages.push(Message::assistant(strip_answer(rest)));
    }

    if messages.is_empty() {
        return Err(CliGptError::format("no Question:/Answer: blocks found"));
    }

    Ok(ParsedLog {
        messages,
        front_matter,
    })
}

/// Read and parse a log from disk; format errors carry the path.
pub fn load(path: &Path) -> Result<ParsedLog> {
    let text = fs::read_to_string(path)?;
    parse(&text).map_err(|e| e.with_path(path))
}

fn strip_answer(rest: &str) -> &str {
    let answer = match rest.find(SUMMARY_MARKER) {
        Some(pos) => &rest[..pos],
        None => rest,
    };
    answer.strip_suffix(BLOCK_TERMINATOR).unwrap_or(answer)
}

/// Leading `---` fenced JSON. Anything unreadable yields empty metadata.
pub fn parse_front_matter(text: &str) -> FrontMatter {
    let mut lines = text.trim_start().lines();
    if lines.next().map(str::trim_end) != Some(FRONT_MATTER_FENCE) {
        return FrontMatter::default();
    }

    let mut body = Vec::new();
    for line in lines {
        if line.trim_end() == FRONT_MATTER_FENCE {
            return serde_json::from_str(&body.join("\n")).unwrap_or_default();
        }
        body.push(line);
    }

    FrontMatter::default()
}
