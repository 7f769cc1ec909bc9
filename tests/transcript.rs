use cligpt::error::CliGptError;
use cligpt::models::{FrontMatter, Message};
use cligpt::transcript::{load, parse, render, render_summary, FrontMatterGuard};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_render_then_parse_reconstructs_turn() {
    let cases = [
        ("Hello\n", "Hi there!"),
        ("multi\nline\nprompt\n", "answer with trailing newline\n"),
        ("code?\n", "```rust\nfn main() {}\n```\n\nDone."),
    ];

    for (question, answer) in cases {
        let parsed = parse(&render(question, answer)).unwrap();
        assert_eq!(
            parsed.messages,
            vec![Message::user(question), Message::assistant(answer)]
        );
    }
}

#[test]
fn test_two_turns_give_four_messages_in_order() {
    let text = render("first\n", "one") + &render("second\n", "two");
    let parsed = parse(&text).unwrap();

    assert_eq!(
        parsed.messages,
        vec![
            Message::user("first\n"),
            Message::assistant("one"),
            Message::user("second\n"),
            Message::assistant("two"),
        ]
    );
}

#[test]
fn test_summary_is_excluded_from_last_answer() {
    let text = render("first\n", "one") + &render("second\n", "two") + &render_summary("chat, test");
    let parsed = parse(&text).unwrap();

    assert_eq!(parsed.messages.len(), 4);
    assert_eq!(parsed.messages[3].content, "two");
    assert!(parsed
        .messages
        .iter()
        .all(|m| !m.content.contains("Summary Keywords")));
}

#[test]
fn test_summary_in_the_middle_of_a_resumed_log() {
    // A resumed session appends new turns after the earlier summary.
    let text = render("a\n", "b") + &render_summary("first part") + &render("c\n", "d");
    let parsed = parse(&text).unwrap();

    assert_eq!(parsed.messages[1].content, "b");
    assert_eq!(parsed.messages[2].content, "c\n");
    assert_eq!(parsed.messages[3].content, "d");
}

#[test]
fn test_front_matter_then_blocks() {
    let mut log = Vec::new();
    let mut guard = FrontMatterGuard::new();
    guard
        .write_once(
            &mut log,
            FrontMatter::new("You are terse", "gpt-4-0613", "2024-03-07T09:05"),
        )
        .unwrap();
    log.extend_from_slice(render("q\n", "a").as_bytes());
    guard
        .write_once(&mut log, FrontMatter::new("ignored", "gpt-4o", "2024-03-07T09:06"))
        .unwrap();
    log.extend_from_slice(render("q2\n", "a2").as_bytes());

    let text = String::from_utf8(log).unwrap();
    let parsed = parse(&text).unwrap();

    assert_eq!(
        parsed.front_matter,
        FrontMatter::new("You are terse", "gpt-4-0613", "2024-03-07T09:05")
    );
    assert_eq!(parsed.messages.len(), 4);
    assert_eq!(text.matches("\"role\"").count(), 1);
}

#[test]
fn test_load_attaches_path_to_format_errors() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notes.md");
    fs::write(&path, "# shopping list\n- eggs\n").unwrap();

    match load(&path).unwrap_err() {
        CliGptError::FormatError { path: Some(p), .. } => assert_eq!(p, path),
        other => panic!("expected format error, got {:?}", other),
    }
}

#[test]
fn test_load_complete_log_file() {
    let text = "---\n{\n  \"role\": \"You are a Google Search replacement\",\n  \"model\": \"gpt-4-0613\",\n  \"timestamp\": \"2024-01-02T03:04\"\n}\n---\nQuestion:\n---------\nWhat is Rust?\n\n\nAnswer:\n-------\nA systems language.\n\n\n\n\nSummary Keywords\n----------------\nRust, language\n";
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("2024-01-02T03-04.md");
    fs::write(&path, text).unwrap();

    let parsed = load(&path).unwrap();
    assert_eq!(
        parsed.front_matter.role.as_deref(),
        Some("You are a Google Search replacement")
    );
    assert_eq!(
        parsed.messages,
        vec![
            Message::user("What is Rust?\n"),
            Message::assistant("A systems language."),
        ]
    );
}
