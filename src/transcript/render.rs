pub const QUESTION_HEADER: &str = "Question:";
pub const ANSWER_HEADER: &str = "Answer:";
pub const SUMMARY_HEADER: &str = "Summary Keywords";

fn underline(header: &str) -> String {
    "-".repeat(header.len())
}

pub fn render_question(question: &str) -> String {
    format!("{}\n{}\n{}\n\n", QUESTION_HEADER, underline(QUESTION_HEADER), question)
}

pub fn render_answer(answer: &str) -> String {
    format!("{}\n{}\n{}\n\n\n", ANSWER_HEADER, underline(ANSWER_HEADER), answer)
}

/// One Question/Answer block, exactly as it lands in the log.
pub fn render(question: &str, answer: &str) -> String {
    render_question(question) + &render_answer(answer)
}

pub fn render_summary(keywords: &str) -> String {
    format!("\n\n{}\n{}\n{}\n", SUMMARY_HEADER, underline(SUMMARY_HEADER), keywords)
}
