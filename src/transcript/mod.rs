//! The Markdown conversation log: rendering turns into it and reading a
//! history back out of it.

mod front_matter;
mod parse;
mod render;

pub use front_matter::FrontMatterGuard;
pub use parse::{load, parse, parse_front_matter, ParsedLog};
pub use render::{render, render_answer, render_question, render_summary};
