use crate::ui::highlight::Highlighter;
use colored::*;
use std::io::{self, Write};

/// Terminal side of a session: banners, answers and diagnostics.
pub struct Console {
    highlighter: Highlighter,
    verbose: bool,
}

impl Console {
    pub fn new(verbose: bool) -> Self {
        Self {
            highlighter: Highlighter::new(),
            verbose,
        }
    }

    pub fn banner(&self, role: &str, model: &str) {
        println!("role: {}\nmodel: {}", role, model);
    }

    /// Print a rendered Question/Answer block or answer, highlighting code.
    pub fn display_content(&self, content: &str) {
        print!("{}", self.highlighter.render(content));
        let _ = io::stdout().flush();
    }

    pub fn status(&self, message: &str) {
        println!("{}", message.cyan());
    }

    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "Warning:".yellow(), message);
    }

    pub fn verbose(&self, message: &str) {
        if self.verbose {
            print_verbose(message);
        }
    }
}

/// Dimmed `[cligpt]` diagnostic line on stderr.
pub fn print_verbose(message: &str) {
    eprintln!("{}", format!("[cligpt] {}", message).dimmed());
}

pub fn display_error(error: &dyn std::fmt::Display) {
    eprintln!("{} {}", "Error:".red(), error);
}
