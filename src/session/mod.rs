//! Conversation session: history, the request/response loop and the log it
//! writes as it goes.

mod input;
mod log_sink;
mod resume;

pub use input::{PromptSource, StdinPrompt};
pub use log_sink::LogSink;
pub use resume::resolve_resume_path;

use crate::api::{Completion, Reply};
use crate::error::{CliGptError, Result};
use crate::models::{FrontMatter, Message, Role};
use crate::naming::{iso_minute, new_log_path};
use crate::transcript::{self, render, render_answer, render_summary, FrontMatterGuard};
use crate::ui::Console;
use chrono::Local;
use std::future::Future;
use std::path::Path;

pub const SUMMARY_REQUEST: &str = "summarize this conversation in 4 keywords or less";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Fresh,
    Resuming,
    Active,
    Summarizing,
    Closed,
}

pub struct Session<'a, C: Completion> {
    client: &'a C,
    console: &'a Console,
    state: SessionState,
    history: Vec<Message>,
    log: LogSink,
    role: String,
    model: String,
    reported_model: Option<String>,
    front_matter: FrontMatterGuard,
    turns: usize,
}

/// Race a future against Ctrl-C.
pub async fn interruptible<F, T>(fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        result = fut => result,
        _ = tokio::signal::ctrl_c() => Err(CliGptError::Interrupted),
    }
}

impl<'a, C: Completion> Session<'a, C> {
    /// New conversation with a fresh log under `log_dir`.
    pub fn start(
        client: &'a C,
        console: &'a Console,
        log_dir: &Path,
        role: &str,
        model: &str,
    ) -> Result<Self> {
        let mut state = SessionState::Fresh;
        let path = new_log_path(log_dir, &Local::now())?;
        let log = LogSink::create(&path)?;
        console.verbose(&format!("Logging to {}", path.display()));
        state = state.advance(SessionState::Active)?;

        Ok(Self {
            client,
            console,
            state,
            history: vec![Message::system(role)],
            log,
            role: role.to_string(),
            model: model.to_string(),
            reported_model: None,
            front_matter: FrontMatterGuard::new(),
            turns: 0,
        })
    }

    /// Continue the conversation stored at `path`.
    ///
    /// The file is read completely before it is reopened for appending. Its
    /// front matter role wins over `default_role`, and the log never gets a
    /// second front matter block.
    pub fn resume(
        client: &'a C,
        console: &'a Console,
        path: &Path,
        default_role: &str,
        model: &str,
    ) -> Result<Self> {
        let mut state = SessionState::Resuming;
        let parsed = transcript::load(path)?;

        let role = parsed
            .front_matter
            .role
            .clone()
            .unwrap_or_else(|| default_role.to_string());
        console.verbose(&format!(
            "Resuming {} ({} messages)",
            path.display(),
            parsed.messages.len()
        ));

        let mut history = Vec::with_capacity(parsed.messages.len() + 1);
        history.push(Message::system(role.as_str()));
        history.extend(parsed.messages);

        let log = LogSink::append(path)?;
        state = state.advance(SessionState::Active)?;

        Ok(Self {
            client,
            console,
            state,
            history,
            log,
            role,
            model: model.to_string(),
            reported_model: None,
            front_matter: FrontMatterGuard::already_written(parsed.front_matter),
            turns: 0,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn log_path(&self) -> &Path {
        self.log.path()
    }

    /// Model shown in the prompt header: the last one the service reported.
    pub fn current_model(&self) -> &str {
        self.reported_model.as_deref().unwrap_or(&self.model)
    }

    /// Print the prior turns of a resumed conversation. Nothing is written.
    pub fn replay(&self) {
        println!("The previous conversation was:");
        for pair in self.history[1..].chunks(2) {
            if let [question, answer] = pair {
                self.console
                    .display_content(&render(&question.content, &answer.content));
            }
        }
        self.console.banner(&self.role, &self.model);
    }

    /// One exchange. History only grows once the reply is in and logged, so
    /// a failed or cancelled turn leaves no trace in memory or in the log.
    pub async fn turn(&mut self, prompt: &str) -> Result<Reply> {
        self.ensure_active()?;

        let mut exchange = Vec::with_capacity(self.history.len() + 2);
        exchange.extend_from_slice(&self.history);
        exchange.push(Message::user(prompt));
        let reply = self.client.complete(&exchange, &self.model).await?;

        if reply.message.role != Role::Assistant {
            self.console.verbose(&format!(
                "Reply came back with role {}, storing it as assistant",
                reply.message.role
            ));
        }
        let answer = reply.message.content.clone();

        let written = self.front_matter.is_written();
        self.front_matter.write_once(
            &mut self.log,
            FrontMatter::new(
                self.role.as_str(),
                reply.model.as_str(),
                iso_minute(&Local::now()),
            ),
        )?;
        if !written && self.front_matter.is_written() {
            self.console.verbose("Front matter written");
        }

        self.log.write_block(&render(prompt, &answer))?;
        exchange.push(Message::assistant(answer.as_str()));
        self.history = exchange;
        self.turns += 1;

        self.console.display_content(&format!("\n{}", render_answer(&answer)));
        self.reported_model = Some(reply.model.clone());
        Ok(reply)
    }

    /// Ask for a keyword summary and append it to the log. The request is
    /// made on a copy; the exchange history is left as it was.
    pub async fn summarize(&mut self) -> Result<Option<String>> {
        self.state = self.state.advance(SessionState::Summarizing)?;
        if self.turns == 0 {
            return Ok(None);
        }

        let mut messages = self.history.clone();
        messages.push(Message::user(SUMMARY_REQUEST));

        self.console.status("\n\nfetching summary keywords...");
        let reply = self.client.complete(&messages, &self.model).await?;
        let keywords = reply.message.content;
        println!("{}", keywords);

        self.log.write_block(&render_summary(&keywords))?;
        Ok(Some(keywords))
    }

    /// Flush and release the log. Safe to call on every exit path.
    pub fn close(&mut self) -> Result<()> {
        self.state = SessionState::Closed;
        self.log.close()?;
        Ok(())
    }

    /// Drive the conversation until an empty prompt, then summarise.
    ///
    /// The log is closed whatever happens; a failed summary is only a
    /// warning, while a failure during the conversation is returned once
    /// the log is closed.
    pub async fn run<P: PromptSource>(&mut self, first_prompt: String, input: &mut P) -> Result<()> {
        let outcome = match self.converse(first_prompt, input).await {
            Ok(()) => {
                if let Err(e) = interruptible(self.summarize()).await {
                    self.console
                        .warn(&format!("could not fetch summary keywords: {}", e));
                }
                Ok(())
            }
            Err(e) => Err(e),
        };

        let closed = self.close();
        outcome.and(closed)
    }

    async fn converse<P: PromptSource>(&mut self, first_prompt: String, input: &mut P) -> Result<()> {
        let mut prompt = first_prompt;
        while !prompt.is_empty() {
            interruptible(self.turn(&prompt)).await?;
            let header = format!("{}:", self.current_model());
            prompt = interruptible(input.read_block(&header)).await?;
        }
        Ok(())
    }

    fn ensure_active(&self) -> Result<()> {
        if self.state == SessionState::Active {
            Ok(())
        } else {
            Err(CliGptError::SessionError(format!(
                "cannot exchange messages while {:?}",
                self.state
            )))
        }
    }
}

impl SessionState {
    fn advance(self, next: SessionState) -> Result<SessionState> {
        use SessionState::*;
        match (self, next) {
            (Fresh, Active) | (Resuming, Active) | (Active, Summarizing) => Ok(next),
            (_, Closed) => Ok(Closed),
            _ => Err(CliGptError::SessionError(format!(
                "invalid transition {:?} -> {:?}",
                self, next
            ))),
        }
    }
}
