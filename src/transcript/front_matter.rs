use crate::models::FrontMatter;
use std::io::{self, Write};

/// Writes the front matter block at most once per session.
///
/// The first call writes and remembers its metadata; every later call is a
/// no-op returning that first value, even if the reported model has changed
/// since.
#[derive(Debug, Default)]
pub struct FrontMatterGuard {
    written: Option<FrontMatter>,
}

impl FrontMatterGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A guard for a log that already has its header (or must never get one,
    /// such as a resumed log where the block would land mid-file).
    pub fn already_written(front_matter: FrontMatter) -> Self {
        Self {
            written: Some(front_matter),
        }
    }

    pub fn is_written(&self) -> bool {
        self.written.is_some()
    }

    pub fn write_once<W: Write>(
        &mut self,
        sink: &mut W,
        front_matter: FrontMatter,
    ) -> io::Result<&FrontMatter> {
        if self.written.is_none() {
            let json = serde_json::to_string_pretty(&front_matter)?;
            sink.write_all(render_front_matter_block(&json).as_bytes())?;
            sink.flush()?;
            self.written = Some(front_matter);
        }
        // Populated above when empty.
        Ok(self.written.get_or_insert_with(FrontMatter::default))
    }
}

fn render_front_matter_block(json: &str) -> String {
    format!("---\n{}\n---\n", json)
}
