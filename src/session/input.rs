use crate::error::Result;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Where prompts come from. An empty block ends the conversation.
#[async_trait]
pub trait PromptSource: Send {
    async fn read_block(&mut self, header: &str) -> Result<String>;
}

/// Multi-line prompts from the terminal, terminated by a blank line or EOF.
pub struct StdinPrompt {
    lines: Lines<BufReader<Stdin>>,
}

impl Default for StdinPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl StdinPrompt {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

#[async_trait]
impl PromptSource for StdinPrompt {
    async fn read_block(&mut self, header: &str) -> Result<String> {
        println!("{}", header);

        let mut block = String::new();
        while let Some(line) = self.lines.next_line().await? {
            if line.is_empty() {
                break;
            }
            block.push_str(&line);
            block.push('\n');
        }

        if !block.is_empty() {
            println!("processing...");
        }
        Ok(block)
    }
}
