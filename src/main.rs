use clap::Parser;
use std::process;

use cligpt::api::ChatClient;
use cligpt::cli::Args;
use cligpt::config::Config;
use cligpt::error::Result;
use cligpt::session::{interruptible, resolve_resume_path, PromptSource, Session, StdinPrompt};
use cligpt::ui::{display_error, Console};
use cligpt::update::run_update;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    // Load configuration
    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            display_error(&e);
            process::exit(1);
        }
    };

    if let Err(e) = run(args, config).await {
        display_error(&e);
        process::exit(1);
    }
}

async fn run(args: Args, config: Config) -> Result<()> {
    if args.update {
        return run_update(&config, args.force).await;
    }

    let console = Console::new(config.verbose);
    let client = ChatClient::new(&config.api_key, &config.api_endpoint, config.verbose)?;
    console.verbose(&format!("Endpoint: {}", client.endpoint()));
    let mut input = StdinPrompt::new();

    match args.resume.as_deref() {
        Some(name) => {
            let path = resolve_resume_path(name, &config.log_path)?;
            let mut session =
                Session::resume(&client, &console, &path, &config.role, &config.model)?;
            session.replay();

            let header = format!("{}:", config.model);
            let first = interruptible(input.read_block(&header)).await?;
            if first.is_empty() {
                return session.close();
            }
            session.run(first, &mut input).await
        }
        None => {
            console.banner(&config.role, &config.model);

            let header = format!("{}:", config.model);
            let first = interruptible(input.read_block(&header)).await?;
            if first.is_empty() {
                return Ok(());
            }

            let mut session =
                Session::start(&client, &console, &config.log_path, &config.role, &config.model)?;
            session.run(first, &mut input).await
        }
    }
}
