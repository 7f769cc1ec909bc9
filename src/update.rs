use crate::config::Config;
use crate::error::{CliGptError, Result};
use std::env;
use std::path::PathBuf;
use tokio::process::Command;

/// Checkout to update: configured `source`, or with `force` the directory
/// holding the running executable.
pub fn update_source(config: &Config, force: bool) -> Result<Option<PathBuf>> {
    if let Some(source) = &config.source {
        return Ok(Some(source.clone()));
    }
    if force {
        return Ok(executable_dir()?);
    }
    Ok(None)
}

fn executable_dir() -> Result<Option<PathBuf>> {
    let exe = env::current_exe()?;
    Ok(exe.parent().map(|p| p.to_path_buf()))
}

pub async fn run_update(config: &Config, force: bool) -> Result<()> {
    let Some(source) = update_source(config, force)? else {
        let here = executable_dir()?.unwrap_or_default();
        println!(
            "Update only works if `source` is defined in the config file, e.g.: {}",
            here.display()
        );
        return Ok(());
    };

    let status = Command::new("git")
        .arg("pull")
        .current_dir(&source)
        .status()
        .await
        .map_err(|e| CliGptError::Other(format!("Failed to run git pull: {}", e)))?;

    if !status.success() {
        return Err(CliGptError::Other(format!(
            "git pull in {} exited with {}",
            source.display(),
            status
        )));
    }

    println!("update succeeded");
    Ok(())
}
