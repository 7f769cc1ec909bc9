use crate::error::{CliGptError, Result};
use crate::naming::with_log_extension;
use std::path::{Path, PathBuf};

/// Find the log named on the command line: as given, then under the log
/// directory. `.md` is implied.
pub fn resolve_resume_path(name: &str, log_dir: &Path) -> Result<PathBuf> {
    let name = with_log_extension(name);

    let direct = PathBuf::from(&name);
    if direct.is_file() {
        return Ok(direct);
    }

    let under_logs = log_dir.join(&name);
    if under_logs.is_file() {
        return Ok(under_logs);
    }

    Err(CliGptError::SessionError(format!("couldn't find {}", name)))
}
