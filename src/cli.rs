use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "cligpt")]
#[command(
    about = "Chat with a GPT model from the terminal. Press CTRL-C to exit.",
    long_about = None
)]
pub struct Args {
    #[arg(
        help = "Describe what kind of agent/helper you want (default is set in the config file)"
    )]
    pub role: Option<String>,

    #[arg(short = 'm', long = "model", help = "Which model, e.g. \"gpt-4-turbo-preview\"")]
    pub model: Option<String>,

    #[arg(
        short = 'r',
        long = "resume",
        help = "Resume a previous chat from the path to its log"
    )]
    pub resume: Option<String>,

    #[arg(long = "update", help = "Update cligpt with git pull")]
    pub update: bool,

    #[arg(
        long = "force",
        help = "Force an update without having to define `source`"
    )]
    pub force: bool,

    #[arg(short = 'v', long = "verbose", help = "Print diagnostic output to stderr")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_command_line() {
        let args = Args::try_parse_from([
            "cligpt",
            "You are terse",
            "-m",
            "gpt-4o",
            "--resume",
            "2024/2024-03/2024-03-07T09-05",
        ])
        .unwrap();
        assert_eq!(args.role.as_deref(), Some("You are terse"));
        assert_eq!(args.model.as_deref(), Some("gpt-4o"));
        assert_eq!(args.resume.as_deref(), Some("2024/2024-03/2024-03-07T09-05"));
        assert!(!args.update);
    }

    #[test]
    fn test_update_flags() {
        let args = Args::try_parse_from(["cligpt", "--update", "--force"]).unwrap();
        assert!(args.update && args.force);
        assert!(args.role.is_none());
    }
}
