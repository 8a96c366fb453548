use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "contact-sync")]
#[command(about = "Copy contacts from the source API into HubSpot in one batch")]
pub struct CliArgs {
    #[arg(long, help = "Load environment variables from this file instead of ./.env")]
    pub env_file: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::parse_from(["contact-sync"]);
        assert!(args.env_file.is_none());
        assert!(!args.verbose);
        assert!(!args.json_logs);
    }

    #[test]
    fn test_env_file_flag() {
        let args = CliArgs::parse_from(["contact-sync", "--env-file", "prod.env", "--verbose"]);
        assert_eq!(args.env_file, Some(PathBuf::from("prod.env")));
        assert!(args.verbose);
    }
}
