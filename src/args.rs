use clap::{CommandFactory, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(name = "spamdyke-email")]
#[clap(author, version)]
#[clap(about = "Parse spamdyke email debug logs to human readable format")]
pub struct Args {
    /// Read spamdyke email debug/log (required).
    #[clap(long, value_name = "FILE")]
    pub email_log: Option<PathBuf>,
    /// Save email content to FILE.
    #[clap(long, value_name = "FILE")]
    pub write_email: Option<PathBuf>,
    /// Save log content to FILE.
    #[clap(long, value_name = "FILE")]
    pub write_log: Option<PathBuf>,
    /// Dump email to stdout.
    #[clap(long)]
    pub dump_email: bool,
    /// Dump log to stdout.
    #[clap(long)]
    pub dump_log: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Email goes to stdout when asked for, or when nothing else is.
    pub fn should_dump_email(&self) -> bool {
        self.dump_email
            || (self.write_email.is_none() && self.write_log.is_none() && !self.dump_log)
    }

    pub fn print_usage() {
        // Nothing useful can be done if stdout is gone.
        let _ = Self::command().print_help();
        println!(
            "\nExample: {} --email-log 20160125_205714_13064_1307764874 --dump-email\n",
            env!("CARGO_PKG_NAME")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("spamdyke-email").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_verify_command() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_should_dump_email() {
        assert!(parse(&["--email-log", "x"]).should_dump_email());
        assert!(parse(&["--email-log", "x", "--dump-email"]).should_dump_email());
        assert!(parse(&["--email-log", "x", "--dump-email", "--dump-log"]).should_dump_email());
        assert!(!parse(&["--email-log", "x", "--dump-log"]).should_dump_email());
        assert!(!parse(&["--email-log", "x", "--write-email", "e"]).should_dump_email());
        assert!(!parse(&["--email-log", "x", "--write-log", "l"]).should_dump_email());
    }

    #[test]
    fn test_email_log_is_optional_for_clap() {
        let args = parse(&["--dump-log"]);
        assert_eq!(args.email_log, None);
        assert!(args.dump_log);
    }
}
