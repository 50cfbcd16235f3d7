mod args;
mod classify;
mod output;
mod timestamp;
mod transcript;

use anyhow::Result;
use args::Args;
use std::io::{self, Write};
use std::path::Path;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("spamdyke_email=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse_args();
    let email_log = match &args.email_log {
        Some(path) => path,
        None => {
            Args::print_usage();
            process::exit(1);
        }
    };
    do_main(&args, email_log)
}

fn do_main(args: &Args, email_log: &Path) -> Result<()> {
    let content = transcript::read_transcript(email_log)?;
    let streams = classify::classify(transcript::lines(&content));
    info!(
        log_lines = streams.log.len(),
        email_lines = streams.email.len(),
        "classified transcript"
    );
    if let Some((first, last)) = timestamp::session_span(streams.log.iter().copied()) {
        info!(%first, %last, "session span");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Some(path) = &args.write_email {
        output::write_lines(&mut out, path, &streams.email)?;
    }
    if let Some(path) = &args.write_log {
        output::write_lines(&mut out, path, &streams.log)?;
    }
    if args.dump_log {
        output::dump_lines(&mut out, &streams.log)?;
    }
    if args.should_dump_email() {
        output::dump_lines(&mut out, &streams.email)?;
    }
    out.flush()?;

    Ok(())
}
