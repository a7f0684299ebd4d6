use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use mailbox_chess::config::DriverConfig;
use mailbox_chess::engines::engine_random::RandomEngine;
use mailbox_chess::session::text_driver::TextDriver;

fn main() -> Result<()> {
    let config = DriverConfig::load().context("failed to read MAILBOX_CHESS_* configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter).context("invalid log filter")?)
        .with_writer(io::stderr)
        .init();

    tracing::info!(?config, "starting driver");

    let engine = match config.seed {
        Some(seed) => RandomEngine::with_seed(seed),
        None => RandomEngine::new(),
    };
    let mut driver = TextDriver::new(engine, config.show_board);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", driver.banner())?;
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        if line.trim().is_empty() {
            write!(stdout, "> ")?;
            stdout.flush()?;
            continue;
        }

        let reply = driver.handle_line(&line);
        writeln!(stdout, "{}", reply.text)?;
        if reply.quit {
            break;
        }

        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    Ok(())
}
