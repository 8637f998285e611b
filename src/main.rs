use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chessview_session::Driver;

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the board.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();
    info!("chessview starting");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    Driver::new().run(stdin.lock(), &mut stdout)?;
    Ok(())
}
