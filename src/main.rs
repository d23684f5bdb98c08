use std::io;

use anyhow::Result;
use tracing::info;

use ferz_session::{GameSession, SessionConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    let config = SessionConfig::from_env();
    info!(save_dir = %config.save_dir.display(), "ferz starting");
    GameSession::new(config).run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
