use anyhow::Context;
use clap::Parser;

use counterflow::cli::Cli;
use counterflow::logging::init_tracing;
use counterflow::shutdown::ShutdownCoordinator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    if let Some(path) = &config.logging.file {
        init_tracing(&config.logging)
            .with_context(|| format!("Failed to open log file '{}'", path.display()))?;
    }

    let shutdown = ShutdownCoordinator::new();
    shutdown.listen_for_ctrl_c();

    let final_state = counterflow::ui::run(&config, &shutdown).await?;
    println!("Final count: {}", final_state.count());
    Ok(())
}
