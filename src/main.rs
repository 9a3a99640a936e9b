use anyhow::Context;
use clap::Parser;
use kvs_database::{
    config::Config,
    storage::{open_seeded, DiskSlots},
};

mod cli;

use cli::{execute_command, print_notice, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config =
        Config::from_env().with_overrides(cli.storage_dir.clone(), cli.key.clone(), cli.verbose);

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .init();

    let slots = DiskSlots::new(&config.storage_dir)
        .await
        .with_context(|| format!("opening storage at {}", config.storage_dir.display()))?;
    let (mut store, _, welcome) = open_seeded(slots, &config.slot_key).await?;

    if let Some(notice) = welcome {
        print_notice(&notice);
    }

    let command = cli.command.unwrap_or(Commands::Dashboard);
    execute_command(&mut store, command).await?;

    Ok(())
}
