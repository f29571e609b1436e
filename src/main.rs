use std::path::PathBuf;

use clap::Parser;

use crater_migrate::error::Result;
use crater_migrate::{files, migrate, report};

#[derive(Parser)]
#[command(
    name = "crater-migrate",
    version,
    about = "Migrate a legacy crater config file to the grouped schema"
)]
struct Cli {
    /// Path of the legacy config file to read
    old_config: PathBuf,
    /// Path the migrated config file is written to
    new_config: PathBuf,
}

fn run(cli: Cli) -> Result<()> {
    let old = files::read_legacy(&cli.old_config)?;
    let new = migrate::migrate(&old)?;
    files::write_migrated(&cli.new_config, &new)?;
    report::print_summary(&cli.old_config, &cli.new_config, &new);
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
