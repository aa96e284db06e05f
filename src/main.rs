//! `server`: writes a mock execution tree for a checkpoint list.

use anyhow::Result;
use clap::Parser;
use mp_exec_tree::cli::Cli;
use mp_exec_tree::run;

fn main() -> Result<()> {
    env_logger::init();

    let config = Cli::parse().into_config()?;
    run(&config)?;

    println!("json file is saved at  {}", config.output_path.display());

    Ok(())
}
