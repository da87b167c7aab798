//! `equip` - an interactive console inventory manager for office equipment.

mod cli;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
