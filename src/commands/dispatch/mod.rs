//! Command dispatch logic for gka

use std::time::Instant;

use crate::cli::paths::resolve_root_path;
use crate::cli::{Cli, Commands};
use gka_core::error::Result;
use tracing::debug;

mod command;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = resolve_root_path(cli.root.clone());

    debug!(elapsed = ?start.elapsed(), root = %root.display(), "resolve_root");

    let ctx = CommandContext::new(cli, &root, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::List => crate::commands::list::execute(ctx),
            Commands::Parse => crate::commands::parse::execute(ctx),
            Commands::Show { index } => crate::commands::show::execute(ctx, *index),
            Commands::Path { index, from, to } => {
                crate::commands::path::execute(ctx, *index, from, to)
            }
        }
    }
}
