use clap::Parser;
use color_eyre::eyre;

use crate::cli::CliArgs;

mod app;
mod cli;
mod error;
mod log;
mod nix;
mod output;

fn main() -> eyre::Result<()> {
    let args = CliArgs::parse();

    if std::env::var("NO_COLOR").is_err() {
        color_eyre::install()?;
    } else {
        color_eyre::config::HookBuilder::new()
            .theme(color_eyre::config::Theme::new())
            .install()?;
    }

    log::init().ok();
    tracing::debug!("Cli args: {args:?}");

    app::run(&args)?;

    Ok(())
}
