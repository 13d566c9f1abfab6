use crate::cli::{Commands, HELP_TEMPLATE};
use clap::Parser;

#[derive(Parser)]
#[command(
    // Obtain during build time, not runtime
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None
)]
#[command(
    after_help = HELP_TEMPLATE.replace("%BINARY_NAME%", env!("CARGO_PKG_NAME"))
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}
