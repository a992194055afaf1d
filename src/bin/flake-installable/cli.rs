use clap::Parser;

use crate::output::{Field, OutputFormat};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "flake-installable")]
#[command(next_line_help = true)]
/// Discover the flake output attribute path for a configuration
pub(crate) struct CliArgs {
    /// The flake uri to resolve.
    flake_uri: String,
    /// Nix version to assume for feature checks,
    /// instead of asking the nix binary.
    #[arg(long)]
    nix_version: Option<String>,
    /// System name to use (defaults to builtins.currentSystem).
    #[arg(long)]
    system: Option<String>,
    /// Hostname to use (defaults to the system hostname).
    #[arg(long)]
    hostname: Option<String>,
    /// Output format to use.
    #[arg(long, value_enum, default_value_t = OutputFormat::default())]
    output_format: OutputFormat,
    /// Comma separated list of fields to output.
    #[arg(long, value_enum, value_delimiter = ',')]
    output_fields: Vec<Field>,
}

impl CliArgs {
    pub(crate) fn flake_uri(&self) -> &str {
        &self.flake_uri
    }

    pub(crate) fn nix_version(&self) -> Option<&str> {
        self.nix_version.as_deref()
    }

    pub(crate) fn system(&self) -> Option<&str> {
        self.system.as_deref()
    }

    pub(crate) fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }

    pub(crate) fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub(crate) fn output_fields(&self) -> &[Field] {
        &self.output_fields
    }
}
