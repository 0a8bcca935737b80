//! Command-line interface for the build jobs.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

/// Run HMCL build-time jobs.
#[derive(Parser, Debug)]
#[command(name = "hmcl-build")]
#[command(version, about)]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Write the OpenJFX dependency manifest:\n",
    "    $ hmcl-build generate-manifest\n\n",
    "  Warm the configured mirrors:\n",
    "    $ hmcl-build -v warm-cache\n\n",
    "  Check translations with a custom configuration:\n",
    "    $ hmcl-build --config ci/hmcl-build.toml check-translations",
))]
pub struct Cli {
    /// Job to run.
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file [default: hmcl-build.toml when present].
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Increase log verbosity (repeatable: -v, -vv).
    #[arg(
        short,
        long = "verbose",
        action = clap::ArgAction::Count,
        conflicts_with = "quiet",
        global = true
    )]
    pub verbosity: u8,

    /// Only log warnings and errors.
    #[arg(short, long, conflicts_with = "verbosity", global = true)]
    pub quiet: bool,
}

/// Available jobs.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Resolve every OpenJFX artefact and write the dependency manifest.
    GenerateManifest,

    /// Request every OpenJFX jar through each mirror so it gets cached.
    WarmCache,

    /// Fail when any gate-locale key is missing from another bundle.
    CheckTranslations,

    /// Print Maven coordinates of the OpenJFX modules for this machine.
    HostCoordinates,
}
