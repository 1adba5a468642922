use clap::{Parser, Subcommand};

/// Map InfiniBand switch ports and cross-check live link health
#[derive(Parser, Debug)]
#[command(name = "ib-health")]
#[command(version)]
#[command(about = "Map InfiniBand switch ports and cross-check live link health", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Scan the fabric topology and write a dated port-mapping CSV
    GenerateMapping {
        /// Prefix for the dated output file (<prefix>_YYYYMMDD.csv)
        #[arg(short = 'p', long)]
        output_prefix: Option<String>,

        /// Path to a YAML config file (defaults to ./ib-health.config.yml)
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Cross-check live link state against the persisted mapping table
    Check {
        /// Mapping CSV to read (the fixed, undated snapshot)
        #[arg(short, long)]
        db: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Path to a YAML config file (defaults to ./ib-health.config.yml)
        #[arg(short, long)]
        config: Option<String>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
