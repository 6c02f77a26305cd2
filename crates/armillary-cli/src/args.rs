//! Command-line argument definitions for the Armillary CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. The binary is runnable with no arguments: every flag
//! has a default that renders the built-in model to the fixed output path.

use clap::Parser;

use armillary::builtin;

/// Command-line arguments for the Armillary diagram generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output image file
    #[arg(short, long, default_value = builtin::DEFAULT_DIAGRAM_FILE)]
    pub output: String,

    /// Output image format (png, svg); overrides the configuration file
    #[arg(short, long)]
    pub format: Option<String>,

    /// Keep the intermediate DOT source file next to the output
    #[arg(long)]
    pub keep_dot: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_runs_with_no_arguments() {
        let args = Args::parse_from(["armillary"]);

        assert_eq!(args.output, "dataset_cleaning_uml_cluster.png");
        assert_eq!(args.format, None);
        assert!(!args.keep_dot);
        assert_eq!(args.config, None);
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_flags_parse() {
        let args = Args::parse_from([
            "armillary",
            "--output",
            "model.svg",
            "--format",
            "svg",
            "--keep-dot",
            "--log-level",
            "debug",
        ]);

        assert_eq!(args.output, "model.svg");
        assert_eq!(args.format.as_deref(), Some("svg"));
        assert!(args.keep_dot);
        assert_eq!(args.log_level, "debug");
    }
}
