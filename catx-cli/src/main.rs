use anyhow::Result;
use catx_core::Side;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod commands;
mod config;
mod error;

use config::Config;
use error::{print_error_and_exit, CliError};

#[derive(Parser)]
#[command(name = "catx")]
#[command(about = "CatX - Hierarchical Categorical Axis Renderer")]
#[command(version)]
#[command(long_about = "
CatX lays out and renders categorical axes whose factors are nested up to
three levels deep, with group separators and one label row per level.

Examples:
  catx config --example --out catx.toml
  catx render --config catx.toml --out axis.svg --side left
  catx layout --config catx.toml --pretty
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the axis to an SVG file
    Render {
        /// Output file (SVG)
        #[arg(short, long, required = true)]
        out: PathBuf,

        /// Side of the plot frame the axis is attached to
        #[arg(long)]
        side: Option<SideArg>,

        /// Width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Visible span start in synthetic coordinates
        #[arg(long, allow_negative_numbers = true)]
        start: Option<f64>,

        /// Visible span end in synthetic coordinates
        #[arg(long, allow_negative_numbers = true)]
        end: Option<f64>,

        /// Document title
        #[arg(long)]
        title: Option<String>,
    },

    /// Print the computed axis layout as JSON
    Layout {
        /// Side of the plot frame the axis is attached to
        #[arg(long)]
        side: Option<SideArg>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show or write configuration
    Config {
        /// Print an example configuration instead of the loaded one
        #[arg(long)]
        example: bool,

        /// Write the configuration to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SideArg {
    Above,
    Below,
    Left,
    Right,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Above => Side::Above,
            SideArg::Below => Side::Below,
            SideArg::Left => Side::Left,
            SideArg::Right => Side::Right,
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) -> Result<()> {
    if quiet {
        std::env::set_var("RUST_LOG", "error");
    } else {
        let level = match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        std::env::set_var("RUST_LOG", level);
    }

    env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .init();

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    // `config --example` works without a readable configuration
    if let Commands::Config { example: true, out } = &cli.command {
        return commands::config::execute(&Config::default(), true, out.clone());
    }

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => print_error_and_exit(&err),
    };

    match cli.command {
        Commands::Render {
            out,
            side,
            width,
            height,
            start,
            end,
            title,
        } => {
            let overrides = commands::render::Overrides {
                side: side.map(Side::from),
                width,
                height,
                start,
                end,
                title,
            };
            commands::render::execute(&config, out, overrides)?;
        }

        Commands::Layout { side, pretty } => {
            commands::layout::execute(&config, side.map(Side::from), pretty)?;
        }

        Commands::Config { example, out } => {
            commands::config::execute(&config, example, out)?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet)?;

    if let Err(err) = run(cli) {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            print_error_and_exit(cli_err);
        }
        return Err(err);
    }

    Ok(())
}
