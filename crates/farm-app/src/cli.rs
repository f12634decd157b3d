//! Command-line surface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{CropCommand, FarmerCommand};

#[derive(Debug, Parser)]
#[command(name = "farmctl")]
#[command(about = "Farm management - farmers and their crops")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (JSON, or YAML with a .yaml/.yml extension)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Data file, overriding the config
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage farmers
    Farmer(FarmerCommand),
    /// Manage crops
    Crop(CropCommand),
}
