use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::viewer::client::DEFAULT_ENDPOINT;

/// Generate pixel art dad sprites.
#[derive(Parser, Debug)]
#[command(name = "pixel-dad", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the prompt builder endpoint (default)
    Serve,
    /// Ask a running endpoint for a dad and preload the result
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Start from a preset (e.g. "Retro Dad"); explicit colors still win
    #[arg(long)]
    pub preset: Option<String>,

    #[arg(long)]
    pub shirt: Option<String>,

    #[arg(long)]
    pub pants: Option<String>,

    #[arg(long)]
    pub hair: Option<String>,

    /// Accessories, facial hair, expressions...
    #[arg(long)]
    pub details: Option<String>,

    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Save the image as pixel-dad.png once it is ready
    #[arg(long)]
    pub download: bool,

    #[arg(long, default_value = ".")]
    pub out: PathBuf,
}
