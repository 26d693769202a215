use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bloglist",
    about = "Bloglist: blog post REST service",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Print aggregate statistics over every stored blog
    Stats(StatsArgs),
    /// Insert blogs from a JSON array file
    Seed(SeedArgs),
}

/// Where configuration and the store come from.
#[derive(Args, Clone, Debug, Default)]
pub struct TargetArgs {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Store connection string (`memory://`, `file://<path>`, or a path)
    #[arg(long)]
    pub store: Option<String>,
}

#[derive(Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub target: TargetArgs,
    #[arg(long)]
    pub bind: Option<SocketAddr>,
}

#[derive(Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

#[derive(Args)]
pub struct SeedArgs {
    #[command(flatten)]
    pub target: TargetArgs,
    /// JSON file holding an array of blog drafts
    #[arg(short, long)]
    pub file: PathBuf,
}
