use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(name = "scriptconf", version, about = "JSON config bootstrap for command-line scripts")]
pub struct Cli {
    /// Config name; the file is stored as <root>/<name>.json
    #[arg(long, default_value = "script")]
    pub name: String,

    /// Version stamped into a newly created config
    #[arg(long = "app-version", default_value = "0.1.0")]
    pub app_version: String,

    /// Directory holding the config file (defaults to the project root)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Prompt for extra key=value pairs when initializing
    #[arg(long)]
    pub interactive: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Read the config, creating it first if missing
    Show,
    /// Recreate the config file, overwriting any existing one
    Init,
    /// Print the resolved config file path
    Path,
}
