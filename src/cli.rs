use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Backend of the Venice tourist guide")]
pub struct Args {
    #[arg(long, value_name = "FILE", help = "Configuration file (TOML)")]
    pub config_file: Option<PathBuf>,

    #[arg(long, help = "Allow requests from any origin")]
    pub enable_cors: bool,

    #[arg(
        short,
        long,
        value_name = "PORT",
        help = "Port of the web server (overrides ROCKET_PORT)"
    )]
    pub port: Option<u16>,
}
