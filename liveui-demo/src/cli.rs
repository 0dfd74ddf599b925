use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser, Clone)]
#[command(author, version, about = "Render a sample live page in the terminal", long_about = None)]
pub struct Args {
    #[arg(short, long, default_value_t = 5, help = "Number of render ticks to print")]
    pub ticks: u32,
    #[arg(
        short,
        long,
        help = "JSON config file (defaults to the platform config dir when present)"
    )]
    pub config: Option<PathBuf>,
    #[arg(
        short,
        long,
        default_value_t = false,
        help = "Use a frozen clock that advances one interval per tick"
    )]
    pub frozen: bool,
    #[arg(
        long,
        default_value_t = 2,
        help = "Tick on which the first message toggle is clicked"
    )]
    pub click_at: u32,
    #[arg(short, long, default_value_t = false, help = "Log at trace level")]
    pub verbose: bool,
}
