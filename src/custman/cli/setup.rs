use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "custman", bin_name = "custman", version)]
#[command(about = "Interactive in-memory customer record manager", long_about = None)]
pub struct Cli {
    /// Maximum number of customers (overrides the config file)
    #[arg(long, value_name = "N")]
    pub capacity: Option<usize>,

    /// Start with an empty customer list instead of the samples
    #[arg(long)]
    pub no_seed: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Directory containing config.json
    #[arg(long, value_name = "DIR")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
