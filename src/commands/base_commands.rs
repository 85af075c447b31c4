use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about = "Quantify construction risks and track critical dates")]
pub struct CliArgs {
    /// Settings YAML file (falls back to $RISKTRACK_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Yaml,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Quantify a single risk from raw form values
    Quantify {
        /// Optimistic cost
        #[arg(long)]
        optimistic_cost: Option<String>,
        /// Most likely cost
        #[arg(long)]
        most_likely_cost: Option<String>,
        /// Pessimistic cost
        #[arg(long)]
        pessimistic_cost: Option<String>,
        /// Probability of the risk event (0-1, not clamped)
        #[arg(short, long, allow_hyphen_values = true)]
        probability: Option<String>,
        /// Cost allocation model (internal, fixedCap, shared, none)
        #[arg(short, long)]
        allocation_model: Option<String>,
        /// Contract cap used by the fixedCap model
        #[arg(long)]
        contract_cap: Option<String>,
        /// Optimistic duration in days
        #[arg(long)]
        optimistic_duration: Option<String>,
        /// Most likely duration in days
        #[arg(long)]
        most_likely_duration: Option<String>,
        /// Pessimistic duration in days
        #[arg(long)]
        pessimistic_duration: Option<String>,
        /// Unit of the duration estimate (calendar, business)
        #[arg(short, long)]
        day_type: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Recompute the derived fields of every risk in a register
    Recalculate {
        /// Register YAML file
        #[arg(short, long)]
        input: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Summarize the exposure of a register
    Summary {
        /// Register YAML file
        #[arg(short, long)]
        input: String,
        /// Number of risks to rank by EMV
        #[arg(short, long)]
        top: Option<usize>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Simulate the aggregate cost exposure of a register with Monte Carlo
    Simulate {
        /// Register YAML file
        #[arg(short, long)]
        input: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
        /// Number of simulation iterations
        #[arg(short = 'n', long)]
        iterations: Option<usize>,
        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List critical dates whose reminder has fired or that are overdue
    Reminders {
        /// Register YAML file
        #[arg(short, long)]
        input: String,
        /// Reference date (YYYY-MM-DD)
        #[arg(long, default_value_t = default_today())]
        today: String,
        /// Working-day calendar YAML file
        #[arg(short, long)]
        calendar: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn default_today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
