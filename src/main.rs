use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budgetwise::cli::{
    handle_balance_command, handle_budgets_command, handle_classify_command,
    handle_config_command, handle_goals_command, handle_monthly_command, handle_stats_command,
    handle_summary_command, Session,
};
use budgetwise::config::{init_tracing, BudgetwisePaths, Settings};

#[derive(Parser)]
#[command(
    name = "budgetwise",
    version,
    about = "Categorize transactions and report budgets, summaries and savings",
    long_about = "BudgetWise categorizes free-text transactions by keyword, aggregates \
                  income and expenses, compares spending against budgets and tracks \
                  savings goals. Data commands read a JSON snapshot."
)]
struct Cli {
    /// Snapshot file with transactions, budgets and goals
    #[arg(short, long, global = true, env = "BUDGETWISE_SNAPSHOT")]
    snapshot: Option<PathBuf>,

    /// User to report on (required when the snapshot has several)
    #[arg(short, long, global = true)]
    user: Option<String>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict the category for a description
    Classify {
        /// Transaction description
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },

    /// Income, expenses and balance (all time unless --month is given)
    Summary {
        /// Month (e.g., "2025-01", "current", "last")
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Monthly statistics including averages and the largest expense
    Monthly {
        /// Month (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Budget-vs-actual for a month
    #[command(alias = "budget")]
    Budgets {
        /// Month (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Savings goals with progress
    Goals,

    /// Running balance, oldest first
    Balance,

    /// Auto vs manual categorization counts
    Stats,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetwisePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_filter);

    let session = Session::new(paths, settings, cli.json)?;
    let snapshot = cli.snapshot.as_deref();
    let user = cli.user.as_deref();

    match cli.command {
        Some(Commands::Classify { description }) => {
            handle_classify_command(&session, &description.join(" "))?;
        }
        Some(Commands::Summary { month }) => {
            let workspace = session.open(snapshot, user)?;
            handle_summary_command(&session, &workspace, month.as_deref())?;
        }
        Some(Commands::Monthly { month }) => {
            let workspace = session.open(snapshot, user)?;
            handle_monthly_command(&session, &workspace, month.as_deref())?;
        }
        Some(Commands::Budgets { month, category }) => {
            let workspace = session.open(snapshot, user)?;
            handle_budgets_command(&session, &workspace, month.as_deref(), category.as_deref())?;
        }
        Some(Commands::Goals) => {
            let workspace = session.open(snapshot, user)?;
            handle_goals_command(&session, &workspace)?;
        }
        Some(Commands::Balance) => {
            let workspace = session.open(snapshot, user)?;
            handle_balance_command(&session, &workspace)?;
        }
        Some(Commands::Stats) => {
            let workspace = session.open(snapshot, user)?;
            handle_stats_command(&session, &workspace)?;
        }
        Some(Commands::Config) => {
            handle_config_command(&session)?;
        }
        None => {
            println!("BudgetWise - transaction categorization and budgeting");
            println!();
            println!("Run 'budgetwise --help' for usage information.");
        }
    }

    Ok(())
}
