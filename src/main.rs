use anyhow::Result;
use clap::{Parser, Subcommand};

use smartbudget::audit::AuditJournal;
use smartbudget::cli::{
    handle_audit_command, handle_category_command, handle_expense_command, handle_reset_command,
    handle_summary_command, CategoryCommands, ExpenseCommands,
};
use smartbudget::config::{BudgetPaths, Settings};
use smartbudget::logging;
use smartbudget::services::{BudgetManager, LoadOrigin};

#[derive(Parser)]
#[command(
    name = "smartbudget",
    version,
    about = "Track spending against category limits",
    long_about = "SmartBudget keeps spending categories with limits and a list of \
                  expenses, saved after every change. Use the subcommands for quick \
                  edits or 'smartbudget tui' for the interactive view."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Show totals and spending per category
    Summary,

    /// Delete all data and start over
    Reset {
        /// Skip the confirmation step
        #[arg(long)]
        yes: bool,
    },

    /// Show recent changes from the journal
    Audit {
        /// Number of changes to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    if matches!(cli.command, Some(Commands::Tui)) {
        logging::init_file(&paths.log_file())?;
    } else {
        logging::init_stderr();
    }

    let settings = Settings::load_or_default(&paths);

    match cli.command {
        Some(Commands::Config) => {
            print_config(&paths, &settings);
            return Ok(());
        }
        Some(Commands::Audit { count }) => {
            handle_audit_command(&AuditJournal::new(paths.audit_log()), count)?;
            return Ok(());
        }
        _ => {}
    }

    paths.ensure_directories()?;
    let mut manager = BudgetManager::from_paths(&paths, &settings);
    if manager.origin() == LoadOrigin::Recovered {
        eprintln!(
            "Warning: {} could not be read; starting with an empty budget.",
            manager.data_path().display()
        );
    }

    match cli.command {
        Some(Commands::Tui) => smartbudget::tui::run_tui(manager, settings)?,
        Some(Commands::Category(cmd)) => handle_category_command(&mut manager, &settings, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&mut manager, &settings, cmd)?,
        Some(Commands::Summary) => handle_summary_command(&manager, &settings)?,
        Some(Commands::Reset { yes }) => handle_reset_command(&mut manager, &settings, yes)?,
        Some(Commands::Config) | Some(Commands::Audit { .. }) => {}
        None => {
            println!("SmartBudget - track spending against category limits");
            println!();
            println!("Run 'smartbudget --help' for usage information.");
            println!("Run 'smartbudget tui' to launch the interactive interface.");
        }
    }

    Ok(())
}

fn print_config(paths: &BudgetPaths, settings: &Settings) {
    println!("SmartBudget Configuration");
    println!("=========================");
    println!("Data directory: {}", paths.base_dir().display());
    println!("Data file:      {}", paths.data_file().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Change journal: {}", paths.audit_log().display());
    println!("TUI log:        {}", paths.log_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Seed defaults:   {}", settings.seed_defaults);
    println!("  Recent expenses: {}", settings.recent_expense_count);
    println!("  Default categories:");
    for category in &settings.default_categories {
        println!(
            "    {} ({})",
            category.name,
            settings.format_money(category.limit)
        );
    }
}
