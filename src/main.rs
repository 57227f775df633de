use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_ledger::cli::{
    handle_add_command, handle_chart_command, handle_delete_command, handle_edit_command,
    handle_export_command, handle_income_command, handle_limit_command, handle_list_command,
    handle_report_command, run_menu, AddArgs, EditArgs, IncomeCommands, LimitCommands,
};
use expense_ledger::config::{paths::LedgerPaths, settings::Settings};
use expense_ledger::logging::init_tracing;
use expense_ledger::LedgerStore;

#[derive(Parser)]
#[command(
    name = "expense",
    author = "Kaylee Beyene",
    version,
    about = "Personal expense ledger for the terminal",
    long_about = "Records expenses, income and daily/monthly/yearly spending limits \
                  in a single JSON file, and reports totals, category breakdowns \
                  and limit overruns."
)]
struct Cli {
    /// Ledger file to use instead of the default location
    #[arg(long, global = true, env = "EXPENSE_LEDGER_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// Change fields of an existing expense
    Edit(EditArgs),

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: String,
    },

    /// List all expenses
    #[command(alias = "ls")]
    List,

    /// Income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Spending limit commands
    #[command(subcommand)]
    Limit(LimitCommands),

    /// Show the expense report
    Report {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Chart spending per category
    Chart {
        /// Bar width in characters
        #[arg(short, long)]
        width: Option<usize>,
    },

    /// Export expenses to CSV
    Export {
        /// Output file (defaults to expenses_YYYYMMDD.csv in the export directory)
        output: Option<PathBuf>,
    },

    /// Interactive numbered menu
    Menu,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let mut paths = LedgerPaths::new()?;
    if let Some(file) = cli.file {
        paths = paths.with_ledger_file(file);
    }
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("Expense Ledger - personal expense tracking");
        println!();
        println!("Run 'expense --help' for usage information.");
        println!("Run 'expense menu' for the interactive menu.");
        return Ok(());
    };

    paths.ensure_directories()?;
    let mut store = LedgerStore::from_paths(&paths);

    match command {
        Commands::Add(args) => handle_add_command(&mut store, &settings, args)?,
        Commands::Edit(args) => handle_edit_command(&mut store, &settings, args)?,
        Commands::Delete { id } => handle_delete_command(&mut store, &id)?,
        Commands::List => handle_list_command(&store, &settings)?,
        Commands::Income(cmd) => handle_income_command(&mut store, &settings, cmd)?,
        Commands::Limit(cmd) => handle_limit_command(&mut store, &settings, cmd)?,
        Commands::Report { json } => handle_report_command(&store, &settings, json)?,
        Commands::Chart { width } => handle_chart_command(&store, &settings, width)?,
        Commands::Export { output } => handle_export_command(&store, &settings, output)?,
        Commands::Menu => {
            let stdin = std::io::stdin();
            run_menu(&mut store, &settings, stdin.lock(), std::io::stdout())?;
        }
        Commands::Config => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }
            print_config(&paths, &settings);
        }
    }

    Ok(())
}

fn print_config(paths: &LedgerPaths, settings: &Settings) {
    println!("Expense Ledger Configuration");
    println!("============================");
    println!("Data directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Ledger file:    {}", paths.ledger_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Date format:     {}", settings.date_format);
    println!("  Export dir:      {}", settings.export_dir().display());
    println!("  Chart width:     {}", settings.chart_width);
}
