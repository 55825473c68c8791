use clap::{Parser, Subcommand};
use markright_config::Config;
use std::{path::PathBuf, process::ExitCode};

mod commands;

/// markright - parse, print, render and query markright documents
#[derive(Parser, Debug)]
#[command(name = "markright", version, about, long_about = None)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the parsed tree of a file ("-" reads stdin)
    Parse {
        file: PathBuf,
        /// Print the tree as JSON instead of the indented outline
        #[arg(long)]
        json: bool,
    },
    /// Reprint a file in canonical form
    Print { file: PathBuf },
    /// Render a file as HTML, one tag per element
    Html { file: PathBuf },
    /// Extract a JSON object from a file
    Json { file: PathBuf },
    /// Print the inner text of the nodes matching a path such as "doc title"
    Query {
        file: PathBuf,
        path: String,
        /// Every match in document order, not only the first direct one
        #[arg(long)]
        all: bool,
    },
    /// Run fixture files (directories are searched for *.mr)
    Test {
        /// Defaults to `fixtures_path` from the config file
        paths: Vec<PathBuf>,
    },
    /// Show or update the config file
    Config {
        #[arg(long)]
        fixtures_path: Option<PathBuf>,
        #[arg(long)]
        log_level: Option<String>,
    },
}

fn init_logging(verbose: u8, config_level: &str) {
    let level = match verbose {
        0 => config_level.parse().unwrap_or(log::LevelFilter::Warn),
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::from_default_env();
    if verbose > 0 || std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(level);
    }
    builder.init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (config, config_error) = match Config::load() {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(e) => (Config::default(), Some(e)),
    };
    init_logging(cli.verbose, &config.log_level);
    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {e}");
    }
    log::debug!("Config path: {}", Config::config_path().display());

    let result = match cli.command {
        Command::Parse { file, json } => commands::parse(&file, json).map(print_output),
        Command::Print { file } => commands::print(&file).map(print_output),
        Command::Html { file } => commands::html(&file).map(print_output),
        Command::Json { file } => commands::json(&file).map(print_output),
        Command::Query { file, path, all } => commands::query(&file, &path, all).map(print_output),
        Command::Test { paths } => commands::test(&paths, &config).map(|report| {
            print!("{}", report.output);
            if report.all_passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }),
        Command::Config {
            fixtures_path,
            log_level,
        } => commands::config(config, fixtures_path, log_level).map(print_output),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn print_output(output: String) -> ExitCode {
    print!("{output}");
    if !output.is_empty() && !output.ends_with('\n') {
        println!();
    }
    ExitCode::SUCCESS
}
