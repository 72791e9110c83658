//! calql — render query specifications as CalQL text
//!
//! # Usage
//!
//! ```bash
//! # Print the query text of one or more specification documents
//! calql render spec.json other.toml
//!
//! # Show each clause separately
//! calql explain spec.json
//!
//! # List the built-in functions
//! calql functions --kind aggregate
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use calql::fmt::{format_aggregation_op, format_condition, format_preprocess_op};
use calql::prelude::*;
use calql::signatures::{AGGREGATION_KERNELS, Kernel, PREPROCESS_KERNELS};

#[derive(Parser)]
#[command(name = "calql")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render query specifications as CalQL text", long_about = None)]
#[command(after_help = "EXAMPLES:
    calql render spec.json
    calql explain spec.toml
    calql functions --kind preprocess")]
struct Cli {
    /// Config file (default: ./calql.toml, then the user config dir)
    #[arg(long, global = true, env = "CALQL_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum FunctionKind {
    Aggregate,
    Preprocess,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the query text of specification documents (JSON or TOML)
    Render {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print each clause of a specification, then the full query
    Explain { file: PathBuf },
    /// List built-in functions
    Functions {
        #[arg(short, long, value_enum)]
        kind: Option<FunctionKind>,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("CALQL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref()).context("loading config")?;
    if cli.no_color || !config.render.color {
        colored::control::set_override(false);
    }
    debug!(?config, "config loaded");

    match &cli.command {
        Commands::Render { files } => {
            let specs = files
                .iter()
                .map(|file| load_spec(file, &config))
                .collect::<Result<Vec<_>>>()?;
            let text = Formatter::new()
                .with_newline(config.render.newline)
                .format_all(&specs)?;
            print!("{}", text);
        }
        Commands::Explain { file } => {
            let spec = load_spec(file, &config)?;
            explain(&spec)?;
        }
        Commands::Functions { kind } => match kind {
            Some(FunctionKind::Aggregate) => show_functions("Aggregation", AGGREGATION_KERNELS),
            Some(FunctionKind::Preprocess) => show_functions("Preprocess", PREPROCESS_KERNELS),
            None => {
                show_functions("Aggregation", AGGREGATION_KERNELS);
                println!();
                show_functions("Preprocess", PREPROCESS_KERNELS);
            }
        },
    }

    Ok(())
}

fn load_spec(path: &Path, config: &Config) -> Result<QuerySpec> {
    let mut spec = calql::load::from_path(path)
        .with_context(|| format!("loading spec {}", path.display()))?;
    config.apply(&mut spec);
    Ok(spec)
}

fn explain(spec: &QuerySpec) -> Result<()> {
    println!("{}", "Query Specification".cyan().bold());
    println!();

    if !spec.preprocess_ops.is_empty() {
        println!("  {}", "Preprocess:".dimmed());
        for op in &spec.preprocess_ops {
            let mut line = String::new();
            format_preprocess_op(&mut line, op)?;
            println!("    • {}", line.white());
        }
    }

    match &spec.aggregate {
        AggregationSelection::List(list) => {
            println!("  {}", "Aggregate:".dimmed());
            for op in list {
                let mut line = String::new();
                format_aggregation_op(&mut line, op)?;
                println!("    • {}", line.white());
            }
        }
        other => println!("  {} {:?}", "Aggregate:".dimmed(), other),
    }

    explain_attributes("Select:", &spec.select);
    explain_attributes("Group by:", &spec.groupby);

    match &spec.filter {
        FilterSelection::List(list) => {
            println!("  {}", "Where:".dimmed());
            for cond in list {
                let mut line = String::new();
                format_condition(&mut line, cond)?;
                let op = format!("({:?})", cond.op);
                println!("    • {} {}", line.trim_start().white(), op.dimmed());
            }
        }
        other => println!("  {} {:?}", "Where:".dimmed(), other),
    }

    match &spec.sort {
        SortSelection::List(list) => {
            println!("  {}", "Order by:".dimmed());
            for sort in list {
                println!("    • {}", sort.to_string().white());
            }
        }
        other => println!("  {} {:?}", "Order by:".dimmed(), other),
    }

    match &spec.format {
        FormatSpec::User { formatter, kwargs } => {
            println!("  {} {}", "Format:".dimmed(), formatter.name.cyan());
            for (key, value) in kwargs {
                println!("    {} = {}", key, value.yellow());
            }
        }
        FormatSpec::Default => println!("  {} Default", "Format:".dimmed()),
    }

    println!();
    println!("{}", "CalQL:".green().bold());
    println!("  {}", spec.to_string().trim_start().white());
    Ok(())
}

fn explain_attributes(label: &str, clause: &AttributeClause) {
    match &clause.selection {
        AttributeSelection::List(list) => {
            let path = if clause.use_path { " (path first)" } else { "" };
            println!("  {}{}", label.dimmed(), path);
            for attr in list {
                println!("    • {}", attr.white());
            }
        }
        other => println!("  {} {:?}", label.dimmed(), other),
    }
}

fn show_functions(title: &str, kernels: &[Kernel]) {
    println!("{}", format!("{} functions", title).cyan().bold());
    println!("{:28} {}", "Usage".white().bold(), "Arguments".white().bold());
    println!("{}", "─".repeat(48).dimmed());
    for kernel in kernels {
        let range = if kernel.min_args == kernel.max_args {
            kernel.min_args.to_string()
        } else {
            format!("{}..={}", kernel.min_args, kernel.max_args)
        };
        println!("{:28} {}", kernel.usage().yellow(), range.dimmed());
    }
}
