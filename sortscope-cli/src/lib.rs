#![warn(missing_docs)]
//! Sortscope CLI Library
//!
//! This module provides the command-line front end: input providers,
//! `sortscope.toml` discovery, progress display and output formatting on top
//! of the core runners and the comparator.
//!
//! # Example
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     sortscope_cli::run()
//! }
//! ```

mod config;
mod executor;
mod input;

pub use config::*;
pub use executor::{
    build_report_meta, execute_comparison, execute_single, format_algorithm_list,
    format_duration, format_human_output, format_run_summary, format_steps,
};
pub use input::{
    GeneratorSpec, InputError, Number, Pattern, generate, parse_values, read_numbers,
    save_dataset,
};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rayon::ThreadPoolBuilder;
use regex::Regex;
use sortscope_compare::{Comparator, ComparisonReport, ExecutionMode, RunSummary};
use sortscope_core::{Algorithm, Runner};
use sortscope_report::{
    OutputFormat, Report, generate_analysis_json, generate_csv_report, generate_json_report,
    write_analysis,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Sortscope CLI arguments
#[derive(Parser, Debug)]
#[command(name = "sortscope")]
#[command(author, version, about = "Sortscope - instrumented sorting algorithms")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (default: discover sortscope.toml upwards)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available algorithms
    List,
    /// Run one algorithm and show its metrics and steps
    Run {
        /// Algorithm name (e.g. merge_sort)
        #[arg(name = "ALGORITHM")]
        algorithm: String,

        /// Print recorded steps
        #[arg(long)]
        show_steps: bool,

        /// Maximum number of steps printed
        #[arg(long)]
        max_steps: Option<usize>,

        /// Write the analysis document (JSON) to this path
        #[arg(long)]
        export: Option<PathBuf>,

        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Compare algorithms over the same input
    Compare {
        /// Algorithms to compare (default: configured list, else all)
        #[arg(name = "ALGORITHMS")]
        algorithms: Vec<String>,

        /// Keep only algorithms whose name matches this regex
        #[arg(long)]
        filter: Option<String>,

        /// Run algorithms in parallel
        #[arg(long)]
        parallel: bool,

        /// Thread pool size for parallel runs (0 = all cores)
        #[arg(long, short = 'j')]
        threads: Option<usize>,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,

        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Write a default sortscope.toml to the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Where the values come from
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Comma/space separated values, e.g. "5,3,8,1"
    #[arg(long, conflicts_with_all = ["file", "generate"])]
    pub values: Option<String>,

    /// File with one number per line
    #[arg(long, conflicts_with = "generate")]
    pub file: Option<PathBuf>,

    /// Generate N values
    #[arg(long, value_name = "N")]
    pub generate: Option<usize>,

    /// Pattern of generated values
    #[arg(long, value_enum)]
    pub pattern: Option<Pattern>,

    /// Lower bound of generated values
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<i64>,

    /// Upper bound of generated values
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<i64>,

    /// Seed for reproducible generated values
    #[arg(long)]
    pub seed: Option<u64>,

    /// Save the input values to this file (one per line)
    #[arg(long, value_name = "PATH")]
    pub save_input: Option<PathBuf>,
}

/// Output selection
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format: human, json, csv
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the Sortscope CLI with the process arguments.
///
/// # Returns
/// Returns `Ok(())` on success. An error is returned when arguments or input
/// are invalid, and also when any run failed (after its output was written).
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the Sortscope CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    // Explicit --config must load; discovery failures fall back to defaults
    let config = match &cli.config {
        Some(path) => SortscopeConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SortscopeConfig::discover().unwrap_or_default(),
    };

    match cli.command {
        Commands::List => {
            print!("{}", format_algorithm_list(&config.registry()?));
            Ok(())
        }
        Commands::Run {
            algorithm,
            show_steps,
            max_steps,
            export,
            input,
            output,
        } => {
            let options = RunOptions {
                show_steps: show_steps || config.output.show_steps,
                max_steps: max_steps.unwrap_or(config.output.max_steps),
                export,
            };
            run_algorithm(&config, &algorithm, &input, &output, &options)
        }
        Commands::Compare {
            algorithms,
            filter,
            parallel,
            threads,
            no_progress,
            input,
            output,
        } => {
            let options = CompareOptions {
                filter,
                parallel: parallel || config.compare.parallel,
                threads: threads.unwrap_or(config.compare.threads),
                show_progress: !no_progress,
            };
            compare_algorithms(&config, algorithms, &input, &output, &options)
        }
        Commands::Init { force } => init_config(Path::new(CONFIG_FILE_NAME), force),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        "sortscope=debug"
    } else {
        "sortscope=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A subscriber may already be installed (repeated calls in one process)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

struct RunOptions {
    show_steps: bool,
    max_steps: usize,
    export: Option<PathBuf>,
}

struct CompareOptions {
    filter: Option<String>,
    parallel: bool,
    threads: usize,
    show_progress: bool,
}

/// Materialize input values: explicit list, then file, then generator.
fn resolve_input(args: &InputArgs, config: &InputConfig) -> anyhow::Result<Vec<Number>> {
    let values = if let Some(text) = &args.values {
        parse_values(text)?
    } else if let Some(path) = &args.file {
        read_numbers(path)?
    } else {
        generate(&GeneratorSpec {
            size: args.generate.unwrap_or(config.size),
            min: args.min.unwrap_or(config.min),
            max: args.max.unwrap_or(config.max),
            pattern: args.pattern.unwrap_or(config.pattern),
            seed: args.seed.or(config.seed),
        })?
    };

    if let Some(path) = &args.save_input {
        save_dataset(path, &values)?;
        eprintln!("Input saved to: {}", path.display());
    }
    Ok(values)
}

fn resolve_format(args: &OutputArgs, config: &SortscopeConfig) -> anyhow::Result<OutputFormat> {
    args.format
        .as_deref()
        .unwrap_or(&config.output.format)
        .parse()
        .map_err(anyhow::Error::msg)
}

fn run_algorithm(
    config: &SortscopeConfig,
    name: &str,
    input: &InputArgs,
    output: &OutputArgs,
    options: &RunOptions,
) -> anyhow::Result<()> {
    let registry = config.registry()?;
    let algorithm = registry
        .resolve(name)
        .ok_or_else(|| anyhow::anyhow!("Unknown algorithm: {}", name))?;
    let format = resolve_format(output, config)?;
    let values = resolve_input(input, &config.input)?;

    let runner = execute_single(algorithm, &values);

    if let Some(path) = &options.export {
        write_analysis(path, &runner.export_analysis())?;
        eprintln!("Analysis written to: {}", path.display());
    }

    let rendered = match format {
        OutputFormat::Human => {
            let mut text = format_run_summary(&runner);
            if options.show_steps {
                text.push_str(&format_steps(runner.steps(), options.max_steps));
            }
            text
        }
        OutputFormat::Json => generate_analysis_json(&runner.export_analysis())?,
        OutputFormat::Csv => generate_csv_report(&single_run_report(&runner)),
    };
    write_output(&rendered, output.output.as_deref())?;

    match runner.failure() {
        Some(failure) => Err(anyhow::anyhow!("{} failed: {}", algorithm, failure)),
        None => Ok(()),
    }
}

fn single_run_report(runner: &Runner<Number>) -> Report {
    let comparison = ComparisonReport::from_summaries(
        runner.input().len(),
        ExecutionMode::Sequential,
        vec![RunSummary::from_runner(runner)],
    );
    Report::new(build_report_meta(), comparison)
}

/// Pick algorithm names: CLI list, then config list, then every variant;
/// then apply the optional regex filter.
fn select_algorithms(
    requested: Vec<String>,
    config: &CompareConfig,
    filter: Option<&str>,
) -> anyhow::Result<Vec<String>> {
    let mut names = if !requested.is_empty() {
        requested
    } else if !config.algorithms.is_empty() {
        config.algorithms.clone()
    } else {
        Algorithm::ALL.iter().map(|a| a.name().to_string()).collect()
    };

    if let Some(pattern) = filter {
        let re = Regex::new(pattern).with_context(|| format!("Invalid filter '{}'", pattern))?;
        names.retain(|name| re.is_match(name));
    }
    Ok(names)
}

fn compare_algorithms(
    config: &SortscopeConfig,
    requested: Vec<String>,
    input: &InputArgs,
    output: &OutputArgs,
    options: &CompareOptions,
) -> anyhow::Result<()> {
    let registry = config.registry()?;
    let format = resolve_format(output, config)?;
    let names = select_algorithms(requested, &config.compare, options.filter.as_deref())?;
    let values = resolve_input(input, &config.input)?;

    let mode = if options.parallel {
        if options.threads > 0 {
            ThreadPoolBuilder::new()
                .num_threads(options.threads)
                .build_global()
                .ok();
        }
        ExecutionMode::Parallel
    } else {
        ExecutionMode::Sequential
    };

    let comparator = Comparator::from_names(&registry, &values, &names)?.with_mode(mode);
    let comparison = execute_comparison(comparator, options.show_progress);
    let report = Report::new(build_report_meta(), comparison.report());

    let rendered = match format {
        OutputFormat::Human => format_human_output(&report),
        OutputFormat::Json => generate_json_report(&report)?,
        OutputFormat::Csv => generate_csv_report(&report),
    };
    write_output(&rendered, output.output.as_deref())?;

    let failures = &report.comparison.failures;
    if !failures.is_empty() {
        return Err(anyhow::anyhow!(
            "{} run(s) failed: {}",
            failures.len(),
            failures.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
        ));
    }
    Ok(())
}

fn write_output(output: &str, path: Option<&Path>) -> anyhow::Result<()> {
    if let Some(path) = path {
        let mut file = std::fs::File::create(path)?;
        file.write_all(output.as_bytes())?;
        println!("Report written to: {}", path.display());
    } else {
        print!("{}", output);
    }
    Ok(())
}

fn init_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        return Err(anyhow::anyhow!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ));
    }
    std::fs::write(path, SortscopeConfig::default_toml())?;
    println!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_compare_args() {
        let cli = Cli::try_parse_from([
            "sortscope",
            "compare",
            "merge_sort",
            "quick_sort",
            "--values",
            "3,1,2",
            "--parallel",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Compare {
                algorithms,
                parallel,
                input,
                output,
                ..
            } => {
                assert_eq!(algorithms, vec!["merge_sort", "quick_sort"]);
                assert!(parallel);
                assert_eq!(input.values.as_deref(), Some("3,1,2"));
                assert_eq!(output.format.as_deref(), Some("json"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_values_conflict_with_file() {
        let result = Cli::try_parse_from([
            "sortscope",
            "run",
            "merge_sort",
            "--values",
            "1",
            "--file",
            "x.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_select_algorithms() {
        let config = CompareConfig::default();
        let all = select_algorithms(Vec::new(), &config, None).unwrap();
        assert_eq!(all.len(), 4);

        let filtered = select_algorithms(Vec::new(), &config, Some("^(merge|quick)")).unwrap();
        assert_eq!(filtered, vec!["merge_sort", "quick_sort"]);

        let configured = CompareConfig {
            algorithms: vec!["selection_sort".to_string()],
            ..CompareConfig::default()
        };
        let names = select_algorithms(Vec::new(), &configured, None).unwrap();
        assert_eq!(names, vec!["selection_sort"]);

        assert!(select_algorithms(Vec::new(), &config, Some("(")).is_err());
    }

    #[test]
    fn test_resolve_input_prefers_values() {
        let args = InputArgs {
            values: Some("4 2 9".to_string()),
            generate: Some(100),
            ..InputArgs::default()
        };
        let values = resolve_input(&args, &InputConfig::default()).unwrap();
        assert_eq!(values, vec![Number::Int(4), Number::Int(2), Number::Int(9)]);
    }

    #[test]
    fn test_resolve_input_generates_from_config() {
        let config = InputConfig {
            size: 12,
            seed: Some(3),
            ..InputConfig::default()
        };
        let a = resolve_input(&InputArgs::default(), &config).unwrap();
        let b = resolve_input(&InputArgs::default(), &config).unwrap();
        assert_eq!(a.len(), 12);
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_format_is_an_error() {
        let args = OutputArgs {
            format: Some("yaml".to_string()),
            output: None,
        };
        let err = resolve_format(&args, &SortscopeConfig::default()).unwrap_err();
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        init_config(&path, false).unwrap();
        assert!(init_config(&path, false).is_err());
        init_config(&path, true).unwrap();

        let written = SortscopeConfig::load(&path).unwrap();
        assert_eq!(written, SortscopeConfig::default());
    }
}
