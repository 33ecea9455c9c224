mod config;
mod extract;
mod metrics;
mod render;
mod script;
mod select;

use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::process::exit;

/// Turn multi-run network benchmark logs into gnuplot data series and graphs:
/// select logs by filename pattern, extract the labeled bandwidth and CPU
/// metrics, write one data file per metric, and emit a gnuplot script that
/// renders them.
#[derive(Parser, Debug)]
#[command(
    name = "bench2gnuplot",
    version,
    about,
    disable_help_flag = true,
    after_help = "Example: bench2gnuplot -p 'diag_network.output*' -g -u mtu"
)]
pub struct Cli {
    /// Print this help
    #[arg(short, long)]
    help: bool,

    /// Shell-glob pattern selecting the benchmark log files
    #[arg(short, long, value_name = "PATTERN")]
    pattern: Option<String>,

    /// Render the gnuplot traces before exiting
    #[arg(short, long)]
    gnuplot: bool,

    /// Basename for the emitted data files (defaults to a name derived from the pattern)
    #[arg(short, long, value_name = "FILE")]
    outputfile: Option<String>,

    /// Title appended to each graph
    #[arg(short, long, value_name = "TITLE")]
    title: Option<String>,

    /// Name of the quantity varied between runs, like mtu or rx/tx
    #[arg(short, long, value_name = "UNIT_NAME")]
    unit: Option<String>,

    /// Directory to scan for logs and write results into
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".")]
    directory: PathBuf,

    /// Config file path
    #[arg(long, value_name = "FILE", default_value = "bench2gnuplot.toml")]
    config: PathBuf,

    /// Extra logging (skipped files, routing decisions)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.help {
        let _ = Cli::command().print_help();
        exit(1);
    }

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();

    let file_config = match config::FileConfig::load(&cli.config) {
        Ok(fc) => fc,
        Err(e) => {
            eprintln!("{e}");
            exit(2);
        }
    };

    let config = config::Config::resolve(
        config::Overrides {
            directory: cli.directory,
            pattern: cli.pattern,
            title: cli.title,
            unit: cli.unit,
            outputfile: cli.outputfile,
            render: cli.gnuplot,
        },
        file_config,
    );
    tracing::debug!(?config, "resolved configuration");

    let files = match select::find_files(&config.directory, &config.pattern) {
        Ok(files) => files,
        Err(e @ select::SelectError::Pattern { .. }) => {
            eprintln!("{e}");
            exit(2);
        }
        Err(e) => {
            eprintln!("{e}");
            exit(1);
        }
    };
    if files.is_empty() {
        eprintln!("No log file found with pattern {}!", config.pattern);
        exit(1);
    }
    for name in &files {
        println!("Selected {name}");
    }

    if let Err(e) = extract::run(&files, &config) {
        eprintln!("{e}");
        exit(1);
    }

    let script_path = match script::write(&config) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("{e}");
            exit(1);
        }
    };

    if config.render {
        if let Err(e) = render::run(&config.gnuplot.command, &script_path) {
            eprintln!("{e}");
            exit(1);
        }
    }

    render::clean_temp_files(&config.directory);
}
