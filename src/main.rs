//! CLI entry point for dirtodo

use std::path::PathBuf;
use std::process;

use clap::Parser;
use dirtodo::tree::DEFAULT_MAX_DEPTH;
use dirtodo::{RenderConfig, TreeRenderer, resolve_root, render_json, save_markdown};

#[derive(Parser, Debug)]
#[command(name = "dirtodo")]
#[command(about = "Generate markdown todo lists from folder structures")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output file path (default: print to stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// List directories only
    #[arg(long = "no-files")]
    no_files: bool,

    /// Additional directory names to exclude
    #[arg(long = "exclude-dirs", num_args = 0.., value_name = "NAME")]
    exclude_dirs: Vec<String>,

    /// Additional file names or glob patterns to exclude (e.g. "*.log")
    #[arg(long = "exclude-files", num_args = 0.., value_name = "PATTERN")]
    exclude_files: Vec<String>,

    /// Maximum directory depth to traverse
    #[arg(
        long = "max-depth",
        default_value_t = DEFAULT_MAX_DEPTH as u64,
        value_parser = clap::value_parser!(u64).range(1..),
        value_name = "N"
    )]
    max_depth: u64,

    /// Traverse the whole tree, ignoring --max-depth
    #[arg(long = "unlimited", conflicts_with = "max_depth")]
    unlimited: bool,

    /// Only show directories carrying one of these tags (e.g. --tags frontend backend)
    #[arg(long = "tags", num_args = 0.., value_name = "TAG")]
    tags: Vec<String>,

    /// Output the checklist lines as JSON instead of markdown
    #[arg(long = "json")]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Exit with status 1 and a message on Ctrl-C instead of dying by signal.
fn install_interrupt_handler() {
    let result = ctrlc::set_handler(|| {
        eprintln!("dirtodo: operation cancelled by user");
        process::exit(1);
    });
    if let Err(e) = result {
        log::warn!("cannot install interrupt handler: {}", e);
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    install_interrupt_handler();

    let mut config = RenderConfig::default()
        .with_max_depth(args.max_depth as usize)
        .with_include_files(!args.no_files)
        .exclude_dirs(args.exclude_dirs.iter().cloned())
        .exclude_files(args.exclude_files.iter().cloned())
        .with_tags(&args.tags);
    if args.unlimited {
        config = config.unlimited_depth();
    }

    log::debug!("{:?}", config);

    let renderer = TreeRenderer::new(config);

    let content = if args.json {
        let root = resolve_root(&args.path).unwrap_or_else(|e| fail(&e));
        let lines = renderer.collect_lines(&root).unwrap_or_else(|e| fail(&e));
        render_json(&root, renderer.config(), &lines).unwrap_or_else(|e| fail(&e))
    } else {
        renderer.render(&args.path).unwrap_or_else(|e| fail(&e))
    };

    match args.output {
        Some(ref dest) => {
            if let Err(e) = save_markdown(&content, dest) {
                eprintln!("dirtodo: cannot write '{}': {}", dest.display(), e);
                process::exit(1);
            }
            println!("Todo list saved to: {}", dest.display());
        }
        None => println!("{}", content),
    }
}

fn fail(err: &dyn std::fmt::Display) -> ! {
    eprintln!("dirtodo: {}", err);
    process::exit(1);
}
