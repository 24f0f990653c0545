mod expand;
mod paths;

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use domtree::{DomTree, Element, JsonRenderer, TreeConfig};
use log::{debug, info};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use thiserror::Error;

/// Print a JSON document as an expandable object tree.
#[derive(Debug, Parser)]
#[command(name = "domtree", version)]
struct Args {
    /// JSON file to inspect, or `-` for stdin.
    input: PathBuf,

    /// Expand the rows along a dotted member path (repeatable), e.g. `a.b.0`.
    #[arg(short, long = "expand", value_name = "PATH")]
    expand: Vec<String>,

    /// Expand every row above this depth.
    #[arg(short, long)]
    depth: Option<u16>,

    /// Do not expand the first row automatically.
    #[arg(long)]
    no_auto_expand: bool,

    /// Crop width for value previews.
    #[arg(long, default_value_t = domtree::rep::DEFAULT_CROP)]
    crop: usize,

    /// Tree config file. Defaults to `config.json` in the config directory.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a debug log to the cache directory instead of warnings to stderr.
    #[arg(long)]
    log: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("cannot determine the cache directory for the log file")]
    NoLogDir,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    init_logging(args.log)?;

    let config = load_config(args.config.as_deref())?;
    debug!("tree config: {:?}", config);
    let document = read_document(&args.input)?;

    let mut tree = DomTree::new(document)
        .with_renderer(JsonRenderer::with_crop(args.crop))
        .with_config(config);
    tree.render(Element::new("table"), None, args.no_auto_expand);
    log_events(&mut tree);

    if let Some(depth) = args.depth {
        tree.expand_all(depth);
        log_events(&mut tree);
    }
    for path in &args.expand {
        expand::expand_path(&mut tree, path);
        log_events(&mut tree);
    }

    info!("{} rows visible", tree.row_count());
    println!("{}", tree.outline());
    Ok(())
}

fn log_events(tree: &mut DomTree<serde_json::Value>) {
    for event in tree.drain_events() {
        debug!("{}: {:?}", tree.id(), event);
    }
}

fn init_logging(to_file: bool) -> Result<(), CliError> {
    if to_file {
        let path = paths::log_file().ok_or(CliError::NoLogDir)?;
        WriteLogger::init(LevelFilter::Debug, Config::default(), create_log_file(&path)?)?;
    } else {
        TermLogger::init(
            LevelFilter::Warn,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )?;
    }
    Ok(())
}

fn create_log_file(path: &Path) -> Result<File, CliError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| CliError::Write {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    File::create(path).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the tree config from `explicit`, or from the default location if it
/// exists. A missing default file yields the default config.
fn load_config(explicit: Option<&Path>) -> Result<TreeConfig, CliError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match paths::config_file() {
            Some(path) if path.exists() => path,
            _ => return Ok(TreeConfig::default()),
        },
    };

    let text = fs::read_to_string(&path).map_err(|source| CliError::Read {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Json { path, source })
}

fn read_document(input: &Path) -> Result<serde_json::Value, CliError> {
    let text = if input == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| CliError::Read {
                path: input.to_path_buf(),
                source,
            })?;
        text
    } else {
        fs::read_to_string(input).map_err(|source| CliError::Read {
            path: input.to_path_buf(),
            source,
        })?
    };

    serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: input.to_path_buf(),
        source,
    })
}
