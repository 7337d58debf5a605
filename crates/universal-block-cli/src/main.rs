use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use universal_block_config::Config;
use universal_block_engine::{
    Block, BuildOptions, MarkupOptions, build_forest_with, parse_markup_with, snapshot, to_html,
    to_markup_with,
};

#[derive(Parser)]
#[command(
    name = "universal-block",
    version,
    about = "Convert between HTML, block markup and JSON block trees"
)]
struct Cli {
    /// Input file; reads stdin when absent or `-`
    input: Option<PathBuf>,

    /// Format of the input
    #[arg(long, value_enum, default_value_t = InputFormat::Html)]
    from: InputFormat,

    /// Format to write to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Markup)]
    to: OutputFormat,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Block kind for markup input and output (overrides config)
    #[arg(long)]
    block_name: Option<String>,

    /// Extra tag to treat as self-closing. Repeatable.
    #[arg(long = "self-closing", value_name = "TAG")]
    self_closing: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    Html,
    Markup,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Markup,
    Html,
    Json,
    Outline,
}

/// Effective settings after merging config file and flags.
#[derive(Debug, Default)]
struct Settings {
    build: BuildOptions,
    markup: MarkupOptions,
}

impl Settings {
    fn resolve(config: Config, cli: &Cli) -> Self {
        let block_name = cli.block_name.clone().unwrap_or(config.block_name);
        let build = BuildOptions::new()
            .with_self_closing_tags(&config.self_closing_tags)
            .with_self_closing_tags(&cli.self_closing);

        Self {
            build,
            markup: MarkupOptions::new(block_name),
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let (path, required) = match explicit {
        Some(path) => (Config::expand_path(path), true),
        None => (Config::config_path(), false),
    };
    log::debug!("Config path: {}", path.display());

    match Config::load_from_path(&path)? {
        Some(config) => Ok(config),
        None if required => anyhow::bail!("config file not found: {}", path.display()),
        None => Ok(Config::default()),
    }
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn convert(
    source: &str,
    from: InputFormat,
    to: OutputFormat,
    settings: &Settings,
) -> Result<String> {
    let forest: Vec<Block> = match from {
        InputFormat::Html => build_forest_with(source, &settings.build),
        InputFormat::Markup => parse_markup_with(source, &settings.markup)?,
        InputFormat::Json => serde_json::from_str(source).context("invalid block JSON")?,
    };
    log::debug!("Converted {} top-level blocks", forest.len());

    let output = match to {
        OutputFormat::Markup => to_markup_with(&forest, &settings.markup),
        OutputFormat::Html => to_html(&forest),
        OutputFormat::Json => serde_json::to_string_pretty(&forest)?,
        OutputFormat::Outline => snapshot::outline(&forest),
    };
    Ok(output)
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let settings = Settings::resolve(config, cli);
    let source = read_input(cli.input.as_deref())?;

    let output = convert(&source, cli.from, cli.to, &settings)?;
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
