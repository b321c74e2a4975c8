use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};

use publicon::config::Config;
use publicon::{normalize_icon_name, IconKind, IconRequest, IconSize, IconView};

#[derive(Parser, Debug)]
#[command(name = "publicon", about = "Resolve browser and OS names to icons")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a browser name
    Browser(IconArgs),
    /// Resolve an operating-system name
    Os(IconArgs),
    /// Print the normalized form of a name
    Normalize { name: String },
}

#[derive(Args, Debug)]
struct IconArgs {
    /// Free-form name, e.g. "Mobile Safari" or "Mac OS X"
    name: String,

    /// sm, md, lg or a pixel count (default from config)
    #[arg(short, long)]
    size: Option<IconSize>,

    /// Extra CSS class (default from config)
    #[arg(short, long)]
    class: Option<String>,

    /// Markup to print instead of the letter placeholder
    #[arg(long)]
    fallback: Option<String>,

    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Html,
    Path,
    Json,
}

fn build_request(kind: IconKind, args: &IconArgs, config: &Config) -> IconRequest {
    let mut request = IconRequest::new(kind, args.name.as_str())
        .size(args.size.unwrap_or(config.default_size))
        .asset_root(config.asset_root.as_str());
    request.class = args.class.clone().or_else(|| config.class.clone());
    request.fallback = args.fallback.clone();
    request
}

/// Print the resolved icon. Returns false when `--format path` has nothing
/// to print.
fn print_icon(view: &IconView, format: Format) -> Result<bool> {
    match format {
        Format::Html => println!("{}", view.to_html()),
        Format::Json => println!("{}", serde_json::to_string_pretty(view)?),
        Format::Path => match view.src() {
            Some(src) => println!("{}", src),
            None => return Ok(false),
        },
    }
    Ok(true)
}

fn run(cli: Cli) -> Result<bool> {
    let (kind, args) = match &cli.command {
        Command::Browser(args) => (IconKind::Browser, args),
        Command::Os(args) => (IconKind::Os, args),
        Command::Normalize { name } => {
            println!("{}", normalize_icon_name(name));
            return Ok(true);
        }
    };

    let config = Config::load();
    let view = build_request(kind, args, &config).resolve();
    log::debug!("{} {:?} -> {:?}", kind, args.name, view);
    print_icon(&view, args.format)
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
