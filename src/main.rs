//! console-preview - render one console component from a JSON fixture
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};
use serde_json::Value;

use scheduler_console::bindings::config::{init_config, load_settings, template_root};
use scheduler_console::bindings::FileTemplateResolver;
use scheduler_console::core::{logging, Scope};
use scheduler_console::render_or_placeholder;

/// Render a scheduler console component to stdout as JSON
#[derive(Parser, Debug)]
#[command(name = "console-preview")]
#[command(about = "Render a scheduler console component from a JSON fixture", long_about = None)]
struct Args {
    /// Component name, camelCase or dashed (e.g. instance-summary)
    #[arg(value_name = "COMPONENT")]
    component: String,

    /// JSON object with the component's inputs or parent context
    #[arg(value_name = "FIXTURE")]
    fixture: PathBuf,

    /// Directory holding console.toml (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Write a default console.toml into the config directory if none exists
    #[arg(long)]
    init: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    logging::init().wrap_err("failed to initialize logging")?;

    let config_dir = args
        .config_dir
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    if args.init {
        init_config(&config_dir)
            .wrap_err_with(|| format!("initializing {}", config_dir.display()))?;
    }
    let settings = load_settings(&config_dir);
    let resolver = if settings.templates.cache {
        FileTemplateResolver::new(template_root(&config_dir, &settings))
    } else {
        FileTemplateResolver::uncached(template_root(&config_dir, &settings))
    };

    let raw = std::fs::read_to_string(&args.fixture)
        .wrap_err_with(|| format!("reading fixture {}", args.fixture.display()))?;
    let fixture = match serde_json::from_str::<Value>(&raw).wrap_err("parsing fixture")? {
        Value::Object(map) => Scope::from(map),
        other => return Err(eyre!("fixture must be a JSON object, got {}", other)),
    };

    let output = render_or_placeholder(&args.component, &fixture, &settings, &resolver)
        .wrap_err_with(|| format!("rendering {}", args.component))?;
    println!("{}", output.to_json_line()?);

    Ok(())
}
