//! Barforge command-line entry point.
//!
//! Dispatches `barforge <category> <command> [args...]` onto the CLI
//! service. The store starts from an empty document; commands that operate
//! on the on-disk configuration load it themselves through the gateway.

use std::{env, error::Error, process, sync::Arc};

use tracing::debug;

use barforge::{
    cli::{CliContext, CliService, formatting::format_error},
    editor::EditorStore,
    gateway::{FsGateway, Gateway, WaybarPaths},
    settings::Settings,
    tracing_config,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_config::init_cli_mode()?;

    let args: Vec<String> = env::args().collect();

    let settings = Settings::load().unwrap_or_else(|error| {
        eprintln!("{}", format_error(&format!("ignoring settings: {error}")));
        Settings::default()
    });

    let gateway: Arc<dyn Gateway> = Arc::new(FsGateway::new());
    let paths = resolve_paths(&settings, gateway.as_ref()).await;
    debug!(config = %paths.config_file.display(), "resolved waybar paths");

    let store = EditorStore::with_options(Arc::clone(&gateway), settings.store_options());
    let service = CliService::new(CliContext::new(store, gateway, paths));

    let category = args.get(1).map(|s| s.as_str()).unwrap_or("help");
    let command = args.get(2).map(|s| s.as_str()).unwrap_or("");
    let command_args = args.get(3..).unwrap_or(&[]);

    match service.execute_command(category, command, command_args).await {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(error) => {
            eprintln!("{}", format_error(&error.to_string()));
            process::exit(1);
        }
    }
}

/// Resolves the Waybar file locations: explicit settings overrides win,
/// then whatever the gateway detects, then the plain defaults.
async fn resolve_paths(settings: &Settings, gateway: &dyn Gateway) -> WaybarPaths {
    if settings.waybar.config_dir.is_some()
        || settings.waybar.config_file.is_some()
        || settings.waybar.style_file.is_some()
    {
        if let Ok(paths) = settings.waybar_paths() {
            return paths;
        }
    }

    if let Ok(paths) = gateway.detect_paths().await {
        return paths;
    }

    WaybarPaths::defaults().unwrap_or_else(|_| WaybarPaths {
        config_dir: ".".into(),
        config_file: "config.jsonc".into(),
        style_file: "style.css".into(),
    })
}
