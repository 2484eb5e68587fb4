use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod app;
mod commands;
mod config;
mod models;
mod services;
mod store;
mod utils;
mod views;

use app::{Dashboard, UiEvent};
use commands::{handle_line, Reply, TerminalDashboard};
use config::Config;
use services::system_theme_service;
use store::{AddressBar, KeyValueStore, PreferenceFile};
use views::TerminalSurface;

fn render<P: KeyValueStore>(dash: &TerminalDashboard<P>) {
    println!("{}", views::render_page(dash, &dash.surface().palette()));
}

/// Resolves at the debounce deadline, or never when nothing is pending
async fn search_due(deadline: Option<Instant>) {
    match deadline {
        Some(at) => sleep_until(at).await,
        None => std::future::pending().await,
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let directive = match "finora=debug".parse::<tracing_subscriber::filter::Directive>() {
        Ok(directive) => directive,
        Err(e) => {
            eprintln!("❌ Invalid log directive: {}", e);
            return;
        }
    };
    // stdout carries the page, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("✨ Starting Finora dashboard...");
    info!("  Finora · Finance Meets Aurora");
    info!("");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return;
        }
    };
    debug!("Loaded configuration: {:?}", config);

    let address = match AddressBar::parse(&config.start_address) {
        Ok(address) => address,
        Err(e) => {
            error!("Invalid start address '{}': {}", config.start_address, e);
            return;
        }
    };
    let prefs = PreferenceFile::new(&config.prefs_path);
    let (signal, mut system) = system_theme_service::subscribe(config.system_theme);

    let mut dash = Dashboard::mount(
        &config.generator,
        config.search_debounce,
        address,
        prefs,
        TerminalSurface::new(config.color),
        system.current(),
    );
    render(&dash);
    println!("Type `help` for the command list.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let deadline = dash.search_deadline();
        tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) => match handle_line(&mut dash, &signal, &line, Instant::now()) {
                    Reply::Render => render(&dash),
                    Reply::Text(text) => println!("{}", text),
                    Reply::Nothing => {}
                    Reply::Quit => break,
                },
                Ok(None) => break,
                Err(e) => {
                    error!("Failed to read input: {}", e);
                    break;
                }
            },
            _ = search_due(deadline) => {
                if dash.flush_search(Instant::now()) {
                    debug!("Address is now {}", dash.address().href());
                }
            }
            Some(mode) = system.changed() => {
                if dash.dispatch(UiEvent::SystemThemeChanged(mode), Instant::now()) {
                    render(&dash);
                }
            }
        }
    }

    let (address, prefs, _) = dash.teardown();
    drop(system);
    debug!("Unregistered from OS theme changes");
    info!(
        "👋 Leaving Finora at {} after {} address update(s); preferences in {}",
        address.href(),
        address.replacements(),
        prefs.path().display()
    );
}
