use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Result;
use clap::Parser;
use icebreaker_core::{Config, Deck};

mod app;
mod client;
mod handler;
mod tui;
mod ui;

use app::App;
use client::QuestionClient;
use tui::EventHandler;

#[derive(Parser)]
#[command(name = "icebreaker")]
#[command(about = "Browse, like, and regenerate conversation-starter questions")]
struct Cli {
    /// Base URL of the question service
    #[arg(short, long, env = "ICEBREAKER_SERVER")]
    server: Option<String>,

    /// Keep the built-in question order instead of shuffling
    #[arg(long)]
    no_shuffle: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config
    let config = Config::load().unwrap_or_else(|_| Config::new());
    init_logging();

    let server = cli
        .server
        .as_deref()
        .unwrap_or_else(|| config.server_url_or_default())
        .to_string();
    let shuffle = !cli.no_shuffle && config.shuffle_or_default();
    tracing::info!(%server, shuffle, "starting icebreaker");

    let mut events = EventHandler::new(tui::TICK_RATE);
    let mut app = App::new(Deck::seeded(shuffle), QuestionClient::new(&server))
        .with_notify(events.sender());

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app, &mut events).await;
    tui::restore()?;

    result
}

async fn run(terminal: &mut tui::Tui, app: &mut App, events: &mut EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        match events.next().await {
            Some(event) => handler::handle_event(app, event).await?,
            None => break,
        }
    }

    Ok(())
}

/// The terminal owns stderr, so logs go to a file in the config directory.
fn init_logging() {
    let Ok(dir) = Config::config_dir() else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("icebreaker.log"))
    else {
        return;
    };

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "icebreaker_tui=info,icebreaker_core=info".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
}
