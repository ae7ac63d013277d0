use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crate::app::App;
use crate::tui::AppEvent;

pub async fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Redraw => {}
        AppEvent::ReplaceDone => app.complete_replace().await,
        AppEvent::Tick => {
            app.tick_animation();
            // Covers a replacement whose wake-up was missed.
            app.poll_replace().await;
        }
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keys that work in any state
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,

        // Skip / Replace / Like & Next are ignored while a replacement is in flight
        KeyCode::Char('s') | KeyCode::Right => app.skip(),
        KeyCode::Char('r') => app.start_replace(),
        KeyCode::Char('l') | KeyCode::Enter => app.like(),

        _ => {}
    }
}
