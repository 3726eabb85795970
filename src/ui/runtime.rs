use crate::clipboard::ClipboardHandler;
use crate::config::Config;
use crate::launcher::SystemLauncher;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Instant;

pub fn run(config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal(config.ui.mouse)?;
    let tick_rate = config.ui.tick_rate();
    let mut app = App::new(
        config,
        Box::new(ClipboardHandler::new()),
        Box::new(SystemLauncher),
    );
    let events = EventHandler::new(tick_rate);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!(
        catalogue = app.catalogue_url().unwrap_or("<unset>"),
        page_url = app.page_url(),
        "storefront started"
    );

    loop {
        terminal.draw(|frame| draw(frame, &app, Instant::now()))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => app.on_key(key, Instant::now()),
            Ok(AppEvent::Mouse(mouse)) => app.on_mouse(mouse, Instant::now()),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => app.on_tick(Instant::now()),
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(events);
    drop(guard);
    tracing::info!("storefront stopped");
    Ok(())
}
