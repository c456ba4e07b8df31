use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::session::PageRequest;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc;
use std::time::Duration;
use tokio::runtime::Handle;

pub struct RunOptions {
    /// Simulated latency before a requested page is appended.
    pub load_delay: Duration,
    /// Runtime the page-load timers are spawned on.
    pub handle: Handle,
}

pub fn run(mut app: App, options: RunOptions) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if let InputAction::LoadPage(request) = handle_key(&mut app, key) {
                    schedule_page_load(&options, events.sender(), request);
                }
            }
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::PageLoaded(request)) => app.on_page_loaded(request),
            Ok(AppEvent::Tick) => {}
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

fn schedule_page_load(options: &RunOptions, tx: mpsc::Sender<AppEvent>, request: PageRequest) {
    let delay = options.load_delay;
    tracing::debug!(page = request.page, "Scheduling page load");
    options.handle.spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = tx.send(AppEvent::PageLoaded(request));
    });
}
