use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::{error, info};

use carousel_core::{items, AppConfig, Item};
use carousel_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    widgets::{CarouselWidget, IndicatorWidget, StatusBarWidget},
    Theme,
};

pub async fn run(config: Arc<AppConfig>, items_path: Option<&Path>, count: usize) -> Result<()> {
    let items: Vec<Item> = match items_path {
        Some(path) => items::load_items(path)?,
        None => items::demo_items(count),
    };

    // Fails on a bad threshold before the terminal is touched
    let mut app = App::new(config.clone(), items, Theme::default())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Another Carousel"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = EventHandler::with_animation_fps(
        config.ui.tick_rate_ms,
        config.ui.settle.animation_fps,
    );

    info!("carousel started");
    let result = event_loop(&mut terminal, &mut app, &event_handler);
    if let Err(e) = &result {
        error!("event loop failed: {e:#}");
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    // Checked at the end of each iteration to pick the next poll interval
    let mut needs_fast_update = false;

    loop {
        app.update_animation(Instant::now());

        terminal.draw(|frame| {
            let size = frame.area();

            // Carousel, indicator dots, status bar
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(3),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(size);

            app.set_carousel_area(layout[0]);

            CarouselWidget::render(frame, layout[0], app);
            IndicatorWidget::render(frame, layout[1], app);
            StatusBarWidget::render(frame, layout[2], app);
        })?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };

        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => app.handle_action(handle_key_event(key)),
                AppEvent::Mouse(mouse) => {
                    if let Some(pointer) = handle_mouse_event(mouse) {
                        app.handle_pointer(pointer, Instant::now());
                    }
                }
                // The next draw re-measures the carousel area
                AppEvent::Resize(_, _) => {}
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
