use std::sync::Arc;
use std::time::Instant;

use carousel_core::{AppConfig, Carousel, Item, StripLayout};
use ratatui::layout::{Position, Rect};
use tracing::{debug, info};

use crate::gesture::DragTracker;
use crate::input::{Action, PointerAction};
use crate::settle::StripAnimator;
use crate::theme::Theme;

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Cards shown in the carousel
    pub items: Vec<Item>,
    /// Gesture engine; owns the strip animator
    pub carousel: Carousel<StripAnimator>,
    /// Area the strip is drawn in, as of the last frame
    pub carousel_area: Rect,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    pub theme: Theme,
    /// Pointer drag in progress
    drag: Option<DragTracker>,
}

impl App {
    pub fn new(
        config: Arc<AppConfig>,
        items: Vec<Item>,
        theme: Theme,
    ) -> carousel_core::Result<Self> {
        let animator = StripAnimator::new(config.ui.settle.clone(), 0.0);
        let carousel = Carousel::new(items.len(), config.carousel, animator)?;
        info!(items = items.len(), "carousel ready");

        Ok(Self {
            config,
            items,
            carousel,
            carousel_area: Rect::default(),
            should_quit: false,
            status_message: None,
            theme,
            drag: None,
        })
    }

    /// Record where the strip is drawn; items are one area wide
    pub fn set_carousel_area(&mut self, area: Rect) {
        if area != self.carousel_area {
            self.carousel_area = area;
            self.carousel
                .animator_mut()
                .set_item_width(area.width as f64);
        }
    }

    /// Live geometry of the strip, measured in terminal columns
    pub fn layout(&self) -> StripLayout {
        let mut layout = StripLayout::new(
            self.carousel_area.x as f64,
            self.carousel_area.width as f64,
            self.items.len(),
        );
        layout.strip_x = self.carousel.animator().strip_x();
        layout
    }

    /// Strip translation in columns
    pub fn strip_x(&self) -> f64 {
        self.carousel.animator().strip_x()
    }

    pub fn is_dragging(&self) -> bool {
        self.carousel.is_dragging()
    }

    /// Whether the loop should run at animation frame rate
    pub fn needs_fast_update(&self) -> bool {
        self.drag.is_some() || self.carousel.animator().is_animating()
    }

    pub fn update_animation(&mut self, now: Instant) {
        self.carousel.animator_mut().update(now);
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
    }

    pub fn handle_pointer(&mut self, action: PointerAction, now: Instant) {
        match action {
            PointerAction::Press { column, row } => {
                if !self.carousel_area.contains(Position::new(column, row)) {
                    return;
                }
                self.drag = Some(DragTracker::begin(
                    column,
                    now,
                    self.config.ui.column_width_px,
                ));
                self.carousel.animator_mut().begin_drag(now);
                self.carousel.on_drag_start();
                self.status_message = None;
            }
            PointerAction::Drag { column, .. } => {
                if let Some(drag) = self.drag.as_mut() {
                    let offset = drag.move_to(column, now);
                    self.carousel.animator_mut().set_drag_offset(offset);
                }
                // Motion without a press of ours reaches an idle engine and is dropped
                let layout = self.layout();
                self.carousel.on_drag_update(&layout);
            }
            PointerAction::Release { column, .. } => {
                let Some(drag) = self.drag.take() else {
                    return;
                };
                let velocity = drag.release(column, now);
                // Advance the animator clock so the settle starts at `now`
                self.carousel.animator_mut().update(now);
                let command = self.carousel.on_drag_end(velocity);
                debug!(velocity = velocity.x, index = command.index, "pointer released");
                self.status_message = Some(format!(
                    "released at {:.0} px/s, settling on {}",
                    velocity.x,
                    command.index + 1
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel_core::items::demo_items;
    use carousel_core::EasingType;
    use std::time::Duration;

    fn app(count: usize) -> App {
        let mut config = AppConfig::default();
        config.ui.settle.easing = EasingType::Linear;
        let mut app = App::new(Arc::new(config), demo_items(count), Theme::default()).unwrap();
        app.set_carousel_area(Rect::new(0, 0, 40, 10));
        app
    }

    #[test]
    fn test_slow_drag_snaps_to_nearest() {
        let mut app = app(4);
        let start = Instant::now();
        app.handle_pointer(PointerAction::Press { column: 30, row: 2 }, start);
        assert!(app.is_dragging());

        // Walk left one column every 30ms until the second card is centered
        let mut t = start;
        for column in (5..30).rev() {
            t += Duration::from_millis(30);
            app.handle_pointer(PointerAction::Drag { column, row: 2 }, t);
        }
        assert_eq!(app.carousel.committed_index(), 1);

        t += Duration::from_millis(500);
        app.handle_pointer(PointerAction::Release { column: 5, row: 2 }, t);
        assert!(!app.is_dragging());
        assert_eq!(app.carousel.committed_index(), 1);

        app.update_animation(t + Duration::from_secs(1));
        assert_eq!(app.strip_x(), -40.0);
        assert!(!app.needs_fast_update());
    }

    #[test]
    fn test_fast_flick_advances_one() {
        let mut app = app(4);
        let start = Instant::now();
        app.handle_pointer(PointerAction::Press { column: 30, row: 2 }, start);
        app.handle_pointer(PointerAction::Drag { column: 26, row: 2 }, start + Duration::from_millis(16));
        app.handle_pointer(PointerAction::Drag { column: 22, row: 2 }, start + Duration::from_millis(32));
        app.handle_pointer(PointerAction::Release { column: 20, row: 2 }, start + Duration::from_millis(40));

        assert_eq!(app.carousel.committed_index(), 1);
        assert!(app.carousel.animator().is_animating());
        assert_eq!(app.carousel.animator().target_percent(), -100.0);
    }

    #[test]
    fn test_press_outside_area_does_not_drag() {
        let mut app = app(3);
        let now = Instant::now();
        app.handle_pointer(PointerAction::Press { column: 10, row: 12 }, now);
        assert!(!app.is_dragging());
        app.handle_pointer(PointerAction::Drag { column: 0, row: 12 }, now);
        app.handle_pointer(PointerAction::Release { column: 0, row: 12 }, now);
        assert_eq!(app.carousel.committed_index(), 0);
        assert!(app.carousel.animator().target_percent() == 0.0);
    }

    #[test]
    fn test_quit_action() {
        let mut app = app(1);
        app.handle_action(Action::None);
        assert!(!app.should_quit);
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }
}
