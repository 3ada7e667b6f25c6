//! Strip animation controller
//!
//! Tracks where the carousel strip is drawn. The position has two parts: a
//! resting translation in percent of one item width (what settle commands
//! target) and a transient drag offset in columns (what the pointer adds while
//! a drag is in progress).

use std::time::{Duration, Instant};

use carousel_core::{SettleAnimator, SettleCommand, SettleConfig};
use tracing::trace;

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};

#[derive(Debug, Clone)]
struct ActiveSettle {
    start: Instant,
    from_percent: f64,
    to_percent: f64,
    duration: Duration,
    easing: EasingType,
}

/// Animation handle owned by one carousel
#[derive(Debug, Clone)]
pub struct StripAnimator {
    config: SettleConfig,
    /// Width of one item in columns
    item_width: f64,
    /// Resting translation, percent of one item width
    translate_percent: f64,
    /// Transient drag offset in columns
    offset: f64,
    animation: Option<ActiveSettle>,
    /// Clock reading used when a settle starts
    now: Instant,
}

impl StripAnimator {
    pub fn new(config: SettleConfig, item_width: f64) -> Self {
        Self {
            config,
            item_width,
            translate_percent: 0.0,
            offset: 0.0,
            animation: None,
            now: Instant::now(),
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Resize items; the percent-based translation keeps the same item aligned
    pub fn set_item_width(&mut self, item_width: f64) {
        self.item_width = item_width;
    }

    /// Translation the current animation ends at
    pub fn target_percent(&self) -> f64 {
        self.animation
            .as_ref()
            .map(|a| a.to_percent)
            .unwrap_or(self.translate_percent)
    }

    /// Current position as a percentage of one item width, offset included
    pub fn visual_percent(&self) -> f64 {
        if self.item_width > 0.0 {
            self.translate_percent + self.offset / self.item_width * 100.0
        } else {
            self.translate_percent
        }
    }

    /// Current strip translation in columns
    pub fn strip_x(&self) -> f64 {
        self.translate_percent / 100.0 * self.item_width + self.offset
    }

    /// Stop any settle where it is and fold the offset into the translation,
    /// so a new drag measures from what is on screen.
    pub fn begin_drag(&mut self, now: Instant) {
        self.update(now);
        self.translate_percent = self.visual_percent();
        self.offset = 0.0;
        self.animation = None;
    }

    /// Pointer displacement since the drag began, in columns
    pub fn set_drag_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    /// Advance the animation to `now` and return the strip translation in columns
    pub fn update(&mut self, now: Instant) -> f64 {
        self.now = now;

        if let Some(anim) = &self.animation {
            if is_complete(anim.start, anim.duration, now) {
                self.translate_percent = anim.to_percent;
                self.animation = None;
            } else {
                let t = anim.easing.apply(progress(anim.start, anim.duration, now));
                self.translate_percent = lerp(anim.from_percent, anim.to_percent, t);
            }
        }

        self.strip_x()
    }

    /// Jump to a translation with no animation
    pub fn jump_to(&mut self, translate_percent: f64) {
        self.translate_percent = translate_percent;
        self.offset = 0.0;
        self.animation = None;
    }
}

impl SettleAnimator for StripAnimator {
    fn animate_to(&mut self, command: SettleCommand) {
        let from_percent = self.visual_percent();
        self.offset = command.offset_x;

        let smooth = self.config.enabled && self.config.duration_ms > 0;
        if !smooth || from_percent == command.translate_percent {
            self.jump_to(command.translate_percent);
            return;
        }

        trace!(from_percent, to_percent = command.translate_percent, "settle animation started");
        self.translate_percent = from_percent;
        self.animation = Some(ActiveSettle {
            start: self.now,
            from_percent,
            to_percent: command.translate_percent,
            duration: Duration::from_millis(self.config.duration_ms),
            easing: self.config.easing,
        });
    }
}
