//! Headless gesture replay.
//!
//! A [`Script`] is a recorded input stream (drag start, pointer offsets, release
//! velocity, programmatic steps). Replaying it drives a real [`Carousel`] over a
//! [`StripLayout`] and reports the engine state after every step.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::carousel::{Carousel, GestureState, SettleCommand, Velocity};
use crate::config::CarouselConfig;
use crate::geometry::StripLayout;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub item_count: usize,
    /// Width of the container (and of every item)
    #[serde(default = "default_container_width")]
    pub container_width: f64,
    /// Overrides the configured threshold when set
    #[serde(default)]
    pub velocity_threshold: Option<f64>,
    pub steps: Vec<Step>,
}

fn default_container_width() -> f64 {
    100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    DragStart,
    /// Pointer displacement since the drag started
    DragUpdate { offset: f64 },
    DragEnd { velocity: f64 },
    Next,
    Previous,
    /// Programmatic settle to the current index
    Settle,
    /// Item stops reporting a position
    Unmount { index: usize },
    Mount { index: usize },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::DragStart => write!(f, "drag_start"),
            Step::DragUpdate { offset } => write!(f, "drag_update({offset})"),
            Step::DragEnd { velocity } => write!(f, "drag_end({velocity})"),
            Step::Next => write!(f, "next"),
            Step::Previous => write!(f, "previous"),
            Step::Settle => write!(f, "settle"),
            Step::Unmount { index } => write!(f, "unmount({index})"),
            Step::Mount { index } => write!(f, "mount({index})"),
        }
    }
}

/// Engine state after one step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub step: Step,
    pub index: usize,
    pub state: GestureState,
    pub strip_x: f64,
    pub settle: Option<SettleCommand>,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            GestureState::Idle => "idle",
            GestureState::Dragging => "dragging",
        };
        write!(
            f,
            "{:<20} index={} state={:<8} strip_x={:.1}",
            self.step.to_string(),
            self.index,
            state,
            self.strip_x
        )?;
        if let Some(settle) = self.settle {
            write!(f, " settle={}%", settle.translate_percent)?;
        }
        Ok(())
    }
}

/// Load a script from `.json` or `.toml`
pub fn load_script(path: &Path) -> crate::Result<Script> {
    let content = std::fs::read_to_string(path)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(serde_json::from_str(&content)?),
        Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(toml::from_str(&content)?),
        _ => Err(crate::Error::Script(format!(
            "unsupported script file '{}', expected .json or .toml",
            path.display()
        ))),
    }
}

/// Run `script` against a fresh carousel
pub fn replay(script: &Script, config: &CarouselConfig) -> crate::Result<Vec<Frame>> {
    if !script.container_width.is_finite() || script.container_width <= 0.0 {
        return Err(crate::Error::Script(format!(
            "container_width must be positive, got {}",
            script.container_width
        )));
    }

    let mut config = *config;
    if let Some(threshold) = script.velocity_threshold {
        config.velocity_threshold = threshold;
    }

    let mut carousel = Carousel::new(script.item_count, config, Vec::new())?;
    let mut layout = StripLayout::new(0.0, script.container_width, script.item_count);
    // Strip position when no gesture is applied
    let mut rest_x = 0.0;
    let mut frames = Vec::with_capacity(script.steps.len());

    for &step in &script.steps {
        let mut settle = None;

        match step {
            Step::DragStart => carousel.on_drag_start(),
            Step::DragUpdate { offset } => {
                if carousel.is_dragging() {
                    layout.strip_x = rest_x + offset;
                }
                carousel.on_drag_update(&layout);
            }
            Step::DragEnd { velocity } => {
                settle = Some(carousel.on_drag_end(Velocity::new(velocity)));
            }
            Step::Next => {
                carousel.next();
            }
            Step::Previous => {
                carousel.previous();
            }
            Step::Settle => settle = Some(carousel.settle()),
            Step::Unmount { index } => {
                layout.unmounted.insert(index);
            }
            Step::Mount { index } => {
                layout.unmounted.remove(&index);
            }
        }

        // The recording animator settles instantly
        if let Some(command) = settle {
            rest_x = layout.strip_x_for(command.index, command.offset_x);
            layout.strip_x = rest_x;
        }

        let frame = Frame {
            step,
            index: carousel.committed_index(),
            state: carousel.gesture_state(),
            strip_x: layout.strip_x,
            settle,
        };
        debug!(%frame, "replayed step");
        frames.push(frame);
    }

    Ok(frames)
}
