//! Carousel state machine.
//!
//! Owns the committed index and the gesture state, and turns drag events into
//! index changes plus a single settle command per gesture. All transitions run
//! on the caller's event loop; the only ordering defense is the `Idle` guard in
//! [`Carousel::on_drag_update`], which drops updates delivered after their drag
//! has already ended.

use serde::Serialize;
use tracing::{debug, info};

use crate::config::CarouselConfig;
use crate::geometry::{nearest_index, MeasurementProvider};

/// Whether a drag is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureState {
    #[default]
    Idle,
    Dragging,
}

/// Horizontal release speed in units per second (positive = rightward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Velocity {
    pub x: f64,
}

impl Velocity {
    pub fn new(x: f64) -> Self {
        Self { x }
    }
}

/// How a release was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Release {
    /// Fast rightward release, forced one step back
    Previous,
    /// Fast leftward release, forced one step forward
    Next,
    /// Slow release, the live-tracked index stands
    Snap,
}

impl Release {
    /// Classify a release velocity. Exactly-threshold speeds snap.
    pub fn classify(velocity: Velocity, threshold: f64) -> Self {
        if velocity.x > threshold {
            Release::Previous
        } else if velocity.x < -threshold {
            Release::Next
        } else {
            Release::Snap
        }
    }
}

/// Instruction to move the strip so `index` is aligned with the container
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SettleCommand {
    pub index: usize,
    /// Target translation as a percentage of one item width
    pub translate_percent: f64,
    /// Transient in-gesture offset, always reset to zero
    pub offset_x: f64,
}

impl SettleCommand {
    pub fn to_index(index: usize) -> Self {
        // Index 0 must be +0.0, not -0.0, so it prints as `0%`
        let translate_percent = if index == 0 {
            0.0
        } else {
            -(index as f64) * 100.0
        };
        Self {
            index,
            translate_percent,
            offset_x: 0.0,
        }
    }
}

/// Animation capability owned by one carousel instance
pub trait SettleAnimator {
    /// Fire-and-forget: start moving the strip toward `command`
    fn animate_to(&mut self, command: SettleCommand);
}

/// Records commands without animating; used for headless replay and tests
impl SettleAnimator for Vec<SettleCommand> {
    fn animate_to(&mut self, command: SettleCommand) {
        self.push(command);
    }
}

#[derive(Debug)]
pub struct Carousel<A> {
    config: CarouselConfig,
    item_count: usize,
    committed_index: usize,
    state: GestureState,
    animator: A,
}

impl<A: SettleAnimator> Carousel<A> {
    /// Create a carousel at index 0. Fails on an invalid configuration.
    pub fn new(item_count: usize, config: CarouselConfig, animator: A) -> crate::Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            item_count,
            committed_index: 0,
            state: GestureState::Idle,
            animator,
        })
    }

    #[inline]
    pub fn committed_index(&self) -> usize {
        self.committed_index
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[inline]
    pub fn gesture_state(&self) -> GestureState {
        self.state
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.state == GestureState::Dragging
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    fn last_index(&self) -> usize {
        self.item_count.saturating_sub(1)
    }

    pub fn on_drag_start(&mut self) {
        if self.state == GestureState::Idle {
            debug!(index = self.committed_index, "drag started");
        }
        self.state = GestureState::Dragging;
    }

    /// Live-track the nearest item while dragging.
    ///
    /// Returns the index committed by this update, if any. Ignored while idle.
    pub fn on_drag_update<M>(&mut self, provider: &M) -> Option<usize>
    where
        M: MeasurementProvider + ?Sized,
    {
        if self.state == GestureState::Idle {
            debug!("drag update while idle, dropped");
            return None;
        }

        let snapshot = provider.measure()?;
        // Positions past the item count cannot be committed
        let measured = snapshot.item_center_xs.len().min(self.item_count);
        let centers = &snapshot.item_center_xs[..measured];
        let nearest = nearest_index(snapshot.container_center_x, centers)?;

        if nearest != self.committed_index {
            debug!(from = self.committed_index, to = nearest, "live-tracked index changed");
            self.committed_index = nearest;
        }
        Some(nearest)
    }

    /// Finish the drag, apply the velocity policy and settle.
    pub fn on_drag_end(&mut self, velocity: Velocity) -> SettleCommand {
        self.state = GestureState::Idle;

        let release = Release::classify(velocity, self.config.velocity_threshold);
        let tracked = self.committed_index;
        let final_index = match release {
            Release::Previous => self.previous(),
            Release::Next => self.next(),
            Release::Snap => tracked,
        };

        debug!(
            velocity = velocity.x,
            ?release,
            tracked,
            final_index,
            "drag ended"
        );

        self.settle()
    }

    /// Issue a settle command for the current index
    pub fn settle(&mut self) -> SettleCommand {
        let command = SettleCommand::to_index(self.committed_index);
        info!(
            index = command.index,
            translate_percent = command.translate_percent,
            "settling"
        );
        self.animator.animate_to(command);
        command
    }

    /// Step forward, clamped at the last item. Does not animate.
    pub fn next(&mut self) -> usize {
        if self.committed_index < self.last_index() {
            self.committed_index += 1;
        }
        self.committed_index
    }

    /// Step back, clamped at the first item. Does not animate.
    pub fn previous(&mut self) -> usize {
        if self.committed_index > 0 {
            self.committed_index -= 1;
        }
        self.committed_index
    }
}
