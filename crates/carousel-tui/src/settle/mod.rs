//! Settle animation for the carousel strip
//!
//! Moves the strip from wherever the drag left it to the committed item, using
//! the configured easing curve and duration.
//!
//! - `easing` - pure easing curves mapping [0, 1] onto [0, 1]
//! - `timing` - progress and interpolation helpers
//! - `animation` - `StripAnimator`, the carousel's animation handle
//!
//! ```ignore
//! use carousel_tui::settle::StripAnimator;
//!
//! let mut animator = StripAnimator::new(config.ui.settle.clone(), area.width as f64);
//! animator.animate_to(SettleCommand::to_index(2));
//!
//! // Each frame:
//! let strip_x = animator.update(Instant::now());
//! ```

pub mod easing;
pub mod timing;

pub mod animation;

pub use animation::StripAnimator;
pub use easing::{EasingType, EasingTypeExt};
