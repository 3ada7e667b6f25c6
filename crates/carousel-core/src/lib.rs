pub mod carousel;
pub mod config;
pub mod error;
pub mod geometry;
pub mod items;
pub mod replay;

pub use carousel::{Carousel, GestureState, Release, SettleAnimator, SettleCommand, Velocity};
pub use config::{AppConfig, CarouselConfig, EasingType, SettleConfig};
pub use error::{Error, Result};
pub use geometry::{nearest_index, GeometrySnapshot, MeasurementProvider, StripLayout};
pub use items::Item;
