mod carousel;
mod indicator;
mod status_bar;

pub use carousel::{card_lines, slice_columns, CarouselWidget};
pub use indicator::IndicatorWidget;
pub use status_bar::StatusBarWidget;
