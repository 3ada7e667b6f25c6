pub mod app;
pub mod event;
pub mod gesture;
pub mod input;
pub mod settle;
pub mod theme;
pub mod velocity;
pub mod widgets;

pub use app::App;
pub use theme::Theme;
