//! Conjoncture TUI: terminal dashboard over the bundled indicators.
//!
//! - Header with the data date and the key-indicator strip
//! - Primary tabs, plus the employment sub-tab bar
//! - One framed widget per composed panel, placeholders for missing series
//! - Help overlay listing keys and data sources

pub mod app;
pub mod input;
pub mod panels;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;
pub use theme::Theme;
