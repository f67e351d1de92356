//! Conjoncture core: French labour-market and price indicators, navigation
//! state and panel composition.
//!
//! This crate holds everything the front-ends share:
//! - The bundled dataset and the record-level `SeriesRecord` interface
//! - Two-level navigation state (primary tab, employment sub-tab)
//! - The static tab → panel descriptor table
//! - The view composer projecting series into renderable rows
//! - Derived values (other-contracts share, difficulty bands, trend sign)
//! - Key indicators, the markdown negotiation brief and TOML configuration

pub mod compose;
pub mod config;
pub mod dataset;
pub mod derived;
pub mod error;
pub mod format;
pub mod indicators;
pub mod navigation;
pub mod panels;
pub mod report;

pub use compose::{compose, ComposedPanel, FrameRow};
pub use config::{ConfigError, DashboardConfig};
pub use dataset::{Dataset, SeriesId, SeriesRecord};
pub use error::DashboardError;
pub use navigation::{NavigationState, PrimaryTab, SecondaryTab};
pub use panels::{panel_descriptors, ChartKind, PanelDescriptor, PanelId};
