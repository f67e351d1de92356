//! Application state: single owner, main thread only.

use conjoncture_core::indicators::KeyIndicators;
use conjoncture_core::{ComposedPanel, DashboardConfig, Dataset, NavigationState};

use crate::theme::Theme;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

pub struct AppState {
    pub nav: NavigationState,
    pub dataset: Dataset,
    pub indicators: KeyIndicators,
    pub running: bool,
    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,
    pub theme: Theme,
}

impl AppState {
    pub fn new(dataset: Dataset, nav: NavigationState) -> Self {
        let indicators = KeyIndicators::from_dataset(&dataset);
        Self {
            nav,
            dataset,
            indicators,
            running: true,
            overlay: Overlay::None,
            status_message: None,
            theme: Theme::default(),
        }
    }

    pub fn from_config(dataset: Dataset, config: &DashboardConfig) -> Self {
        let (nav, rejected) = config.initial_navigation();
        let mut app = Self::new(dataset, nav);
        if config.show_help_on_start {
            app.overlay = Overlay::Help;
        }
        match rejected.as_slice() {
            [] => {
                let msg = format!("Données au {}, ? pour l'aide", app.dataset.last_updated);
                app.set_status(msg);
            }
            errors => {
                let msg = errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                app.set_warning(format!("{msg}, onglet par défaut"));
            }
        }
        app
    }

    /// Panels for the current selection.
    pub fn panels(&self) -> Vec<ComposedPanel> {
        self.nav.compose(&self.dataset)
    }

    pub fn toggle_help(&mut self) {
        self.overlay = match self.overlay {
            Overlay::Help => Overlay::None,
            Overlay::None => Overlay::Help,
        };
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
