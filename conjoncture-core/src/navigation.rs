//! Navigation state: the primary tab and the employment sub-tab.
//!
//! The two selections are independent: changing the primary tab never
//! touches the sub-tab, so returning to *Emploi* restores whatever sub-tab
//! was last shown there.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::compose::{compose, ComposedPanel};
use crate::dataset::Dataset;
use crate::error::DashboardError;

/// Top-level panel group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryTab {
    #[default]
    PurchasingPower,
    Wages,
    Employment,
    Inflation,
}

impl PrimaryTab {
    pub const ALL: [PrimaryTab; 4] = [
        PrimaryTab::PurchasingPower,
        PrimaryTab::Wages,
        PrimaryTab::Employment,
        PrimaryTab::Inflation,
    ];

    pub fn index(self) -> usize {
        match self {
            PrimaryTab::PurchasingPower => 0,
            PrimaryTab::Wages => 1,
            PrimaryTab::Employment => 2,
            PrimaryTab::Inflation => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// Canonical identifier, as accepted on the command line and in config.
    pub fn id(self) -> &'static str {
        match self {
            PrimaryTab::PurchasingPower => "purchasing_power",
            PrimaryTab::Wages => "wages",
            PrimaryTab::Employment => "employment",
            PrimaryTab::Inflation => "inflation",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PrimaryTab::PurchasingPower => "Pouvoir d'achat",
            PrimaryTab::Wages => "Salaires",
            PrimaryTab::Employment => "Emploi",
            PrimaryTab::Inflation => "Inflation",
        }
    }

    pub fn next(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + 1) % len]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for PrimaryTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PrimaryTab {
    type Err = DashboardError;

    /// Accepts the canonical id (any case, `-` or `_`) or a 1-based position.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s, &Self::ALL, |t| t.id())
            .ok_or_else(|| DashboardError::invalid_selection("primary tab", s))
    }
}

/// Sub-tab of the employment group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondaryTab {
    #[default]
    Unemployment,
    Seniors,
    Contracts,
    Sectors,
    Recruitment,
    Dynamics,
}

impl SecondaryTab {
    pub const ALL: [SecondaryTab; 6] = [
        SecondaryTab::Unemployment,
        SecondaryTab::Seniors,
        SecondaryTab::Contracts,
        SecondaryTab::Sectors,
        SecondaryTab::Recruitment,
        SecondaryTab::Dynamics,
    ];

    pub fn index(self) -> usize {
        match self {
            SecondaryTab::Unemployment => 0,
            SecondaryTab::Seniors => 1,
            SecondaryTab::Contracts => 2,
            SecondaryTab::Sectors => 3,
            SecondaryTab::Recruitment => 4,
            SecondaryTab::Dynamics => 5,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    pub fn id(self) -> &'static str {
        match self {
            SecondaryTab::Unemployment => "unemployment",
            SecondaryTab::Seniors => "seniors",
            SecondaryTab::Contracts => "contracts",
            SecondaryTab::Sectors => "sectors",
            SecondaryTab::Recruitment => "recruitment",
            SecondaryTab::Dynamics => "dynamics",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SecondaryTab::Unemployment => "Chômage",
            SecondaryTab::Seniors => "Seniors",
            SecondaryTab::Contracts => "Contrats",
            SecondaryTab::Sectors => "Secteurs",
            SecondaryTab::Recruitment => "Recrutement",
            SecondaryTab::Dynamics => "Dynamique",
        }
    }

    pub fn next(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + 1) % len]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for SecondaryTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SecondaryTab {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s, &Self::ALL, |t| t.id())
            .ok_or_else(|| DashboardError::invalid_selection("sub-tab", s))
    }
}

fn parse_choice<T: Copy>(input: &str, all: &[T], id: impl Fn(T) -> &'static str) -> Option<T> {
    let needle = input.trim().to_ascii_lowercase().replace('-', "_");
    if let Ok(n) = needle.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| all.get(i).copied());
    }
    all.iter().copied().find(|&t| id(t) == needle)
}

/// The two navigation selections, owned by whoever drives the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationState {
    primary: PrimaryTab,
    secondary: SecondaryTab,
}

impl NavigationState {
    pub fn new(primary: PrimaryTab, secondary: SecondaryTab) -> Self {
        Self { primary, secondary }
    }

    pub fn primary(&self) -> PrimaryTab {
        self.primary
    }

    pub fn secondary(&self) -> SecondaryTab {
        self.secondary
    }

    pub fn set_primary(&mut self, tab: PrimaryTab) {
        self.primary = tab;
    }

    pub fn set_secondary(&mut self, tab: SecondaryTab) {
        self.secondary = tab;
    }

    /// Set the primary tab from untrusted input. The state is unchanged on error.
    pub fn select_primary(&mut self, input: &str) -> Result<PrimaryTab, DashboardError> {
        let tab: PrimaryTab = input.parse()?;
        self.primary = tab;
        Ok(tab)
    }

    /// Set the sub-tab from untrusted input. The state is unchanged on error.
    pub fn select_secondary(&mut self, input: &str) -> Result<SecondaryTab, DashboardError> {
        let tab: SecondaryTab = input.parse()?;
        self.secondary = tab;
        Ok(tab)
    }

    pub fn next_primary(&mut self) {
        self.primary = self.primary.next();
    }

    pub fn prev_primary(&mut self) {
        self.primary = self.primary.prev();
    }

    pub fn next_secondary(&mut self) {
        self.secondary = self.secondary.next();
    }

    pub fn prev_secondary(&mut self) {
        self.secondary = self.secondary.prev();
    }

    /// The sub-tab bar is only shown under *Emploi*.
    pub fn sub_tabs_visible(&self) -> bool {
        self.primary == PrimaryTab::Employment
    }

    pub fn compose(&self, dataset: &Dataset) -> Vec<ComposedPanel> {
        compose(self.primary, self.secondary, dataset)
    }
}
