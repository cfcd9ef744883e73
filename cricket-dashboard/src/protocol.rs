// Messages exchanged between the TUI and the app orchestrator.
//
// `UserCommand` flows TUI -> app; `UiUpdate` flows app (and the flow tasks it
// spawns) -> TUI. The TUI is the only writer of the on-screen state.

use std::fmt;
use std::str::FromStr;

use crate::model::{HealthStatus, PlayerStats, PlayerSummary, PredictionResult};

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Top-level dashboard sections. Exactly one is active at a time, or none
/// after switching to an unknown section id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Players,
    Predict,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Home, Section::Players, Section::Predict];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Players => "players",
            Section::Predict => "predict",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Players => "Players",
            Section::Predict => "Predict",
        }
    }

    pub fn next(self) -> Section {
        match self {
            Section::Home => Section::Players,
            Section::Players => Section::Predict,
            Section::Predict => Section::Home,
        }
    }

    pub fn prev(self) -> Section {
        match self {
            Section::Home => Section::Predict,
            Section::Players => Section::Home,
            Section::Predict => Section::Players,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section id: {}", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Backend connection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// No health check has completed yet.
    Unknown,
    Connected,
    Disconnected,
}

// ---------------------------------------------------------------------------
// Prediction form
// ---------------------------------------------------------------------------

/// Raw values of the prediction form at submission time.
///
/// `innings` is kept as typed text; the toss fields may be left blank to use
/// the configured defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionForm {
    pub team: String,
    pub opposition: String,
    pub venue: String,
    pub innings: String,
    pub toss_winner: String,
    pub toss_choice: String,
}

// ---------------------------------------------------------------------------
// Commands (TUI -> app)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum UserCommand {
    ShowSection(String),
    /// Search box contents changed.
    Search(String),
    LoadPlayer { id: i64, name: String },
    Predict(PredictionForm),
    /// Re-run the backend health check now.
    CheckHealth,
    Quit,
}

// ---------------------------------------------------------------------------
// Updates (app -> TUI)
// ---------------------------------------------------------------------------

/// Visual tone of the prediction result panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelTone {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiUpdate {
    /// Deactivate every section and nav tab, then activate this one (if any).
    ActiveSection(Option<Section>),
    /// Empty the results container.
    ResultsCleared,
    /// Replace the results container with one row per player.
    SearchResults(Vec<PlayerSummary>),
    /// Replace the results container with a neutral placeholder.
    SearchEmpty(String),
    /// Replace the results container with an error message.
    SearchFailed(String),
    /// Show the detail panel with the name field set to a placeholder.
    PlayerLoading(String),
    /// Fill the detail panel, then clear the search box and results.
    PlayerLoaded { name: String, stats: PlayerStats },
    /// Replace only the name field with an error message.
    PlayerFailed(String),
    /// Show the prediction panel with placeholder text.
    PredictionPending(String),
    PredictionReady {
        result: PredictionResult,
        caption: String,
    },
    PredictionFailed { headline: String, detail: String },
    ConnectionStatus {
        status: ConnectionStatus,
        health: Option<HealthStatus>,
    },
}
