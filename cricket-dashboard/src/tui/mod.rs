// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState`, the single on-screen model of the dashboard.
// The controller never touches it directly: it pushes `UiUpdate` messages
// over an mpsc channel, the TUI applies them here and re-renders at ~30 fps.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::Frame;
use tokio::sync::mpsc;
use tracing::debug;

use crate::model::{HealthStatus, PlayerStats, PlayerSummary};
use crate::protocol::{
    ConnectionStatus, PanelTone, PredictionForm, Section, UiUpdate, UserCommand,
};

use layout::build_layout;

// ---------------------------------------------------------------------------
// Panels
// ---------------------------------------------------------------------------

/// Contents of the search results container.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsPanel {
    Empty,
    Players(Vec<PlayerSummary>),
    /// Neutral, non-selectable message ("No players found").
    Placeholder(String),
    Error(String),
}

/// The player detail panel. Every field is display text so that a failed
/// load can overwrite the name while leaving the previous figures in place.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanel {
    pub visible: bool,
    pub name: String,
    pub matches: String,
    pub runs: String,
    pub average: String,
    pub strike_rate: String,
    pub hundreds: String,
    pub fifties: String,
}

impl Default for DetailPanel {
    fn default() -> Self {
        DetailPanel {
            visible: false,
            name: String::new(),
            matches: "-".into(),
            runs: "-".into(),
            average: "-".into(),
            strike_rate: "-".into(),
            hundreds: "-".into(),
            fifties: "-".into(),
        }
    }
}

impl DetailPanel {
    fn fill(&mut self, name: String, stats: &PlayerStats) {
        self.name = name;
        self.matches = stats.matches.to_string();
        self.runs = stats.runs.to_string();
        self.average = stats
            .average
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string());
        self.strike_rate = stats.strike_rate.to_string();
        self.hundreds = stats.hundreds.to_string();
        self.fifties = stats.fifties.to_string();
    }

    /// Labelled stat rows in display order.
    pub fn rows(&self) -> [(&'static str, &str); 6] {
        [
            ("Matches", self.matches.as_str()),
            ("Runs", self.runs.as_str()),
            ("Average", self.average.as_str()),
            ("Strike Rate", self.strike_rate.as_str()),
            ("100s", self.hundreds.as_str()),
            ("50s", self.fifties.as_str()),
        ]
    }
}

/// The prediction result container.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionPanel {
    Hidden,
    Pending(String),
    Ready { score: i64, caption: String },
    Failed { headline: String, detail: String },
}

impl PredictionPanel {
    pub fn tone(&self) -> Option<PanelTone> {
        match self {
            PredictionPanel::Hidden => None,
            PredictionPanel::Pending(_) => Some(PanelTone::Info),
            PredictionPanel::Ready { .. } => Some(PanelTone::Success),
            PredictionPanel::Failed { .. } => Some(PanelTone::Warning),
        }
    }
}

/// Prediction form fields in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Team,
    Opposition,
    Venue,
    Innings,
    TossWinner,
    TossChoice,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Team,
        FormField::Opposition,
        FormField::Venue,
        FormField::Innings,
        FormField::TossWinner,
        FormField::TossChoice,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Team => "Batting Team",
            FormField::Opposition => "Opposition",
            FormField::Venue => "Venue",
            FormField::Innings => "Innings",
            FormField::TossWinner => "Toss Winner",
            FormField::TossChoice => "Toss Choice",
        }
    }

    /// Shown in an empty field.
    pub fn hint(self) -> &'static str {
        match self {
            FormField::Innings => "1 or 2",
            FormField::TossWinner => "default: batting team",
            FormField::TossChoice => "default: from config",
            _ => "",
        }
    }

    pub fn next(self) -> FormField {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> FormField {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn value(self, form: &PredictionForm) -> &str {
        match self {
            FormField::Team => &form.team,
            FormField::Opposition => &form.opposition,
            FormField::Venue => &form.venue,
            FormField::Innings => &form.innings,
            FormField::TossWinner => &form.toss_winner,
            FormField::TossChoice => &form.toss_choice,
        }
    }

    pub fn value_mut(self, form: &mut PredictionForm) -> &mut String {
        match self {
            FormField::Team => &mut form.team,
            FormField::Opposition => &mut form.opposition,
            FormField::Venue => &mut form.venue,
            FormField::Innings => &mut form.innings,
            FormField::TossWinner => &mut form.toss_winner,
            FormField::TossChoice => &mut form.toss_choice,
        }
    }
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local model of everything on screen.
///
/// Input fields (search box, prediction form) are edited directly by the
/// input handler; everything else changes only through `apply_ui_update`.
pub struct ViewState {
    /// Which section is visible. `None` after switching to an unknown id.
    pub active_section: Option<Section>,
    pub connection_status: ConnectionStatus,
    /// Last health payload from the backend, if any.
    pub health: Option<HealthStatus>,
    pub last_health_check: Option<DateTime<Local>>,
    pub search_input: String,
    pub results: ResultsPanel,
    /// Highlighted row when `results` holds players.
    pub selected_result: usize,
    pub detail: DetailPanel,
    pub form: PredictionForm,
    pub form_focus: FormField,
    pub prediction: PredictionPanel,
    /// Whether the quit confirmation prompt is showing.
    pub confirm_quit: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            active_section: Some(Section::Home),
            connection_status: ConnectionStatus::Unknown,
            health: None,
            last_health_check: None,
            search_input: String::new(),
            results: ResultsPanel::Empty,
            selected_result: 0,
            detail: DetailPanel::default(),
            form: PredictionForm::default(),
            form_focus: FormField::Team,
            prediction: PredictionPanel::Hidden,
            confirm_quit: false,
        }
    }
}

impl ViewState {
    /// The player under the selection cursor, if the results hold players.
    pub fn selected_player(&self) -> Option<&PlayerSummary> {
        match &self.results {
            ResultsPanel::Players(players) => players.get(self.selected_result),
            _ => None,
        }
    }

    fn replace_results(&mut self, results: ResultsPanel) {
        self.results = results;
        self.selected_result = 0;
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
pub fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::ActiveSection(section) => {
            state.active_section = section;
        }
        UiUpdate::ResultsCleared => {
            state.replace_results(ResultsPanel::Empty);
        }
        UiUpdate::SearchResults(players) => {
            state.replace_results(ResultsPanel::Players(players));
        }
        UiUpdate::SearchEmpty(message) => {
            state.replace_results(ResultsPanel::Placeholder(message));
        }
        UiUpdate::SearchFailed(message) => {
            state.replace_results(ResultsPanel::Error(message));
        }
        UiUpdate::PlayerLoading(placeholder) => {
            state.detail.name = placeholder;
            state.detail.visible = true;
        }
        UiUpdate::PlayerLoaded { name, stats } => {
            state.detail.fill(name, &stats);
            state.replace_results(ResultsPanel::Empty);
            state.search_input.clear();
        }
        UiUpdate::PlayerFailed(message) => {
            state.detail.name = message;
        }
        UiUpdate::PredictionPending(message) => {
            state.prediction = PredictionPanel::Pending(message);
        }
        UiUpdate::PredictionReady { result, caption } => {
            state.prediction = PredictionPanel::Ready {
                score: result.projected_score(),
                caption,
            };
        }
        UiUpdate::PredictionFailed { headline, detail } => {
            state.prediction = PredictionPanel::Failed { headline, detail };
        }
        UiUpdate::ConnectionStatus { status, health } => {
            state.connection_status = status;
            state.health = health;
            state.last_health_check = Some(Local::now());
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    match state.active_section {
        Some(Section::Home) => widgets::home::render(frame, layout.body, state),
        Some(Section::Players) => widgets::players::render(frame, layout.body, state),
        Some(Section::Predict) => widgets::prediction::render(frame, layout.body, state),
        None => widgets::home::render_blank(frame, layout.body),
    }
    widgets::help_bar::render(frame, layout.help_bar, state);

    if state.confirm_quit {
        widgets::quit_confirm::render(frame, frame.area());
    }
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs an async select loop: UI updates, keyboard input, render ticks.
/// 4. Restores the terminal on exit.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::default();
    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result = loop {
        tokio::select! {
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => apply_ui_update(&mut view_state, ui_update),
                    // Channel closed: app is shutting down
                    None => break Ok(()),
                }
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let quit = cmd == UserCommand::Quit;
                            if cmd_tx.send(cmd).await.is_err() || quit {
                                break Ok(());
                            }
                        }
                    }
                    Some(Ok(_)) => {
                        // Mouse and resize events; the next tick redraws.
                    }
                    Some(Err(e)) => {
                        debug!("terminal input error: {e}");
                        break Err(e.into());
                    }
                    None => break Ok(()),
                }
            }

            _ = render_tick.tick() => {
                if let Err(e) = terminal.draw(|frame| render_frame(frame, &view_state)) {
                    break Err(e.into());
                }
            }
        }
    };

    ratatui::restore();

    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
