// DashboardController: view switching, player search, player detail load,
// run prediction, and the backend health check.
//
// Each flow is linear (pending -> success | failure) and renders by sending
// `UiUpdate`s over the view channel. Errors are caught at the flow boundary,
// logged, and collapsed into the flow's single user-facing message. Nothing
// guards against overlapping calls: whichever finishes last is what the user
// sees.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::api::StatsBackend;
use crate::config::{Config, PredictionConfig, TOSS_CHOICES};
use crate::model::{parse_innings, PredictionRequest};
use crate::protocol::{ConnectionStatus, PredictionForm, Section, UiUpdate};

pub const NO_PLAYERS_FOUND: &str = "No players found";
pub const SEARCH_FAILED: &str = "Error connecting to API. Is the backend running?";
pub const LOADING: &str = "Loading...";
pub const STATS_FAILED: &str = "Error loading stats";
pub const CALCULATING: &str = "Calculating odds...";
pub const PREDICTION_FAILED_HEADLINE: &str = "⚠️ Connection Failed";
pub const PREDICTION_FAILED_DETAIL: &str = "Backend is offline. Please start the API server.";

/// Settings the flows read on every call.
#[derive(Debug, Clone)]
pub struct FlowSettings {
    pub min_query_len: usize,
    pub prediction: PredictionConfig,
}

impl FlowSettings {
    pub fn from_config(config: &Config) -> Self {
        FlowSettings {
            min_query_len: config.search.min_query_len,
            prediction: config.prediction.clone(),
        }
    }
}

impl Default for FlowSettings {
    fn default() -> Self {
        FlowSettings {
            min_query_len: 3,
            prediction: PredictionConfig::default(),
        }
    }
}

/// Cheap to clone: every clone shares the backend and the view channel, so
/// the app loop can hand one to each spawned flow task.
#[derive(Clone)]
pub struct DashboardController {
    backend: Arc<dyn StatsBackend>,
    view: mpsc::Sender<UiUpdate>,
    settings: Arc<FlowSettings>,
}

impl DashboardController {
    pub fn new(
        backend: Arc<dyn StatsBackend>,
        view: mpsc::Sender<UiUpdate>,
        settings: FlowSettings,
    ) -> Self {
        Self {
            backend,
            view,
            settings: Arc::new(settings),
        }
    }

    async fn render(&self, update: UiUpdate) {
        if self.view.send(update).await.is_err() {
            debug!("view channel closed; dropping update");
        }
    }

    // -----------------------------------------------------------------------
    // View switching
    // -----------------------------------------------------------------------

    /// Deactivate every section and nav tab, then activate the one named `id`.
    /// An unknown id leaves nothing active.
    pub async fn show_section(&self, id: &str) {
        let section = match id.parse::<Section>() {
            Ok(section) => Some(section),
            Err(e) => {
                warn!("{e}");
                None
            }
        };
        self.render(UiUpdate::ActiveSection(section)).await;
    }

    // -----------------------------------------------------------------------
    // Player search
    // -----------------------------------------------------------------------

    pub async fn search_players(&self, query: &str) {
        if query.chars().count() < self.settings.min_query_len {
            self.render(UiUpdate::ResultsCleared).await;
            return;
        }

        match self.backend.search_players(query).await {
            Ok(players) if players.is_empty() => {
                self.render(UiUpdate::SearchEmpty(NO_PLAYERS_FOUND.to_string()))
                    .await;
            }
            Ok(players) => {
                debug!(query, count = players.len(), "rendering search results");
                self.render(UiUpdate::SearchResults(players)).await;
            }
            Err(e) => {
                warn!(query, "player search failed: {e}");
                self.render(UiUpdate::SearchFailed(SEARCH_FAILED.to_string()))
                    .await;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Player detail load
    // -----------------------------------------------------------------------

    pub async fn load_player_stats(&self, id: i64, name: &str) {
        self.render(UiUpdate::PlayerLoading(LOADING.to_string())).await;

        match self.backend.player_stats(id).await {
            Ok(stats) => {
                info!(player_id = id, "loaded stats for {name}");
                self.render(UiUpdate::PlayerLoaded {
                    name: name.to_string(),
                    stats,
                })
                .await;
            }
            Err(e) => {
                warn!(player_id = id, "stats load failed: {e}");
                self.render(UiUpdate::PlayerFailed(STATS_FAILED.to_string()))
                    .await;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Prediction
    // -----------------------------------------------------------------------

    pub async fn predict_runs(&self, form: PredictionForm) {
        self.render(UiUpdate::PredictionPending(CALCULATING.to_string()))
            .await;

        let request = build_prediction_request(&form, &self.settings.prediction);
        debug!(?request, "submitting prediction");

        match self.backend.predict(&request).await {
            Ok(result) => {
                info!(
                    predicted_runs = result.predicted_runs,
                    "prediction for {} vs {}", request.team, request.opposition
                );
                self.render(UiUpdate::PredictionReady {
                    result,
                    caption: format!("vs {} at {}", request.opposition, request.venue),
                })
                .await;
            }
            Err(e) => {
                warn!("prediction failed: {e}");
                self.render(UiUpdate::PredictionFailed {
                    headline: PREDICTION_FAILED_HEADLINE.to_string(),
                    detail: PREDICTION_FAILED_DETAIL.to_string(),
                })
                .await;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Health check
    // -----------------------------------------------------------------------

    pub async fn check_health(&self) {
        let update = match self.backend.health().await {
            Ok(health) if health.is_ok() => UiUpdate::ConnectionStatus {
                status: ConnectionStatus::Connected,
                health: Some(health),
            },
            Ok(health) => {
                warn!(status = %health.status, "backend reported unhealthy status");
                UiUpdate::ConnectionStatus {
                    status: ConnectionStatus::Disconnected,
                    health: Some(health),
                }
            }
            Err(e) => {
                debug!("health check failed: {e}");
                UiUpdate::ConnectionStatus {
                    status: ConnectionStatus::Disconnected,
                    health: None,
                }
            }
        };
        self.render(update).await;
    }
}

/// Build the `POST /predict` body from the submitted form.
///
/// Blank toss fields fall back to the configured defaults; with no configured
/// toss winner, the batting team is sent. A typed toss choice other than
/// `bat` or `field` (any case) is replaced by the configured one.
pub fn build_prediction_request(
    form: &PredictionForm,
    defaults: &PredictionConfig,
) -> PredictionRequest {
    let team = form.team.trim().to_string();

    let toss_winner = non_blank(&form.toss_winner)
        .or_else(|| defaults.toss_winner.as_deref().and_then(non_blank))
        .unwrap_or_else(|| team.clone());
    let toss_choice = non_blank(&form.toss_choice)
        .and_then(|typed| {
            let choice = typed.to_ascii_lowercase();
            if TOSS_CHOICES.contains(&choice.as_str()) {
                Some(choice)
            } else {
                warn!(choice = %typed, "ignoring unknown toss choice");
                None
            }
        })
        .unwrap_or_else(|| defaults.toss_choice.clone());

    PredictionRequest {
        season: defaults.season,
        venue: form.venue.trim().to_string(),
        opposition: form.opposition.trim().to_string(),
        innings: parse_innings(&form.innings),
        toss_winner,
        toss_choice,
        team,
    }
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> PredictionForm {
        PredictionForm {
            team: "Mumbai Indians".into(),
            opposition: "Chennai Super Kings".into(),
            venue: "Wankhede Stadium".into(),
            innings: "1".into(),
            ..PredictionForm::default()
        }
    }

    #[test]
    fn toss_fields_default_to_team_and_bat() {
        let req = build_prediction_request(&form(), &PredictionConfig::default());
        assert_eq!(req.season, 2024);
        assert_eq!(req.team, "Mumbai Indians");
        assert_eq!(req.toss_winner, "Mumbai Indians");
        assert_eq!(req.toss_choice, "bat");
        assert_eq!(req.innings, Some(1));
    }

    #[test]
    fn configured_toss_defaults_apply_when_form_is_blank() {
        let defaults = PredictionConfig {
            season: 2023,
            toss_choice: "field".into(),
            toss_winner: Some("Chennai Super Kings".into()),
        };
        let req = build_prediction_request(&form(), &defaults);
        assert_eq!(req.season, 2023);
        assert_eq!(req.toss_winner, "Chennai Super Kings");
        assert_eq!(req.toss_choice, "field");
    }

    #[test]
    fn form_toss_fields_override_config() {
        let mut f = form();
        f.toss_winner = " Chennai Super Kings ".into();
        f.toss_choice = "field".into();
        let req = build_prediction_request(&f, &PredictionConfig::default());
        assert_eq!(req.toss_winner, "Chennai Super Kings");
        assert_eq!(req.toss_choice, "field");
    }

    #[test]
    fn unknown_form_toss_choice_uses_configured_default() {
        let mut f = form();
        f.toss_choice = "bowl".into();
        let req = build_prediction_request(&f, &PredictionConfig::default());
        assert_eq!(req.toss_choice, "bat");

        let defaults = PredictionConfig {
            toss_choice: "field".into(),
            ..PredictionConfig::default()
        };
        let req = build_prediction_request(&f, &defaults);
        assert_eq!(req.toss_choice, "field");
    }

    #[test]
    fn form_toss_choice_is_case_insensitive() {
        let mut f = form();
        f.toss_choice = " Field ".into();
        let req = build_prediction_request(&f, &PredictionConfig::default());
        assert_eq!(req.toss_choice, "field");
    }

    #[test]
    fn blank_configured_toss_winner_falls_back_to_team() {
        let defaults = PredictionConfig {
            toss_winner: Some("   ".into()),
            ..PredictionConfig::default()
        };
        let req = build_prediction_request(&form(), &defaults);
        assert_eq!(req.toss_winner, "Mumbai Indians");
    }

    #[test]
    fn non_numeric_innings_is_sent_as_none() {
        let mut f = form();
        f.innings = "second".into();
        let req = build_prediction_request(&f, &PredictionConfig::default());
        assert_eq!(req.innings, None);
    }
}
