// Domain types shared by the API boundary, the controller and the TUI.
//
// Everything here is transient: a value lives as long as its on-screen
// representation and is replaced wholesale by the next response.

use serde::Serialize;

/// One row of a player search result.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSummary {
    pub id: i64,
    pub name: String,
    pub batting_style: Option<String>,
    pub bowling_style: Option<String>,
}

impl PlayerSummary {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        PlayerSummary {
            id,
            name: name.into(),
            batting_style: None,
            bowling_style: None,
        }
    }

    /// Comma-joined batting and bowling styles, if the backend sent any.
    pub fn styles(&self) -> Option<String> {
        let parts: Vec<&str> = [self.batting_style.as_deref(), self.bowling_style.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// Career batting statistics for one player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    pub matches: u32,
    pub runs: u32,
    pub balls: Option<u32>,
    /// Normalized batting average. `None` when the backend sent neither key.
    pub average: Option<f64>,
    pub strike_rate: f64,
    pub hundreds: u32,
    pub fifties: u32,
}

/// Body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub season: u16,
    pub venue: String,
    pub team: String,
    pub opposition: String,
    pub toss_winner: String,
    pub toss_choice: String,
    /// `None` serializes as `null` and is left for the backend to reject.
    pub innings: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub predicted_runs: f64,
}

impl PredictionResult {
    /// Predicted runs rounded half-up, the way the score is displayed.
    ///
    /// Values just below a half, such as `0.49999999999999994`, round down.
    pub fn projected_score(&self) -> i64 {
        let x = self.predicted_runs;
        let floor = x.floor();
        let rounded = if x - floor >= 0.5 { floor + 1.0 } else { floor };
        rounded as i64
    }
}

/// Response of the backend root health endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Parse an innings number from free text, taking an optional sign and the
/// leading digits only (`"2nd"` is innings 2). Returns `None` if there are no
/// leading digits.
pub fn parse_innings(text: &str) -> Option<i32> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    let value: i32 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}
