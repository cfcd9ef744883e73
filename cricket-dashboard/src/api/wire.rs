// JSON records exactly as the backend sends them, and their conversion into
// domain types. Field-name quirks are absorbed here and nowhere else.

use serde::Deserialize;
use tracing::debug;

use crate::model::{HealthStatus, PlayerStats, PlayerSummary, PredictionResult};

/// Element of the `GET /players` array.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerRecord {
    pub player_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub batting_style: Option<String>,
    #[serde(default)]
    pub bowling_style: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl From<PlayerRecord> for PlayerSummary {
    fn from(r: PlayerRecord) -> Self {
        PlayerSummary {
            id: r.player_id,
            name: r.name,
            batting_style: r.batting_style,
            bowling_style: r.bowling_style,
        }
    }
}

/// Body of `GET /players/{id}/stats`.
///
/// The backend has shipped the batting average under both `average` and
/// `avg`. Both are accepted; `average` wins when both are present.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsRecord {
    pub matches: u32,
    pub runs: u32,
    #[serde(default)]
    pub balls: Option<u32>,
    #[serde(default)]
    pub average: Option<f64>,
    #[serde(default)]
    pub avg: Option<f64>,
    pub strike_rate: f64,
    pub hundreds: u32,
    pub fifties: u32,
}

impl StatsRecord {
    pub fn normalized_average(&self) -> Option<f64> {
        match (self.average, self.avg) {
            (Some(average), _) => Some(average),
            (None, Some(avg)) => {
                debug!("stats response used legacy `avg` key");
                Some(avg)
            }
            (None, None) => None,
        }
    }
}

impl From<StatsRecord> for PlayerStats {
    fn from(r: StatsRecord) -> Self {
        let average = r.normalized_average();
        PlayerStats {
            matches: r.matches,
            runs: r.runs,
            balls: r.balls,
            average,
            strike_rate: r.strike_rate,
            hundreds: r.hundreds,
            fifties: r.fifties,
        }
    }
}

/// Body of `POST /predict`'s response.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionRecord {
    pub predicted_runs: f64,
}

impl From<PredictionRecord> for PredictionResult {
    fn from(r: PredictionRecord) -> Self {
        PredictionResult {
            predicted_runs: r.predicted_runs,
        }
    }
}

/// Body of the root health endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthRecord {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl From<HealthRecord> for HealthStatus {
    fn from(r: HealthRecord) -> Self {
        HealthStatus {
            status: r.status,
            message: r.message,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(json: &str) -> PlayerStats {
        serde_json::from_str::<StatsRecord>(json).unwrap().into()
    }

    #[test]
    fn average_key_is_used() {
        let s = stats(
            r#"{"matches":10,"runs":425,"average":42.5,"strike_rate":130.2,"hundreds":1,"fifties":3}"#,
        );
        assert_eq!(s.average, Some(42.5));
    }

    #[test]
    fn avg_key_is_used_when_average_missing() {
        let s = stats(
            r#"{"matches":5,"runs":150,"balls":120,"avg":30,"strike_rate":125.0,"hundreds":0,"fifties":1}"#,
        );
        assert_eq!(s.average, Some(30.0));
        assert_eq!(s.balls, Some(120));
    }

    #[test]
    fn average_wins_over_avg() {
        let s = stats(
            r#"{"matches":5,"runs":150,"average":31.5,"avg":30,"strike_rate":125.0,"hundreds":0,"fifties":1}"#,
        );
        assert_eq!(s.average, Some(31.5));
    }

    #[test]
    fn zero_average_is_not_replaced_by_avg() {
        let s = stats(
            r#"{"matches":1,"runs":0,"average":0,"avg":12,"strike_rate":0,"hundreds":0,"fifties":0}"#,
        );
        assert_eq!(s.average, Some(0.0));
    }

    #[test]
    fn missing_average_keys_yield_none() {
        let s = stats(r#"{"matches":0,"runs":0,"strike_rate":0.0,"hundreds":0,"fifties":0}"#);
        assert_eq!(s.average, None);
        assert_eq!(s.balls, None);
    }

    #[test]
    fn player_record_ignores_image_url_and_keeps_styles() {
        let r: PlayerRecord = serde_json::from_str(
            r#"{"player_id":3,"name":"V Kohli","batting_style":"Right-hand bat","bowling_style":null,"image_url":"http://x/y.png"}"#,
        )
        .unwrap();
        let p: PlayerSummary = r.into();
        assert_eq!(p.id, 3);
        assert_eq!(p.name, "V Kohli");
        assert_eq!(p.batting_style.as_deref(), Some("Right-hand bat"));
        assert!(p.bowling_style.is_none());
    }

    #[test]
    fn player_record_name_defaults_to_empty() {
        let r: PlayerRecord = serde_json::from_str(r#"{"player_id":9}"#).unwrap();
        assert_eq!(r.name, "");
    }

    #[test]
    fn health_record_message_is_optional() {
        let h: HealthStatus = serde_json::from_str::<HealthRecord>(r#"{"status":"ok"}"#)
            .unwrap()
            .into();
        assert!(h.is_ok());
        assert!(h.message.is_empty());
    }
}
