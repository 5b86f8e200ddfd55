//! Wire types for the analysis server's `/analyze` and `/player/{id}` payloads.
//!
//! Every display field is optional: the renderer substitutes fallbacks, so
//! decoding must never fail because a field is missing, `null`, or a numeric
//! string. Ids and gameweek points also tolerate junk; other numeric fields
//! still reject non-numeric strings.

use crate::cli::types::PlayerId;
use serde::{de::Error, Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[cfg(test)]
mod tests;

/// Accept a JSON number, a numeric string, or `null`.
fn de_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s.trim().parse::<f64>().map(Some).map_err(D::Error::custom),
        Some(other) => Err(D::Error::custom(format!("expected number, got {other}"))),
    }
}

/// Integer counterpart of [`de_lenient_f64`]; fractional input is truncated.
fn de_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(de_lenient_f64(deserializer)?.map(|v| v as i64))
}

/// Player ids arrive as numbers or numeric strings; anything else is dropped.
fn de_lenient_player_id<'de, D>(deserializer: D) -> Result<Option<PlayerId>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(id.map(PlayerId::new))
}

/// Gameweek points keep their position: `null` and unparseable entries
/// count as zero so the newest-first order still lines up.
fn de_lenient_points<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(values
        .into_iter()
        .map(|value| match value {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|v| v as i64)),
            Value::String(s) => s.trim().parse::<f64>().ok().map(|v| v as i64),
            _ => None,
        })
        .map(|points| points.unwrap_or(0))
        .collect())
}

/// Treat an explicit `null` like a missing field.
fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub team_id: String,
}

/// Root payload of `POST /analyze`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnalysisResponse {
    #[serde(default, deserialize_with = "de_null_default")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub team_status: TeamStatus,
    #[serde(default, deserialize_with = "de_null_default")]
    pub current_squad: Vec<Player>,
    /// Ordered by the server; index 0 is the captain, index 1 the vice captain.
    #[serde(default, deserialize_with = "de_null_default")]
    pub captain_picks: Vec<Player>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub transfer_suggestions: Vec<TransferSuggestion>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub considerations: Considerations,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predictions_updated: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TeamStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_i64", skip_serializing_if = "Option::is_none")]
    pub overall_points: Option<i64>,
    #[serde(default, deserialize_with = "de_lenient_i64", skip_serializing_if = "Option::is_none")]
    pub overall_rank: Option<i64>,
    /// In millions.
    #[serde(default, deserialize_with = "de_lenient_f64", skip_serializing_if = "Option::is_none")]
    pub bank_balance: Option<f64>,
}

/// A player as embedded in squad, picks and transfers, or as returned in full
/// by `GET /player/{id}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Player {
    #[serde(default, deserialize_with = "de_lenient_player_id", skip_serializing_if = "Option::is_none")]
    pub player_id: Option<PlayerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// GK, DEF, MID or FWD; passed through as received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_f64", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64", skip_serializing_if = "Option::is_none")]
    pub form: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64", skip_serializing_if = "Option::is_none")]
    pub predicted_points: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64", skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64", skip_serializing_if = "Option::is_none")]
    pub total_points: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64", skip_serializing_if = "Option::is_none")]
    pub points_per_game: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64", skip_serializing_if = "Option::is_none")]
    pub minutes_per_game: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64", skip_serializing_if = "Option::is_none")]
    pub games_played: Option<f64>,
    /// Ownership percentage.
    #[serde(default, deserialize_with = "de_lenient_f64", skip_serializing_if = "Option::is_none")]
    pub selected_by: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_home: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_performance: Option<RecentPerformance>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RecentPerformance {
    /// Gameweek point totals, newest first.
    #[serde(default, deserialize_with = "de_lenient_points")]
    pub points: Vec<i64>,
}

/// One suggested transfer: sell `out`, buy `incoming`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TransferSuggestion {
    #[serde(default, deserialize_with = "de_null_default")]
    pub out: Player,
    #[serde(rename = "in", default, deserialize_with = "de_null_default")]
    pub incoming: Player,
    /// Price of `incoming` minus price of `out`, in millions.
    #[serde(default, deserialize_with = "de_lenient_f64", skip_serializing_if = "Option::is_none")]
    pub price_change: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64", skip_serializing_if = "Option::is_none")]
    pub remaining_budget: Option<f64>,
    /// Predicted point gain of `incoming` over `out`.
    #[serde(default, deserialize_with = "de_lenient_f64", skip_serializing_if = "Option::is_none")]
    pub improvement: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Considerations {
    #[serde(default, deserialize_with = "de_null_default")]
    pub inactive_players: bool,
    #[serde(default, deserialize_with = "de_null_default")]
    pub out_of_form_players: bool,
}

impl Considerations {
    pub fn any(&self) -> bool {
        self.inactive_players || self.out_of_form_players
    }
}

impl Player {
    /// Ownership below this percentage marks a differential pick.
    pub const DIFFERENTIAL_THRESHOLD: f64 = 10.0;

    /// True when ownership is known and strictly below the threshold.
    pub fn is_differential(&self) -> bool {
        self.selected_by
            .is_some_and(|pct| pct < Self::DIFFERENTIAL_THRESHOLD)
    }
}
