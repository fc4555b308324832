//! Response and request types for the lease backend.
//!
//! Every endpoint gets its own envelope type. Bodies are validated here, at the
//! boundary, so the rest of the app only ever sees well-formed results.

use chrono::DateTime;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Safe,
    Caution,
    Danger,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Safe => "✅ Safe",
            RiskLevel::Caution => "⚠️ Caution",
            RiskLevel::Danger => "🚨 High Risk",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            RiskLevel::Safe => "risk-badge risk-safe",
            RiskLevel::Caution => "risk-badge risk-caution",
            RiskLevel::Danger => "risk-badge risk-danger",
        }
    }
}

/// Clause-level risk is display-only; a level this client does not know is
/// dropped so the rest of the document still renders.
fn known_risk_level<'de, D>(deserializer: D) -> Result<Option<RiskLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(raw).ok())
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClauseFinding {
    pub clause_number: u32,
    pub clause_text: String,
    /// `None` renders the clause without a badge.
    #[serde(default, deserialize_with = "known_risk_level")]
    pub risk_level: Option<RiskLevel>,
    #[serde(default)]
    pub analysis: String,
    #[serde(default)]
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisData {
    #[serde(default)]
    pub analysis_id: Option<String>,
    #[serde(default)]
    pub has_full_access: bool,
    #[serde(default)]
    pub key_info: Value,
    #[serde(default)]
    pub clauses: Vec<ClauseFinding>,
    pub total_clauses: u32,
    pub shown_clauses: u32,
    #[serde(default)]
    pub page_count: Option<u32>,
    #[serde(default)]
    pub processing_time: Option<f64>,
}

impl AnalysisData {
    fn validate(&self) -> Result<(), ApiError> {
        if self.shown_clauses > self.total_clauses {
            return Err(ApiError::InvalidResponse(format!(
                "shown_clauses ({}) exceeds total_clauses ({})",
                self.shown_clauses, self.total_clauses
            )));
        }
        Ok(())
    }

    /// Pretty-printed `key_info`, or `None` when the service sent nothing useful.
    pub fn key_info_pretty(&self) -> Option<String> {
        match &self.key_info {
            Value::Null => None,
            Value::Object(map) if map.is_empty() => None,
            other => serde_json::to_string_pretty(other).ok(),
        }
    }
}

#[derive(Deserialize)]
struct AnalysisEnvelope {
    #[serde(default)]
    success: bool,
    data: Option<AnalysisData>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuickClauseResult {
    pub risk_level: RiskLevel,
    pub analysis: String,
    pub suggestion: String,
}

#[derive(Deserialize)]
struct QuickClauseEnvelope {
    data: Option<QuickClauseResult>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickClauseRequest<'a> {
    pub clause_text: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutRequest {
    pub email: String,
    pub user_id: String,
}

#[derive(Deserialize)]
struct CheckoutEnvelope {
    #[serde(default)]
    checkout_url: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccessStatus {
    #[serde(alias = "has_full_access")]
    pub has_access: bool,
    #[serde(default)]
    pub expires_at: Option<String>,
}

impl AccessStatus {
    /// Expiry formatted for display, e.g. "March 04, 2026".
    pub fn expires_on(&self) -> Option<String> {
        let raw = self.expires_at.as_deref()?;
        match DateTime::parse_from_rfc3339(raw) {
            Ok(dt) => Some(dt.format("%B %d, %Y").to_string()),
            Err(_) => Some(raw.to_string()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AccessEnvelope {
    Wrapped { data: AccessStatus },
    Bare(AccessStatus),
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn invalid(err: serde_json::Error) -> ApiError {
    ApiError::InvalidResponse(err.to_string())
}

/// Pulls a human-readable message out of an error body, falling back to the status.
pub fn error_from_body(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<Value>(body).ok().and_then(|value| {
        ["error", "detail", "message"].iter().find_map(|key| {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|msg| !msg.is_empty())
                .map(str::to_string)
        })
    });
    match message {
        Some(msg) => ApiError::Rejected(msg),
        None => ApiError::Status(status),
    }
}

pub fn parse_analysis_response(status: u16, body: &str) -> Result<AnalysisData, ApiError> {
    if !is_success(status) {
        return Err(error_from_body(status, body));
    }
    let envelope: AnalysisEnvelope = serde_json::from_str(body).map_err(invalid)?;
    if !envelope.success {
        let message = envelope
            .error
            .or(envelope.message)
            .unwrap_or_else(|| "Failed to analyze lease".to_string());
        return Err(ApiError::Rejected(message));
    }
    let data = envelope
        .data
        .ok_or_else(|| ApiError::InvalidResponse("missing data".to_string()))?;
    data.validate()?;
    Ok(data)
}

pub fn parse_quick_clause_response(status: u16, body: &str) -> Result<QuickClauseResult, ApiError> {
    if !is_success(status) {
        return Err(error_from_body(status, body));
    }
    let envelope: QuickClauseEnvelope = serde_json::from_str(body).map_err(invalid)?;
    let result = match (envelope.data, envelope.error) {
        (Some(result), _) => result,
        (None, Some(error)) => return Err(ApiError::Rejected(error)),
        (None, None) => return Err(ApiError::InvalidResponse("missing data".to_string())),
    };
    if result.analysis.trim().is_empty() || result.suggestion.trim().is_empty() {
        return Err(ApiError::InvalidResponse(
            "analysis and suggestion must not be empty".to_string(),
        ));
    }
    Ok(result)
}

/// Returns the hosted checkout URL to redirect to.
pub fn parse_checkout_response(status: u16, body: &str) -> Result<String, ApiError> {
    let envelope = match serde_json::from_str::<CheckoutEnvelope>(body) {
        Ok(envelope) => envelope,
        Err(_) if !is_success(status) => return Err(ApiError::Status(status)),
        Err(err) => return Err(invalid(err)),
    };
    if let Some(error) = envelope.error.filter(|e| !e.trim().is_empty()) {
        return Err(ApiError::Rejected(error));
    }
    if !is_success(status) {
        return Err(ApiError::Status(status));
    }
    envelope
        .checkout_url
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| ApiError::InvalidResponse("missing checkout_url".to_string()))
}

pub fn parse_access_response(status: u16, body: &str) -> Result<AccessStatus, ApiError> {
    if !is_success(status) {
        return Err(error_from_body(status, body));
    }
    match serde_json::from_str::<AccessEnvelope>(body).map_err(invalid)? {
        AccessEnvelope::Wrapped { data } => Ok(data),
        AccessEnvelope::Bare(access) => Ok(access),
    }
}
