//! Wire types for the well telemetry backend API
//!
//! This module defines the request and response payloads the console
//! exchanges with the backend:
//! - Auth: Credentials, TokenGrant
//! - Wells & fields: Well, FieldSite
//! - Telemetry: readings, batches, per-well stats
//! - Reports: daily production reports and their lifecycle status
//! - Alerts: alerts, anomalies, resolution payloads
//! - Query structs for list endpoints (unset fields are omitted from the URL)
//!
//! The backend emits naive UTC timestamps (no offset suffix), so wire
//! timestamps are `NaiveDateTime` rather than `DateTime<Utc>`.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ============================================================================
// Auth
// ============================================================================

/// Login form for `POST /auth/login`.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keeps the password out of logs and panic messages.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Token pair issued by the login endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    pub token_type: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

// ============================================================================
// Wells & Fields
// ============================================================================

/// A producing well as returned by `/wells/`.
#[derive(Debug, Clone, Deserialize)]
pub struct Well {
    pub id: i64,
    pub name: String,
    /// API-14 well identifier
    pub api_number: String,
    pub field_id: i64,
    pub well_type: Option<String>,
    pub status: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// An oil field grouping several wells.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldSite {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub operator: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

// ============================================================================
// Telemetry
// ============================================================================

/// A new telemetry reading for `POST /telemetry/`.
///
/// Every channel is optional; wells report whatever sensors they have.
#[derive(Debug, Clone, Serialize)]
pub struct TelemetryReadingCreate {
    pub well_id: i64,
    pub timestamp: NaiveDateTime,

    // === Production rates ===
    /// Oil rate (bpd)
    pub oil_rate: Option<f64>,
    /// Gas rate (Mscf/d)
    pub gas_rate: Option<f64>,
    /// Water rate (bpd)
    pub water_rate: Option<f64>,

    // === Pressures (psi) ===
    pub wellhead_pressure: Option<f64>,
    pub tubing_pressure: Option<f64>,
    pub casing_pressure: Option<f64>,

    // === Temperatures (°F) ===
    pub wellhead_temperature: Option<f64>,
    pub flowline_temperature: Option<f64>,

    // === Equipment ===
    /// Choke opening (64ths)
    pub choke_size: Option<f64>,
    pub pump_status: Option<bool>,
    /// Pump speed (spm)
    pub pump_speed: Option<f64>,

    /// Originating system, e.g. "SCADA" or "API"
    pub source: String,
}

impl TelemetryReadingCreate {
    /// Empty reading for the given well and time; channels start unset.
    pub fn new(well_id: i64, timestamp: NaiveDateTime) -> Self {
        Self {
            well_id,
            timestamp,
            oil_rate: None,
            gas_rate: None,
            water_rate: None,
            wellhead_pressure: None,
            tubing_pressure: None,
            casing_pressure: None,
            wellhead_temperature: None,
            flowline_temperature: None,
            choke_size: None,
            pump_status: None,
            pump_speed: None,
            source: "API".to_string(),
        }
    }
}

/// Bulk ingest payload for `POST /telemetry/batch`.
#[derive(Debug, Clone, Serialize)]
pub struct TelemetryBatch {
    pub readings: Vec<TelemetryReadingCreate>,
}

/// A stored telemetry reading with server-side quality flags.
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryReading {
    pub id: i64,
    pub well_id: i64,
    pub timestamp: NaiveDateTime,
    pub oil_rate: Option<f64>,
    pub gas_rate: Option<f64>,
    pub water_rate: Option<f64>,
    pub wellhead_pressure: Option<f64>,
    pub tubing_pressure: Option<f64>,
    pub casing_pressure: Option<f64>,
    pub wellhead_temperature: Option<f64>,
    pub flowline_temperature: Option<f64>,
    pub choke_size: Option<f64>,
    pub pump_status: Option<bool>,
    pub pump_speed: Option<f64>,
    /// 0.0 to 1.0, assigned by the validation pass
    pub data_quality_score: f64,
    pub is_validated: bool,
    pub is_anomaly: bool,
    pub created_at: NaiveDateTime,
}

/// Aggregates from `GET /telemetry/stats/{well_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryStats {
    pub well_id: i64,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub total_readings: i64,
    pub avg_oil_rate: Option<f64>,
    pub avg_gas_rate: Option<f64>,
    pub avg_water_rate: Option<f64>,
    pub total_oil: Option<f64>,
    pub total_gas: Option<f64>,
    pub total_water: Option<f64>,
    pub data_quality_avg: f64,
}

// ============================================================================
// Reports
// ============================================================================

/// Lifecycle of a daily production report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Generating,
    Validating,
    Ready,
    Uploading,
    Uploaded,
    Failed,
}

impl ReportStatus {
    /// Wire value, as the backend spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Generating => "generating",
            ReportStatus::Validating => "validating",
            ReportStatus::Ready => "ready",
            ReportStatus::Uploading => "uploading",
            ReportStatus::Uploaded => "uploaded",
            ReportStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A daily production report.
///
/// List responses carry the summary fields only; `GET /reports/{id}`
/// fills in the production totals and validation details.
#[derive(Debug, Clone, Deserialize)]
pub struct Report {
    pub id: i64,
    pub report_date: NaiveDateTime,
    pub status: ReportStatus,
    pub filename: String,
    pub total_wells: Option<i64>,
    pub total_readings: Option<i64>,
    pub data_quality_score: Option<f64>,
    pub uploaded_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,

    // === Detail-only fields, absent in list responses ===
    #[serde(default)]
    pub file_size: Option<i64>,
    /// Oil total (bbl)
    #[serde(default)]
    pub oil_production_total: Option<f64>,
    /// Gas total (Mscf)
    #[serde(default)]
    pub gas_production_total: Option<f64>,
    /// Water total (bbl)
    #[serde(default)]
    pub water_production_total: Option<f64>,
    #[serde(default)]
    pub missing_samples: Option<i64>,
    #[serde(default)]
    pub validation_errors: Option<serde_json::Value>,
    #[serde(default)]
    pub validation_warnings: Option<serde_json::Value>,
    #[serde(default)]
    pub generated_at: Option<NaiveDateTime>,
}

/// Body for `POST /reports/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
    /// Production day to cover, e.g. 2025-03-14
    pub report_date: NaiveDate,
}

// ============================================================================
// Alerts & Anomalies
// ============================================================================

/// Alert severity, lowest to highest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

impl AlertSeverity {
    /// Wire value, as the backend spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Info => "info",
            AlertSeverity::Warning => "warning",
            AlertSeverity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What raised the alert.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Anomaly,
    DataQuality,
    System,
    Compliance,
    Equipment,
}

/// An operational alert.
///
/// Like reports, the list endpoint returns a trimmed shape; resolution
/// metadata only appears on `GET /alerts/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Alert {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub title: String,
    pub description: Option<String>,
    pub well_id: Option<i64>,
    /// Observed value that tripped the alert
    pub value: Option<f64>,
    pub threshold: Option<f64>,
    pub is_resolved: bool,
    pub created_at: NaiveDateTime,

    // === Detail-only fields, absent in list responses ===
    #[serde(default)]
    pub field_id: Option<i64>,
    #[serde(default)]
    pub metric_name: Option<String>,
    #[serde(default)]
    pub resolved_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub resolved_by: Option<String>,
    #[serde(default)]
    pub resolution_notes: Option<String>,
    #[serde(default)]
    pub notification_sent: Option<bool>,
}

/// A statistical anomaly flagged on a telemetry channel.
#[derive(Debug, Clone, Deserialize)]
pub struct Anomaly {
    pub id: i64,
    pub well_id: i64,
    /// Channel name, e.g. "oil_rate"
    pub parameter: String,
    pub value: f64,
    pub expected_value: Option<f64>,
    pub deviation: Option<f64>,
    /// 0.0 to 1.0, higher is more anomalous
    pub anomaly_score: f64,
    pub detection_method: Option<String>,
    pub is_confirmed: bool,
    pub is_false_positive: bool,
    pub detected_at: NaiveDateTime,
}

/// Body for `POST /alerts/{id}/resolve`; `notes` is omitted when unset.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResolveAlert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ============================================================================
// List Queries
// ============================================================================
//
// One struct per list endpoint. Every field is optional and unset fields
// are left out of the query string entirely, so the backend applies its
// own defaults.

/// Filters for `GET /telemetry/`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TelemetryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub well_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Date window for `GET /telemetry/stats/{well_id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDateTime>,
}

/// Plain pagination, used by `GET /fields/`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Filters for `GET /wells/`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WellQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Filters for `GET /reports/`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReportStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Filters for `GET /alerts/`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AlertQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<AlertSeverity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_resolved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Filters for `GET /alerts/anomalies/`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnomalyQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub well_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_confirmed: Option<bool>,
    /// Lookback window, 1 to 90
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

// ============================================================================
// System
// ============================================================================

/// Liveness payload from `GET /health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}
