use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Risk levels accepted by the public API.
pub const RISK_LEVELS: [&str; 4] = ["low", "medium", "high", "critical"];

pub const DEFAULT_RISK_LEVEL: &str = "low";

/// Database model for a sinkhole record
#[derive(Debug, Clone, FromRow)]
pub struct Sinkhole {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// Diameter in meters
    pub diameter: Option<f64>,
    /// Depth in meters
    pub depth: Option<f64>,
    pub risk_level: String,
    pub geological_type: Option<String>,
    pub soil_type: Option<String>,
    pub bedrock_type: Option<String>,
    /// Water table depth in meters
    pub water_table_depth: Option<f64>,
    pub discovery_date: Option<NaiveDate>,
    pub last_inspection: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Column values for a sinkhole about to be inserted.
///
/// Shared by the validated create path and the bulk maintenance loaders. The
/// loaders write whatever they are given, so `risk_level` is a free string
/// here rather than a checked enumeration.
#[derive(Debug, Clone)]
pub struct NewSinkhole {
    pub name: String,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub diameter: Option<f64>,
    pub depth: Option<f64>,
    pub risk_level: String,
    pub geological_type: Option<String>,
    pub soil_type: Option<String>,
    pub bedrock_type: Option<String>,
    pub water_table_depth: Option<f64>,
    pub discovery_date: Option<NaiveDate>,
    pub last_inspection: Option<NaiveDate>,
    pub is_active: bool,
}

impl Default for NewSinkhole {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            latitude: 0.0,
            longitude: 0.0,
            diameter: None,
            depth: None,
            risk_level: DEFAULT_RISK_LEVEL.to_string(),
            geological_type: None,
            soil_type: None,
            bedrock_type: None,
            water_table_depth: None,
            discovery_date: None,
            last_inspection: None,
            is_active: true,
        }
    }
}
