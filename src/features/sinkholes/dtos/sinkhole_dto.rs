use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::sinkholes::models::{NewSinkhole, Sinkhole, DEFAULT_RISK_LEVEL, RISK_LEVELS};

/// Response DTO carrying the full serialized form of a sinkhole
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SinkholeResponseDto {
    pub id: Uuid,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Sinkhole> for SinkholeResponseDto {
    fn from(s: Sinkhole) -> Self {
        Self {
            id: s.id,
            name: s.name,
            description: s.description,
            latitude: s.latitude,
            longitude: s.longitude,
            diameter: s.diameter,
            depth: s.depth,
            risk_level: s.risk_level,
            geological_type: s.geological_type,
            soil_type: s.soil_type,
            bedrock_type: s.bedrock_type,
            water_table_depth: s.water_table_depth,
            discovery_date: s.discovery_date,
            last_inspection: s.last_inspection,
            is_active: s.is_active,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

/// Request DTO for creating a sinkhole, also used for full replacement (PUT).
///
/// The required fields are modelled as `Option` plus `required` validation so
/// a missing field lands in the field-keyed error map instead of failing JSON
/// deserialization.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateSinkholeDto {
    #[validate(
        required(message = "name is required"),
        length(min = 1, max = 200, message = "name must be between 1 and 200 characters")
    )]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(required(message = "latitude is required"))]
    #[serde(default, deserialize_with = "coerce_opt_f64")]
    pub latitude: Option<f64>,

    #[validate(required(message = "longitude is required"))]
    #[serde(default, deserialize_with = "coerce_opt_f64")]
    pub longitude: Option<f64>,

    /// Diameter in meters
    #[serde(default, deserialize_with = "coerce_opt_f64")]
    pub diameter: Option<f64>,

    /// Depth in meters
    #[serde(default, deserialize_with = "coerce_opt_f64")]
    pub depth: Option<f64>,

    #[validate(custom(function = validate_risk_level))]
    #[serde(default = "default_risk_level")]
    pub risk_level: String,

    pub geological_type: Option<String>,
    pub soil_type: Option<String>,
    pub bedrock_type: Option<String>,

    /// Water table depth in meters
    #[serde(default, deserialize_with = "coerce_opt_f64")]
    pub water_table_depth: Option<f64>,

    pub discovery_date: Option<NaiveDate>,
    pub last_inspection: Option<NaiveDate>,

    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

impl CreateSinkholeDto {
    /// Collapse into an insertable record. Callers run `validate()` first;
    /// the `required` checks guarantee the unwrapped fields are present.
    pub fn into_new(self) -> NewSinkhole {
        NewSinkhole {
            name: self.name.unwrap_or_default(),
            description: self.description,
            latitude: self.latitude.unwrap_or_default(),
            longitude: self.longitude.unwrap_or_default(),
            diameter: self.diameter,
            depth: self.depth,
            risk_level: self.risk_level,
            geological_type: self.geological_type,
            soil_type: self.soil_type,
            bedrock_type: self.bedrock_type,
            water_table_depth: self.water_table_depth,
            discovery_date: self.discovery_date,
            last_inspection: self.last_inspection,
            is_active: self.is_active,
        }
    }
}

/// Request DTO for partial updates (PATCH); absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateSinkholeDto {
    #[validate(length(min = 1, max = 200, message = "name must be between 1 and 200 characters"))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[serde(default, deserialize_with = "coerce_opt_f64")]
    pub latitude: Option<f64>,

    #[serde(default, deserialize_with = "coerce_opt_f64")]
    pub longitude: Option<f64>,

    #[serde(default, deserialize_with = "coerce_opt_f64")]
    pub diameter: Option<f64>,

    #[serde(default, deserialize_with = "coerce_opt_f64")]
    pub depth: Option<f64>,

    #[validate(custom(function = validate_risk_level))]
    pub risk_level: Option<String>,

    pub geological_type: Option<String>,
    pub soil_type: Option<String>,
    pub bedrock_type: Option<String>,

    #[serde(default, deserialize_with = "coerce_opt_f64")]
    pub water_table_depth: Option<f64>,

    pub discovery_date: Option<NaiveDate>,
    pub last_inspection: Option<NaiveDate>,

    pub is_active: Option<bool>,
}

fn default_risk_level() -> String {
    DEFAULT_RISK_LEVEL.to_string()
}

fn default_is_active() -> bool {
    true
}

fn validate_risk_level(value: &str) -> Result<(), ValidationError> {
    if RISK_LEVELS.contains(&value) {
        Ok(())
    } else {
        let mut error = ValidationError::new("invalid_risk_level");
        error.message =
            Some(format!("risk_level must be one of: {}", RISK_LEVELS.join(", ")).into());
        Err(error)
    }
}

/// Accept floats as JSON numbers or as numeric strings, the way permissive
/// form clients send them.
fn coerce_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(value)) => Ok(Some(value)),
        Some(Raw::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_dto(value: serde_json::Value) -> CreateSinkholeDto {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_create_dto_accepts_valid_payload() {
        let dto = create_dto(json!({
            "name": "Winter Park Sinkhole",
            "latitude": 28.5997,
            "longitude": -81.3392,
            "risk_level": "medium"
        }));

        assert!(dto.validate().is_ok());
        let record = dto.into_new();
        assert_eq!(record.name, "Winter Park Sinkhole");
        assert!(record.is_active);
    }

    #[test]
    fn test_create_dto_defaults_risk_level() {
        let dto = create_dto(json!({
            "name": "Test",
            "latitude": 1.0,
            "longitude": 2.0
        }));

        assert!(dto.validate().is_ok());
        assert_eq!(dto.risk_level, "low");
    }

    #[test]
    fn test_create_dto_reports_missing_required_fields() {
        let dto = create_dto(json!({}));

        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("latitude"));
        assert!(fields.contains_key("longitude"));
    }

    #[test]
    fn test_create_dto_rejects_unknown_risk_level() {
        let dto = create_dto(json!({
            "name": "Test",
            "latitude": 1.0,
            "longitude": 2.0,
            "risk_level": "catastrophic"
        }));

        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("risk_level"));
    }

    #[test]
    fn test_create_dto_rejects_overlong_name() {
        let dto = create_dto(json!({
            "name": "x".repeat(201),
            "latitude": 1.0,
            "longitude": 2.0
        }));

        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_create_dto_coerces_string_floats() {
        let dto = create_dto(json!({
            "name": "Test",
            "latitude": "28.5997",
            "longitude": "-81.3392",
            "depth": "12.5"
        }));

        assert_eq!(dto.latitude, Some(28.5997));
        assert_eq!(dto.longitude, Some(-81.3392));
        assert_eq!(dto.depth, Some(12.5));
    }

    #[test]
    fn test_create_dto_rejects_garbage_float_strings() {
        let result: Result<CreateSinkholeDto, _> = serde_json::from_value(json!({
            "name": "Test",
            "latitude": "not-a-number",
            "longitude": 2.0
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_update_dto_allows_empty_payload() {
        let dto: UpdateSinkholeDto = serde_json::from_value(json!({})).unwrap();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_update_dto_rejects_unknown_risk_level() {
        let dto: UpdateSinkholeDto =
            serde_json::from_value(json!({ "risk_level": "unknown" })).unwrap();

        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("risk_level"));
    }
}
