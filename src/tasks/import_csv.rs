use std::path::Path;

use rand::Rng;
use serde::Deserialize;

use crate::core::error::Result;
use crate::features::sinkholes::models::NewSinkhole;
use crate::features::sinkholes::services::SinkholeService;

/// Option sets for fields the CSV does not carry.
///
/// This loader's vocabulary is lowercase and narrower than both the API
/// enumeration and the sample dataset's labels; the mismatch is inherited
/// from the data sources and is deliberately not unified.
pub const RISK_CHOICES: [&str; 3] = ["low", "medium", "high"];
pub const GEOLOGICAL_CHOICES: [&str; 4] = ["karst", "dissolution", "collapse", "subsidence"];

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Latitude")]
    latitude: Option<f64>,
    #[serde(rename = "Longitude")]
    longitude: Option<f64>,
}

/// Clear the catalog and create one sinkhole per CSV row.
///
/// Rows without both coordinates are skipped. Physical measurements are not
/// part of the input, so they are drawn from fixed ranges per record.
pub async fn run(service: &SinkholeService, path: &Path) -> Result<()> {
    let mut reader = csv::Reader::from_path(path)?;

    let removed = service.clear().await?;
    tracing::info!("Cleared {} existing sinkholes", removed);

    let mut rng = rand::rng();
    let mut created = 0;

    for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
        let row = row?;
        let (Some(latitude), Some(longitude)) = (row.latitude, row.longitude) else {
            tracing::warn!("Skipping row {}: missing coordinates", index + 1);
            continue;
        };

        let record = NewSinkhole {
            name: format!("Sinkhole #{}", index + 1),
            description: Some(format!(
                "Sinkhole imported at coordinates ({:.6}, {:.6})",
                latitude, longitude
            )),
            latitude,
            longitude,
            diameter: Some(rng.random_range(5.0..=25.0)),
            depth: Some(rng.random_range(3.0..=15.0)),
            water_table_depth: Some(rng.random_range(5.0..=20.0)),
            risk_level: RISK_CHOICES[rng.random_range(0..RISK_CHOICES.len())].to_string(),
            geological_type: Some(
                GEOLOGICAL_CHOICES[rng.random_range(0..GEOLOGICAL_CHOICES.len())].to_string(),
            ),
            ..NewSinkhole::default()
        };

        service.insert_raw(record).await?;
        created += 1;
    }

    tracing::info!(
        "Successfully imported {} sinkholes from {}",
        created,
        path.display()
    );
    Ok(())
}
