use rand::Rng;

use crate::core::error::Result;
use crate::features::sinkholes::services::SinkholeService;

/// Central Rome, the default reference point for relocation runs.
pub const ROME_LATITUDE: f64 = 41.9028;
pub const ROME_LONGITUDE: f64 = 12.4964;

/// Maximum offset applied per axis, in degrees (roughly a 50 km radius).
const MAX_OFFSET_DEGREES: f64 = 0.5;

/// Scatter every sinkhole around the given reference coordinate.
///
/// Offsets are drawn independently and uniformly per axis for each record.
pub async fn run(service: &SinkholeService, latitude: f64, longitude: f64) -> Result<()> {
    let sinkholes = service.list_records().await?;
    let total = sinkholes.len();

    let mut rng = rand::rng();

    for sinkhole in sinkholes {
        let lat = latitude + rng.random_range(-MAX_OFFSET_DEGREES..=MAX_OFFSET_DEGREES);
        let lon = longitude + rng.random_range(-MAX_OFFSET_DEGREES..=MAX_OFFSET_DEGREES);

        service.set_coordinates(sinkhole.id, lat, lon).await?;
    }

    tracing::info!(
        "Successfully moved {} sinkholes to around ({}, {})",
        total,
        latitude,
        longitude
    );
    Ok(())
}
