use std::fs;
use std::path::Path;

use crate::core::error::Result;
use crate::features::sinkholes::services::SinkholeService;

/// Write the entire catalog as a JSON array, overwriting any existing file.
///
/// Records go through the same serialized form the API returns, so the
/// artifact can be consumed by any downstream static display.
pub async fn run(service: &SinkholeService, output: &Path) -> Result<()> {
    let sinkholes = service.list().await?;

    let json = serde_json::to_string_pretty(&sinkholes)?;
    fs::write(output, json)?;

    tracing::info!(
        "Exported {} sinkholes to {}",
        sinkholes.len(),
        output.display()
    );
    Ok(())
}
