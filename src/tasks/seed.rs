use chrono::{Duration, Utc};
use rand::Rng;

use crate::core::error::Result;
use crate::features::sinkholes::models::NewSinkhole;
use crate::features::sinkholes::services::SinkholeService;

/// Clear the catalog and insert the built-in sample dataset.
///
/// Discovery and inspection dates are randomized per record so the sample
/// data does not look frozen in time.
pub async fn run(service: &SinkholeService) -> Result<()> {
    let removed = service.clear().await?;
    tracing::info!("Cleared {} existing sinkholes", removed);

    let mut rng = rand::rng();
    let today = Utc::now().date_naive();

    let mut created = 0;
    for mut record in sample_sinkholes() {
        record.discovery_date = Some(today - Duration::days(rng.random_range(100..=3650)));
        record.last_inspection = Some(today - Duration::days(rng.random_range(10..=365)));

        service.insert_raw(record).await?;
        created += 1;
    }

    tracing::info!("Successfully created {} sinkholes", created);
    Ok(())
}

/// Well-known sinkholes around the world.
///
/// The risk and geology labels are the dataset's own uppercase vocabulary and
/// are inserted verbatim; the API's lowercase enumeration only applies to
/// records going through the validated create path.
pub fn sample_sinkholes() -> Vec<NewSinkhole> {
    vec![
        NewSinkhole {
            name: "Dead Sea Sinkholes".to_string(),
            description: Some(
                "Cluster of sinkholes forming along the Dead Sea shore due to water level decline."
                    .to_string(),
            ),
            latitude: 31.5590,
            longitude: 35.4732,
            diameter: Some(15.0),
            depth: Some(12.0),
            risk_level: "HIGH".to_string(),
            geological_type: Some("DISSOLUTION".to_string()),
            soil_type: Some("Salt deposits".to_string()),
            bedrock_type: Some("Limestone".to_string()),
            water_table_depth: Some(5.0),
            is_active: true,
            ..NewSinkhole::default()
        },
        NewSinkhole {
            name: "Guatemala City Sinkhole".to_string(),
            description: Some("Massive urban sinkhole that appeared in Guatemala City.".to_string()),
            latitude: 14.6341,
            longitude: -90.5069,
            diameter: Some(20.0),
            depth: Some(30.0),
            risk_level: "CRITICAL".to_string(),
            geological_type: Some("COLLAPSE".to_string()),
            soil_type: Some("Volcanic pumice".to_string()),
            bedrock_type: Some("Volcanic rock".to_string()),
            water_table_depth: Some(15.0),
            is_active: false,
            ..NewSinkhole::default()
        },
        NewSinkhole {
            name: "Xiaozhai Tiankeng".to_string(),
            description: Some(
                "One of the world's deepest sinkholes in Chongqing, China.".to_string(),
            ),
            latitude: 28.8333,
            longitude: 109.4833,
            diameter: Some(537.0),
            depth: Some(662.0),
            risk_level: "LOW".to_string(),
            geological_type: Some("KARST".to_string()),
            soil_type: Some("Karst soil".to_string()),
            bedrock_type: Some("Limestone".to_string()),
            water_table_depth: Some(100.0),
            is_active: false,
            ..NewSinkhole::default()
        },
        NewSinkhole {
            name: "Bayou Corne Sinkhole".to_string(),
            description: Some(
                "Sinkhole formed from salt dome cavern collapse in Louisiana.".to_string(),
            ),
            latitude: 29.9528,
            longitude: -91.1806,
            diameter: Some(350.0),
            depth: Some(240.0),
            risk_level: "HIGH".to_string(),
            geological_type: Some("ANTHROPOGENIC".to_string()),
            soil_type: Some("Swamp deposits".to_string()),
            bedrock_type: Some("Salt dome".to_string()),
            water_table_depth: Some(2.0),
            is_active: true,
            ..NewSinkhole::default()
        },
        NewSinkhole {
            name: "Berezniki Sinkhole".to_string(),
            description: Some("Mining-related sinkhole in Berezniki, Russia.".to_string()),
            latitude: 59.4089,
            longitude: 56.8200,
            diameter: Some(80.0),
            depth: Some(78.0),
            risk_level: "CRITICAL".to_string(),
            geological_type: Some("ANTHROPOGENIC".to_string()),
            soil_type: Some("Clay and sand".to_string()),
            bedrock_type: Some("Potash deposits".to_string()),
            water_table_depth: Some(10.0),
            is_active: true,
            ..NewSinkhole::default()
        },
        NewSinkhole {
            name: "Winter Park Sinkhole".to_string(),
            description: Some("Famous sinkhole in Winter Park, Florida.".to_string()),
            latitude: 28.5997,
            longitude: -81.3392,
            diameter: Some(107.0),
            depth: Some(27.0),
            risk_level: "MEDIUM".to_string(),
            geological_type: Some("SUBSIDENCE".to_string()),
            soil_type: Some("Sandy soil".to_string()),
            bedrock_type: Some("Limestone".to_string()),
            water_table_depth: Some(8.0),
            is_active: false,
            ..NewSinkhole::default()
        },
        NewSinkhole {
            name: "Bimmah Sinkhole".to_string(),
            description: Some("Beautiful water-filled sinkhole in Oman.".to_string()),
            latitude: 23.0367,
            longitude: 59.0894,
            diameter: Some(40.0),
            depth: Some(20.0),
            risk_level: "LOW".to_string(),
            geological_type: Some("KARST".to_string()),
            soil_type: Some("Coastal deposits".to_string()),
            bedrock_type: Some("Limestone".to_string()),
            water_table_depth: Some(0.5),
            is_active: false,
            ..NewSinkhole::default()
        },
        NewSinkhole {
            name: "Daisetta Sinkhole".to_string(),
            description: Some("Large sinkhole in Daisetta, Texas.".to_string()),
            latitude: 30.1116,
            longitude: -94.6441,
            diameter: Some(182.0),
            depth: Some(45.0),
            risk_level: "MEDIUM".to_string(),
            geological_type: Some("SUBSIDENCE".to_string()),
            soil_type: Some("Clay and sand".to_string()),
            bedrock_type: Some("Salt dome".to_string()),
            water_table_depth: Some(12.0),
            is_active: false,
            ..NewSinkhole::default()
        },
        NewSinkhole {
            name: "Qattara Depression".to_string(),
            description: Some("Massive natural depression in Egypt.".to_string()),
            latitude: 29.5333,
            longitude: 27.1333,
            diameter: Some(80000.0),
            depth: Some(133.0),
            risk_level: "LOW".to_string(),
            geological_type: Some("DISSOLUTION".to_string()),
            soil_type: Some("Sand and salt".to_string()),
            bedrock_type: Some("Limestone".to_string()),
            water_table_depth: Some(50.0),
            is_active: false,
            ..NewSinkhole::default()
        },
        NewSinkhole {
            name: "Corvette Museum Sinkhole".to_string(),
            description: Some("Sinkhole that swallowed classic cars in Kentucky.".to_string()),
            latitude: 36.9872,
            longitude: -86.4497,
            diameter: Some(12.0),
            depth: Some(18.0),
            risk_level: "MEDIUM".to_string(),
            geological_type: Some("KARST".to_string()),
            soil_type: Some("Clay".to_string()),
            bedrock_type: Some("Limestone".to_string()),
            water_table_depth: Some(20.0),
            is_active: false,
            ..NewSinkhole::default()
        },
        NewSinkhole {
            name: "Devil's Sinkhole".to_string(),
            description: Some("Deep karst sinkhole in Texas.".to_string()),
            latitude: 30.0500,
            longitude: -100.3667,
            diameter: Some(12.0),
            depth: Some(107.0),
            risk_level: "LOW".to_string(),
            geological_type: Some("KARST".to_string()),
            soil_type: Some("Rocky soil".to_string()),
            bedrock_type: Some("Limestone".to_string()),
            water_table_depth: Some(80.0),
            is_active: false,
            ..NewSinkhole::default()
        },
        NewSinkhole {
            name: "Macungie Sinkhole".to_string(),
            description: Some("Urban sinkhole in Pennsylvania.".to_string()),
            latitude: 40.5156,
            longitude: -75.5538,
            diameter: Some(9.0),
            depth: Some(15.0),
            risk_level: "HIGH".to_string(),
            geological_type: Some("SUBSIDENCE".to_string()),
            soil_type: Some("Urban fill".to_string()),
            bedrock_type: Some("Limestone".to_string()),
            water_table_depth: Some(7.0),
            is_active: true,
            ..NewSinkhole::default()
        },
        NewSinkhole {
            name: "Blue Hole (Dahab)".to_string(),
            description: Some("Famous diving spot, underwater sinkhole in Egypt.".to_string()),
            latitude: 28.5833,
            longitude: 34.5167,
            diameter: Some(52.0),
            depth: Some(130.0),
            risk_level: "LOW".to_string(),
            geological_type: Some("KARST".to_string()),
            soil_type: Some("Coral reef".to_string()),
            bedrock_type: Some("Limestone".to_string()),
            water_table_depth: Some(0.0),
            is_active: false,
            ..NewSinkhole::default()
        },
        NewSinkhole {
            name: "Zacatón Sinkhole".to_string(),
            description: Some(
                "Deepest water-filled sinkhole in the world, Mexico.".to_string(),
            ),
            latitude: 23.8333,
            longitude: -99.1667,
            diameter: Some(116.0),
            depth: Some(339.0),
            risk_level: "LOW".to_string(),
            geological_type: Some("KARST".to_string()),
            soil_type: Some("Volcanic deposits".to_string()),
            bedrock_type: Some("Limestone".to_string()),
            water_table_depth: Some(0.0),
            is_active: false,
            ..NewSinkhole::default()
        },
        NewSinkhole {
            name: "Sarisarinama Sinkholes".to_string(),
            description: Some("Tepui sinkholes in Venezuela.".to_string()),
            latitude: 4.6667,
            longitude: -64.3167,
            diameter: Some(352.0),
            depth: Some(314.0),
            risk_level: "LOW".to_string(),
            geological_type: Some("COLLAPSE".to_string()),
            soil_type: Some("Organic soil".to_string()),
            bedrock_type: Some("Sandstone".to_string()),
            water_table_depth: Some(50.0),
            is_active: false,
            ..NewSinkhole::default()
        },
    ]
}
