use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::sinkholes::dtos::{CreateSinkholeDto, SinkholeResponseDto, UpdateSinkholeDto};
use crate::features::sinkholes::models::{NewSinkhole, Sinkhole};

/// Service for sinkhole CRUD and the bulk maintenance entry points
pub struct SinkholeService {
    pool: SqlitePool,
}

impl SinkholeService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all sinkholes as models, newest-created first
    pub async fn list_records(&self) -> Result<Vec<Sinkhole>> {
        let sinkholes = sqlx::query_as::<_, Sinkhole>(
            r#"
            SELECT id, name, description, latitude, longitude, diameter, depth,
                   risk_level, geological_type, soil_type, bedrock_type, water_table_depth,
                   discovery_date, last_inspection, is_active, created_at, updated_at
            FROM sinkholes
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list sinkholes: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(sinkholes)
    }

    /// List all sinkholes in serialized form, newest-created first
    pub async fn list(&self) -> Result<Vec<SinkholeResponseDto>> {
        Ok(self
            .list_records()
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn find(&self, id: Uuid) -> Result<Sinkhole> {
        let sinkhole = sqlx::query_as::<_, Sinkhole>(
            r#"
            SELECT id, name, description, latitude, longitude, diameter, depth,
                   risk_level, geological_type, soil_type, bedrock_type, water_table_depth,
                   discovery_date, last_inspection, is_active, created_at, updated_at
            FROM sinkholes
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get sinkhole: {:?}", e);
            AppError::Database(e)
        })?;

        sinkhole.ok_or_else(|| AppError::NotFound(format!("Sinkhole '{}' not found", id)))
    }

    /// Get one sinkhole by id
    pub async fn get(&self, id: Uuid) -> Result<SinkholeResponseDto> {
        Ok(self.find(id).await?.into())
    }

    /// Create a sinkhole from a validated payload
    pub async fn create(&self, dto: CreateSinkholeDto) -> Result<SinkholeResponseDto> {
        let sinkhole = self.insert_raw(dto.into_new()).await?;

        tracing::info!("Sinkhole created: id={}, name={}", sinkhole.id, sinkhole.name);

        Ok(sinkhole.into())
    }

    /// Trusted insert used by the bulk loaders and by `create`.
    ///
    /// No request-level checks happen here; on the API path the handler has
    /// already validated the DTO, while the loaders write their records
    /// verbatim.
    pub async fn insert_raw(&self, record: NewSinkhole) -> Result<Sinkhole> {
        let now = Utc::now();

        let sinkhole = sqlx::query_as::<_, Sinkhole>(
            r#"
            INSERT INTO sinkholes (
                id, name, description, latitude, longitude, diameter, depth,
                risk_level, geological_type, soil_type, bedrock_type, water_table_depth,
                discovery_date, last_inspection, is_active, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, name, description, latitude, longitude, diameter, depth,
                      risk_level, geological_type, soil_type, bedrock_type, water_table_depth,
                      discovery_date, last_inspection, is_active, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(record.name)
        .bind(record.description)
        .bind(record.latitude)
        .bind(record.longitude)
        .bind(record.diameter)
        .bind(record.depth)
        .bind(record.risk_level)
        .bind(record.geological_type)
        .bind(record.soil_type)
        .bind(record.bedrock_type)
        .bind(record.water_table_depth)
        .bind(record.discovery_date)
        .bind(record.last_inspection)
        .bind(record.is_active)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert sinkhole: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(sinkhole)
    }

    /// Replace every mutable field of a sinkhole (PUT semantics)
    pub async fn replace(&self, id: Uuid, dto: CreateSinkholeDto) -> Result<SinkholeResponseDto> {
        let mut sinkhole = self.find(id).await?;
        let record = dto.into_new();

        sinkhole.name = record.name;
        sinkhole.description = record.description;
        sinkhole.latitude = record.latitude;
        sinkhole.longitude = record.longitude;
        sinkhole.diameter = record.diameter;
        sinkhole.depth = record.depth;
        sinkhole.risk_level = record.risk_level;
        sinkhole.geological_type = record.geological_type;
        sinkhole.soil_type = record.soil_type;
        sinkhole.bedrock_type = record.bedrock_type;
        sinkhole.water_table_depth = record.water_table_depth;
        sinkhole.discovery_date = record.discovery_date;
        sinkhole.last_inspection = record.last_inspection;
        sinkhole.is_active = record.is_active;
        sinkhole.updated_at = Utc::now();

        self.persist(&sinkhole).await?;

        tracing::info!("Sinkhole replaced: id={}", sinkhole.id);

        Ok(sinkhole.into())
    }

    /// Apply the provided fields of a partial update (PATCH semantics)
    pub async fn update(&self, id: Uuid, dto: UpdateSinkholeDto) -> Result<SinkholeResponseDto> {
        let mut sinkhole = self.find(id).await?;

        if let Some(name) = dto.name {
            sinkhole.name = name;
        }
        if let Some(description) = dto.description {
            sinkhole.description = Some(description);
        }
        if let Some(latitude) = dto.latitude {
            sinkhole.latitude = latitude;
        }
        if let Some(longitude) = dto.longitude {
            sinkhole.longitude = longitude;
        }
        if let Some(diameter) = dto.diameter {
            sinkhole.diameter = Some(diameter);
        }
        if let Some(depth) = dto.depth {
            sinkhole.depth = Some(depth);
        }
        if let Some(risk_level) = dto.risk_level {
            sinkhole.risk_level = risk_level;
        }
        if let Some(geological_type) = dto.geological_type {
            sinkhole.geological_type = Some(geological_type);
        }
        if let Some(soil_type) = dto.soil_type {
            sinkhole.soil_type = Some(soil_type);
        }
        if let Some(bedrock_type) = dto.bedrock_type {
            sinkhole.bedrock_type = Some(bedrock_type);
        }
        if let Some(water_table_depth) = dto.water_table_depth {
            sinkhole.water_table_depth = Some(water_table_depth);
        }
        if let Some(discovery_date) = dto.discovery_date {
            sinkhole.discovery_date = Some(discovery_date);
        }
        if let Some(last_inspection) = dto.last_inspection {
            sinkhole.last_inspection = Some(last_inspection);
        }
        if let Some(is_active) = dto.is_active {
            sinkhole.is_active = is_active;
        }
        sinkhole.updated_at = Utc::now();

        self.persist(&sinkhole).await?;

        tracing::info!("Sinkhole updated: id={}", sinkhole.id);

        Ok(sinkhole.into())
    }

    async fn persist(&self, sinkhole: &Sinkhole) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE sinkholes
            SET name = ?, description = ?, latitude = ?, longitude = ?, diameter = ?, depth = ?,
                risk_level = ?, geological_type = ?, soil_type = ?, bedrock_type = ?,
                water_table_depth = ?, discovery_date = ?, last_inspection = ?, is_active = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&sinkhole.name)
        .bind(&sinkhole.description)
        .bind(sinkhole.latitude)
        .bind(sinkhole.longitude)
        .bind(sinkhole.diameter)
        .bind(sinkhole.depth)
        .bind(&sinkhole.risk_level)
        .bind(&sinkhole.geological_type)
        .bind(&sinkhole.soil_type)
        .bind(&sinkhole.bedrock_type)
        .bind(sinkhole.water_table_depth)
        .bind(sinkhole.discovery_date)
        .bind(sinkhole.last_inspection)
        .bind(sinkhole.is_active)
        .bind(sinkhole.updated_at)
        .bind(sinkhole.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update sinkhole: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(())
    }

    /// Delete one sinkhole by id
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM sinkholes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete sinkhole: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Sinkhole '{}' not found", id)));
        }

        tracing::info!("Sinkhole deleted: id={}", id);

        Ok(())
    }

    /// Delete every record, returning the count. Used by the seed loaders
    /// before re-inserting.
    pub async fn clear(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM sinkholes")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to clear sinkholes: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected())
    }

    /// Rewrite one record's coordinates, refreshing `updated_at`
    pub async fn set_coordinates(&self, id: Uuid, latitude: f64, longitude: f64) -> Result<()> {
        let result = sqlx::query(
            "UPDATE sinkholes SET latitude = ?, longitude = ?, updated_at = ? WHERE id = ?",
        )
        .bind(latitude)
        .bind(longitude)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to move sinkhole: {:?}", e);
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Sinkhole '{}' not found", id)));
        }

        Ok(())
    }
}
