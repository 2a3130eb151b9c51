//! Repository for the `monsters` table.

use bestiary_core::types::DbId;
use sqlx::PgPool;

use crate::models::monster::{CreateMonster, Monster, UpdateMonster};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "monster_id, name, description, power_level, image_url, habitat, \
                       family_id, is_legendary";

/// Provides CRUD operations for monsters.
pub struct MonsterRepo;

impl MonsterRepo {
    /// Insert a new monster and return its generated id.
    ///
    /// Optional fields left out of `input` are stored as NULL.
    pub async fn create(pool: &PgPool, input: &CreateMonster) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO monsters
                (name, description, power_level, image_url, habitat, family_id, is_legendary)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING monster_id",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.power_level)
        .bind(&input.image_url)
        .bind(&input.habitat)
        .bind(input.family_id)
        .bind(input.is_legendary)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Monster>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM monsters WHERE monster_id = $1");
        sqlx::query_as::<_, Monster>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every monster in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Monster>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM monsters ORDER BY monster_id");
        sqlx::query_as::<_, Monster>(&query).fetch_all(pool).await
    }

    /// Update a monster. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMonster,
    ) -> Result<Option<Monster>, sqlx::Error> {
        let query = format!(
            "UPDATE monsters SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                power_level = COALESCE($4, power_level),
                image_url = COALESCE($5, image_url),
                habitat = COALESCE($6, habitat),
                family_id = COALESCE($7, family_id),
                is_legendary = COALESCE($8, is_legendary)
             WHERE monster_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Monster>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.power_level)
            .bind(&input.image_url)
            .bind(&input.habitat)
            .bind(input.family_id)
            .bind(input.is_legendary)
            .fetch_optional(pool)
            .await
    }

    /// Delete a monster, returning the removed row or `None` if it did not
    /// exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Monster>, sqlx::Error> {
        let query = format!("DELETE FROM monsters WHERE monster_id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Monster>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
