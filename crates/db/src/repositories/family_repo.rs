//! Repository for the `monster_families` table.

use bestiary_core::types::DbId;
use sqlx::PgPool;

use crate::models::family::{CreateFamily, MonsterFamily, UpdateFamily};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "family_id, family_name, family_description";

/// Provides CRUD operations for monster families.
pub struct FamilyRepo;

impl FamilyRepo {
    /// Insert a new family and return its generated id.
    pub async fn create(pool: &PgPool, input: &CreateFamily) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO monster_families (family_name, family_description)
             VALUES ($1, $2)
             RETURNING family_id",
        )
        .bind(&input.name)
        .bind(&input.description)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MonsterFamily>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM monster_families WHERE family_id = $1");
        sqlx::query_as::<_, MonsterFamily>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every family in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<MonsterFamily>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM monster_families ORDER BY family_id");
        sqlx::query_as::<_, MonsterFamily>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a family. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFamily,
    ) -> Result<Option<MonsterFamily>, sqlx::Error> {
        let query = format!(
            "UPDATE monster_families SET
                family_name = COALESCE($2, family_name),
                family_description = COALESCE($3, family_description)
             WHERE family_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MonsterFamily>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a family, returning the removed row or `None` if it did not
    /// exist.
    ///
    /// Monsters referencing the family are left to the foreign key's
    /// `ON DELETE SET NULL`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<MonsterFamily>, sqlx::Error> {
        let query = format!("DELETE FROM monster_families WHERE family_id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, MonsterFamily>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
