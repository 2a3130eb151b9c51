//! The storage seam handlers depend on.
//!
//! Route handlers hold an `Arc<dyn BestiaryStore>` instead of a pool so a
//! test double can stand in for Postgres. [`PgStore`] is the production
//! implementation and simply forwards to the repositories.

use async_trait::async_trait;
use bestiary_core::types::DbId;

use crate::models::family::{CreateFamily, MonsterFamily, UpdateFamily};
use crate::models::monster::{CreateMonster, Monster, UpdateMonster};
use crate::repositories::{FamilyRepo, MonsterRepo};
use crate::DbPool;

/// CRUD over monster families and monsters.
///
/// Lookups and mutations that miss return `Ok(None)`; `Err` is reserved for
/// database failures.
#[async_trait]
pub trait BestiaryStore: Send + Sync {
    /// Check that the backing database answers.
    async fn ping(&self) -> Result<(), sqlx::Error>;

    async fn list_families(&self) -> Result<Vec<MonsterFamily>, sqlx::Error>;
    async fn find_family(&self, id: DbId) -> Result<Option<MonsterFamily>, sqlx::Error>;
    async fn create_family(&self, input: &CreateFamily) -> Result<DbId, sqlx::Error>;
    async fn update_family(
        &self,
        id: DbId,
        input: &UpdateFamily,
    ) -> Result<Option<MonsterFamily>, sqlx::Error>;
    async fn delete_family(&self, id: DbId) -> Result<Option<MonsterFamily>, sqlx::Error>;

    async fn list_monsters(&self) -> Result<Vec<Monster>, sqlx::Error>;
    async fn find_monster(&self, id: DbId) -> Result<Option<Monster>, sqlx::Error>;
    async fn create_monster(&self, input: &CreateMonster) -> Result<DbId, sqlx::Error>;
    async fn update_monster(
        &self,
        id: DbId,
        input: &UpdateMonster,
    ) -> Result<Option<Monster>, sqlx::Error>;
    async fn delete_monster(&self, id: DbId) -> Result<Option<Monster>, sqlx::Error>;
}

/// [`BestiaryStore`] backed by a Postgres connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BestiaryStore for PgStore {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }

    async fn list_families(&self) -> Result<Vec<MonsterFamily>, sqlx::Error> {
        FamilyRepo::list(&self.pool).await
    }

    async fn find_family(&self, id: DbId) -> Result<Option<MonsterFamily>, sqlx::Error> {
        FamilyRepo::find_by_id(&self.pool, id).await
    }

    async fn create_family(&self, input: &CreateFamily) -> Result<DbId, sqlx::Error> {
        FamilyRepo::create(&self.pool, input).await
    }

    async fn update_family(
        &self,
        id: DbId,
        input: &UpdateFamily,
    ) -> Result<Option<MonsterFamily>, sqlx::Error> {
        FamilyRepo::update(&self.pool, id, input).await
    }

    async fn delete_family(&self, id: DbId) -> Result<Option<MonsterFamily>, sqlx::Error> {
        FamilyRepo::delete(&self.pool, id).await
    }

    async fn list_monsters(&self) -> Result<Vec<Monster>, sqlx::Error> {
        MonsterRepo::list(&self.pool).await
    }

    async fn find_monster(&self, id: DbId) -> Result<Option<Monster>, sqlx::Error> {
        MonsterRepo::find_by_id(&self.pool, id).await
    }

    async fn create_monster(&self, input: &CreateMonster) -> Result<DbId, sqlx::Error> {
        MonsterRepo::create(&self.pool, input).await
    }

    async fn update_monster(
        &self,
        id: DbId,
        input: &UpdateMonster,
    ) -> Result<Option<Monster>, sqlx::Error> {
        MonsterRepo::update(&self.pool, id, input).await
    }

    async fn delete_monster(&self, id: DbId) -> Result<Option<Monster>, sqlx::Error> {
        MonsterRepo::delete(&self.pool, id).await
    }
}
