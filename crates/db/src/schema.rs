//! Startup schema initializer.
//!
//! Issues idempotent `CREATE TABLE IF NOT EXISTS` statements. A failing
//! table is logged and skipped; nothing here aborts the process.

use std::time::Duration;

use sqlx::PgPool;

/// One table's creation statement plus the label used in log lines.
#[derive(Debug, Clone, Copy)]
pub struct TableDefinition {
    pub label: &'static str,
    pub statement: &'static str,
}

pub const MONSTER_FAMILIES: TableDefinition = TableDefinition {
    label: "monster_families",
    statement: "CREATE TABLE IF NOT EXISTS monster_families (
        family_id BIGSERIAL PRIMARY KEY,
        family_name VARCHAR(255) NOT NULL,
        family_description VARCHAR(255) NULL
    )",
};

pub const MONSTERS: TableDefinition = TableDefinition {
    label: "monsters",
    statement: "CREATE TABLE IF NOT EXISTS monsters (
        monster_id BIGSERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        description VARCHAR(500) NULL,
        power_level DOUBLE PRECISION NULL,
        image_url VARCHAR(255) NULL,
        habitat VARCHAR(255) NULL,
        family_id BIGINT NULL REFERENCES monster_families (family_id) ON DELETE SET NULL,
        is_legendary BOOLEAN NULL
    )",
};

/// Declared for the user collection feature; no route reads or writes it yet.
pub const USERS: TableDefinition = TableDefinition {
    label: "users",
    statement: "CREATE TABLE IF NOT EXISTS users (
        user_id BIGSERIAL PRIMARY KEY,
        username VARCHAR(50) NOT NULL,
        display_name VARCHAR(50) NOT NULL
    )",
};

/// Join table between users and monsters. Unused by routes, like [`USERS`].
pub const USER_MONSTERS: TableDefinition = TableDefinition {
    label: "user_monsters",
    statement: "CREATE TABLE IF NOT EXISTS user_monsters (
        user_id BIGINT NOT NULL REFERENCES users (user_id) ON DELETE CASCADE,
        monster_id BIGINT NOT NULL REFERENCES monsters (monster_id) ON DELETE CASCADE,
        PRIMARY KEY (user_id, monster_id)
    )",
};

/// Every table, ordered so referenced tables come before their referrers.
pub const TABLES: [TableDefinition; 4] = [MONSTER_FAMILIES, MONSTERS, USERS, USER_MONSTERS];

/// Execute a single table definition.
pub async fn ensure_table(pool: &PgPool, table: TableDefinition) -> Result<(), sqlx::Error> {
    match sqlx::query(table.statement).execute(pool).await {
        Ok(_) => {
            tracing::info!(table = table.label, "Table ensured");
            Ok(())
        }
        Err(e) => {
            tracing::error!(table = table.label, error = %e, "Failed to create table");
            Err(e)
        }
    }
}

/// Ensure every table in [`TABLES`], continuing past failures.
///
/// Returns how many tables failed. A table whose parent failed will
/// usually fail too; each is still attempted and logged.
pub async fn initialize(pool: &PgPool) -> usize {
    let mut failed = 0;
    for table in TABLES {
        if ensure_table(pool, table).await.is_err() {
            failed += 1;
        }
    }
    failed
}

/// How a bounded schema initialization ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// Every table exists.
    Ready,
    /// Some statements failed; each failure has already been logged.
    Incomplete { failed: usize },
    /// `limit` elapsed first. Statements still in flight are dropped.
    TimedOut,
}

/// Run [`initialize`] for at most `limit`.
///
/// Never fails: the outcome is logged and returned so startup can carry on
/// and bind the listener regardless.
pub async fn initialize_within(pool: &PgPool, limit: Duration) -> InitOutcome {
    match tokio::time::timeout(limit, initialize(pool)).await {
        Ok(0) => {
            tracing::info!("Database schema ready");
            InitOutcome::Ready
        }
        Ok(failed) => {
            tracing::warn!(failed, "Schema initialization incomplete, continuing");
            InitOutcome::Incomplete { failed }
        }
        Err(_) => {
            tracing::warn!(
                timeout_ms = limit.as_millis() as u64,
                "Schema initialization timed out, continuing"
            );
            InitOutcome::TimedOut
        }
    }
}
