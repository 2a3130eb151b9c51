//! Monster family entity model and DTOs.

use bestiary_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `monster_families` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterFamily {
    pub family_id: DbId,
    pub family_name: String,
    pub family_description: Option<String>,
}

/// Request body for `POST /monsterfamilies`.
///
/// `name` is optional at the wire level so a missing name is reported as a
/// validation failure rather than a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateFamily {
    pub name: Option<String>,
    #[serde(rename = "desc")]
    pub description: Option<String>,
}

/// Request body for `PUT /monsterfamilies/{familyId}`. Omitted fields keep
/// their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFamily {
    pub name: Option<String>,
    #[serde(rename = "desc")]
    pub description: Option<String>,
}
