//! Monster entity model and DTOs.

use bestiary_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `monsters` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    pub monster_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub power_level: Option<f64>,
    pub image_url: Option<String>,
    pub habitat: Option<String>,
    /// Not checked against `monster_families` here; the foreign key is the
    /// only guard.
    pub family_id: Option<DbId>,
    pub is_legendary: Option<bool>,
}

/// Request body for `POST /monsters`.
///
/// Wire names are the short forms clients send (`desc`, `power`, `image`,
/// `leg`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMonster {
    pub name: Option<String>,
    #[serde(rename = "desc")]
    pub description: Option<String>,
    #[serde(rename = "power")]
    pub power_level: Option<f64>,
    #[serde(rename = "image")]
    pub image_url: Option<String>,
    pub habitat: Option<String>,
    #[serde(rename = "familyId")]
    pub family_id: Option<DbId>,
    #[serde(rename = "leg")]
    pub is_legendary: Option<bool>,
}

/// Request body for `PUT /monsters/{monsterId}`. All fields are optional and
/// omitted ones keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMonster {
    pub name: Option<String>,
    #[serde(rename = "desc")]
    pub description: Option<String>,
    #[serde(rename = "power")]
    pub power_level: Option<f64>,
    #[serde(rename = "image")]
    pub image_url: Option<String>,
    pub habitat: Option<String>,
    #[serde(rename = "familyId")]
    pub family_id: Option<DbId>,
    #[serde(rename = "leg")]
    pub is_legendary: Option<bool>,
}
