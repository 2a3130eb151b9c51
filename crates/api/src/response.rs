//! Response bodies that are not plain rows.

use bestiary_core::types::DbId;
use serde::Serialize;

/// Body of `201 Created` for `POST /monsterfamilies`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyCreated {
    pub message: &'static str,
    pub family_id: DbId,
}

/// Body of `201 Created` for `POST /monsters`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterCreated {
    pub message: &'static str,
    pub monster_id: DbId,
}
