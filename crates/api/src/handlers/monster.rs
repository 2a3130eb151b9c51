//! Handlers for the `/monsters` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bestiary_core::types::DbId;
use bestiary_core::validation::require_name;
use bestiary_db::models::monster::{CreateMonster, Monster, UpdateMonster};

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::response::MonsterCreated;
use crate::state::AppState;

const ENTITY: &str = "Monster";

/// GET /monsters
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Monster>>> {
    let monsters = state.store.list_monsters().await?;
    Ok(Json(monsters))
}

/// GET /monsters/{monsterId}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Monster>> {
    let monster = state
        .store
        .find_monster(id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(monster))
}

/// POST /monsters
///
/// Only `name` is required. `familyId` is passed through unchecked.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateMonster>,
) -> AppResult<(StatusCode, Json<MonsterCreated>)> {
    require_name(input.name.as_deref())?;

    let monster_id = state.store.create_monster(&input).await?;
    tracing::info!(monster_id, family_id = ?input.family_id, "Monster created");

    Ok((
        StatusCode::CREATED,
        Json(MonsterCreated {
            message: "Monster created",
            monster_id,
        }),
    ))
}

/// PUT /monsters/{monsterId}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    JsonBody(input): JsonBody<UpdateMonster>,
) -> AppResult<Json<Monster>> {
    let monster = state
        .store
        .update_monster(id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    tracing::info!(monster_id = id, "Monster updated");
    Ok(Json(monster))
}

/// DELETE /monsters/{monsterId}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Monster>> {
    let monster = state
        .store
        .delete_monster(id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    tracing::info!(monster_id = id, "Monster deleted");
    Ok(Json(monster))
}
