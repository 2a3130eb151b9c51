//! Handlers for the `/monsterfamilies` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bestiary_core::types::DbId;
use bestiary_core::validation::require_name;
use bestiary_db::models::family::{CreateFamily, MonsterFamily, UpdateFamily};

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::response::FamilyCreated;
use crate::state::AppState;

const ENTITY: &str = "Monster family";

/// GET /monsterfamilies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MonsterFamily>>> {
    let families = state.store.list_families().await?;
    Ok(Json(families))
}

/// GET /monsterfamilies/{familyId}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MonsterFamily>> {
    let family = state
        .store
        .find_family(id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(family))
}

/// POST /monsterfamilies
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateFamily>,
) -> AppResult<(StatusCode, Json<FamilyCreated>)> {
    require_name(input.name.as_deref())?;

    let family_id = state.store.create_family(&input).await?;
    tracing::info!(family_id, "Monster family created");

    Ok((
        StatusCode::CREATED,
        Json(FamilyCreated {
            message: "Monster family created",
            family_id,
        }),
    ))
}

/// PUT /monsterfamilies/{familyId}
///
/// Fields missing from the body keep their stored value.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    JsonBody(input): JsonBody<UpdateFamily>,
) -> AppResult<Json<MonsterFamily>> {
    let family = state
        .store
        .update_family(id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    tracing::info!(family_id = id, "Monster family updated");
    Ok(Json(family))
}

/// DELETE /monsterfamilies/{familyId}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MonsterFamily>> {
    let family = state
        .store
        .delete_family(id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    tracing::info!(family_id = id, "Monster family deleted");
    Ok(Json(family))
}
