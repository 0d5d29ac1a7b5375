//! Entity CRUD handlers: list, create, read, replace, patch, delete.
//!
//! Reads never fail from the client's point of view: a bad id or store error is logged and answered with `{}` / `[]`.

use crate::error::AppError;
use crate::response::empty_object;
use crate::service::CrudService;
use crate::state::EntityState;
use crate::store::{parse_object_id, Fields, ObjectId};
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

fn parse_id(id_str: &str) -> Result<ObjectId, AppError> {
    parse_object_id(id_str).ok_or_else(|| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}

fn body_to_map(value: Value) -> Result<Fields, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

pub async fn list(State(state): State<EntityState>) -> Json<Value> {
    match CrudService::list(state.store.as_ref(), &state.model).await {
        Ok(rows) => Json(Value::Array(rows)),
        Err(e) => {
            tracing::error!(model = %state.model.route_name, error = %e, "list failed");
            Json(Value::Array(Vec::new()))
        }
    }
}

pub async fn create(
    State(state): State<EntityState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let body = body_to_map(body)?;
    let row = CrudService::create(state.store.as_ref(), &state.model, &body).await?;
    Ok(Json(row))
}

pub async fn read(State(state): State<EntityState>, Path(id_str): Path<String>) -> Json<Value> {
    let Some(id) = parse_object_id(&id_str) else {
        tracing::error!(model = %state.model.route_name, id = %id_str, "invalid id");
        return Json(empty_object());
    };
    match CrudService::read(state.store.as_ref(), &state.model, &id).await {
        Ok(row) => Json(row.unwrap_or_else(empty_object)),
        Err(e) => {
            tracing::error!(model = %state.model.route_name, id = %id, error = %e, "read failed");
            Json(empty_object())
        }
    }
}

pub async fn replace(
    State(state): State<EntityState>,
    Path(id_str): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let id = parse_id(&id_str)?;
    let body = body_to_map(body)?;
    let row = CrudService::replace(state.store.as_ref(), &state.model, &id, &body).await?;
    Ok(Json(row))
}

pub async fn patch(
    State(state): State<EntityState>,
    Path(id_str): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let id = parse_id(&id_str)?;
    let body = body_to_map(body)?;
    let row = CrudService::patch(state.store.as_ref(), &state.model, &id, &body).await?;
    Ok(Json(row))
}

pub async fn delete(
    State(state): State<EntityState>,
    Path(id_str): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id = parse_id(&id_str)?;
    let message = CrudService::delete(state.store.as_ref(), &state.model, &id).await?;
    Ok(Json(message))
}
