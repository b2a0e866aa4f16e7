use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use common::types::Message;
use service::{Car, CarRepository, CarService, CreateCarInput, UpdateCarInput};
use tracing::info;

use crate::errors::ApiError;

#[utoipa::path(
    get, path = "/cars", tag = "cars",
    responses(
        (status = 200, description = "All cars in storage order", body = [crate::openapi::CarDoc]),
        (status = 500, description = "Storage unavailable", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list_cars<R: CarRepository + 'static>(
    State(svc): State<CarService<R>>,
) -> Result<Json<Vec<Car<R::Id>>>, ApiError> {
    let cars = svc.list().await?;
    info!(count = cars.len(), "list cars");
    Ok(Json(cars))
}

#[utoipa::path(
    get, path = "/cars/{id}", tag = "cars",
    params(("id" = String, Path, description = "Car id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CarDoc),
        (status = 404, description = "Car not found", body = crate::openapi::MessageDoc),
        (status = 500, description = "Storage unavailable", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_car<R: CarRepository + 'static>(
    State(svc): State<CarService<R>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Car<R::Id>>, ApiError> {
    let id = svc.parse_id(&raw_id)?;
    Ok(Json(svc.get(&id).await?))
}

#[utoipa::path(
    post, path = "/cars", tag = "cars",
    request_body = crate::openapi::CreateCarDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CarDoc),
        (status = 400, description = "Malformed or invalid body", body = crate::openapi::MessageDoc),
        (status = 409, description = "Id already taken (memory backend)", body = crate::openapi::MessageDoc),
        (status = 500, description = "Storage unavailable", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_car<R: CarRepository + 'static>(
    State(svc): State<CarService<R>>,
    payload: Result<Json<CreateCarInput<R::Id>>, JsonRejection>,
) -> Result<(StatusCode, Json<Car<R::Id>>), ApiError> {
    let Json(input) = payload?;
    let car = svc.create(input).await?;
    Ok((StatusCode::CREATED, Json(car)))
}

#[utoipa::path(
    put, path = "/cars/{id}", tag = "cars",
    params(("id" = String, Path, description = "Car id")),
    request_body = crate::openapi::UpdateCarDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::MessageDoc),
        (status = 400, description = "Malformed or invalid body", body = crate::openapi::MessageDoc),
        (status = 404, description = "Car not found", body = crate::openapi::MessageDoc),
        (status = 500, description = "Storage unavailable", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_car<R: CarRepository + 'static>(
    State(svc): State<CarService<R>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateCarInput>, JsonRejection>,
) -> Result<Json<Message>, ApiError> {
    let Json(input) = payload?;
    let id = svc.parse_id(&raw_id)?;
    svc.update(&id, input).await?;
    Ok(Json(Message::new("Car successfully updated")))
}

#[utoipa::path(
    delete, path = "/cars/{id}", tag = "cars",
    params(("id" = String, Path, description = "Car id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Car not found", body = crate::openapi::MessageDoc),
        (status = 500, description = "Storage unavailable", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete_car<R: CarRepository + 'static>(
    State(svc): State<CarService<R>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    let id = svc.parse_id(&raw_id)?;
    svc.delete(&id).await?;
    Ok(Json(Message::new("Car successfully deleted")))
}
