use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, put},
    Router,
};
use serde_json::json;

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{Car, CarUpdate, NewCar};
use crate::repository::CarRepository;

pub fn router() -> Router<CarRepository> {
    Router::new()
        .route("/", get(list_cars).post(create_car))
        .route("/export", get(export_cars))
        .route("/:id", put(update_car).delete(delete_car))
}

async fn list_cars(
    State(repo): State<CarRepository>,
) -> Result<Json<Vec<Car>>, AppError> {
    let cars = repo.list_all().await?;
    Ok(Json(cars))
}

async fn create_car(
    State(repo): State<CarRepository>,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    // Deserializing by hand keeps the missing-field name in the 400 message.
    let new_car: NewCar = serde_json::from_value(payload)?;

    if new_car.brand.trim().is_empty() {
        return Err(AppError::Validation("Field 'brand' cannot be empty".to_string()));
    }
    if new_car.model.trim().is_empty() {
        return Err(AppError::Validation("Field 'model' cannot be empty".to_string()));
    }
    if new_car.color.trim().is_empty() {
        return Err(AppError::Validation("Field 'color' cannot be empty".to_string()));
    }
    if new_car.status.trim().is_empty() {
        return Err(AppError::Validation("Field 'status' cannot be empty".to_string()));
    }

    let id = repo.create(&new_car).await?;
    tracing::info!("{} Created car {} ({} {})", API_NAME, id, new_car.brand, new_car.model);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Carro adicionado com sucesso!" })),
    ))
}

async fn update_car(
    State(repo): State<CarRepository>,
    Path(id): Path<i64>,
    Json(update): Json<CarUpdate>,
) -> Result<Json<serde_json::Value>, AppError> {
    // Text fields may be omitted, but never blanked out.
    if let Some(brand) = &update.brand {
        if brand.trim().is_empty() {
            return Err(AppError::Validation("Field 'brand' cannot be empty".to_string()));
        }
    }
    if let Some(model) = &update.model {
        if model.trim().is_empty() {
            return Err(AppError::Validation("Field 'model' cannot be empty".to_string()));
        }
    }
    if let Some(color) = &update.color {
        if color.trim().is_empty() {
            return Err(AppError::Validation("Field 'color' cannot be empty".to_string()));
        }
    }
    if let Some(status) = &update.status {
        if status.trim().is_empty() {
            return Err(AppError::Validation("Field 'status' cannot be empty".to_string()));
        }
    }

    let mut car = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Car with id {} not found", id)))?;

    // Fields absent from the request keep their stored values.
    car.apply(update);
    repo.update(&car).await?;
    tracing::info!("{} Updated car {}", API_NAME, id);

    Ok(Json(json!({ "message": "Carro atualizado com sucesso!" })))
}

async fn delete_car(
    State(repo): State<CarRepository>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    if !repo.delete(id).await? {
        return Err(AppError::NotFound(format!("Car with id {} not found", id)));
    }
    tracing::info!("{} Deleted car {}", API_NAME, id);

    Ok(Json(json!({ "message": "Carro excluído com sucesso!" })))
}

async fn export_cars(State(repo): State<CarRepository>) -> Result<Response, AppError> {
    let cars = repo.list_all().await?;
    let body = render_csv(&cars)?;
    tracing::info!("{} Exported {} cars to CSV", API_NAME, cars.len());

    let headers = [
        (header::CONTENT_TYPE, "text/csv"),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=relatorio_carros.csv",
        ),
    ];
    Ok((headers, body).into_response())
}

/// Render the inventory report. The column set matches the original report
/// layout: `status` is stored but not exported. Free-text fields containing
/// delimiters or line breaks are quoted by the writer.
fn render_csv(cars: &[Car]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "ID",
        "Marca",
        "Modelo",
        "Ano",
        "Cor",
        "Preço de Compra",
        "Preço de Venda",
    ])?;

    for car in cars {
        writer.write_record([
            car.id.to_string(),
            car.brand.clone(),
            car.model.clone(),
            car.year.to_string(),
            car.color.clone(),
            car.purchase_price.to_string(),
            car.sale_price.to_string(),
        ])?;
    }

    Ok(writer.into_inner().map_err(|e| e.into_error())?)
}
