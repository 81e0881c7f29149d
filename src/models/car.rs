use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted inventory row. `id` is assigned by SQLite on insert and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Car {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub purchase_price: f64,
    pub sale_price: f64,
    pub status: String,
}

/// Create payload. Every field is required; a missing key fails
/// deserialization and is reported to the client as a 400.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCar {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub purchase_price: f64,
    pub sale_price: f64,
    pub status: String,
}

/// Partial update payload. Fields absent from the request body stay `None`
/// and leave the stored value untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CarUpdate {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub color: Option<String>,
    pub purchase_price: Option<f64>,
    pub sale_price: Option<f64>,
    pub status: Option<String>,
}

impl Car {
    /// Merge a partial update into this row, field by field.
    pub fn apply(&mut self, update: CarUpdate) {
        if let Some(brand) = update.brand {
            self.brand = brand;
        }
        if let Some(model) = update.model {
            self.model = model;
        }
        if let Some(year) = update.year {
            self.year = year;
        }
        if let Some(color) = update.color {
            self.color = color;
        }
        if let Some(purchase_price) = update.purchase_price {
            self.purchase_price = purchase_price;
        }
        if let Some(sale_price) = update.sale_price {
            self.sale_price = sale_price;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }
}
