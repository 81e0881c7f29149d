use crate::models::{Car, NewCar};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct CarRepository {
    pool: SqlitePool,
}

impl CarRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the cars table on startup if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS cars (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                brand TEXT NOT NULL,
                model TEXT NOT NULL,
                year INTEGER NOT NULL,
                color TEXT NOT NULL,
                purchase_price REAL NOT NULL,
                sale_price REAL NOT NULL,
                status TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn list_all(&self) -> Result<Vec<Car>, sqlx::Error> {
        sqlx::query_as::<_, Car>(
            "SELECT id, brand, model, year, color, purchase_price, sale_price, status
             FROM cars ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Car>, sqlx::Error> {
        sqlx::query_as::<_, Car>(
            "SELECT id, brand, model, year, color, purchase_price, sale_price, status
             FROM cars WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Insert a new car and return the id SQLite assigned to it.
    pub async fn create(&self, car: &NewCar) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO cars (brand, model, year, color, purchase_price, sale_price, status)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&car.brand)
        .bind(&car.model)
        .bind(car.year)
        .bind(&car.color)
        .bind(car.purchase_price)
        .bind(car.sale_price)
        .bind(&car.status)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Write back a full row in a single statement. The row is expected to
    /// have been fetched and merged with the client's partial update first.
    pub async fn update(&self, car: &Car) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE cars SET brand = ?, model = ?, year = ?, color = ?,
             purchase_price = ?, sale_price = ?, status = ? WHERE id = ?",
        )
        .bind(&car.brand)
        .bind(&car.model)
        .bind(car.year)
        .bind(&car.color)
        .bind(car.purchase_price)
        .bind(car.sale_price)
        .bind(&car.status)
        .bind(car.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Delete a row; returns false when no row with that id existed.
    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cars WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
