//! Startup schema: idempotent DDL for the three record tables.

use crate::error::AppError;
use sqlx::SqlitePool;

const DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS restaurants (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        address TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pizzas (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        ingredients TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS restaurant_pizzas (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        price INTEGER NOT NULL,
        restaurant_id INTEGER NOT NULL REFERENCES restaurants (id) ON DELETE CASCADE,
        pizza_id INTEGER NOT NULL REFERENCES pizzas (id)
    )
    "#,
];

/// Create the schema if absent. Safe to run on every startup.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
