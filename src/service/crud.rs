//! Record queries and mutations against SQLite.

use crate::error::AppError;
use crate::models::{
    NewRestaurantPizza, Pizza, Restaurant, RestaurantDetail, RestaurantPizza,
    RestaurantPizzaCreated, RestaurantPizzaDetail, RestaurantPizzaWithPizza,
};
use sqlx::SqlitePool;

pub struct RecordService;

impl RecordService {
    /// All restaurants, ordered by id.
    pub async fn list_restaurants(pool: &SqlitePool) -> Result<Vec<Restaurant>, AppError> {
        tracing::debug!("list restaurants");
        let rows = sqlx::query_as::<_, Restaurant>(
            "SELECT id, name, address FROM restaurants ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// One restaurant with its association rows, each carrying its pizza.
    /// Returns None when no restaurant matches.
    pub async fn find_restaurant(
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<RestaurantDetail>, AppError> {
        tracing::debug!(id, "fetch restaurant");
        let Some(restaurant) = sqlx::query_as::<_, Restaurant>(
            "SELECT id, name, address FROM restaurants WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?
        else {
            return Ok(None);
        };

        let offers = sqlx::query_as::<_, RestaurantPizzaWithPizza>(
            "SELECT rp.id, rp.price, rp.pizza_id, rp.restaurant_id, \
                    p.name AS pizza_name, p.ingredients AS pizza_ingredients \
             FROM restaurant_pizzas rp \
             JOIN pizzas p ON p.id = rp.pizza_id \
             WHERE rp.restaurant_id = ? \
             ORDER BY rp.id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        Ok(Some(RestaurantDetail {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
            restaurant_pizzas: offers.into_iter().map(RestaurantPizzaDetail::from).collect(),
        }))
    }

    /// Delete a restaurant and its association rows in one transaction.
    /// Returns false when no restaurant matched.
    pub async fn delete_restaurant(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        tracing::debug!(id, "delete restaurant");
        let mut tx = pool.begin().await?;
        sqlx::query("DELETE FROM restaurant_pizzas WHERE restaurant_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let deleted = sqlx::query("DELETE FROM restaurants WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tx.commit().await?;
        Ok(deleted > 0)
    }

    /// All pizzas, ordered by id.
    pub async fn list_pizzas(pool: &SqlitePool) -> Result<Vec<Pizza>, AppError> {
        tracing::debug!("list pizzas");
        let rows = sqlx::query_as::<_, Pizza>(
            "SELECT id, name, ingredients FROM pizzas ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Insert an association and read back both parents in one transaction.
    /// Unknown parents are rejected by the foreign-key constraints at the
    /// insert.
    pub async fn create_restaurant_pizza(
        pool: &SqlitePool,
        new: NewRestaurantPizza,
    ) -> Result<RestaurantPizzaCreated, AppError> {
        tracing::debug!(
            price = new.price,
            pizza_id = new.pizza_id,
            restaurant_id = new.restaurant_id,
            "create restaurant_pizza"
        );
        let mut tx = pool.begin().await?;
        let row = sqlx::query_as::<_, RestaurantPizza>(
            "INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id) \
             VALUES (?, ?, ?) RETURNING id, price, pizza_id, restaurant_id",
        )
        .bind(new.price)
        .bind(new.pizza_id)
        .bind(new.restaurant_id)
        .fetch_one(&mut *tx)
        .await?;

        let pizza = sqlx::query_as::<_, Pizza>(
            "SELECT id, name, ingredients FROM pizzas WHERE id = ?",
        )
        .bind(row.pizza_id)
        .fetch_one(&mut *tx)
        .await?;
        let restaurant = sqlx::query_as::<_, Restaurant>(
            "SELECT id, name, address FROM restaurants WHERE id = ?",
        )
        .bind(row.restaurant_id)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        Ok(RestaurantPizzaCreated {
            id: row.id,
            price: row.price,
            pizza_id: row.pizza_id,
            restaurant_id: row.restaurant_id,
            pizza,
            restaurant,
        })
    }
}
