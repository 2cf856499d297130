//! Storage rows and wire representations.
//!
//! Rows mirror table columns one-to-one. The composite views further down
//! are the response shapes the handlers build: summaries omit nested
//! relationships, full views embed them.

use serde::Serialize;
use sqlx::FromRow;

#[derive(Clone, Debug, FromRow, Serialize)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}

#[derive(Clone, Debug, FromRow, Serialize)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

#[derive(Clone, Debug, FromRow, Serialize)]
pub struct RestaurantPizza {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

/// Validated input for creating an association.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NewRestaurantPizza {
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

/// Flat join row: association columns plus the referenced pizza's columns.
#[derive(Debug, FromRow)]
pub struct RestaurantPizzaWithPizza {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza_name: String,
    pub pizza_ingredients: String,
}

/// Association with its pizza embedded, as listed inside a restaurant's
/// full view.
#[derive(Debug, Serialize)]
pub struct RestaurantPizzaDetail {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza: Pizza,
}

impl From<RestaurantPizzaWithPizza> for RestaurantPizzaDetail {
    fn from(row: RestaurantPizzaWithPizza) -> Self {
        RestaurantPizzaDetail {
            id: row.id,
            price: row.price,
            pizza_id: row.pizza_id,
            restaurant_id: row.restaurant_id,
            pizza: Pizza {
                id: row.pizza_id,
                name: row.pizza_name,
                ingredients: row.pizza_ingredients,
            },
        }
    }
}

/// Full restaurant view: summary fields plus association rows.
#[derive(Debug, Serialize)]
pub struct RestaurantDetail {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaDetail>,
}

/// Freshly created association with both parents embedded.
#[derive(Debug, Serialize)]
pub struct RestaurantPizzaCreated {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza: Pizza,
    pub restaurant: Restaurant,
}
