//! Request validation for association creation.

use crate::error::AppError;
use crate::models::NewRestaurantPizza;
use serde_json::Value;

pub const PRICE_MIN: i64 = 1;
pub const PRICE_MAX: i64 = 30;

/// Parse and validate a creation body. The body must be a JSON object with
/// integer `price`, `pizza_id`, and `restaurant_id`; price must lie within
/// [PRICE_MIN, PRICE_MAX].
pub fn parse_new_restaurant_pizza(body: &Value) -> Result<NewRestaurantPizza, AppError> {
    let obj = body
        .as_object()
        .ok_or_else(|| AppError::Request("body must be a JSON object".into()))?;
    let price = int_field(obj, "price")?;
    let pizza_id = int_field(obj, "pizza_id")?;
    let restaurant_id = int_field(obj, "restaurant_id")?;
    if !(PRICE_MIN..=PRICE_MAX).contains(&price) {
        return Err(AppError::Validation);
    }
    Ok(NewRestaurantPizza {
        price,
        pizza_id,
        restaurant_id,
    })
}

fn int_field(obj: &serde_json::Map<String, Value>, field: &str) -> Result<i64, AppError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(AppError::Request(format!("{} is required", field))),
        Some(v) => v
            .as_i64()
            .ok_or_else(|| AppError::Request(format!("{} must be an integer", field))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_prices_at_both_bounds() {
        for price in [1, 30] {
            let new = parse_new_restaurant_pizza(&json!({
                "price": price, "pizza_id": 1, "restaurant_id": 2
            }))
            .unwrap();
            assert_eq!(new.price, price);
            assert_eq!(new.pizza_id, 1);
            assert_eq!(new.restaurant_id, 2);
        }
    }

    #[test]
    fn rejects_prices_outside_bounds() {
        for price in [0, 31, -5] {
            let err = parse_new_restaurant_pizza(&json!({
                "price": price, "pizza_id": 1, "restaurant_id": 2
            }))
            .unwrap_err();
            assert!(matches!(err, AppError::Validation));
        }
    }

    #[test]
    fn rejects_missing_fields_by_name() {
        let err = parse_new_restaurant_pizza(&json!({ "pizza_id": 1, "restaurant_id": 2 }))
            .unwrap_err();
        assert_eq!(err.to_string(), "price is required");

        let err = parse_new_restaurant_pizza(&json!({ "price": 5, "restaurant_id": 2 }))
            .unwrap_err();
        assert_eq!(err.to_string(), "pizza_id is required");
    }

    #[test]
    fn rejects_null_and_non_integer_values() {
        let err = parse_new_restaurant_pizza(&json!({
            "price": null, "pizza_id": 1, "restaurant_id": 2
        }))
        .unwrap_err();
        assert_eq!(err.to_string(), "price is required");

        let err = parse_new_restaurant_pizza(&json!({
            "price": 5.5, "pizza_id": 1, "restaurant_id": 2
        }))
        .unwrap_err();
        assert_eq!(err.to_string(), "price must be an integer");
    }

    #[test]
    fn rejects_non_object_bodies() {
        let err = parse_new_restaurant_pizza(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.to_string(), "body must be a JSON object");
    }
}
