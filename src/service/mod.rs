//! RecordService: queries and mutations, plus request validation.

mod crud;
pub mod validation;
pub use crud::RecordService;
pub use validation::parse_new_restaurant_pizza;
