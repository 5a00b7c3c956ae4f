pub mod model;

pub use model::{DeliveryDay, MealType, Plan};
