pub mod api;
pub mod client;
pub mod error;
pub mod item;
pub mod models;
pub mod reconcile;

pub use client::{execute, TodoClient};
pub use error::ApiError;
pub use item::{Action, Command, ItemState, UpdateOrigin};
pub use models::{Todo, TodoId};
pub use reconcile::ListUpdate;
