//! SeaORM entity definitions.
//!
//! Persistence models, kept apart from the domain types.

pub mod user;

pub use user::{ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel};
