//! Payload types for the Stellar Burgers API.
//!
//! This module provides the request bodies, opaque credential wrappers, and
//! response envelopes the backend exchanges as JSON.

pub mod order;
pub mod response;
pub mod token;
pub mod user;

pub use order::{Ingredient, IngredientId, OrderTicket};
pub use response::*;
pub use token::{AccessToken, RefreshToken};
pub use user::{Credentials, UserProfile, UserUpdate};
