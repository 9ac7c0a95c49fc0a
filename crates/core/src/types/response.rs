//! Response envelopes returned by the backend.
//!
//! Every endpoint wraps its payload in an object with a `success` flag;
//! error bodies carry a `message` instead (parsed by the client's error
//! mapping, not here).

use serde::Deserialize;

use super::order::{Ingredient, IngredientId};
use super::token::{AccessToken, RefreshToken};
use super::user::UserProfile;

/// Registration/login response: the echoed profile plus both tokens.
#[derive(Debug, Deserialize)]
pub struct AuthSession {
    /// Always `true` on the success path.
    pub success: bool,
    /// Echo of the registered/logged-in profile.
    pub user: UserProfile,
    /// Access token, `"Bearer "` prefix already stripped.
    #[serde(rename = "accessToken")]
    pub access_token: AccessToken,
    /// Refresh token for logout/renewal.
    #[serde(rename = "refreshToken")]
    pub refresh_token: RefreshToken,
}

/// Profile fetch/patch response.
#[derive(Debug, Deserialize)]
pub struct UserEnvelope {
    /// Always `true` on the success path.
    pub success: bool,
    /// Current profile state.
    pub user: UserProfile,
}

/// Plain confirmation response (logout, account deletion).
#[derive(Debug, Clone, Deserialize)]
pub struct Acknowledgement {
    /// Whether the backend accepted the request.
    pub success: bool,
    /// Literal confirmation or error message.
    pub message: String,
}

/// `GET api/ingredients` response.
#[derive(Debug, Deserialize)]
pub struct IngredientCatalog {
    /// Always `true` on the success path.
    pub success: bool,
    /// The full menu.
    pub data: Vec<Ingredient>,
}

/// Owner block attached to orders created by an authorized user.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderOwner {
    /// Owner display name.
    pub name: String,
    /// Owner email address.
    pub email: String,
}

/// Order details inside a [`PlacedOrder`].
///
/// An unauthorized order create returns only the number; the authorized
/// path also hydrates ingredients, owner, and status.
#[derive(Debug, Deserialize)]
pub struct OrderReceipt {
    /// Sequential order number.
    pub number: u64,
    /// Hydrated ingredient list (authorized creates only).
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Owning account (authorized creates only).
    #[serde(default)]
    pub owner: Option<OrderOwner>,
    /// Order status, e.g. `done` (authorized creates only).
    #[serde(default)]
    pub status: Option<String>,
    /// Database id (authorized creates only).
    #[serde(default, rename = "_id")]
    pub id: Option<String>,
}

/// `POST api/orders` response.
#[derive(Debug, Deserialize)]
pub struct PlacedOrder {
    /// Always `true` on the success path.
    pub success: bool,
    /// Generated burger name.
    pub name: String,
    /// The created order.
    pub order: OrderReceipt,
}

/// One entry of an order listing.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderSummary {
    /// Database id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Ingredient ids making up the order.
    pub ingredients: Vec<IngredientId>,
    /// Order status, e.g. `done`.
    pub status: String,
    /// Generated burger name, absent for some historical orders.
    #[serde(default)]
    pub name: Option<String>,
    /// Sequential order number.
    pub number: u64,
    /// Creation timestamp (RFC 3339, kept opaque).
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
    /// Last-update timestamp (RFC 3339, kept opaque).
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<String>,
}

/// Order listing: the caller's own orders (`GET api/orders`) or the global
/// feed (`GET api/orders/all`).
#[derive(Debug, Deserialize)]
pub struct OrderFeed {
    /// Always `true` on the success path.
    pub success: bool,
    /// Most recent orders, newest first.
    pub orders: Vec<OrderSummary>,
    /// Total orders ever placed.
    pub total: u64,
    /// Orders placed today.
    #[serde(rename = "totalToday")]
    pub total_today: u64,
}
