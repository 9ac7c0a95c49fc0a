//! Order and ingredient types.

use serde::{Deserialize, Serialize};

/// Opaque identifier of a menu ingredient.
///
/// The backend uses 24-character hex strings; the wrapper treats the value
/// as opaque and performs no validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientId(String);

impl IngredientId {
    /// Wrap an identifier string.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for IngredientId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for IngredientId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl std::fmt::Display for IngredientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request body for `POST api/orders`.
///
/// Ingredient order is preserved and duplicates are allowed; whether a
/// combination is a sensible burger is the backend's business.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrderTicket {
    ingredients: Vec<IngredientId>,
}

impl OrderTicket {
    /// Build a ticket from a list of ingredient ids.
    #[must_use]
    pub fn new(ingredients: Vec<IngredientId>) -> Self {
        Self { ingredients }
    }

    /// A ticket with no ingredients (rejected by the backend with 400).
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            ingredients: Vec::new(),
        }
    }

    /// The ingredient ids in the ticket.
    #[must_use]
    pub fn ingredients(&self) -> &[IngredientId] {
        &self.ingredients
    }
}

/// A menu ingredient as returned by `GET api/ingredients`.
///
/// The catalog carries more fields (calories, image variants); only the
/// ones the harness consumes are modeled.
#[derive(Debug, Clone, Deserialize)]
pub struct Ingredient {
    /// Ingredient identifier.
    #[serde(rename = "_id")]
    pub id: IngredientId,
    /// Human-readable name.
    pub name: String,
    /// Category: `bun`, `sauce`, or `main`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Price in the backend's currency units.
    #[serde(default)]
    pub price: u64,
}
