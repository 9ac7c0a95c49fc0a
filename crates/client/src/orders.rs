//! Order and ingredient operations.

use stellar_core::{AccessToken, IngredientCatalog, OrderFeed, OrderTicket, PlacedOrder};
use tracing::instrument;

use crate::StellarClient;
use crate::endpoints;
use crate::error::Error;

impl StellarClient {
    /// Fetch the ingredient catalog (`GET api/ingredients`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on transport failures; the endpoint itself
    /// has no error responses in normal operation.
    #[instrument(skip(self))]
    pub async fn ingredients(&self) -> Result<IngredientCatalog, Error> {
        self.get(endpoints::INGREDIENTS, None).await
    }

    /// Place an order (`POST api/orders`).
    ///
    /// With a token the backend attaches the order to the account and
    /// hydrates ingredients and owner in the response; without one it
    /// returns only the order number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] with 400 `"Ingredient ids must be provided"`
    /// for an empty ticket, or [`Error::Unexpected`] with 500 for a
    /// malformed ingredient id (the backend serves an HTML error page).
    #[instrument(skip_all, fields(ingredients = ticket.ingredients().len()))]
    pub async fn create_order(
        &self,
        token: Option<&AccessToken>,
        ticket: &OrderTicket,
    ) -> Result<PlacedOrder, Error> {
        self.post(endpoints::ORDERS, token, ticket).await
    }

    /// List the authorized user's orders (`GET api/orders`), newest first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] with 401 `"You should be authorised"` for a
    /// missing or invalid token.
    #[instrument(skip_all)]
    pub async fn user_orders(&self, token: &AccessToken) -> Result<OrderFeed, Error> {
        self.get(endpoints::ORDERS, Some(token)).await
    }

    /// Fetch the global order feed (`GET api/orders/all`), no authorization
    /// required.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on transport failures.
    #[instrument(skip(self))]
    pub async fn orders_feed(&self) -> Result<OrderFeed, Error> {
        self.get(endpoints::ORDERS_ALL, None).await
    }
}
