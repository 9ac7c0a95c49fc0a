//! Backend endpoint paths.
//!
//! Single source of truth for the fixed set of paths the harness touches,
//! relative to the configured base URL.

/// `POST` - create an account.
pub const REGISTER: &str = "/api/auth/register";

/// `POST` - log in with email and password.
pub const LOGIN: &str = "/api/auth/login";

/// `POST` - invalidate a refresh token.
pub const LOGOUT: &str = "/api/auth/logout";

/// `GET`/`PATCH`/`DELETE` - fetch, update, or remove the authorized user.
pub const USER: &str = "/api/auth/user";

/// `POST` - place an order; `GET` - list the authorized user's orders.
pub const ORDERS: &str = "/api/orders";

/// `GET` - global order feed, no authorization required.
pub const ORDERS_ALL: &str = "/api/orders/all";

/// `GET` - ingredient catalog.
pub const INGREDIENTS: &str = "/api/ingredients";
