//! Domain models for the storefront.
//!
//! Everything here lives in the session cookie store, never in a database.
//! The Wonderland API owns products, orders, and users; the storefront only
//! keeps the logged-in identity and the in-progress cart.

pub mod cart;
pub mod session;

pub use cart::{Cart, CartLine};
pub use session::CurrentUser;
