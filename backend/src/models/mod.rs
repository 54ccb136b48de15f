//! API data models.
//!
//! Purpose: Define the typed request and response shapes used by the HTTP
//! handlers. Values are built per request, never stored, and document their
//! serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - User (alias to `user::User`) — user record returned by every user route.
//! - NewUser (alias to `user::NewUser`) — create-user request body.

pub mod user;
pub use self::user::{NewUser, User};
