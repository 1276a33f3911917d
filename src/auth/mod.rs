//! Session handling.
//!
//! - [`Session`] and [`SessionFile`]: the persisted identity and its JSON file
//! - [`SessionStore`]: sign-in, sign-out, user updates and startup restore

pub mod session;
pub mod store;

pub use session::{default_session_path, Session, SessionFile};
pub use store::SessionStore;
