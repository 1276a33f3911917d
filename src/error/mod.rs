//! Unified error handling for the booking client.
//!
//! - **Error Categories**: high-level classification
//! - **Domain-specific Errors**: Network, Auth and System errors
//! - **Unified Error Type**: `BookingError` also wraps form validation and
//!   navigation failures
//! - **Result Type Alias**: `BookingResult<T>`
//!
//! | Category | Presented as |
//! |----------|--------------|
//! | Validation | Inline, one message per field |
//! | Network / Server / Auth | Static alert, detail logged |
//! | Client / System / Configuration | Static alert, detail logged |

mod auth;
mod booking_error;
mod category;
mod network;
mod result;
mod system;

pub use auth::AuthError;
pub use booking_error::BookingError;
pub use category::ErrorCategory;
pub use network::NetworkError;
pub use result::BookingResult;
pub use system::{classify_io_error, SystemError};
