//! Result type alias for booking client operations.

use super::booking_error::BookingError;

/// Type alias for Results using BookingError.
pub type BookingResult<T> = Result<T, BookingError>;
