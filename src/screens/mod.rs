//! Screen controllers.
//!
//! Each screen owns its view state and exposes the actions a user can take
//! on it. An action returns an [`Outcome`]: an optional blocking alert and an
//! optional navigation request, which the [`App`](crate::app::App) applies.
//!
//! Failures split two ways. Form validation errors stay on the form and are
//! rendered next to their fields. Everything else is logged and replaced by
//! a static alert; the cause never reaches the user.

pub mod appointment_created;
pub mod create_appointment;
pub mod dashboard;
pub mod profile;
pub mod sign_in;
pub mod sign_up;

use tracing::error;

use crate::error::BookingError;
use crate::form::Form;
use crate::navigation::{NavAction, Route};

pub use appointment_created::AppointmentCreatedScreen;
pub use create_appointment::CreateAppointmentScreen;
pub use dashboard::{DashboardScreen, ProviderCard};
pub use profile::{AvatarPick, ProfileScreen};
pub use sign_in::SignInScreen;
pub use sign_up::SignUpScreen;

/// A blocking message box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: Option<String>,
}

impl Alert {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: None,
        }
    }

    pub fn with_message(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: Some(message.into()),
        }
    }
}

impl std::fmt::Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}\n{}", self.title, message),
            None => write!(f, "{}", self.title),
        }
    }
}

/// Result of a screen action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub alert: Option<Alert>,
    pub navigation: Option<NavAction>,
}

impl Outcome {
    /// Nothing to show, stay on the screen.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn alert(alert: Alert) -> Self {
        Self {
            alert: Some(alert),
            navigation: None,
        }
    }

    pub fn navigate(action: NavAction) -> Self {
        Self {
            alert: None,
            navigation: Some(action),
        }
    }

    pub fn push(route: Route) -> Self {
        Self::navigate(NavAction::Push(route))
    }

    pub fn back() -> Self {
        Self::navigate(NavAction::Pop)
    }

    pub fn with_alert(mut self, alert: Alert) -> Self {
        self.alert = Some(alert);
        self
    }
}

/// Turn a failed action into its outcome.
///
/// Validation errors are stored on `form` and produce no alert. Anything
/// else is logged and answered with `alert`.
pub(crate) fn form_failure(form: &mut Form, err: BookingError, alert: Alert) -> Outcome {
    if let Some(errors) = err.validation() {
        form.set_errors(errors);
        return Outcome::none();
    }
    failure(err, alert)
}

/// Log `err` and answer with `alert`.
pub(crate) fn failure(err: BookingError, alert: Alert) -> Outcome {
    error!(
        code = err.error_code(),
        category = err.category().as_str(),
        "{}: {}",
        alert.title,
        err
    );
    Outcome::alert(alert)
}
