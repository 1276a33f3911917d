//! Typed routes and the untyped boundary that produces them.

use chrono::{DateTime, Local};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Which of the two mutually exclusive screen stacks a route belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackKind {
    /// Signed-out screens.
    Auth,
    /// Signed-in screens.
    App,
}

impl StackKind {
    /// The root screen of the stack.
    pub fn initial_route(self) -> Route {
        match self {
            StackKind::Auth => Route::SignIn,
            StackKind::App => Route::Dashboard,
        }
    }
}

impl fmt::Display for StackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackKind::Auth => write!(f, "auth"),
            StackKind::App => write!(f, "app"),
        }
    }
}

/// Navigation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("Unknown route: {name}")]
    UnknownRoute { name: String },

    #[error("Invalid parameters for {route}: {message}")]
    InvalidParams { route: String, message: String },

    #[error("Route {route} does not belong to the {stack} stack")]
    WrongStack { route: &'static str, stack: StackKind },

    #[error("No stack is mounted yet")]
    NotMounted,
}

/// Parameters of [`Route::CreateAppointment`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentParams {
    pub provider_id: String,
}

/// Parameters of [`Route::AppointmentCreated`].
///
/// The date crosses the boundary as milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentCreatedParams {
    #[serde(with = "epoch_millis")]
    pub date: DateTime<Local>,
}

mod epoch_millis {
    use chrono::{DateTime, Local, TimeZone};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &DateTime<Local>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_i64(date.timestamp_millis())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Local>, D::Error> {
        let millis = i64::deserialize(d)?;
        Local
            .timestamp_millis_opt(millis)
            .single()
            .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {}", millis)))
    }
}

/// Every screen of the application, with the data it is opened with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    SignIn,
    SignUp,
    Dashboard,
    CreateAppointment(CreateAppointmentParams),
    AppointmentCreated(AppointmentCreatedParams),
    Profile,
}

impl Route {
    pub fn create_appointment(provider_id: impl Into<String>) -> Self {
        Route::CreateAppointment(CreateAppointmentParams {
            provider_id: provider_id.into(),
        })
    }

    pub fn appointment_created(date: DateTime<Local>) -> Self {
        Route::AppointmentCreated(AppointmentCreatedParams { date })
    }

    /// Screen name used at the untyped boundary.
    pub fn name(&self) -> &'static str {
        match self {
            Route::SignIn => "SignIn",
            Route::SignUp => "SignUp",
            Route::Dashboard => "Dashboard",
            Route::CreateAppointment(_) => "CreateAppointment",
            Route::AppointmentCreated(_) => "AppointmentCreated",
            Route::Profile => "Profile",
        }
    }

    pub fn stack(&self) -> StackKind {
        match self {
            Route::SignIn | Route::SignUp => StackKind::Auth,
            _ => StackKind::App,
        }
    }

    /// Parameters as plain JSON (`null` for screens without any).
    pub fn params(&self) -> Value {
        let value = match self {
            Route::CreateAppointment(params) => serde_json::to_value(params),
            Route::AppointmentCreated(params) => serde_json::to_value(params),
            _ => return Value::Null,
        };
        value.unwrap_or(Value::Null)
    }

    /// Build a route from a screen name and untyped parameters.
    ///
    /// Parameters of screens that take none are ignored. Missing or
    /// malformed parameters are rejected.
    pub fn from_parts(name: &str, params: &Value) -> Result<Self, NavigationError> {
        match name {
            "SignIn" => Ok(Route::SignIn),
            "SignUp" => Ok(Route::SignUp),
            "Dashboard" => Ok(Route::Dashboard),
            "Profile" => Ok(Route::Profile),
            "CreateAppointment" => parse(name, params).map(Route::CreateAppointment),
            "AppointmentCreated" => parse(name, params).map(Route::AppointmentCreated),
            _ => Err(NavigationError::UnknownRoute {
                name: name.to_string(),
            }),
        }
    }
}

fn parse<T: DeserializeOwned>(route: &str, params: &Value) -> Result<T, NavigationError> {
    T::deserialize(params).map_err(|e| NavigationError::InvalidParams {
        route: route.to_string(),
        message: e.to_string(),
    })
}
