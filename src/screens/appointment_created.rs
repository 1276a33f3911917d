//! Confirmation shown after an appointment is booked.

use chrono::{DateTime, Local};

use crate::navigation::{AppointmentCreatedParams, NavAction, Route};

use super::Outcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentCreatedScreen {
    date: DateTime<Local>,
}

impl AppointmentCreatedScreen {
    pub fn new(params: &AppointmentCreatedParams) -> Self {
        Self { date: params.date }
    }

    pub fn date(&self) -> DateTime<Local> {
        self.date
    }

    /// e.g. `Friday, March 14, 2025 at 09:00`
    pub fn formatted_date(&self) -> String {
        self.date.format("%A, %B %-d, %Y at %H:%M").to_string()
    }

    /// Back to the dashboard, dropping the booking flow from history.
    pub fn ok(&self) -> Outcome {
        Outcome::navigate(NavAction::Reset(Route::Dashboard))
    }
}
