//! Availability and appointment types.

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

/// First hour of the afternoon bucket.
pub const NOON: u8 = 12;

/// A single hour of a provider's day and whether it can still be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub hour: u8,
    pub available: bool,
}

/// Half of the day an hour is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPeriod {
    Morning,
    Afternoon,
}

impl DayPeriod {
    /// Hours before noon are morning, everything else is afternoon.
    pub fn of(hour: u8) -> Self {
        if hour < NOON {
            DayPeriod::Morning
        } else {
            DayPeriod::Afternoon
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DayPeriod::Morning => "Morning",
            DayPeriod::Afternoon => "Afternoon",
        }
    }
}

/// Clock label for a whole hour: `9` -> `"09:00"`.
pub fn format_hour(hour: u8) -> String {
    format!("{:02}:00", hour)
}

/// An availability slot ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourSlot {
    pub hour: u8,
    pub available: bool,
    pub label: String,
}

impl From<AvailabilitySlot> for HourSlot {
    fn from(slot: AvailabilitySlot) -> Self {
        Self {
            hour: slot.hour,
            available: slot.available,
            label: format_hour(slot.hour),
        }
    }
}

/// Display slots split into morning and afternoon, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    pub morning: Vec<HourSlot>,
    pub afternoon: Vec<HourSlot>,
}

impl Schedule {
    pub fn from_slots(slots: &[AvailabilitySlot]) -> Self {
        let (morning, afternoon): (Vec<_>, Vec<_>) = slots
            .iter()
            .copied()
            .partition(|slot| DayPeriod::of(slot.hour) == DayPeriod::Morning);

        Self {
            morning: morning.into_iter().map(HourSlot::from).collect(),
            afternoon: afternoon.into_iter().map(HourSlot::from).collect(),
        }
    }

    pub fn period(&self, period: DayPeriod) -> &[HourSlot] {
        match period {
            DayPeriod::Morning => &self.morning,
            DayPeriod::Afternoon => &self.afternoon,
        }
    }
}

/// Appointment about to be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDraft {
    pub provider_id: String,
    pub date: DateTime<Local>,
}

impl AppointmentDraft {
    /// Combine a calendar day with a whole hour in local time.
    ///
    /// Returns `None` when the hour is out of range or the local time does
    /// not exist on that day. When the local time is ambiguous the earlier
    /// instant wins.
    pub fn at(provider_id: impl Into<String>, day: NaiveDate, hour: u8) -> Option<Self> {
        let naive = day.and_hms_opt(u32::from(hour), 0, 0)?;
        let date = Local.from_local_datetime(&naive).earliest()?;
        Some(Self {
            provider_id: provider_id.into(),
            date,
        })
    }
}
