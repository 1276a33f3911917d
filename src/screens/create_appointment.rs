//! Create-appointment screen: provider carousel, day picker and hour grid.
//!
//! Availability is fetched again whenever the selected provider or day
//! changes. Picking an hour is local until [`CreateAppointmentScreen::create`]
//! submits the appointment.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::error::BookingError;
use crate::models::{AppointmentDraft, AvailabilitySlot, Provider, Schedule};
use crate::navigation::{CreateAppointmentParams, Route};

use super::{failure, Alert, Outcome};

fn error_alert() -> Alert {
    Alert::new("Could not create the appointment")
}

#[derive(Debug, Clone)]
pub struct CreateAppointmentScreen {
    providers: Vec<Provider>,
    selected_provider: String,
    selected_date: NaiveDate,
    selected_hour: Option<u8>,
    availability: Vec<AvailabilitySlot>,
    schedule: Schedule,
    date_picker_open: bool,
}

impl CreateAppointmentScreen {
    /// Screen opened for `params.provider_id`, showing `today`.
    pub fn new(params: &CreateAppointmentParams, today: NaiveDate) -> Self {
        Self {
            providers: Vec::new(),
            selected_provider: params.provider_id.clone(),
            selected_date: today,
            selected_hour: None,
            availability: Vec::new(),
            schedule: Schedule::default(),
            date_picker_open: false,
        }
    }

    /// Fetch the providers and the availability of the initial selection.
    pub async fn load(&mut self, api: &ApiClient) {
        match api.list_providers().await {
            Ok(providers) => self.providers = providers,
            Err(e) => warn!("Failed to load providers: {}", e),
        }
        self.refresh_availability(api).await;
    }

    async fn refresh_availability(&mut self, api: &ApiClient) {
        let slots = match api
            .day_availability(&self.selected_provider, self.selected_date)
            .await
        {
            Ok(slots) => slots,
            Err(e) => {
                warn!(
                    "Failed to load availability of {} on {}: {}",
                    self.selected_provider, self.selected_date, e
                );
                Vec::new()
            }
        };
        debug!("{} slots for {}", slots.len(), self.selected_date);
        self.schedule = Schedule::from_slots(&slots);
        self.availability = slots;
        self.selected_hour = None;
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn selected_provider(&self) -> &str {
        &self.selected_provider
    }

    pub fn is_selected_provider(&self, provider_id: &str) -> bool {
        self.selected_provider == provider_id
    }

    pub async fn select_provider(&mut self, api: &ApiClient, provider_id: &str) {
        if self.selected_provider == provider_id {
            return;
        }
        self.selected_provider = provider_id.to_string();
        self.refresh_availability(api).await;
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn is_date_picker_open(&self) -> bool {
        self.date_picker_open
    }

    pub fn toggle_date_picker(&mut self) {
        self.date_picker_open = !self.date_picker_open;
    }

    /// Pick a day. Closes the picker; `None` means the picker was dismissed.
    pub async fn select_date(&mut self, api: &ApiClient, date: Option<NaiveDate>) {
        self.date_picker_open = false;
        let Some(date) = date else {
            return;
        };
        if date == self.selected_date {
            return;
        }
        self.selected_date = date;
        self.refresh_availability(api).await;
    }

    pub fn availability(&self) -> &[AvailabilitySlot] {
        &self.availability
    }

    /// Hours split into morning and afternoon.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn selected_hour(&self) -> Option<u8> {
        self.selected_hour
    }

    /// Select an hour. Hours that are not available are ignored; returns
    /// whether the selection changed.
    pub fn select_hour(&mut self, hour: u8) -> bool {
        let available = self
            .availability
            .iter()
            .any(|slot| slot.hour == hour && slot.available);
        if available {
            self.selected_hour = Some(hour);
        }
        available
    }

    /// Book the selected provider on the selected day at the selected hour.
    ///
    /// On success opens the confirmation screen with the exact booked
    /// timestamp.
    pub async fn create(&mut self, api: &ApiClient) -> Outcome {
        let Some(hour) = self.selected_hour else {
            warn!("Create appointment pressed without an hour selected");
            return Outcome::alert(error_alert());
        };
        let Some(draft) = AppointmentDraft::at(&self.selected_provider, self.selected_date, hour)
        else {
            warn!("{} {}:00 is not a valid local time", self.selected_date, hour);
            return Outcome::alert(error_alert());
        };

        match api.create_appointment(&draft).await {
            Ok(()) => Outcome::push(Route::appointment_created(draft.date)),
            Err(err) => failure(BookingError::from(err), error_alert()),
        }
    }

    pub fn go_back(&self) -> Outcome {
        Outcome::back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::models::DayPeriod;
    use crate::navigation::NavAction;
    use chrono::Timelike;
    use serde_json::json;
    use std::sync::Arc;

    const AVAILABILITY: &str = "http://api.test/providers/p-1/day-availability";

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn setup() -> (MockHttpClient, ApiClient, CreateAppointmentScreen) {
        let http = MockHttpClient::new();
        http.set_response(
            "http://api.test/providers",
            MockResponse::json(200, json!([{"id": "p-1", "name": "Carla"}, {"id": "p-2", "name": "Davi"}])),
        );
        http.set_response(
            AVAILABILITY,
            MockResponse::json(
                200,
                json!([
                    {"hour": 8, "available": false},
                    {"hour": 9, "available": true},
                    {"hour": 13, "available": true}
                ]),
            ),
        );
        http.set_response(
            "http://api.test/providers/p-2/day-availability",
            MockResponse::json(200, json!([])),
        );
        let api = ApiClient::new("http://api.test", Arc::new(http.clone()));
        let params = CreateAppointmentParams {
            provider_id: "p-1".to_string(),
        };
        (http, api, CreateAppointmentScreen::new(&params, day()))
    }

    #[tokio::test]
    async fn test_load_partitions_hours() {
        let (http, api, mut screen) = setup();
        screen.load(&api).await;

        assert_eq!(screen.providers().len(), 2);
        let schedule = screen.schedule();
        assert_eq!(schedule.period(DayPeriod::Morning).len(), 2);
        assert_eq!(schedule.period(DayPeriod::Afternoon)[0].label, "13:00");

        let gets = http.requests_with_method("GET");
        assert!(gets
            .iter()
            .any(|r| r.url == format!("{}?year=2025&month=3&day=14", AVAILABILITY)));
    }

    #[tokio::test]
    async fn test_unavailable_hour_is_ignored() {
        let (_http, api, mut screen) = setup();
        screen.load(&api).await;

        assert!(!screen.select_hour(8));
        assert!(!screen.select_hour(20));
        assert_eq!(screen.selected_hour(), None);
        assert!(screen.select_hour(9));
        assert_eq!(screen.selected_hour(), Some(9));
    }

    #[tokio::test]
    async fn test_changing_provider_refetches() {
        let (http, api, mut screen) = setup();
        screen.load(&api).await;
        screen.select_hour(9);
        http.clear_requests();

        screen.select_provider(&api, "p-2").await;

        assert!(screen.is_selected_provider("p-2"));
        assert!(screen.availability().is_empty());
        assert_eq!(screen.selected_hour(), None);
        assert_eq!(http.get_requests().len(), 1);

        screen.select_provider(&api, "p-2").await;
        assert_eq!(http.get_requests().len(), 1);
    }

    #[tokio::test]
    async fn test_date_picker_closes_after_pick() {
        let (http, api, mut screen) = setup();
        screen.toggle_date_picker();
        assert!(screen.is_date_picker_open());

        let next = day().succ_opt().unwrap();
        screen.select_date(&api, Some(next)).await;

        assert!(!screen.is_date_picker_open());
        assert_eq!(screen.selected_date(), next);
        assert!(http.get_requests()[0].url.ends_with("day=15"));

        screen.toggle_date_picker();
        screen.select_date(&api, None).await;
        assert!(!screen.is_date_picker_open());
        assert_eq!(screen.selected_date(), next);
    }

    #[tokio::test]
    async fn test_create_posts_selected_slot() {
        let (http, api, mut screen) = setup();
        http.set_response("http://api.test/appointments", MockResponse::json(200, json!({})));
        screen.load(&api).await;
        screen.select_hour(13);

        let outcome = screen.create(&api).await;

        let posts = http.requests_with_method("POST");
        assert_eq!(posts.len(), 1);
        let body = posts[0].json_body().unwrap();
        assert_eq!(body["providerId"], "p-1");

        let Some(NavAction::Push(Route::AppointmentCreated(params))) = outcome.navigation else {
            panic!("expected confirmation screen, got {:?}", outcome.navigation);
        };
        assert_eq!(params.date.date_naive(), day());
        assert_eq!((params.date.hour(), params.date.minute()), (13, 0));
        assert_eq!(body["date"], json!(params.date));
    }

    #[tokio::test]
    async fn test_create_without_hour_makes_no_request() {
        let (http, api, mut screen) = setup();
        screen.load(&api).await;
        http.clear_requests();

        let outcome = screen.create(&api).await;
        assert_eq!(outcome.alert, Some(error_alert()));
        assert!(http.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_create_failure_alerts() {
        let (http, api, mut screen) = setup();
        http.set_response("http://api.test/appointments", MockResponse::json(500, json!({})));
        screen.load(&api).await;
        screen.select_hour(9);

        let outcome = screen.create(&api).await;
        assert_eq!(outcome.alert, Some(error_alert()));
        assert!(outcome.navigation.is_none());
    }
}
