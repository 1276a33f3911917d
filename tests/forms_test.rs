//! Form validation as seen from the sign-up and profile screens.

mod common;

use common::*;
use gobarber::api::ApiClient;
use gobarber::auth::SessionStore;
use gobarber::models::{format_hour, AvailabilitySlot, DayPeriod, Schedule};
use gobarber::navigation::NavAction;
use gobarber::screens::profile::{OLD_PASSWORD, PASSWORD_CONFIRMATION};
use gobarber::screens::sign_up::{EMAIL, NAME, PASSWORD};
use gobarber::screens::{ProfileScreen, SignUpScreen};
use std::sync::Arc;

fn filled_sign_up(password: &str) -> SignUpScreen {
    let mut screen = SignUpScreen::new();
    screen.form_mut().set_value(NAME, "Ana Lima");
    screen.form_mut().set_value(EMAIL, "ana@example.com");
    screen.form_mut().set_value(PASSWORD, password);
    screen
}

#[tokio::test]
async fn test_sign_up_password_length_boundary() {
    let http = MockApi::new()
        .with_json("users", 200, serde_json::json!({"id": "user-2"}))
        .build();
    let api = ApiClient::new(API_URL, Arc::new(http.clone()));

    let mut short = filled_sign_up("12345");
    let outcome = short.submit(&api).await;
    assert!(outcome.navigation.is_none());
    assert_eq!(short.form().error(PASSWORD), Some("At least 6 characters"));
    assert!(http.get_requests().is_empty());

    let mut exact = filled_sign_up("123456");
    let outcome = exact.submit(&api).await;
    assert!(!exact.form().has_errors());
    assert_eq!(outcome.navigation, Some(NavAction::Pop));
    assert_eq!(outcome.alert.map(|a| a.title), Some("Account created".to_string()));

    let posts = http.requests_with_method("POST");
    assert_eq!(posts.len(), 1);
    assert_eq!(
        posts[0].json_body(),
        Some(serde_json::json!({
            "name": "Ana Lima",
            "email": "ana@example.com",
            "password": "123456"
        }))
    );
}

#[tokio::test]
async fn test_sign_up_reports_every_invalid_field() {
    let api = ApiClient::new(API_URL, Arc::new(MockApi::new().build()));
    let mut screen = SignUpScreen::new();
    screen.form_mut().set_value(EMAIL, "ana@");

    screen.submit(&api).await;

    assert_eq!(screen.form().error(NAME), Some("Name is required"));
    assert_eq!(screen.form().error(EMAIL), Some("Enter a valid email"));
    assert_eq!(screen.form().error(PASSWORD), Some("At least 6 characters"));
}

#[tokio::test]
async fn test_profile_password_change_requires_confirmation() {
    let http = MockApi::new().build();
    let storage = InMemorySessionStorage::with_session(test_session());
    let api = ApiClient::new(API_URL, Arc::new(http.clone()));
    let mut session = SessionStore::new(api, Arc::new(storage));
    session.restore().await;

    let mut screen = ProfileScreen::new(session.user());
    screen.form_mut().set_value(OLD_PASSWORD, "old-secret");
    screen.form_mut().set_value(PASSWORD, "new-secret");
    screen.form_mut().set_value(PASSWORD_CONFIRMATION, "other");

    let outcome = screen.submit(&mut session).await;

    assert!(outcome.navigation.is_none());
    assert_eq!(
        screen.form().error(PASSWORD_CONFIRMATION),
        Some("Confirmation does not match")
    );
    assert!(http.requests_with_method("PUT").is_empty());
}

#[test]
fn test_schedule_partitions_every_hour() {
    let slots: Vec<AvailabilitySlot> = (0..24)
        .map(|hour| AvailabilitySlot {
            hour,
            available: hour % 2 == 0,
        })
        .collect();

    let schedule = Schedule::from_slots(&slots);

    assert_eq!(schedule.morning.len() + schedule.afternoon.len(), 24);
    assert!(schedule.morning.iter().all(|s| DayPeriod::of(s.hour) == DayPeriod::Morning));
    assert!(schedule.afternoon.iter().all(|s| s.hour >= 12));
    for slot in schedule.morning.iter().chain(&schedule.afternoon) {
        assert_eq!(slot.label, format_hour(slot.hour));
        assert_eq!(slot.label.len(), 5);
        assert_eq!(slot.available, slot.hour % 2 == 0);
    }
}
