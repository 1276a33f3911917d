//! Command-line front end.
//!
//! Each command drives the same screen controllers a graphical shell would,
//! through the [`App`] context: fill the form, press the button, apply the
//! outcome. Alerts are printed as they would be shown; field errors print
//! as `field: message`.
//!
//! ```ignore
//! let command = parse_args(std::env::args())?;
//! let mut app = App::from_config(&ClientConfig::from_env()?)?;
//! app.start().await;
//! run(command, &mut app, &mut std::io::stdout()).await?;
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, PasswordArgs, USAGE};
pub use version::{version_line, VERSION};

use bytes::Bytes;
use chrono::NaiveDate;
use color_eyre::eyre::bail;
use color_eyre::Result;
use std::io::Write;
use std::path::Path;

use crate::app::{App, Screen};
use crate::form::ValidationErrors;
use crate::models::DayPeriod;
use crate::screens::{dashboard, profile, sign_in, sign_up, AvatarPick, Outcome};

const NOT_SIGNED_IN: &str = "Not signed in. Run `gobarber signin <email> <password>` first.";

/// Run a parsed command against a started [`App`].
pub async fn run<W: Write>(command: CliCommand, app: &mut App, out: &mut W) -> Result<()> {
    match command {
        CliCommand::Version => writeln!(out, "{}", version_line())?,
        CliCommand::Help => writeln!(out, "{}", USAGE)?,
        CliCommand::SignIn { email, password } => handle_sign_in(app, out, &email, &password).await?,
        CliCommand::SignUp {
            name,
            email,
            password,
        } => handle_sign_up(app, out, &name, &email, &password).await?,
        CliCommand::SignOut => handle_sign_out(app, out).await?,
        CliCommand::WhoAmI => match app.session().user() {
            Some(user) => writeln!(out, "{} <{}>", user.name, user.email)?,
            None => writeln!(out, "Not signed in")?,
        },
        CliCommand::Providers => handle_providers(app, out)?,
        CliCommand::Availability { provider_id, date } => {
            open_booking(app, &provider_id, date).await?;
            print_schedule(app, out)?;
        }
        CliCommand::Book {
            provider_id,
            date,
            hour,
        } => handle_book(app, out, &provider_id, date, hour).await?,
        CliCommand::Profile {
            name,
            email,
            password,
        } => handle_profile(app, out, &name, &email, password).await?,
        CliCommand::Avatar { path } => handle_avatar(app, out, &path).await?,
    }
    Ok(())
}

/// Apply an outcome, then print field errors and the alert, if any.
async fn finish<W: Write>(
    app: &mut App,
    out: &mut W,
    outcome: Outcome,
    errors: &ValidationErrors,
) -> Result<()> {
    let alert = app.dispatch(outcome).await?;
    for (field, message) in errors.iter() {
        writeln!(out, "{}: {}", field, message)?;
    }
    if let Some(alert) = alert {
        writeln!(out, "{}", alert)?;
    }
    Ok(())
}

fn require_signed_in(app: &App) -> Result<()> {
    if !app.session().is_signed_in() {
        bail!(NOT_SIGNED_IN);
    }
    Ok(())
}

/// Dashboard action leading to another screen.
async fn from_dashboard(app: &mut App, action: impl FnOnce(&dashboard::DashboardScreen) -> Outcome) -> Result<()> {
    require_signed_in(app)?;
    let outcome = match app.screen() {
        Some(Screen::Dashboard(screen)) => action(screen),
        _ => bail!("The dashboard is not showing"),
    };
    app.dispatch(outcome).await?;
    Ok(())
}

async fn handle_sign_in<W: Write>(app: &mut App, out: &mut W, email: &str, password: &str) -> Result<()> {
    if let Some(user) = app.session().user() {
        writeln!(out, "Already signed in as {}", user.email)?;
        return Ok(());
    }

    let (screen, session) = app.parts_mut();
    let Some(Screen::SignIn(screen)) = screen else {
        bail!("The sign-in screen is not showing");
    };
    screen.form_mut().set_value(sign_in::EMAIL, email);
    screen.form_mut().set_value(sign_in::PASSWORD, password);
    let outcome = screen.submit(session).await;
    let errors = screen.form().errors().clone();

    finish(app, out, outcome, &errors).await?;
    if let Some(user) = app.session().user() {
        writeln!(out, "Signed in as {} <{}>", user.name, user.email)?;
    }
    Ok(())
}

async fn handle_sign_up<W: Write>(
    app: &mut App,
    out: &mut W,
    name: &str,
    email: &str,
    password: &str,
) -> Result<()> {
    let outcome = match app.screen() {
        Some(Screen::SignIn(screen)) => screen.create_account(),
        _ => bail!("Sign out before creating a new account"),
    };
    app.dispatch(outcome).await?;

    let (screen, session) = app.parts_mut();
    let Some(Screen::SignUp(screen)) = screen else {
        bail!("The sign-up screen is not showing");
    };
    screen.form_mut().set_value(sign_up::NAME, name);
    screen.form_mut().set_value(sign_up::EMAIL, email);
    screen.form_mut().set_value(sign_up::PASSWORD, password);
    let outcome = screen.submit(session.api()).await;
    let errors = screen.form().errors().clone();

    finish(app, out, outcome, &errors).await
}

async fn handle_sign_out<W: Write>(app: &mut App, out: &mut W) -> Result<()> {
    let (screen, session) = app.parts_mut();
    let Some(Screen::Dashboard(screen)) = screen else {
        writeln!(out, "Not signed in")?;
        return Ok(());
    };
    let outcome = screen.sign_out(session).await;
    finish(app, out, outcome, &ValidationErrors::default()).await?;
    writeln!(out, "Signed out")?;
    Ok(())
}

fn handle_providers<W: Write>(app: &App, out: &mut W) -> Result<()> {
    require_signed_in(app)?;
    let Some(Screen::Dashboard(screen)) = app.screen() else {
        bail!("The dashboard is not showing");
    };

    writeln!(out, "{}", dashboard::PROVIDERS_TITLE)?;
    for card in screen.cards() {
        writeln!(out, "  {}  {}  ({}, {})", card.id, card.name, card.days, card.hours)?;
    }
    Ok(())
}

/// Open the booking screen for `provider_id` and pick `date`.
async fn open_booking(app: &mut App, provider_id: &str, date: NaiveDate) -> Result<()> {
    from_dashboard(app, |screen| screen.select_provider(provider_id)).await?;

    let (screen, session) = app.parts_mut();
    let Some(Screen::CreateAppointment(screen)) = screen else {
        bail!("The booking screen is not showing");
    };
    screen.toggle_date_picker();
    screen.select_date(session.api(), Some(date)).await;
    Ok(())
}

fn print_schedule<W: Write>(app: &App, out: &mut W) -> Result<()> {
    let Some(Screen::CreateAppointment(screen)) = app.screen() else {
        bail!("The booking screen is not showing");
    };

    writeln!(out, "{} on {}", screen.selected_provider(), screen.selected_date())?;
    for period in [DayPeriod::Morning, DayPeriod::Afternoon] {
        writeln!(out, "{}", period.title())?;
        for slot in screen.schedule().period(period) {
            let state = if slot.available { "available" } else { "taken" };
            writeln!(out, "  {}  {}", slot.label, state)?;
        }
    }
    Ok(())
}

async fn handle_book<W: Write>(
    app: &mut App,
    out: &mut W,
    provider_id: &str,
    date: NaiveDate,
    hour: u8,
) -> Result<()> {
    open_booking(app, provider_id, date).await?;

    let (screen, session) = app.parts_mut();
    let Some(Screen::CreateAppointment(screen)) = screen else {
        bail!("The booking screen is not showing");
    };
    if !screen.select_hour(hour) {
        bail!("{:02}:00 is not available on {}", hour, date);
    }
    let outcome = screen.create(session.api()).await;
    finish(app, out, outcome, &ValidationErrors::default()).await?;

    let confirmed = match app.screen() {
        Some(Screen::AppointmentCreated(screen)) => {
            writeln!(out, "Appointment created")?;
            writeln!(out, "{}", screen.formatted_date())?;
            Some(screen.ok())
        }
        _ => None,
    };
    if let Some(outcome) = confirmed {
        app.dispatch(outcome).await?;
    }
    Ok(())
}

async fn handle_profile<W: Write>(
    app: &mut App,
    out: &mut W,
    name: &str,
    email: &str,
    password: Option<PasswordArgs>,
) -> Result<()> {
    from_dashboard(app, |screen| screen.open_profile()).await?;

    let (screen, session) = app.parts_mut();
    let Some(Screen::Profile(screen)) = screen else {
        bail!("The profile screen is not showing");
    };
    let form = screen.form_mut();
    form.set_value(profile::NAME, name);
    form.set_value(profile::EMAIL, email);
    if let Some(password) = password {
        form.set_value(profile::OLD_PASSWORD, password.old);
        form.set_value(profile::PASSWORD, password.new);
        form.set_value(profile::PASSWORD_CONFIRMATION, password.confirmation);
    }
    let outcome = screen.submit(session).await;
    let errors = screen.form().errors().clone();

    finish(app, out, outcome, &errors).await
}

async fn handle_avatar<W: Write>(app: &mut App, out: &mut W, path: &Path) -> Result<()> {
    from_dashboard(app, |screen| screen.open_profile()).await?;

    let pick = match tokio::fs::read(path).await {
        Ok(bytes) => AvatarPick::Photo(Bytes::from(bytes)),
        Err(e) => AvatarPick::Failed(format!("{}: {}", path.display(), e)),
    };

    let (screen, session) = app.parts_mut();
    let Some(Screen::Profile(screen)) = screen else {
        bail!("The profile screen is not showing");
    };
    let outcome = screen.update_avatar(session, pick).await;
    let avatar_url = screen.avatar_url().map(str::to_string);
    let failed = outcome.alert.is_some();

    finish(app, out, outcome, &ValidationErrors::default()).await?;
    if !failed {
        if let Some(url) = avatar_url {
            writeln!(out, "Avatar updated: {}", url)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemorySessionStorage, MockHttpClient, MockResponse};
    use crate::api::ApiClient;
    use crate::auth::Session;
    use crate::models::User;
    use serde_json::json;
    use std::sync::Arc;

    fn user() -> User {
        User {
            id: "u-1".to_string(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            avatar_url: None,
        }
    }

    async fn started(http: &MockHttpClient, storage: &InMemorySessionStorage) -> App {
        let api = ApiClient::new("http://api.test", Arc::new(http.clone()));
        let mut app = App::new(api, Arc::new(storage.clone()));
        app.start().await;
        app
    }

    async fn output(command: CliCommand, app: &mut App) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = run(command, app, &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_whoami() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::json(200, json!([])));
        let storage = InMemorySessionStorage::with_session(Session::new(user(), "tok"));
        let mut app = started(&http, &storage).await;

        let (result, text) = output(CliCommand::WhoAmI, &mut app).await;
        result.unwrap();
        assert_eq!(text, "Ana <ana@example.com>\n");
    }

    #[tokio::test]
    async fn test_sign_in_prints_field_errors() {
        let http = MockHttpClient::new();
        let mut app = started(&http, &InMemorySessionStorage::new()).await;

        let (result, text) = output(
            CliCommand::SignIn {
                email: "not-an-email".to_string(),
                password: String::new(),
            },
            &mut app,
        )
        .await;

        result.unwrap();
        assert!(text.contains("email: Enter a valid email"));
        assert!(text.contains("password: Password is required"));
        assert!(http.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_providers_requires_session() {
        let http = MockHttpClient::new();
        let mut app = started(&http, &InMemorySessionStorage::new()).await;

        let (result, _) = output(CliCommand::Providers, &mut app).await;
        assert!(result.unwrap_err().to_string().contains("Not signed in"));
    }

    #[tokio::test]
    async fn test_sign_up_prints_alert() {
        let http = MockHttpClient::new();
        http.set_response("http://api.test/users", MockResponse::json(200, json!({})));
        let mut app = started(&http, &InMemorySessionStorage::new()).await;

        let (result, text) = output(
            CliCommand::SignUp {
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                password: "secret".to_string(),
            },
            &mut app,
        )
        .await;

        result.unwrap();
        assert_eq!(text, "Account created\nYou can now sign in\n");
        assert!(matches!(app.screen(), Some(Screen::SignIn(_))));
    }

    #[tokio::test]
    async fn test_availability_prints_periods() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::json(200, json!([])));
        http.set_response(
            "http://api.test/providers/p-1/day-availability",
            MockResponse::json(
                200,
                json!([{"hour": 9, "available": true}, {"hour": 14, "available": false}]),
            ),
        );
        let storage = InMemorySessionStorage::with_session(Session::new(user(), "tok"));
        let mut app = started(&http, &storage).await;

        let (result, text) = output(
            CliCommand::Availability {
                provider_id: "p-1".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            },
            &mut app,
        )
        .await;

        result.unwrap();
        assert!(text.contains("Morning\n  09:00  available\n"));
        assert!(text.contains("Afternoon\n  14:00  taken\n"));
    }
}
