//! Application context.
//!
//! [`App`] owns the session store, the navigator and one screen controller
//! per entry of the mounted stack. It is created once at startup and handed
//! by reference to whatever drives the screens (the CLI, tests).
//!
//! ```ignore
//! let mut app = App::from_config(&ClientConfig::from_env()?)?;
//! app.start().await;
//!
//! let (screen, session) = app.parts_mut();
//! if let Some(Screen::SignIn(sign_in)) = screen {
//!     sign_in.form_mut().set_value("email", "ana@example.com");
//!     sign_in.form_mut().set_value("password", "secret");
//!     let outcome = sign_in.submit(session).await;
//!     app.dispatch(outcome).await?;
//! }
//! ```

use chrono::Local;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::adapters::{FileSessionStorage, ReqwestHttpClient};
use crate::api::ApiClient;
use crate::auth::SessionStore;
use crate::config::ClientConfig;
use crate::error::{BookingResult, NetworkError};
use crate::navigation::{NavAction, Navigator, Route, StackKind};
use crate::screens::{
    Alert, AppointmentCreatedScreen, CreateAppointmentScreen, DashboardScreen, Outcome,
    ProfileScreen, SignInScreen, SignUpScreen,
};
use crate::traits::{HttpClient, SessionStorage};

/// A mounted screen controller.
#[derive(Debug, Clone)]
pub enum Screen {
    SignIn(SignInScreen),
    SignUp(SignUpScreen),
    Dashboard(DashboardScreen),
    CreateAppointment(CreateAppointmentScreen),
    AppointmentCreated(AppointmentCreatedScreen),
    Profile(ProfileScreen),
}

impl Screen {
    fn open(route: &Route, session: &SessionStore) -> Self {
        match route {
            Route::SignIn => Screen::SignIn(SignInScreen::new()),
            Route::SignUp => Screen::SignUp(SignUpScreen::new()),
            Route::Dashboard => Screen::Dashboard(DashboardScreen::new()),
            Route::CreateAppointment(params) => Screen::CreateAppointment(
                CreateAppointmentScreen::new(params, Local::now().date_naive()),
            ),
            Route::AppointmentCreated(params) => {
                Screen::AppointmentCreated(AppointmentCreatedScreen::new(params))
            }
            Route::Profile => Screen::Profile(ProfileScreen::new(session.user())),
        }
    }

    /// Issue the reads a screen makes when it appears.
    async fn mount(&mut self, api: &ApiClient) {
        match self {
            Screen::Dashboard(screen) => screen.load(api).await,
            Screen::CreateAppointment(screen) => screen.load(api).await,
            _ => {}
        }
    }

    pub fn stack(&self) -> StackKind {
        match self {
            Screen::SignIn(_) | Screen::SignUp(_) => StackKind::Auth,
            _ => StackKind::App,
        }
    }
}

pub struct App {
    session: SessionStore,
    navigator: Navigator,
    screens: Vec<Screen>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("session", &self.session)
            .field("navigator", &self.navigator)
            .field("screens", &self.screens.len())
            .finish()
    }
}

impl App {
    /// Build the context around an API client and session storage.
    ///
    /// Nothing is mounted until [`start`](Self::start) restores the session.
    pub fn new(api: ApiClient, storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            session: SessionStore::new(api, storage),
            navigator: Navigator::new(),
            screens: Vec::new(),
        }
    }

    /// Production wiring: reqwest transport and the JSON session file.
    pub fn from_config(config: &ClientConfig) -> BookingResult<Self> {
        let http: Arc<dyn HttpClient> = match config.request_timeout {
            Some(timeout) => Arc::new(
                ReqwestHttpClient::with_timeout(timeout)
                    .map_err(|e| NetworkError::from_http(e, &config.api_url))?,
            ),
            None => Arc::new(ReqwestHttpClient::new()),
        };
        let storage = FileSessionStorage::at(config.resolve_session_path()?);
        debug!(
            "Using API at {} with session file {}",
            config.api_url,
            storage.path().display()
        );

        Ok(Self::new(
            ApiClient::new(config.api_url.clone(), http),
            Arc::new(storage),
        ))
    }

    /// Restore the persisted session and mount the matching stack.
    pub async fn start(&mut self) {
        self.sync().await;
        self.session.restore().await;
        self.sync().await;
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn current_route(&self) -> Option<&Route> {
        self.navigator.current()
    }

    /// The screen on top of the mounted stack.
    pub fn screen(&self) -> Option<&Screen> {
        self.screens.last()
    }

    /// The top screen together with the session store its actions need.
    pub fn parts_mut(&mut self) -> (Option<&mut Screen>, &mut SessionStore) {
        (self.screens.last_mut(), &mut self.session)
    }

    /// Apply the outcome of a screen action.
    ///
    /// A session change (sign-in, sign-out) swaps the mounted stack and
    /// supersedes the requested navigation. Returns the alert to show.
    pub async fn dispatch(&mut self, outcome: Outcome) -> BookingResult<Option<Alert>> {
        let Outcome { alert, navigation } = outcome;

        if !self.sync().await {
            if let Some(action) = navigation {
                self.navigate(action).await?;
            }
        }

        Ok(alert)
    }

    /// Push a screen given by name and untyped parameters.
    pub async fn open(&mut self, name: &str, params: &Value) -> BookingResult<()> {
        let route = Route::from_parts(name, params)?;
        self.navigate(NavAction::Push(route)).await
    }

    async fn navigate(&mut self, action: NavAction) -> BookingResult<()> {
        self.navigator.apply(action.clone())?;
        let depth = self.navigator.stack().map_or(0, |s| s.depth());

        match action {
            NavAction::Pop => self.screens.truncate(depth),
            NavAction::Push(route) | NavAction::Reset(route) => {
                self.screens.truncate(depth.saturating_sub(1));
                let screen = self.mount(&route).await;
                self.screens.push(screen);
            }
        }
        Ok(())
    }

    /// Bring the navigator in line with the session; remount on change.
    async fn sync(&mut self) -> bool {
        let changed = self
            .navigator
            .sync(self.session.is_signed_in(), self.session.is_loading());
        if changed {
            self.screens.clear();
            let routes = self
                .navigator
                .stack()
                .map(|s| s.routes().to_vec())
                .unwrap_or_default();
            for route in routes {
                let screen = self.mount(&route).await;
                self.screens.push(screen);
            }
        }
        changed
    }

    async fn mount(&self, route: &Route) -> Screen {
        debug!("Opening {}", route.name());
        let mut screen = Screen::open(route, &self.session);
        screen.mount(self.session.api()).await;
        screen
    }
}
