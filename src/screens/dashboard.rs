//! Dashboard: greeting, provider list and entry points to the app stack.

use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::auth::SessionStore;
use crate::models::{Provider, User};
use crate::navigation::Route;

use super::Outcome;

/// Working days shown on every provider card.
pub const PROVIDER_DAYS: &str = "Monday to Friday";

/// Working hours shown on every provider card.
pub const PROVIDER_HOURS: &str = "8am to 6pm";

/// Title above the provider list.
pub const PROVIDERS_TITLE: &str = "Hairdressers";

/// One row of the provider list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderCard<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub avatar_url: Option<&'a str>,
    pub days: &'static str,
    pub hours: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct DashboardScreen {
    providers: Vec<Provider>,
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the provider list. A failure is logged and leaves the list as
    /// it was.
    pub async fn load(&mut self, api: &ApiClient) {
        match api.list_providers().await {
            Ok(providers) => {
                debug!("Loaded {} providers", providers.len());
                self.providers = providers;
            }
            Err(e) => warn!("Failed to load providers: {}", e),
        }
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn cards(&self) -> Vec<ProviderCard<'_>> {
        self.providers
            .iter()
            .map(|p| ProviderCard {
                id: &p.id,
                name: &p.name,
                avatar_url: p.avatar_url.as_deref(),
                days: PROVIDER_DAYS,
                hours: PROVIDER_HOURS,
            })
            .collect()
    }

    pub fn greeting(user: &User) -> String {
        format!("Welcome,\n{}", user.name)
    }

    pub fn open_profile(&self) -> Outcome {
        Outcome::push(Route::Profile)
    }

    pub fn select_provider(&self, provider_id: &str) -> Outcome {
        Outcome::push(Route::create_appointment(provider_id))
    }

    pub async fn sign_out(&self, session: &mut SessionStore) -> Outcome {
        session.sign_out().await;
        Outcome::none()
    }
}
