//! Startup wiring: resolve configuration, build the initial state, and
//! queue the first product-list fetch.

use iced::Task;

use crate::api_client::ApiClient;
use crate::config::Config;
use crate::message::Message;
use crate::state::State;
use crate::update;

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_url: String,
}

impl AppConfig {
    /// Resolve configuration from the environment, falling back to the
    /// saved config file and finally the built-in default. An
    /// environment override is written back so it sticks for the next
    /// launch.
    pub fn from_environment() -> Self {
        let file_config = Config::load();
        let server_url = std::env::var("RENDA_SERVER_URL")
            .unwrap_or_else(|_| file_config.server_url.clone());

        if server_url != file_config.server_url {
            let updated = Config {
                server_url: server_url.clone(),
            };
            if let Err(err) = updated.save() {
                log::warn!("Failed to persist config: {}", err);
            }
        }

        log::info!("Using portfolio server at {}", server_url);
        AppConfig { server_url }
    }
}

/// Initial state plus the boot task that loads the product list.
pub fn boot(config: &AppConfig) -> (State, Task<Message>) {
    let client = ApiClient::new(config.server_url.clone());
    let fetch = update::fetch_products(client.clone());
    (State::new(client), fetch)
}
