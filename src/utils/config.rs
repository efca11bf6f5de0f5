use thiserror::Error;

/// Fehler beim Laden der Konfiguration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} nicht gesetzt")]
    Missing(&'static str),
    #[error("{0} muss eine Zahl sein")]
    NotANumber(&'static str),
    #[error("FIRESTORE_CREDENTIALS oder FIRESTORE_CREDENTIALS_JSON nicht gesetzt")]
    MissingStoreCredentials,
    #[error("SHOPIFY_ADMIN_TOKEN oder SHOPIFY_API_KEY + SHOPIFY_API_SECRET nicht gesetzt")]
    MissingShopifyCredentials,
}

/// Hauptkonfiguration für den Migration Service
#[derive(Debug, Clone)]
pub struct Config {
    pub migration_secret: String,
    pub shopify_shop: String,
    pub shopify_admin_token: Option<String>,
    pub shopify_api_key: Option<String>,
    pub shopify_api_secret: Option<String>,
    pub shopify_api_version: String,
    pub firestore_project_id: String,
    /// Basis-URL der Firestore REST API (überschreibbar für lokale Emulatoren)
    pub firestore_base_url: String,
    /// Pfad zur Service Account Key Datei
    pub firestore_credentials: Option<String>,
    /// Alternativ: Service Account Key als Inline-JSON
    pub firestore_credentials_json: Option<String>,
    pub firestore_collection: String,
    pub batch_size: usize,
    pub metafield_delay_ms: u64,
    pub record_delay_ms: u64,
    pub batch_delay_ms: u64,
    pub api_port: u16,
}

impl Config {
    /// Lade Config aus Environment Variablen
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = Self {
            migration_secret: required(&lookup, "MIGRATION_SECRET")?,
            shopify_shop: required(&lookup, "SHOPIFY_SHOP")?,
            shopify_admin_token: optional(&lookup, "SHOPIFY_ADMIN_TOKEN"),
            shopify_api_key: optional(&lookup, "SHOPIFY_API_KEY"),
            shopify_api_secret: optional(&lookup, "SHOPIFY_API_SECRET"),
            shopify_api_version: optional(&lookup, "SHOPIFY_API_VERSION")
                .unwrap_or_else(|| "2024-01".to_string()),
            firestore_project_id: required(&lookup, "FIRESTORE_PROJECT_ID")?,
            firestore_base_url: optional(&lookup, "FIRESTORE_BASE_URL")
                .unwrap_or_else(|| "https://firestore.googleapis.com/v1".to_string()),
            firestore_credentials: optional(&lookup, "FIRESTORE_CREDENTIALS")
                .or_else(|| optional(&lookup, "GOOGLE_APPLICATION_CREDENTIALS")),
            firestore_credentials_json: optional(&lookup, "FIRESTORE_CREDENTIALS_JSON"),
            firestore_collection: optional(&lookup, "FIRESTORE_COLLECTION")
                .unwrap_or_else(|| "products".to_string()),
            batch_size: number(&lookup, "MIGRATION_BATCH_SIZE", 10usize)?.max(1),
            metafield_delay_ms: number(&lookup, "METAFIELD_DELAY_MS", 200u64)?,
            record_delay_ms: number(&lookup, "RECORD_DELAY_MS", 350u64)?,
            batch_delay_ms: number(&lookup, "BATCH_DELAY_MS", 1000u64)?,
            api_port: number(&lookup, "API_PORT", 8080u16)?,
        };

        if config.firestore_credentials.is_none() && config.firestore_credentials_json.is_none() {
            return Err(ConfigError::MissingStoreCredentials);
        }

        let has_session_pair =
            config.shopify_api_key.is_some() && config.shopify_api_secret.is_some();
        if config.shopify_admin_token.is_none() && !has_session_pair {
            return Err(ConfigError::MissingShopifyCredentials);
        }

        Ok(config)
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<String, ConfigError> {
    optional(lookup, key).ok_or(ConfigError::Missing(key))
}

// Leere Variablen zählen als nicht gesetzt
fn optional(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|value| !value.is_empty())
}

fn number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match optional(lookup, key) {
        Some(raw) => raw.parse::<T>().map_err(|_| ConfigError::NotANumber(key)),
        None => Ok(default),
    }
}
