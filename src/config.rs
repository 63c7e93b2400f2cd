use secrecy::{ExposeSecret, Secret};
use serde_aux::prelude::deserialize_number_from_string;

/// Provider token, read straight from the process environment.
pub const API_KEY_VARIABLE: &str = "RESEND_API_KEY";
/// Recipient of relayed submissions.
pub const RECIPIENT_VARIABLE: &str = "CONTACT_EMAIL";

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other,
            )),
        }
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct EmailClientSettings {
    pub base_url: String,
    /// Fixed identity every relayed email is sent from.
    pub sender: String,
    #[serde(default)]
    pub authorization_token: Option<Secret<String>>,
}

impl EmailClientSettings {
    /// The provider token, treating an empty value as unset.
    pub fn token(&self) -> Option<&Secret<String>> {
        self.authorization_token
            .as_ref()
            .filter(|token| !token.expose_secret().is_empty())
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ContactSettings {
    #[serde(default = "default_recipient")]
    pub recipient: String,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            recipient: default_recipient(),
        }
    }
}

fn default_recipient() -> String {
    "srikarv100@gmail.com".into()
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Configuration {
    pub app: AppConfig,
    pub email_client: EmailClientSettings,
    #[serde(default)]
    pub contact: ContactSettings,
}

pub fn get_configuration() -> Result<Configuration, config::ConfigError> {
    let mut settings = config::Config::default();

    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(format!("cannot read current dir: {}", e)))?;
    let configuration_directory = base_path.join("configuration");

    // Read in default configuration
    settings.merge(config::File::from(configuration_directory.join("base")).required(true))?;

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    // Read in layer environment specific file.
    settings.merge(
        config::File::from(configuration_directory.join(environment.as_str())).required(true),
    )?;

    // e.g. `APP_APP__PORT=5001` sets `app.port`.
    settings.merge(config::Environment::with_prefix("app").separator("__"))?;

    // The deployment conventions of the contact form win over everything else.
    if let Ok(token) = std::env::var(API_KEY_VARIABLE) {
        settings.set("email_client.authorization_token", token)?;
    }
    if let Ok(recipient) = std::env::var(RECIPIENT_VARIABLE) {
        if !recipient.is_empty() {
            settings.set("contact.recipient", recipient)?;
        }
    }

    settings.try_into()
}
