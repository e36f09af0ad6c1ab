//! # Environment Record
//!
//! The immutable settings record the front-end build selects per deployment
//! environment, with compiled-in development defaults.

use crate::auth_constants::{
    API_SERVER_URL, AUTH0_AUDIENCE, AUTH0_CALLBACK_URL, AUTH0_CLIENT_ID, AUTH0_DOMAIN_PREFIX,
    AUTH0_HOST_SUFFIX,
};
use crate::error::ConfigurationError;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Deployment environment a record is built for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigurationError::invalid_value(
                "profile",
                other,
                "expected 'development' or 'production'",
            )),
        }
    }
}

/// Auth0 settings used to initialize the identity-provider client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Auth0Config {
    /// Auth0 domain prefix, e.g. `coffeshop1987.us`
    #[serde(deserialize_with = "string_or_scalar")]
    pub url: String,

    /// Audience set for the Auth0 API
    #[serde(deserialize_with = "string_or_scalar")]
    pub audience: String,

    /// Client ID generated for the Auth0 application
    #[serde(deserialize_with = "string_or_scalar")]
    pub client_id: String,

    /// Base URL of the running front-end application
    #[serde(deserialize_with = "string_or_scalar")]
    pub callback_url: String,
}

impl Default for Auth0Config {
    fn default() -> Self {
        Self {
            url: AUTH0_DOMAIN_PREFIX.to_string(),
            audience: AUTH0_AUDIENCE.to_string(),
            client_id: AUTH0_CLIENT_ID.to_string(),
            callback_url: AUTH0_CALLBACK_URL.to_string(),
        }
    }
}

impl Auth0Config {
    /// Full tenant host, e.g. `coffeshop1987.us.auth0.com`
    pub fn tenant_domain(&self) -> String {
        let prefix = self.url.trim().trim_end_matches('/');
        if prefix.ends_with(AUTH0_HOST_SUFFIX) {
            prefix.to_string()
        } else {
            format!("{prefix}{AUTH0_HOST_SUFFIX}")
        }
    }

    /// Token issuer URL for the tenant
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.tenant_domain())
    }
}

/// Environment configuration consumed by the front-end build
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnvironmentConfig {
    /// Whether this is a production deployment
    pub production: bool,

    /// Base URL of the backend API server
    #[serde(deserialize_with = "string_or_scalar")]
    pub api_server_url: String,

    /// Identity-provider settings
    pub auth0: Auth0Config,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self::for_environment(Environment::Development)
    }
}

/// Front-end key names, in declaration order
pub const FRONTEND_KEYS: [&str; 6] = [
    "production",
    "apiServerUrl",
    "auth0.url",
    "auth0.audience",
    "auth0.clientId",
    "auth0.callbackURL",
];

impl EnvironmentConfig {
    /// Compiled defaults for a deployment environment
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            production: environment.is_production(),
            api_server_url: API_SERVER_URL.to_string(),
            auth0: Auth0Config::default(),
        }
    }

    pub fn environment(&self) -> Environment {
        if self.production {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    /// Get a field value by key
    ///
    /// Accepts the front-end spelling (`auth0.clientId`) as well as the
    /// file/environment spelling (`auth0.client_id`).
    pub fn get(&self, key: &str) -> Result<String, ConfigurationError> {
        match key {
            "production" => Ok(self.production.to_string()),
            "apiServerUrl" | "api_server_url" => Ok(self.api_server_url.clone()),
            "auth0.url" => Ok(self.auth0.url.clone()),
            "auth0.audience" => Ok(self.auth0.audience.clone()),
            "auth0.clientId" | "auth0.client_id" => Ok(self.auth0.client_id.clone()),
            "auth0.callbackURL" | "auth0.callback_url" => Ok(self.auth0.callback_url.clone()),
            _ => Err(ConfigurationError::UnknownKey {
                key: key.to_string(),
            }),
        }
    }

    /// All fields keyed by their front-end names
    pub fn to_map(&self) -> BTreeMap<String, String> {
        FRONTEND_KEYS
            .iter()
            .filter_map(|key| self.get(key).ok().map(|value| (key.to_string(), value)))
            .collect()
    }

    /// Borrowed view serializing with the front-end key names
    pub fn to_frontend(&self) -> FrontendEnvironment<'_> {
        FrontendEnvironment {
            production: self.production,
            api_server_url: &self.api_server_url,
            auth0: FrontendAuth0 {
                url: &self.auth0.url,
                audience: &self.auth0.audience,
                client_id: &self.auth0.client_id,
                callback_url: &self.auth0.callback_url,
            },
        }
    }

    /// Check that every field is usable
    ///
    /// Checks are per field; the audience is not required to match the API
    /// server URL.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        validate_http_url("apiServerUrl", &self.api_server_url)?;
        validate_domain_prefix("auth0.url", &self.auth0.url)?;
        validate_http_url("auth0.audience", &self.auth0.audience)?;
        require_non_empty("auth0.clientId", &self.auth0.client_id)?;
        if self.auth0.client_id.chars().any(char::is_whitespace) {
            return Err(ConfigurationError::invalid_value(
                "auth0.clientId",
                &self.auth0.client_id,
                "must not contain whitespace",
            ));
        }
        validate_http_url("auth0.callbackURL", &self.auth0.callback_url)?;
        Ok(())
    }
}

/// Serialized form matching the front-end `environment` object
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontendEnvironment<'a> {
    pub production: bool,
    pub api_server_url: &'a str,
    pub auth0: FrontendAuth0<'a>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FrontendAuth0<'a> {
    pub url: &'a str,
    pub audience: &'a str,
    #[serde(rename = "clientId")]
    pub client_id: &'a str,
    #[serde(rename = "callbackURL")]
    pub callback_url: &'a str,
}

/// Accept numbers and booleans for opaque string fields
///
/// Environment providers type their values, so an all-digit client ID
/// arrives as an integer.
fn string_or_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrScalar;

    impl<'de> Visitor<'de> for StringOrScalar {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string, number or boolean")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
            Ok(value)
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_i128<E: de::Error>(self, value: i128) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_u128<E: de::Error>(self, value: u128) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_char<E: de::Error>(self, value: char) -> Result<String, E> {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(StringOrScalar)
}

fn require_non_empty(key: &str, value: &str) -> Result<(), ConfigurationError> {
    if value.trim().is_empty() {
        return Err(ConfigurationError::missing(key));
    }
    if value.trim() != value {
        return Err(ConfigurationError::invalid_value(
            key,
            value,
            "leading or trailing whitespace",
        ));
    }
    Ok(())
}

fn validate_http_url(key: &str, value: &str) -> Result<(), ConfigurationError> {
    require_non_empty(key, value)?;
    let parsed = Url::parse(value)
        .map_err(|e| ConfigurationError::invalid_value(key, value, e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigurationError::invalid_value(
            key,
            value,
            format!("unsupported scheme '{}'", parsed.scheme()),
        ));
    }
    if parsed.host_str().is_none() {
        return Err(ConfigurationError::invalid_value(key, value, "missing host"));
    }
    Ok(())
}

fn validate_domain_prefix(key: &str, value: &str) -> Result<(), ConfigurationError> {
    require_non_empty(key, value)?;
    if value.contains("://") {
        return Err(ConfigurationError::invalid_value(
            key,
            value,
            "expected a domain prefix without scheme",
        ));
    }
    if value.contains('/') || value.chars().any(char::is_whitespace) {
        return Err(ConfigurationError::invalid_value(
            key,
            value,
            "expected a bare domain prefix",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EnvironmentConfig::default();
        assert!(!config.production);
        assert_eq!(config.api_server_url, API_SERVER_URL);
        assert_eq!(config.auth0.url, AUTH0_DOMAIN_PREFIX);
        assert_eq!(config.auth0.audience, AUTH0_AUDIENCE);
        assert_eq!(config.auth0.client_id, AUTH0_CLIENT_ID);
        assert_eq!(config.auth0.callback_url, AUTH0_CALLBACK_URL);
        assert_eq!(config.environment(), Environment::Development);
    }

    #[test]
    fn test_production_profile_sets_flag() {
        let config = EnvironmentConfig::for_environment(Environment::Production);
        assert!(config.production);
        assert_eq!(config.environment(), Environment::Production);
        assert_eq!(config.api_server_url, API_SERVER_URL);
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!(" Development ".parse::<Environment>().unwrap(), Environment::Development);
        assert!(matches!(
            "staging".parse::<Environment>(),
            Err(ConfigurationError::InvalidValue { .. })
        ));
        assert_eq!(Environment::Production.to_string(), "production");
    }

    #[test]
    fn test_get_accepts_both_spellings() {
        let config = EnvironmentConfig::default();
        assert_eq!(config.get("auth0.clientId").unwrap(), AUTH0_CLIENT_ID);
        assert_eq!(config.get("auth0.client_id").unwrap(), AUTH0_CLIENT_ID);
        assert_eq!(config.get("apiServerUrl").unwrap(), config.get("api_server_url").unwrap());
        assert_eq!(config.get("production").unwrap(), "false");

        match config.get("auth0.secret") {
            Err(ConfigurationError::UnknownKey { key }) => assert_eq!(key, "auth0.secret"),
            other => panic!("Expected UnknownKey, got {other:?}"),
        }
    }

    #[test]
    fn test_to_map_exposes_all_fields() {
        let map = EnvironmentConfig::default().to_map();
        assert_eq!(map.len(), FRONTEND_KEYS.len());
        for key in FRONTEND_KEYS {
            assert!(map.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn test_frontend_json_shape() {
        let config = EnvironmentConfig::default();
        let value = serde_json::to_value(config.to_frontend()).unwrap();

        assert_eq!(value["production"], serde_json::Value::Bool(false));
        assert_eq!(value["apiServerUrl"], API_SERVER_URL);
        assert_eq!(value["auth0"]["url"], AUTH0_DOMAIN_PREFIX);
        assert_eq!(value["auth0"]["audience"], AUTH0_AUDIENCE);
        assert_eq!(value["auth0"]["clientId"], AUTH0_CLIENT_ID);
        assert_eq!(value["auth0"]["callbackURL"], AUTH0_CALLBACK_URL);
        assert_eq!(value["auth0"].as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_tenant_domain_and_issuer() {
        let mut auth0 = Auth0Config {
            url: "coffeshop1987.us".to_string(),
            ..Auth0Config::default()
        };
        assert_eq!(auth0.tenant_domain(), "coffeshop1987.us.auth0.com");
        assert_eq!(auth0.issuer(), "https://coffeshop1987.us.auth0.com/");

        auth0.url = "coffeshop1987.us.auth0.com".to_string();
        assert_eq!(auth0.tenant_domain(), "coffeshop1987.us.auth0.com");
    }

    #[test]
    fn test_validate_defaults() {
        if crate::auth_constants::BUILD_OVERRIDDEN {
            return;
        }
        EnvironmentConfig::default().validate().unwrap();
        EnvironmentConfig::for_environment(Environment::Production)
            .validate()
            .unwrap();
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let mut config = EnvironmentConfig::default();
        config.auth0.client_id = "   ".to_string();
        match config.validate() {
            Err(ConfigurationError::MissingRequired { key }) => assert_eq!(key, "auth0.clientId"),
            other => panic!("Expected MissingRequired, got {other:?}"),
        }

        let mut config = EnvironmentConfig::default();
        config.api_server_url = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::MissingRequired { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_malformed_values() {
        let mut config = EnvironmentConfig::default();
        config.auth0.callback_url = "localhost:8100/tabs".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidValue { ref key, .. }) if key == "auth0.callbackURL"
        ));

        let mut config = EnvironmentConfig::default();
        config.auth0.url = "https://coffeshop1987.us.auth0.com".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidValue { ref key, .. }) if key == "auth0.url"
        ));

        let mut config = EnvironmentConfig::default();
        config.api_server_url = "ftp://localhost:5000".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_padded_values() {
        let mut config = EnvironmentConfig::default();
        config.api_server_url = "  http://api.coffee.example.com ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidValue { ref key, ref reason, .. })
                if key == "apiServerUrl" && reason.contains("whitespace")
        ));

        let mut config = EnvironmentConfig::default();
        config.auth0.client_id = "abc123\n".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidValue { ref key, .. }) if key == "auth0.clientId"
        ));
    }

    #[test]
    fn test_string_fields_accept_scalars() {
        let parsed: EnvironmentConfig = toml::from_str(
            r#"
            production = true
            api_server_url = "https://api.coffee.example.com"

            [auth0]
            url = "coffeshop1987.us"
            audience = "https://api.coffee.example.com"
            client_id = 123456789
            callback_url = "https://coffee.example.com"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.auth0.client_id, "123456789");
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_audience_may_differ_from_api_url() {
        let mut config = EnvironmentConfig::default();
        config.auth0.audience = "https://drinks.example.com".to_string();
        assert!(config.validate().is_ok());
    }
}
