//! Rendering of the environment record for the front-end build.

use super::environment::EnvironmentConfig;
use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format for an exported record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// `environment.ts` module as consumed by the Angular build
    #[default]
    Typescript,
    Json,
    Toml,
}

impl ExportFormat {
    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Typescript => "ts",
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ts" | "typescript" => Ok(Self::Typescript),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            other => Err(ConfigurationError::invalid_value(
                "format",
                other,
                "expected 'ts', 'json' or 'toml'",
            )),
        }
    }
}

/// Render the record in the requested format
pub fn render(config: &EnvironmentConfig, format: ExportFormat) -> Result<String, ConfigurationError> {
    match format {
        ExportFormat::Typescript => Ok(render_typescript(config)),
        ExportFormat::Json => serde_json::to_string_pretty(&config.to_frontend())
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| ConfigurationError::ParseError {
                details: format!("Failed to serialize config: {e}"),
            }),
        ExportFormat::Toml => {
            toml::to_string_pretty(config).map_err(|e| ConfigurationError::ParseError {
                details: format!("Failed to serialize config: {e}"),
            })
        }
    }
}

/// Render the `environment.ts` module
pub fn render_typescript(config: &EnvironmentConfig) -> String {
    format!(
        "export const environment = {{\n  \
         production: {production},\n  \
         apiServerUrl: {api_server_url},\n  \
         auth0: {{\n    \
         url: {url},\n    \
         audience: {audience},\n    \
         clientId: {client_id},\n    \
         callbackURL: {callback_url},\n  \
         }},\n\
         }};\n",
        production = config.production,
        api_server_url = ts_string(&config.api_server_url),
        url = ts_string(&config.auth0.url),
        audience = ts_string(&config.auth0.audience),
        client_id = ts_string(&config.auth0.client_id),
        callback_url = ts_string(&config.auth0.callback_url),
    )
}

fn ts_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('\'');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EnvironmentConfig {
        let mut config = EnvironmentConfig::default();
        config.api_server_url = "http://localhost:5000".to_string();
        config.auth0.url = "coffeshop1987.us".to_string();
        config.auth0.audience = "http://localhost:5000".to_string();
        config.auth0.client_id = "sZt9jKXlJ7RQJrrfWMGovPY7AIJoDDlo".to_string();
        config.auth0.callback_url = "http://localhost:8100".to_string();
        config
    }

    #[test]
    fn test_typescript_matches_environment_module() {
        let expected = "\
export const environment = {
  production: false,
  apiServerUrl: 'http://localhost:5000',
  auth0: {
    url: 'coffeshop1987.us',
    audience: 'http://localhost:5000',
    clientId: 'sZt9jKXlJ7RQJrrfWMGovPY7AIJoDDlo',
    callbackURL: 'http://localhost:8100',
  },
};
";
        assert_eq!(render_typescript(&sample()), expected);
    }

    #[test]
    fn test_typescript_escapes_quotes() {
        let mut config = sample();
        config.auth0.client_id = r"it's\odd".to_string();
        let rendered = render_typescript(&config);
        assert!(rendered.contains(r"clientId: 'it\'s\\odd',"));
    }

    #[test]
    fn test_json_uses_frontend_keys() {
        let rendered = render(&sample(), ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["apiServerUrl"], "http://localhost:5000");
        assert_eq!(value["auth0"]["callbackURL"], "http://localhost:8100");
        assert!(value.get("api_server_url").is_none());
    }

    #[test]
    fn test_toml_loads_back() {
        let config = sample();
        let rendered = render(&config, ExportFormat::Toml).unwrap();
        let parsed: EnvironmentConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
        assert!(rendered.contains("[auth0]"));
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("TS".parse::<ExportFormat>().unwrap(), ExportFormat::Typescript);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("yaml".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::Typescript.extension(), "ts");
    }
}
