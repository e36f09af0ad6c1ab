//! Table formatting for CLI output

use coffee_shop_common::config::FRONTEND_KEYS;
use coffee_shop_common::EnvironmentConfig;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct SettingRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Build the settings table in front-end key order
pub fn environment_table(config: &EnvironmentConfig) -> String {
    let rows: Vec<SettingRow> = FRONTEND_KEYS
        .iter()
        .filter_map(|key| {
            config.get(key).ok().map(|value| SettingRow {
                key: key.to_string(),
                value,
            })
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.to_string()
}

/// Display the environment settings in table format
pub fn display_environment(config: &EnvironmentConfig) {
    println!("{}", environment_table(config));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_every_key() {
        let config = EnvironmentConfig::default();
        let table = environment_table(&config);
        for key in FRONTEND_KEYS {
            assert!(table.contains(key), "missing {key}");
        }
        assert!(table.contains(&config.auth0.client_id));
    }
}
