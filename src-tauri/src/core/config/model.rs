use serde::{Deserialize, Serialize};

/// One tracked modpack installation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Modpack {
    /// Minted from `Config::next_id`; never reused after removal.
    pub id: u64,
    /// Absolute URL the pack is distributed from.
    pub url: String,
    /// Last validated install directory; empty until first selection.
    pub last_path: String,
}

/// Persisted root of the config store (`sn-config.json`).
///
/// Parsing is strict on purpose: an unknown or missing field means the
/// store was written by something else (or damaged) and triggers
/// reinitialization rather than a partial read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub modpacks: Vec<Modpack>,
    pub next_id: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            modpacks: Vec::new(),
            next_id: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_store_is_empty_with_counter_at_one() {
        let config = Config::default();
        assert!(config.modpacks.is_empty());
        assert_eq!(config.next_id, 1);
    }

    #[test]
    fn round_trips_through_json() {
        let config = Config {
            modpacks: vec![Modpack {
                id: 1,
                url: "https://host/pack.zip".to_string(),
                last_path: "/games/mc".to_string(),
            }],
            next_id: 2,
        };

        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.next_id, 2);
        assert_eq!(parsed.modpacks, config.modpacks);
    }

    #[test]
    fn unknown_field_is_corruption() {
        let doc = r#"{ "modpacks": [], "next_id": 1, "theme": "dark" }"#;
        assert!(serde_json::from_str::<Config>(doc).is_err());
    }

    #[test]
    fn missing_counter_is_corruption() {
        let doc = r#"{ "modpacks": [] }"#;
        assert!(serde_json::from_str::<Config>(doc).is_err());
    }
}
