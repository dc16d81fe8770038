//! Process configuration from environment variables

use crate::booking::Catalog;
use crate::notify::{Credentials, SnsConfig};
use chrono_tz::Tz;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_TIMEZONE: Tz = chrono_tz::America::New_York;
const DEFAULT_REGION: &str = "us-east-1";
const LIST_SEPARATOR: char = ';';

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Zone used to decide what "today" is for date validation
    pub timezone: Tz,
    pub catalog: Catalog,
    /// `None` when no credentials are configured
    pub sns: Option<SnsConfig>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_or_default(&lookup, "SHOWTIME_PORT", DEFAULT_PORT);

        let timezone = parse_or_default(&lookup, "SHOWTIME_TIMEZONE", DEFAULT_TIMEZONE);

        let defaults = Catalog::default();
        let movies = lookup("SHOWTIME_MOVIES")
            .map(|raw| parse_list(&raw))
            .filter(|list| !list.is_empty())
            .unwrap_or_else(|| defaults.movies().to_vec());
        let theaters = lookup("SHOWTIME_THEATERS")
            .map(|raw| parse_list(&raw))
            .filter(|list| !list.is_empty())
            .unwrap_or_else(|| defaults.theaters().to_vec());

        Self {
            port,
            timezone,
            catalog: Catalog::new(movies, theaters),
            sns: sns_from_lookup(&lookup),
        }
    }
}

fn sns_from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Option<SnsConfig> {
    let access_key_id = lookup("AWS_ACCESS_KEY_ID").filter(|v| !v.is_empty())?;
    let secret_access_key = lookup("AWS_SECRET_ACCESS_KEY").filter(|v| !v.is_empty())?;
    let region = lookup("AWS_REGION")
        .or_else(|| lookup("AWS_DEFAULT_REGION"))
        .unwrap_or_else(|| DEFAULT_REGION.to_string());

    Some(SnsConfig {
        region,
        endpoint: lookup("SNS_ENDPOINT"),
        credentials: Credentials {
            access_key_id,
            secret_access_key,
            session_token: lookup("AWS_SESSION_TOKEN").filter(|v| !v.is_empty()),
        },
    })
}

fn parse_or_default<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key = %key, value = %raw, "Invalid value, using default");
            default
        }),
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config.port, 8000);
        assert_eq!(config.timezone, chrono_tz::America::New_York);
        assert_eq!(config.catalog, Catalog::default());
        assert!(config.sns.is_none());
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config(&[
            ("SHOWTIME_PORT", "eighty"),
            ("SHOWTIME_TIMEZONE", "Mars/Olympus_Mons"),
        ]);
        assert_eq!(config.port, 8000);
        assert_eq!(config.timezone, chrono_tz::America::New_York);
    }

    #[test]
    fn test_timezone_and_port_overrides() {
        let config = config(&[("SHOWTIME_PORT", "9090"), ("SHOWTIME_TIMEZONE", "Asia/Kolkata")]);
        assert_eq!(config.port, 9090);
        assert_eq!(config.timezone, chrono_tz::Asia::Kolkata);
    }

    #[test]
    fn test_catalog_override() {
        let config = config(&[
            ("SHOWTIME_MOVIES", "Dune: Part Two; Wicked ;"),
            ("SHOWTIME_THEATERS", " ; "),
        ]);
        assert_eq!(config.catalog.movies(), ["Dune: Part Two", "Wicked"]);
        assert_eq!(config.catalog.theaters(), Catalog::default().theaters());
    }

    #[test]
    fn test_sns_requires_both_keys() {
        assert!(config(&[("AWS_ACCESS_KEY_ID", "AKID")]).sns.is_none());

        let sns = config(&[
            ("AWS_ACCESS_KEY_ID", "AKID"),
            ("AWS_SECRET_ACCESS_KEY", "secret"),
            ("AWS_DEFAULT_REGION", "us-west-2"),
        ])
        .sns
        .unwrap();
        assert_eq!(sns.region, "us-west-2");
        assert_eq!(sns.endpoint, None);
        assert_eq!(sns.credentials.session_token, None);
    }

    #[test]
    fn test_region_and_endpoint_overrides() {
        let sns = config(&[
            ("AWS_ACCESS_KEY_ID", "AKID"),
            ("AWS_SECRET_ACCESS_KEY", "secret"),
            ("AWS_REGION", "eu-central-1"),
            ("AWS_DEFAULT_REGION", "us-west-2"),
            ("SNS_ENDPOINT", "http://localhost:4566/"),
            ("AWS_SESSION_TOKEN", "tok"),
        ])
        .sns
        .unwrap();
        assert_eq!(sns.region, "eu-central-1");
        assert_eq!(sns.endpoint.as_deref(), Some("http://localhost:4566/"));
        assert_eq!(sns.credentials.session_token.as_deref(), Some("tok"));
    }
}
