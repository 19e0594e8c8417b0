use std::env::VarError;
use std::time::Duration;

use anyhow::anyhow;

pub const VARIABLES: &[&str] = &[
    "LISTEN_PORT",
    "GEOCODER_URL",
    "PREDICT_URL",
    "USER_AGENT",
    "GEOCODE_TIMEOUT_SECS",
    "PREDICT_TIMEOUT_SECS",
    "GEOCODE_CACHE_TTL_SECS",
];

const DEFAULT_LISTEN_PORT: u16 = 8080;
const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";
const DEFAULT_PREDICT_URL: &str = "https://taxifare.lewagon.ai/predict";
const DEFAULT_USER_AGENT: &str = "TaxiFareApp/1.0";
const DEFAULT_GEOCODE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_GEOCODE_CACHE_TTL_SECS: u64 = 3600;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_port: u16,
    pub geocoder_url: String,
    pub predict_url: String,
    pub user_agent: String,
    pub geocode_timeout: Duration,
    /// `None` leaves the prediction call without a timeout.
    pub predict_timeout: Option<Duration>,
    pub geocode_cache_ttl: Duration,
}

impl Config {
    pub fn env() -> anyhow::Result<Self> {
        Self::from_lookup(env)
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> anyhow::Result<Option<String>>,
    {
        let listen_port = parse(&lookup, "LISTEN_PORT")?.unwrap_or(DEFAULT_LISTEN_PORT);

        let geocoder_url = url(&lookup, "GEOCODER_URL", DEFAULT_GEOCODER_URL)?;
        let predict_url = url(&lookup, "PREDICT_URL", DEFAULT_PREDICT_URL)?;

        let user_agent = lookup("USER_AGENT")?.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let geocode_timeout = Duration::from_secs(
            parse(&lookup, "GEOCODE_TIMEOUT_SECS")?.unwrap_or(DEFAULT_GEOCODE_TIMEOUT_SECS),
        );
        let predict_timeout = parse(&lookup, "PREDICT_TIMEOUT_SECS")?.map(Duration::from_secs);
        let geocode_cache_ttl = Duration::from_secs(
            parse(&lookup, "GEOCODE_CACHE_TTL_SECS")?.unwrap_or(DEFAULT_GEOCODE_CACHE_TTL_SECS),
        );

        Ok(Self {
            listen_port,
            geocoder_url,
            predict_url,
            user_agent,
            geocode_timeout,
            predict_timeout,
            geocode_cache_ttl,
        })
    }

    pub fn log(&self) {
        log::info!("listen port: {}", self.listen_port);
        log::info!("geocoder: {}", self.geocoder_url);
        log::info!("prediction endpoint: {}", self.predict_url);
        log::info!("user agent: {}", self.user_agent);
        log::info!("geocode timeout: {:?}", self.geocode_timeout);
        match self.predict_timeout {
            Some(timeout) => log::info!("prediction timeout: {timeout:?}"),
            None => log::info!("prediction timeout: none"),
        }
        log::info!("geocode cache ttl: {:?}", self.geocode_cache_ttl);
    }
}

fn env(name: &str) -> anyhow::Result<Option<String>> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(anyhow!("{name} value is not valid unicode")),
    }
}

fn parse<F, T>(lookup: &F, name: &str) -> anyhow::Result<Option<T>>
where
    F: Fn(&str) -> anyhow::Result<Option<String>>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    lookup(name)?
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|e| anyhow!("{name}: {value:?} is not valid: {e}"))
        })
        .transpose()
}

fn url<F>(lookup: &F, name: &str, default: &str) -> anyhow::Result<String>
where
    F: Fn(&str) -> anyhow::Result<Option<String>>,
{
    let value = lookup(name)?.unwrap_or_else(|| default.to_string());
    reqwest::Url::parse(&value).map_err(|e| anyhow!("{name}: {value} is not a valid url: {e}"))?;
    Ok(value)
}
