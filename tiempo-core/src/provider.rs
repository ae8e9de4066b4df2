use crate::{
    Config,
    cache::DayCache,
    error::AcquisitionError,
    http::ReqwestFetcher,
    model::Forecast,
    provider::tiempo::TiempoProvider,
};
use async_trait::async_trait;
use std::{convert::TryFrom, fmt::Debug};

pub mod tiempo;

/// Identifier of a forecast source, used to namespace cache entries so
/// further providers can be added without key collisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    Tiempo,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Tiempo => "tiempo",
        }
    }

    pub const fn all() -> &'static [ProviderId] {
        &[ProviderId::Tiempo]
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProviderId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "tiempo" => Ok(ProviderId::Tiempo),
            _ => Err(anyhow::anyhow!(
                "Unknown provider '{value}'. Supported providers: tiempo."
            )),
        }
    }
}

#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    /// Acquire the multi-day forecast for a location code, cache-first.
    async fn forecast(&self, location_code: &str) -> Result<Forecast, AcquisitionError>;
}

/// Construct a provider from config and explicit ProviderId, wired to the
/// real HTTP transport and the default on-disk cache.
pub fn provider_from_config(
    id: ProviderId,
    config: &Config,
) -> anyhow::Result<Box<dyn ForecastProvider>> {
    let cache = DayCache::open_default()?;

    let boxed: Box<dyn ForecastProvider> = match id {
        ProviderId::Tiempo => Box::new(TiempoProvider::new(
            config.affiliate_id.clone(),
            cache,
            Box::new(ReqwestFetcher::new()),
        )),
    };

    Ok(boxed)
}
