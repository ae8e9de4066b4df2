//! Tiempo (ilmeteo.net) forecast driver.
//!
//! The driver is the only place with cross-cutting control flow: it
//! composes the day-partitioned cache, the injected HTTP transport and
//! the XML parser into a cache-first acquisition pipeline, and it owns
//! the translation of Tiempo's XML report into the domain model.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use roxmltree::{Document, Node};
use tracing::{debug, warn};

use crate::{
    cache::DayCache,
    error::{AcquisitionError, ParseError},
    http::HttpFetch,
    model::{Forecast, ForecastDay, ForecastHour},
    provider::{ForecastProvider, ProviderId},
};

/// Date format of the `value` attribute on a `day` element, e.g. `20180308`.
const DAY_DATE_FORMAT: &str = "%Y%m%d";
/// Time format of the `value` attribute on an `hour` element, e.g. `14:00`.
const HOUR_TIME_FORMAT: &str = "%H:%M";

/// Tiempo API endpoint for the forecasts of the specified location.
///
/// The query-string field names are a protocol detail owned by the remote
/// API and must be preserved exactly.
fn forecast_url(code: &str, affiliate_id: &str) -> String {
    format!(
        "http://api.ilmeteo.net/index.php?api_lang=it&localidad={code}&affiliate_id={affiliate_id}&v=2&h=1"
    )
}

/// Read an attribute as `i32`; absent or unparsable attributes are `None`.
fn attr_i32(node: Node<'_, '_>, name: &str) -> Option<i32> {
    node.attribute(name)?.parse().ok()
}

/// Read an attribute as `f64`; absent or unparsable attributes are `None`.
fn attr_f64(node: Node<'_, '_>, name: &str) -> Option<f64> {
    node.attribute(name)?.parse().ok()
}

/// Convert an `hour` element to a [`ForecastHour`].
///
/// Its `value` attribute carries only a time of day; the full timestamp
/// comes from combining it with the enclosing day's date. Unknown child
/// tags are ignored.
fn parse_hour(node: Node<'_, '_>, day_date: Option<NaiveDate>) -> ForecastHour {
    let time = node
        .attribute("value")
        .and_then(|v| NaiveTime::parse_from_str(v, HOUR_TIME_FORMAT).ok());
    let mut hour = ForecastHour {
        tstamp: day_date.zip(time).map(|(date, time)| date.and_time(time)),
        ..ForecastHour::default()
    };

    for child in node.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "symbol" => hour.weather = attr_i32(child, "value"),
            "temp" => hour.temp = attr_i32(child, "value"),
            "wind" => {
                hour.wind_dir = child.attribute("dir").map(str::to_string);
                hour.wind_speed = attr_i32(child, "value");
            }
            "rain" => hour.rain = attr_f64(child, "value"),
            "humidity" => hour.humidity = attr_i32(child, "value"),
            "pressure" => hour.pressure = attr_i32(child, "value"),
            _ => {}
        }
    }

    hour
}

/// Convert a `day` element to a [`ForecastDay`], including its `hour`
/// children in document order. Unknown child tags are ignored.
fn parse_day(node: Node<'_, '_>) -> ForecastDay {
    let date = node
        .attribute("value")
        .and_then(|v| NaiveDate::parse_from_str(v, DAY_DATE_FORMAT).ok());
    let mut day = ForecastDay { date, ..ForecastDay::default() };

    for child in node.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "symbol" => day.weather = attr_i32(child, "value"),
            "tempmin" => day.temp_min = attr_i32(child, "value"),
            "tempmax" => day.temp_max = attr_i32(child, "value"),
            "wind" => day.wind_speed = attr_i32(child, "value"),
            "rain" => day.rain = attr_f64(child, "value"),
            "humidity" => day.humidity = attr_i32(child, "value"),
            "pressure" => day.pressure = attr_i32(child, "value"),
            "hour" => day.hours.push(parse_hour(child, date)),
            _ => {}
        }
    }

    day
}

/// Parse a raw Tiempo XML report into a [`Forecast`].
///
/// The document must have a `report` root whose first element child is
/// `location`; `day` children of `location` become daily forecasts.
/// Failure is all-or-nothing at these two structural checks only.
pub fn parse(bytes: &[u8]) -> Result<Forecast, ParseError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|err| ParseError::Syntax(err.to_string()))?;
    let doc = Document::parse(text).map_err(|err| ParseError::Syntax(err.to_string()))?;

    let report = doc.root_element();
    if !report.has_tag_name("report") {
        return Err(ParseError::Structure("missing report root"));
    }

    let location = report
        .first_element_child()
        .filter(|n| n.has_tag_name("location"))
        .ok_or(ParseError::Structure("missing location"))?;

    let mut forecast = Forecast::default();
    for child in location.children().filter(Node::is_element) {
        // location also holds informational tags such as "interesting"
        if !child.has_tag_name("day") {
            continue;
        }
        forecast.days.push(parse_day(child));
    }

    Ok(forecast)
}

/// Cache-first forecast provider for the Tiempo HTTP API.
#[derive(Debug)]
pub struct TiempoProvider {
    affiliate_id: String,
    cache: DayCache,
    http: Box<dyn HttpFetch>,
}

impl TiempoProvider {
    pub fn new(affiliate_id: String, cache: DayCache, http: Box<dyn HttpFetch>) -> Self {
        Self { affiliate_id, cache, http }
    }

    /// Acquire the forecast for `code`: serve today's cached document if
    /// present, otherwise fetch it, and cache the raw bytes only after
    /// they parsed successfully.
    pub async fn acquire(&self, code: &str) -> Result<Forecast, AcquisitionError> {
        let source = ProviderId::Tiempo.as_str();

        if let Some(cached) = self.cache.get(source, code) {
            debug!(code, "serving forecast from today's cache");
            // A cached document that no longer parses is returned as a
            // failure, not treated as a miss: the entry stays in place
            // until the day partition rolls over.
            return parse(&cached).map_err(|err| {
                warn!(code, error = %err, "cached forecast document failed to parse");
                err.into()
            });
        }

        let url = forecast_url(code, &self.affiliate_id);
        debug!(code, "cache miss, fetching forecast");
        let res = self.http.get(&url).await?;

        if !res.is_success() {
            return Err(AcquisitionError::HttpStatus(res.status));
        }

        let forecast = parse(&res.body)?;

        // Never cache a document that didn't parse.
        if let Err(err) = self.cache.set(source, code, &res.body) {
            warn!(code, error = %err, "failed to cache forecast document");
        }

        Ok(forecast)
    }
}

#[async_trait]
impl ForecastProvider for TiempoProvider {
    async fn forecast(&self, location_code: &str) -> Result<Forecast, AcquisitionError> {
        self.acquire(location_code).await
    }
}
