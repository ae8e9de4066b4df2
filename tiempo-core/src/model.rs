use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Weather condition codes used by the Tiempo API `symbol` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherCondition {
    Clear,
    ScatteredClouds,
    Cloudy,
    Overcast,
    ScatteredCloudsLightRain,
    CloudyLightRain,
    OvercastLightRain,
    ScatteredCloudsModerateRain,
    CloudyModerateRain,
    OvercastModerateRain,
    ScatteredCloudsThunderstorm,
    CloudyThunderstorm,
    OvercastThunderstorm,
    ScatteredCloudsThunderstormHail,
    CloudyThunderstormHail,
    OvercastThunderstormHail,
    ScatteredCloudsSnow,
    CloudySnow,
    OvercastSnow,
    ScatteredCloudsSleet,
    CloudySleet,
    OvercastSleet,
    Unknown,
}

impl WeatherCondition {
    /// Map a raw `symbol` code to a condition. Codes outside the
    /// documented 1..=22 range map to `Unknown`.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Clear,
            2 => Self::ScatteredClouds,
            3 => Self::Cloudy,
            4 => Self::Overcast,
            5 => Self::ScatteredCloudsLightRain,
            6 => Self::CloudyLightRain,
            7 => Self::OvercastLightRain,
            8 => Self::ScatteredCloudsModerateRain,
            9 => Self::CloudyModerateRain,
            10 => Self::OvercastModerateRain,
            11 => Self::ScatteredCloudsThunderstorm,
            12 => Self::CloudyThunderstorm,
            13 => Self::OvercastThunderstorm,
            14 => Self::ScatteredCloudsThunderstormHail,
            15 => Self::CloudyThunderstormHail,
            16 => Self::OvercastThunderstormHail,
            17 => Self::ScatteredCloudsSnow,
            18 => Self::CloudySnow,
            19 => Self::OvercastSnow,
            20 => Self::ScatteredCloudsSleet,
            21 => Self::CloudySleet,
            22 => Self::OvercastSleet,
            _ => Self::Unknown,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::ScatteredClouds => "Scattered clouds",
            Self::Cloudy => "Cloudy",
            Self::Overcast => "Overcast",
            Self::ScatteredCloudsLightRain => "Scattered clouds with light rain",
            Self::CloudyLightRain => "Cloudy with light rain",
            Self::OvercastLightRain => "Overcast with light rain",
            Self::ScatteredCloudsModerateRain => "Scattered clouds with moderate rain",
            Self::CloudyModerateRain => "Cloudy with moderate rain",
            Self::OvercastModerateRain => "Overcast with moderate rain",
            Self::ScatteredCloudsThunderstorm => "Scattered clouds with thunderstorms",
            Self::CloudyThunderstorm => "Cloudy with thunderstorms",
            Self::OvercastThunderstorm => "Overcast with thunderstorms",
            Self::ScatteredCloudsThunderstormHail => {
                "Scattered clouds with thunderstorms and hailstorms"
            }
            Self::CloudyThunderstormHail => "Cloudy with thunderstorms and hailstorms",
            Self::OvercastThunderstormHail => "Overcast with thunderstorms and hailstorms",
            Self::ScatteredCloudsSnow => "Scattered clouds with snow",
            Self::CloudySnow => "Cloudy with snow",
            Self::OvercastSnow => "Overcast with snow",
            Self::ScatteredCloudsSleet => "Scattered clouds with sleet",
            Self::CloudySleet => "Cloudy with sleet",
            Self::OvercastSleet => "Overcast with sleet",
            Self::Unknown => "Unknown",
        }
    }
}

/// Forecast for a single hour (the API actually samples 3-hour periods
/// for days further out than the next two).
///
/// Every measurement is optional: an attribute that is missing from the
/// document or does not parse as its target type is simply absent here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastHour {
    /// Beginning of the period this forecast covers.
    pub tstamp: Option<NaiveDateTime>,
    /// Raw weather condition code, see [`WeatherCondition::from_code`].
    pub weather: Option<i32>,
    /// Temperature, in Celsius degrees.
    pub temp: Option<i32>,
    /// Wind speed, in km/h.
    pub wind_speed: Option<i32>,
    /// Wind direction: N, E, S, O or combinations of 2 cardinal points.
    pub wind_dir: Option<String>,
    /// Rain level, in mm.
    pub rain: Option<f64>,
    /// Humidity percentage.
    pub humidity: Option<i32>,
    /// Pressure, in mb.
    pub pressure: Option<i32>,
}

/// Daily summary plus the hourly details for that day, in document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: Option<NaiveDate>,
    /// Raw weather condition code, see [`WeatherCondition::from_code`].
    pub weather: Option<i32>,
    /// Minimum temperature, in Celsius degrees.
    pub temp_min: Option<i32>,
    /// Maximum temperature, in Celsius degrees.
    pub temp_max: Option<i32>,
    /// Wind speed, in km/h.
    pub wind_speed: Option<i32>,
    /// Rain level, in mm.
    pub rain: Option<f64>,
    /// Humidity percentage.
    pub humidity: Option<i32>,
    /// Pressure, in mb.
    pub pressure: Option<i32>,
    /// Hourly forecasts for the day.
    pub hours: Vec<ForecastHour>,
}

/// Multi-day weather forecast for a location. Populated once by the
/// parser and read-only afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Forecast {
    /// Daily forecasts, in document order (chronological).
    pub days: Vec<ForecastDay>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_codes_map_to_descriptions() {
        assert_eq!(WeatherCondition::from_code(1).description(), "Clear");
        assert_eq!(WeatherCondition::from_code(4).description(), "Overcast");
        assert_eq!(
            WeatherCondition::from_code(22).description(),
            "Overcast with sleet"
        );
    }

    #[test]
    fn out_of_range_codes_are_unknown() {
        assert_eq!(WeatherCondition::from_code(0), WeatherCondition::Unknown);
        assert_eq!(WeatherCondition::from_code(23), WeatherCondition::Unknown);
        assert_eq!(WeatherCondition::from_code(-5), WeatherCondition::Unknown);
    }
}
