//! Text rendering of locations and forecasts.

use std::fmt::Display;

use tiempo_core::{Forecast, Location, WeatherCondition};

pub fn print_location(location: &Location) {
    println!("Location   : {} ({})", location.name, location.province);
    println!("Coordinates: {}, {}", location.latitude, location.longitude);
    println!("Code       : {}", location.code);
}

/// Daily summary table, with per-day hourly tables when `details` is set.
pub fn print_forecast(forecast: &Forecast, details: bool) {
    println!("Date   Min (°) Max (°) Humidity (%) Wind(km/h) Weather");
    println!("----   ------- ------- ------------ ---------- -------");
    for day in &forecast.days {
        let date = day
            .date
            .map(|d| d.format("%a %e").to_string())
            .unwrap_or_else(|| "?".to_string());
        println!(
            "{} {:>7} {:>7} {:>12} {:>10} {}",
            date,
            cell(day.temp_min),
            cell(day.temp_max),
            cell(day.humidity),
            cell(day.wind_speed),
            describe(day.weather),
        );
    }

    if details {
        for day in &forecast.days {
            let date = day
                .date
                .map(|d| d.format("%A, %e %B").to_string())
                .unwrap_or_else(|| "Unknown date".to_string());
            println!("\n\n{date}\n");
            println!("Time  Temp (°) Weather");
            println!("----  -------- -------");
            for hour in &day.hours {
                let time = hour
                    .tstamp
                    .map(|t| t.format("%H:%M").to_string())
                    .unwrap_or_else(|| "--:--".to_string());
                println!("{time} {:>8} {}", cell(hour.temp), describe(hour.weather));
            }
        }
    }
}

/// Absent measurements render as a dash rather than a sentinel number.
fn cell<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn describe(code: Option<i32>) -> &'static str {
    match code {
        Some(code) => WeatherCondition::from_code(code).description(),
        None => "-",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tiempo_core::{ForecastDay, ForecastHour};

    #[test]
    fn absent_values_render_as_dashes() {
        assert_eq!(cell::<i32>(None), "-");
        assert_eq!(cell(Some(12)), "12");
        assert_eq!(describe(None), "-");
        assert_eq!(describe(Some(1)), "Clear");
        assert_eq!(describe(Some(99)), "Unknown");
    }

    #[test]
    fn rendering_tolerates_sparse_days() {
        let forecast = Forecast {
            days: vec![
                ForecastDay {
                    date: NaiveDate::from_ymd_opt(2026, 8, 27),
                    temp_min: Some(4),
                    temp_max: Some(12),
                    weather: Some(3),
                    hours: vec![ForecastHour::default()],
                    ..ForecastDay::default()
                },
                ForecastDay::default(),
            ],
        };

        // Must not panic, with or without hourly details.
        print_forecast(&forecast, false);
        print_forecast(&forecast, true);
    }
}
