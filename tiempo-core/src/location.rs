//! Static directory of locations supported by the Tiempo API.
//!
//! The registry is immutable, compiled-in data; searches are a plain
//! linear scan, which stays fast even with several thousand entries.

use serde::Serialize;

/// An Italian location together with its Tiempo API code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    /// Name of the location (stored upper case).
    pub name: &'static str,
    /// Italian province of the location (2 letter code).
    pub province: &'static str,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
    /// Tiempo API's location code (a numeric string).
    pub code: &'static str,
}

/// How [`search`] interprets its query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// The query must match all of the location name or part of it.
    /// Not case sensitive.
    PartialName,
    /// The query must match exactly the location name. Not case sensitive.
    ExactName,
    /// The query must match exactly the location code.
    ExactCode,
}

/// Locations whose forecasts can be fetched, with their Tiempo codes.
pub static LOCATIONS: &[Location] = &[
    Location { name: "ACQUASPARTA", province: "TR", latitude: 42.6911449, longitude: 12.5464788, code: "28756" },
    Location { name: "MONTECASTRILLI", province: "TR", latitude: 42.652434, longitude: 12.488567, code: "30429" },
    Location { name: "ORVIETO", province: "TR", latitude: 42.7186152, longitude: 12.1087907, code: "30625" },
    Location { name: "TERNI", province: "TR", latitude: 42.5641417, longitude: 12.6405466, code: "31553" },
    Location { name: "PERUGIA", province: "PG", latitude: 43.1119613, longitude: 12.3890104, code: "30721" },
    Location { name: "ROMA", province: "RM", latitude: 41.9027835, longitude: 12.4963655, code: "31043" },
    Location { name: "MILANO", province: "MI", latitude: 45.4642035, longitude: 9.189982, code: "30149" },
    Location { name: "NAPOLI", province: "NA", latitude: 40.8517746, longitude: 14.2681244, code: "30495" },
    Location { name: "TORINO", province: "TO", latitude: 45.070312, longitude: 7.6868565, code: "31621" },
    Location { name: "FIRENZE", province: "FI", latitude: 43.7695604, longitude: 11.2558136, code: "29413" },
    Location { name: "BOLOGNA", province: "BO", latitude: 44.494887, longitude: 11.3426162, code: "28900" },
    Location { name: "VENEZIA", province: "VE", latitude: 45.4408474, longitude: 12.3155151, code: "31750" },
    Location { name: "GENOVA", province: "GE", latitude: 44.4056499, longitude: 8.946256, code: "29512" },
    Location { name: "PALERMO", province: "PA", latitude: 38.1156879, longitude: 13.3612671, code: "30688" },
    Location { name: "BARI", province: "BA", latitude: 41.1171432, longitude: 16.8718715, code: "28810" },
    Location { name: "CIVITA CASTELLANA", province: "VT", latitude: 42.2946586, longitude: 12.4110498, code: "29157" },
];

/// Search the registry, returning zero or more matches in registry order.
///
/// Name comparisons are done against the upper-cased query because
/// registry names are stored upper case; code comparison is exact.
pub fn search(query: &str, mode: SearchMode) -> Vec<&'static Location> {
    let query_upper = query.to_uppercase();
    LOCATIONS
        .iter()
        .filter(|location| match mode {
            SearchMode::PartialName => location.name.contains(query_upper.as_str()),
            SearchMode::ExactName => location.name == query_upper,
            SearchMode::ExactCode => location.code == query,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_name_finds_every_registry_entry() {
        for location in LOCATIONS {
            let results = search(location.name, SearchMode::ExactName);
            assert_eq!(results.len(), 1, "exactly one match for {}", location.name);
            assert_eq!(results[0], location);
        }
    }

    #[test]
    fn exact_name_is_case_insensitive() {
        let results = search("orvieto", SearchMode::ExactName);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code, "30625");
    }

    #[test]
    fn partial_name_returns_all_substring_matches() {
        let results = search("ROM", SearchMode::PartialName);
        let expected: Vec<&Location> =
            LOCATIONS.iter().filter(|l| l.name.contains("ROM")).collect();
        assert_eq!(results, expected);
        assert!(results.iter().any(|l| l.name == "ROMA"));
    }

    #[test]
    fn partial_name_folds_case_and_preserves_registry_order() {
        let results = search("mont", SearchMode::PartialName);
        assert!(!results.is_empty());
        let mut indices: Vec<usize> = results
            .iter()
            .map(|r| LOCATIONS.iter().position(|l| l == *r).unwrap())
            .collect();
        let sorted = indices.clone();
        indices.sort_unstable();
        assert_eq!(indices, sorted);
    }

    #[test]
    fn exact_code_matches_only_the_code() {
        let results = search("30625", SearchMode::ExactCode);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "ORVIETO");

        assert!(search("3062", SearchMode::ExactCode).is_empty());
        assert!(search("ORVIETO", SearchMode::ExactCode).is_empty());
    }

    #[test]
    fn no_match_returns_empty() {
        assert!(search("ATLANTIS", SearchMode::ExactName).is_empty());
        assert!(search("XYZZY", SearchMode::PartialName).is_empty());
    }
}
