// src/domain/location.rs

use crate::domain::project::Project;
use std::collections::BTreeSet;

/// The filter value that covers every neighborhood below.
pub const BOSTON: &str = "Boston";

pub const BOSTON_NEIGHBORHOODS: &[&str] = &[
    "Allston",
    "Back Bay",
    "Bay Village",
    "Beacon Hill",
    "Brighton",
    "Charlestown",
    "Chinatown",
    "Dorchester",
    "Downtown",
    "East Boston",
    "Fenway-Kenmore",
    "Hyde Park",
    "Jamaica Plain",
    "Mattapan",
    "Mission Hill",
    "North End",
    "Roslindale",
    "Roxbury",
    "Seaport",
    "South Boston",
    "South End",
    "West End",
    "West Roxbury",
];

pub fn is_boston_neighborhood(place: &str) -> bool {
    BOSTON_NEIGHBORHOODS.contains(&place)
}

/// The location chosen in the filter control. No location means "show everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationFilter(Option<String>);

impl LocationFilter {
    pub fn all() -> Self {
        Self(None)
    }

    /// An empty query is the same as no query.
    pub fn new(query: Option<&str>) -> Self {
        Self(query.filter(|q| !q.is_empty()).map(str::to_string))
    }

    pub fn query(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Exact, case-sensitive comparison. "Boston" also matches any of its neighborhoods.
    pub fn matches(&self, project: &Project) -> bool {
        let Some(query) = self.query() else {
            return true;
        };
        let place = project.city_or_neighborhood.as_str();
        query == place || (query == BOSTON && is_boston_neighborhood(place))
    }
}

/// Choices for the filter control: (value, label).
///
/// "All" and "Boston" come first, then every distinct project location in order.
pub fn location_options(projects: &[Project]) -> Vec<(String, String)> {
    let places: BTreeSet<&str> = projects
        .iter()
        .map(|p| p.city_or_neighborhood.as_str())
        .filter(|place| !place.is_empty() && *place != BOSTON)
        .collect();

    let mut options = vec![
        (String::new(), "All".to_string()),
        (BOSTON.to_string(), BOSTON.to_string()),
    ];
    options.extend(
        places
            .into_iter()
            .map(|place| (place.to_string(), place.to_string())),
    );
    options
}
