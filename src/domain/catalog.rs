//! Café Catalog
//!
//! Immutable mapping from a city key to its ordered list of café names.

use std::collections::HashMap;

/// Read-only café catalog shared by every request.
///
/// City keys are matched exactly as registered. The per-city lists keep
/// their insertion order and never change after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    cities: HashMap<String, Vec<String>>,
}

impl Catalog {
    /// Build a catalog from city/café pairs
    pub fn new<I, C, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (C, Vec<N>)>,
        C: Into<String>,
        N: Into<String>,
    {
        let cities = entries
            .into_iter()
            .map(|(city, cafes)| (city.into(), cafes.into_iter().map(Into::into).collect()))
            .collect();

        Self { cities }
    }

    /// The data set bundled with the service
    pub fn builtin() -> Self {
        Self::new([
            (
                "moscow",
                vec![
                    "Мир кофе",
                    "Сладкоежка",
                    "Кофе и завтраки",
                    "Сытый студент",
                    "Вилка и ложка",
                ],
            ),
            ("tula", vec!["Дом кофе", "Кафе у Тулы", "Пряничная"]),
        ])
    }

    /// Cafés registered for `city`, in catalog order
    pub fn cafes(&self, city: &str) -> Option<&[String]> {
        self.cities.get(city).map(Vec::as_slice)
    }

    /// Registered key and cafés for `city`; the key borrows from the catalog
    pub fn entry(&self, city: &str) -> Option<(&str, &[String])> {
        self.cities
            .get_key_value(city)
            .map(|(key, cafes)| (key.as_str(), cafes.as_slice()))
    }

    /// Number of cities in the catalog
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// City keys, sorted for stable output
    pub fn cities(&self) -> Vec<&str> {
        let mut cities: Vec<&str> = self.cities.keys().map(String::as_str).collect();
        cities.sort_unstable();
        cities
    }
}

impl From<HashMap<String, Vec<String>>> for Catalog {
    fn from(cities: HashMap<String, Vec<String>>) -> Self {
        Self { cities }
    }
}
