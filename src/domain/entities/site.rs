//! Domain entity representing a comic site.

/// A source publication that comics belong to.
///
/// Sites are listed by `name`, so the navigation order is alphabetical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub id: i64,
    pub name: String,
    pub url: String,
}

impl Site {
    pub fn new(id: i64, name: String, url: String) -> Self {
        Self { id, name, url }
    }
}

/// Input data for creating a new site.
#[derive(Debug, Clone)]
pub struct NewSite {
    pub name: String,
    pub url: String,
}
