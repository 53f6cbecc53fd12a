//! Directory of government schemes for farmers.

mod builtin;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheme {
    pub category: String,
    pub name: String,
    #[serde(alias = "desc")]
    pub description: String,
    pub link: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Scheme {
    /// Case-insensitive substring match on name, description or any tag.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
    }
}

/// Schemes sharing a category, in directory order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemeGroup<'a> {
    pub category: &'a str,
    pub schemes: Vec<&'a Scheme>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemeDirectory {
    schemes: Vec<Scheme>,
}

impl SchemeDirectory {
    pub fn new(schemes: Vec<Scheme>) -> Self {
        Self { schemes }
    }

    /// The schemes listed on the schemes panel.
    pub fn builtin() -> Self {
        Self::new(builtin::builtin_schemes())
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn all(&self) -> &[Scheme] {
        &self.schemes
    }

    /// Empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Scheme> {
        self.schemes.iter().filter(|s| s.matches(query)).collect()
    }

    /// Search results grouped by category; categories appear in the order
    /// their first match appears.
    pub fn grouped(&self, query: &str) -> Vec<SchemeGroup<'_>> {
        let mut groups: Vec<SchemeGroup<'_>> = Vec::new();
        for scheme in self.search(query) {
            match groups.iter_mut().find(|g| g.category == scheme.category) {
                Some(group) => group.schemes.push(scheme),
                None => groups.push(SchemeGroup {
                    category: &scheme.category,
                    schemes: vec![scheme],
                }),
            }
        }
        groups
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}
