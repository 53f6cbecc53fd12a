use std::collections::BTreeMap;

use crate::types::identifiers::{normalize_crop_name, CropKey};

// Every lookup into the catalog, the detail records or a district's crop list
// goes through `key_for`. Spellings not listed here map to themselves.
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("paddy", "paddy"),
    ("rice", "paddy"),
    ("jowar", "sorghum"),
    ("sorghum", "sorghum"),
    ("bajra", "pearl_millet"),
    ("millet", "pearl_millet"),
    ("millets", "pearl_millet"),
    ("ragi", "ragi"),
    ("maize", "maize"),
    ("corn", "maize"),
    ("wheat", "wheat"),
    ("gram", "chickpea"),
    ("chana", "chickpea"),
    ("chickpea", "chickpea"),
    ("tur", "pigeonpea"),
    ("arhar", "pigeonpea"),
    ("pigeonpea", "pigeonpea"),
    ("moong", "moong"),
    ("urad", "urad"),
    ("masoor", "lentil"),
    ("potato", "potato"),
    ("onion", "onion"),
    ("garlic", "garlic"),
    ("tomato", "tomato"),
    ("brinjal", "brinjal"),
    ("eggplant", "brinjal"),
    ("ladyfinger", "okra"),
    ("okra", "okra"),
    ("bhindi", "okra"),
    ("chilli", "chillies"),
    ("chillies", "chillies"),
    ("cabbage", "cabbage"),
    ("cauliflower", "cauliflower"),
    ("spinach", "spinach"),
    ("coriander", "coriander"),
    ("fenugreek", "fenugreek"),
    ("methi", "fenugreek"),
    ("carrot", "carrot"),
    ("beetroot", "beetroot"),
    ("radish", "radish"),
    ("capsicum", "capsicum"),
    ("bellpepper", "capsicum"),
    ("pumpkin", "pumpkin"),
    ("bittergourd", "bitter_gourd"),
    ("ridgegourd", "ridge_gourd"),
    ("snakegourd", "snake_gourd"),
    ("banana", "banana"),
    ("mango", "mango"),
    ("guava", "guava"),
    ("papaya", "papaya"),
    ("grapes", "grapes"),
    ("apple", "apple"),
    ("orange", "citrus"),
    ("lemon", "citrus"),
    ("citrus", "citrus"),
    ("watermelon", "watermelon"),
    ("muskmelon", "muskmelon"),
    ("turmeric", "turmeric"),
    ("ginger", "ginger"),
    ("cotton", "cotton"),
    ("sugarcane", "sugarcane"),
];

/// Many-to-one mapping from crop spellings to canonical keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    aliases: BTreeMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The alias table shipped with the crop reference data.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (spelling, key) in BUILTIN_ALIASES {
            table.insert(spelling, key);
        }
        table
    }

    /// Register `spelling` (normalized before storing) as an alias of `key`.
    pub fn insert(&mut self, spelling: &str, key: &str) {
        self.aliases
            .insert(normalize_crop_name(spelling), key.to_string());
    }

    /// Resolve a free-form crop name to its canonical key.
    ///
    /// Returns `None` only for names that are empty after normalization.
    pub fn key_for(&self, name: &str) -> Option<CropKey> {
        let normalized = normalize_crop_name(name);
        if normalized.is_empty() {
            return None;
        }
        let key = match self.aliases.get(&normalized) {
            Some(key) => key.clone(),
            None => normalized,
        };
        Some(CropKey::from_normalized(key))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
