use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FavoriteEntry {
    pub name: String,
    pub icon: String,
}

/// Bookmarked cities keyed by their normalized name, in insertion order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(
    from = "IndexMap<String, FavoriteEntry>",
    into = "IndexMap<String, FavoriteEntry>"
)]
pub struct Favorites {
    entries: IndexMap<String, FavoriteEntry>,
}

// Keys read from disk are recomputed from the entry names.
impl From<IndexMap<String, FavoriteEntry>> for Favorites {
    fn from(raw: IndexMap<String, FavoriteEntry>) -> Self {
        let mut favorites = Favorites::new();
        for entry in raw.into_values() {
            favorites.add(&entry.name, &entry.icon);
        }
        favorites
    }
}

impl From<Favorites> for IndexMap<String, FavoriteEntry> {
    fn from(favorites: Favorites) -> Self {
        favorites.entries
    }
}

/// Lower-cased city name used to deduplicate favorites.
pub fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl Favorites {
    pub fn new() -> Favorites {
        Favorites::default()
    }

    /// Returns false when the city is already a favorite.
    pub fn add(&mut self, name: &str, icon: &str) -> bool {
        let key = normalize_key(name);
        if self.entries.contains_key(&key) {
            return false;
        }

        self.entries.insert(
            key,
            FavoriteEntry {
                name: name.trim().to_owned(),
                icon: icon.to_owned(),
            },
        );
        true
    }

    /// Returns the removed entry, if there was one.
    pub fn remove(&mut self, name: &str) -> Option<FavoriteEntry> {
        // shift_remove keeps the display order of the remaining entries
        self.entries.shift_remove(&normalize_key(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&normalize_key(name))
    }

    pub fn get(&self, name: &str) -> Option<&FavoriteEntry> {
        self.entries.get(&normalize_key(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &FavoriteEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
