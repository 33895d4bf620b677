/// Data structures for favorited pages
use serde::{Deserialize, Serialize};

use crate::identity::IdentityKey;

/// A bookmarked page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Favorite {
    /// Untitled tabs were stored without this key
    #[serde(default)]
    pub title: String,
    pub url: String,
}

impl Favorite {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Favorite {
        Favorite {
            title: title.into(),
            url: url.into(),
        }
    }

    pub fn identity(&self) -> IdentityKey {
        IdentityKey::from_url(&self.url)
    }
}

/// Ordered favorites, oldest first. Stored as a plain JSON array.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct FavoritesList {
    items: Vec<Favorite>,
}

impl FavoritesList {
    pub fn new() -> Self {
        FavoritesList { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Favorite> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Favorite] {
        &self.items
    }

    pub fn contains_identity(&self, key: &IdentityKey) -> bool {
        self.items.iter().any(|f| f.identity() == *key)
    }

    /// Append unless an entry with the same identity exists. Returns whether it was added.
    pub fn push_unique(&mut self, favorite: Favorite) -> bool {
        if self.contains_identity(&favorite.identity()) {
            return false;
        }
        self.items.push(favorite);
        true
    }

    /// Drop every entry sharing `key`. Returns how many were removed.
    pub fn remove_identity(&mut self, key: &IdentityKey) -> usize {
        let original_len = self.items.len();
        self.items.retain(|f| f.identity() != *key);
        original_len - self.items.len()
    }

    pub fn urls(&self) -> Vec<String> {
        self.items.iter().map(|f| f.url.clone()).collect()
    }
}

impl From<Vec<Favorite>> for FavoritesList {
    fn from(items: Vec<Favorite>) -> Self {
        FavoritesList { items }
    }
}

impl IntoIterator for FavoritesList {
    type Item = Favorite;
    type IntoIter = std::vec::IntoIter<Favorite>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a FavoritesList {
    type Item = &'a Favorite;
    type IntoIter = std::slice::Iter<'a, Favorite>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
