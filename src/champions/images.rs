use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::url::champ_img_url;

/// Champion name to thumbnail URL, keyed in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChampionImages {
    urls: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildReport {
    pub names_read: usize,
    pub entries: usize,
    pub duplicates: usize,
}

impl ChampionImages {
    pub fn new() -> Self {
        ChampionImages { urls: Map::new() }
    }

    /// One entry per name. A repeated name overwrites its earlier entry with the
    /// same URL and keeps its original position.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let mut images = Self::new();
        for name in names {
            images.insert(name.as_ref());
        }
        images
    }

    pub fn insert(&mut self, champion: &str) {
        self.urls
            .insert(champion.to_string(), Value::String(champ_img_url(champion)));
    }

    pub fn get(&self, champion: &str) -> Option<&str> {
        self.urls.get(champion).and_then(Value::as_str)
    }

    pub fn champions(&self) -> impl Iterator<Item = &str> {
        self.urls.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn report(&self, names_read: usize) -> BuildReport {
        BuildReport {
            names_read,
            entries: self.len(),
            duplicates: names_read.saturating_sub(self.len()),
        }
    }
}
