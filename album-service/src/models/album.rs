use serde::{Deserialize, Serialize};
use service_core::resource::Resource;

/// A recording for sale, keyed by `id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl Resource for Album {
    const SINGULAR: &'static str = "album";
    const PLURAL: &'static str = "albums";
    const KEY_FIELD: &'static str = "id";

    fn key(&self) -> &str {
        &self.id
    }
}
