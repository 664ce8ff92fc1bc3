use serde::{Deserialize, Serialize};
use service_core::resource::Resource;

/// Contact details for a marketplace user, keyed by `user`.
///
/// Omitted fields default to an empty string; `user` uniqueness is not enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub user: String,
    pub address: String,
    pub responsible_individual: String,
    pub contact_number: String,
}

impl Resource for Profile {
    const SINGULAR: &'static str = "profile";
    const PLURAL: &'static str = "profiles";
    const KEY_FIELD: &'static str = "user";

    fn key(&self) -> &str {
        &self.user
    }
}
