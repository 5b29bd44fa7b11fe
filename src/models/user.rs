use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The User struct represents the logged-in user as handed over by the host
/// application.
///
/// Only `username` is required; everything else the host attaches to the
/// record is carried opaquely in `attributes` and round-trips unchanged
/// through the persisted record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct User {
    pub username: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl User {
    /// Construct a User with just a username and no extra attributes.
    pub fn new(username: impl Into<String>) -> Self {
        User {
            username: username.into(),
            attributes: Map::new(),
        }
    }
}
