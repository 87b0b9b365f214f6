use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A member of the session, identified by their unique display name.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub added_at: DateTime<Utc>,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Participant {
            name: name.into(),
            added_at: Utc::now(),
        }
    }
}
