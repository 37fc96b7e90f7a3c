mod list_users;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub use self::list_users::*;

/// Represents a user known to the coordination server.
///
/// Users own nodes and auth keys. The server assigns each user a stable
/// numeric identifier; the name is what operators see and select.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
	/// Stable identifier assigned by the server
	pub id: String,
	/// Unique name of the user
	pub name: String,
	/// When the user was created
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
}
