use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::user::User;

/// Represents a node (machine) registered to the coordination server.
///
/// Nodes join the mesh by registering under a user, either interactively or
/// through a pre-auth key. The dashboard renders them read-only; all
/// mutation happens through dedicated operations elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Node {
	/// Stable identifier assigned by the server
	pub id: String,
	/// Hostname the node reported when it registered
	pub name: String,
	/// Display name the operator gave the node
	pub given_name: String,
	/// The user the node is registered under
	pub user: User,
	/// Mesh IP addresses assigned to the node
	pub ip_addresses: Vec<String>,
	/// Whether the node currently holds a connection to the server
	pub online: bool,
	/// When the node's registration expires, if an expiry is set
	#[serde(with = "time::serde::rfc3339::option")]
	pub expiry: Option<OffsetDateTime>,
	/// The last time the server heard from the node
	#[serde(with = "time::serde::rfc3339")]
	pub last_seen: OffsetDateTime,
	/// When the node registered
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	/// ACL tags that apply to the node
	pub valid_tags: Vec<String>,
}
