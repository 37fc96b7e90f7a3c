mod create_preauth_key;
mod expire_preauth_key;
mod list_preauth_keys;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub use self::{create_preauth_key::*, expire_preauth_key::*, list_preauth_keys::*};

/// Represents a pre-authentication key issued by the coordination server.
///
/// A pre-auth key authorizes a new node to register itself under the owning
/// user without an interactive login. A key can be reusable (authorizes any
/// number of registrations until it expires) and/or ephemeral (nodes
/// registered with it are treated as transient and removed after they
/// disconnect). Every key carries a fixed expiration instant after which it
/// authorizes nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthKey {
	/// Unique identifier of the key
	pub id: String,
	/// The key material itself. Shown once to the operator so it can be
	/// pasted into the registering node.
	pub key: String,
	/// Name of the user the key registers nodes under
	pub user: String,
	/// Whether the key may authorize more than one registration
	pub reusable: bool,
	/// Whether nodes registered with this key are transient
	pub ephemeral: bool,
	/// Whether the key has authorized at least one registration
	pub used: bool,
	/// The instant the key stops authorizing registrations
	#[serde(with = "time::serde::rfc3339")]
	pub expiration: OffsetDateTime,
	/// When the key was created
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	/// Access-control tags attached to the key
	pub acl_tags: Vec<String>,
}
