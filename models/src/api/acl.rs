use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The access-control policy of the mesh, as stored on the coordination
/// server. Group and tag-owner names map to the users they contain; rules
/// describe which sources may reach which destinations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AclPolicy {
	/// Named groups of users, usable as rule sources
	pub groups: BTreeMap<String, Vec<String>>,
	/// Which users may assign each ACL tag
	pub tag_owners: BTreeMap<String, Vec<String>>,
	/// The ordered access rules of the policy
	pub acls: Vec<AclRule>,
}

/// A single access rule of the policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AclRule {
	/// The action the rule takes. The server currently only accepts
	/// "accept"; anything not matched by a rule is denied.
	pub action: String,
	/// Sources (users, groups, tags or CIDRs) the rule applies to
	pub src: Vec<String>,
	/// Destinations, as `host:port` specifiers
	pub dst: Vec<String>,
}
