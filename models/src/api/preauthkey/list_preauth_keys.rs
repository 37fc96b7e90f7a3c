use axum_extra::routing::TypedPath;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::AuthKey;
use crate::ApiEndpoint;

/// The path to list the pre-auth keys of a user
#[derive(
	Eq,
	Ord,
	Copy,
	Hash,
	Debug,
	Clone,
	Default,
	TypedPath,
	PartialEq,
	Serialize,
	PartialOrd,
	Deserialize,
)]
#[typed_path("/api/v1/preauthkey")]
pub struct ListPreAuthKeysPath;

/// Request to list all pre-auth keys owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ListPreAuthKeysRequest;

/// Query parameters selecting whose keys to list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListPreAuthKeysQuery {
	/// Name of the user whose keys should be listed
	pub user: String,
}

impl ApiEndpoint for ListPreAuthKeysRequest {
	const IS_PROTECTED: bool = true;
	const METHOD: Method = Method::GET;

	type RequestBody = ();
	type RequestPath = ListPreAuthKeysPath;
	type RequestQuery = ListPreAuthKeysQuery;
	type ResponseBody = ListPreAuthKeysResponse;
}

/// Response listing the pre-auth keys of a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListPreAuthKeysResponse {
	/// All keys owned by the requested user, expired ones included
	pub pre_auth_keys: Vec<AuthKey>,
}

#[cfg(test)]
mod tests {
	use serde_test::{assert_tokens, Token};
	use time::macros::datetime;

	use super::{AuthKey, ListPreAuthKeysQuery, ListPreAuthKeysResponse};

	#[test]
	fn assert_query_types() {
		assert_tokens(
			&ListPreAuthKeysQuery {
				user: "alice".to_string(),
			},
			&[
				Token::Struct {
					name: "ListPreAuthKeysQuery",
					len: 1,
				},
				Token::Str("user"),
				Token::Str("alice"),
				Token::StructEnd,
			],
		);
	}

	#[test]
	fn assert_response_types() {
		assert_tokens(
			&ListPreAuthKeysResponse {
				pre_auth_keys: vec![AuthKey {
					id: "7".to_string(),
					key: "5c8282cdbdcbc3b9e15f4b2d7a9c0f8b".to_string(),
					user: "alice".to_string(),
					reusable: true,
					ephemeral: false,
					used: true,
					expiration: datetime!(2024-07-01 08:30 UTC),
					created_at: datetime!(2024-04-02 08:30 UTC),
					acl_tags: Vec::new(),
				}],
			},
			&[
				Token::Struct {
					name: "ListPreAuthKeysResponse",
					len: 1,
				},
				Token::Str("preAuthKeys"),
				Token::Seq { len: Some(1) },
				Token::Struct {
					name: "AuthKey",
					len: 9,
				},
				Token::Str("id"),
				Token::Str("7"),
				Token::Str("key"),
				Token::Str("5c8282cdbdcbc3b9e15f4b2d7a9c0f8b"),
				Token::Str("user"),
				Token::Str("alice"),
				Token::Str("reusable"),
				Token::Bool(true),
				Token::Str("ephemeral"),
				Token::Bool(false),
				Token::Str("used"),
				Token::Bool(true),
				Token::Str("expiration"),
				Token::Str("2024-07-01T08:30:00Z"),
				Token::Str("createdAt"),
				Token::Str("2024-04-02T08:30:00Z"),
				Token::Str("aclTags"),
				Token::Seq { len: Some(0) },
				Token::SeqEnd,
				Token::StructEnd,
				Token::SeqEnd,
				Token::StructEnd,
			],
		);
	}
}
