use axum_extra::routing::TypedPath;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::User;
use crate::ApiEndpoint;

/// The path to list all users
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
#[typed_path("/api/v1/user")]
pub struct ListUsersPath;

/// Request to list all users known to the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ListUsersRequest;

impl ApiEndpoint for ListUsersRequest {
	const IS_PROTECTED: bool = true;
	const METHOD: Method = Method::GET;

	type RequestBody = ();
	type RequestPath = ListUsersPath;
	type RequestQuery = ();
	type ResponseBody = ListUsersResponse;
}

/// Response listing all users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersResponse {
	/// All users known to the server
	pub users: Vec<User>,
}

#[cfg(test)]
mod tests {
	use serde_test::{assert_tokens, Token};
	use time::macros::datetime;

	use super::{ListUsersResponse, User};

	#[test]
	fn assert_response_types() {
		assert_tokens(
			&ListUsersResponse {
				users: vec![User {
					id: "1".to_string(),
					name: "alice".to_string(),
					created_at: datetime!(2024-01-15 12:00 UTC),
				}],
			},
			&[
				Token::Struct {
					name: "ListUsersResponse",
					len: 1,
				},
				Token::Str("users"),
				Token::Seq { len: Some(1) },
				Token::Struct {
					name: "User",
					len: 3,
				},
				Token::Str("id"),
				Token::Str("1"),
				Token::Str("name"),
				Token::Str("alice"),
				Token::Str("createdAt"),
				Token::Str("2024-01-15T12:00:00Z"),
				Token::StructEnd,
				Token::SeqEnd,
				Token::StructEnd,
			],
		);
	}
}
