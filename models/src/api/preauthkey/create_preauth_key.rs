use axum_extra::routing::TypedPath;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::AuthKey;
use crate::ApiEndpoint;

/// The path to create a new pre-auth key
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
pub struct CreatePreAuthKeyPath;

/// Request to create a new pre-auth key for a user.
///
/// The expiration is an absolute instant. Clients that collect a relative
/// validity ("N days") convert it before building this request; the
/// relative value never goes on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePreAuthKeyRequest {
	/// Name of the user the key will register nodes under
	pub user: String,
	/// Whether the key may authorize more than one registration
	pub reusable: bool,
	/// Whether nodes registered with this key are transient
	pub ephemeral: bool,
	/// The instant the key stops authorizing registrations
	#[serde(with = "time::serde::rfc3339")]
	pub expiration: OffsetDateTime,
	/// Access-control tags to attach to the key
	pub acl_tags: Vec<String>,
}

impl ApiEndpoint for CreatePreAuthKeyRequest {
	const IS_PROTECTED: bool = true;
	const METHOD: Method = Method::POST;

	type RequestBody = Self;
	type RequestPath = CreatePreAuthKeyPath;
	type RequestQuery = ();
	type ResponseBody = CreatePreAuthKeyResponse;
}

/// Response to creating a new pre-auth key. The console only checks that
/// the request succeeded, but the full key is returned for callers that
/// want to display it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePreAuthKeyResponse {
	/// The created key
	pub pre_auth_key: AuthKey,
}

#[cfg(test)]
mod tests {
	use serde_test::{assert_tokens, Token};
	use time::macros::datetime;

	use super::{AuthKey, CreatePreAuthKeyRequest, CreatePreAuthKeyResponse};
	use crate::{utils::True, ApiSuccessResponseBody};

	#[test]
	fn assert_request_types() {
		assert_tokens(
			&CreatePreAuthKeyRequest {
				user: "alice".to_string(),
				reusable: false,
				ephemeral: false,
				expiration: datetime!(2024-07-01 08:30 UTC),
				acl_tags: Vec::new(),
			},
			&[
				Token::Struct {
					name: "CreatePreAuthKeyRequest",
					len: 5,
				},
				Token::Str("user"),
				Token::Str("alice"),
				Token::Str("reusable"),
				Token::Bool(false),
				Token::Str("ephemeral"),
				Token::Bool(false),
				Token::Str("expiration"),
				Token::Str("2024-07-01T08:30:00Z"),
				Token::Str("aclTags"),
				Token::Seq { len: Some(0) },
				Token::SeqEnd,
				Token::StructEnd,
			],
		);
	}

	#[test]
	fn assert_success_response_types() {
		let response = serde_json::from_str::<ApiSuccessResponseBody<CreatePreAuthKeyResponse>>(
			r#"{
				"success": true,
				"preAuthKey": {
					"id": "7",
					"key": "5c8282cdbdcbc3b9e15f4b2d7a9c0f8b",
					"user": "alice",
					"reusable": false,
					"ephemeral": false,
					"used": false,
					"expiration": "2024-07-01T08:30:00Z",
					"createdAt": "2024-04-02T08:30:00Z",
					"aclTags": []
				}
			}"#,
		)
		.unwrap();

		assert_eq!(
			response,
			ApiSuccessResponseBody {
				success: True,
				response: CreatePreAuthKeyResponse {
					pre_auth_key: AuthKey {
						id: "7".to_string(),
						key: "5c8282cdbdcbc3b9e15f4b2d7a9c0f8b".to_string(),
						user: "alice".to_string(),
						reusable: false,
						ephemeral: false,
						used: false,
						expiration: datetime!(2024-07-01 08:30 UTC),
						created_at: datetime!(2024-04-02 08:30 UTC),
						acl_tags: Vec::new(),
					},
				},
			}
		);
	}
}
