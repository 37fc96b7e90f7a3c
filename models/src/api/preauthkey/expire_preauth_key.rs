use axum_extra::routing::TypedPath;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::ApiEndpoint;

/// The path to expire a pre-auth key
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
#[typed_path("/api/v1/preauthkey/expire")]
pub struct ExpirePreAuthKeyPath;

/// Request to expire a pre-auth key immediately. The key is identified by
/// its owning user and its key material.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExpirePreAuthKeyRequest {
	/// Name of the user that owns the key
	pub user: String,
	/// The key material of the key to expire
	pub key: String,
}

impl ApiEndpoint for ExpirePreAuthKeyRequest {
	const IS_PROTECTED: bool = true;
	const METHOD: Method = Method::POST;

	type RequestBody = Self;
	type RequestPath = ExpirePreAuthKeyPath;
	type RequestQuery = ();
	type ResponseBody = ExpirePreAuthKeyResponse;
}

/// Response to expiring a pre-auth key. Carries no data beyond the success
/// envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExpirePreAuthKeyResponse {}

#[cfg(test)]
mod tests {
	use serde_test::{assert_tokens, Token};

	use super::ExpirePreAuthKeyRequest;

	#[test]
	fn assert_request_types() {
		assert_tokens(
			&ExpirePreAuthKeyRequest {
				user: "alice".to_string(),
				key: "5c8282cdbdcbc3b9e15f4b2d7a9c0f8b".to_string(),
			},
			&[
				Token::Struct {
					name: "ExpirePreAuthKeyRequest",
					len: 2,
				},
				Token::Str("user"),
				Token::Str("alice"),
				Token::Str("key"),
				Token::Str("5c8282cdbdcbc3b9e15f4b2d7a9c0f8b"),
				Token::StructEnd,
			],
		);
	}
}
