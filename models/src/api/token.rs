use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Represents an API token that authenticates a client (such as this
/// console) against the coordination server.
///
/// Only the prefix survives creation; the full token is shown once and
/// never stored server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiToken {
	/// Stable identifier assigned by the server
	pub id: String,
	/// The first characters of the token, used to recognize it in listings
	pub prefix: String,
	/// When the token stops being accepted
	#[serde(with = "time::serde::rfc3339")]
	pub expiration: OffsetDateTime,
	/// When the token was created
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	/// The last time the token was used, if it ever was
	#[serde(with = "time::serde::rfc3339::option")]
	pub last_seen: Option<OffsetDateTime>,
}

#[cfg(test)]
mod tests {
	use serde_test::{assert_tokens, Token};
	use time::macros::datetime;

	use super::ApiToken;

	#[test]
	fn assert_token_types() {
		assert_tokens(
			&ApiToken {
				id: "3".to_string(),
				prefix: "Hs9".to_string(),
				expiration: datetime!(2025-01-01 00:00 UTC),
				created_at: datetime!(2024-01-01 00:00 UTC),
				last_seen: None,
			},
			&[
				Token::Struct {
					name: "ApiToken",
					len: 5,
				},
				Token::Str("id"),
				Token::Str("3"),
				Token::Str("prefix"),
				Token::Str("Hs9"),
				Token::Str("expiration"),
				Token::Str("2025-01-01T00:00:00Z"),
				Token::Str("createdAt"),
				Token::Str("2024-01-01T00:00:00Z"),
				Token::Str("lastSeen"),
				Token::None,
				Token::StructEnd,
			],
		);
	}
}
