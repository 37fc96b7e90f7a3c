use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{
	utils::{False, True},
	ErrorType,
};

/// This struct represents a successful response from the API. It contains
/// the status code and the parsed body.
#[derive(Debug)]
pub struct ApiSuccessResponse<T> {
	/// The status code of the success response. Ideally in the 2xx range.
	pub status_code: StatusCode,
	/// The body of the success response. This is the actual data that was
	/// sent by the server.
	pub body: T,
}

/// This struct represents the JSON body of a successful response from the
/// API. This is mostly used internally and would ideally not need to be
/// constructed manually.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiSuccessResponseBody<T> {
	/// Whether the request was successful or not. This is always true.
	pub success: True,
	/// The JSON body of the response. This is flattened so that the fields
	/// of the body are at the top level.
	#[serde(flatten)]
	pub response: T,
}

/// This struct represents an error response from the API. It contains the
/// status code and the body of the response.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
	/// The status code of the error response. Ideally in the 4xx or 5xx
	/// range.
	pub status_code: StatusCode,
	/// The body of the error response. This is a JSON object that contains
	/// the error code and a message.
	pub body: ApiErrorResponseBody,
}

impl ApiErrorResponse {
	/// Creates a new [`ApiErrorResponse`] with the given [`ErrorType`],
	/// using the default status code.
	pub fn error(error: ErrorType) -> Self {
		Self {
			status_code: error.default_status_code(),
			body: ApiErrorResponseBody {
				success: False,
				message: error.message().into(),
				error,
			},
		}
	}

	/// Creates a new [`ApiErrorResponse`] with the given [`ErrorType`] and
	/// the given message, using the default status code.
	pub fn error_with_message(error: ErrorType, message: impl Into<String>) -> Self {
		Self {
			status_code: error.default_status_code(),
			body: ApiErrorResponseBody {
				success: False,
				error,
				message: message.into(),
			},
		}
	}

	/// Creates a new [`ApiErrorResponse`] with the given message as an
	/// internal server error.
	pub fn internal_error(message: impl Into<String>) -> Self {
		Self::error(ErrorType::InternalServerError(anyhow::Error::msg(
			message.into(),
		)))
	}
}

/// This struct represents the JSON body of an error response from the API.
/// This is mostly used internally and would ideally not need to be
/// constructed manually.
///
/// Use [`ApiErrorResponse`] to create an error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponseBody {
	/// Whether the request was successful or not. This is always false.
	pub success: False,
	/// The error code of the response.
	pub error: ErrorType,
	/// A user-friendly message describing the error.
	pub message: String,
}

/// This struct represents the JSON body of a response from the API. It can
/// be either a success or an error response. This is used to parse the
/// response from the API and determine whether it was successful or not.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ApiResponseBody<T> {
	/// Success response, with the given body.
	Success(ApiSuccessResponseBody<T>),
	/// Error response
	Error(ApiErrorResponseBody),
}

#[cfg(test)]
mod tests {
	use serde_test::{assert_tokens, Token};

	use super::{ApiErrorResponseBody, ApiResponseBody};
	use crate::{utils::False, ErrorType};

	#[test]
	fn assert_error_body_types() {
		assert_tokens(
			&ApiErrorResponseBody {
				success: False,
				error: ErrorType::Unauthorized,
				message: "You are not authorized to perform that action".to_string(),
			},
			&[
				Token::Struct {
					name: "ApiErrorResponseBody",
					len: 3,
				},
				Token::Str("success"),
				Token::Bool(false),
				Token::Str("error"),
				Token::Str("unauthorized"),
				Token::Str("message"),
				Token::Str("You are not authorized to perform that action"),
				Token::StructEnd,
			],
		);
	}

	#[test]
	fn parses_error_envelope_as_error_variant() {
		let body = serde_json::from_str::<ApiResponseBody<()>>(
			r#"{"success":false,"error":"userNotFound","message":"No such user"}"#,
		)
		.unwrap();

		assert_eq!(
			body,
			ApiResponseBody::Error(ApiErrorResponseBody {
				success: False,
				error: ErrorType::UserNotFound,
				message: "No such user".to_string(),
			})
		);
	}
}
