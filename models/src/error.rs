use std::{
	error::Error as StdError,
	fmt::{Display, Formatter},
	mem,
};

use reqwest::StatusCode;
use serde::{de::Error, Deserialize, Serialize};

/// A list of all the possible errors that can be returned by the
/// coordination server API.
///
/// Every variant serializes to a stable camelCase code, and
/// [`ErrorType::message`] maps that code back to a display string. The
/// dashboard never renders raw server text; it renders the looked-up
/// message for the code it received.
#[derive(Debug)]
pub enum ErrorType {
	/// The API token provided is missing, expired or not valid
	Unauthorized,
	/// The API token provided is not a well-formed token
	MalformedApiToken,
	/// The user the request refers to does not exist
	UserNotFound,
	/// The requested expiration is outside the allowed window
	InvalidExpiration,
	/// The auth key the request refers to does not exist
	KeyNotFound,
	/// The auth key the request refers to has already expired
	KeyAlreadyExpired,
	/// The parameters sent with the request are invalid. This would ideally
	/// not happen unless there is a bug in the client
	WrongParameters,
	/// The resource that the user is trying to access does not exist
	ResourceDoesNotExist,
	/// An internal server error occurred. This should not happen unless
	/// there is a bug in the server
	InternalServerError(anyhow::Error),
}

impl ErrorType {
	/// Returns the status code that should be used for this error. Note that
	/// this is only the default status code and specific endpoints can
	/// override this if needed
	pub fn default_status_code(&self) -> StatusCode {
		match self {
			Self::Unauthorized => StatusCode::UNAUTHORIZED,
			Self::MalformedApiToken => StatusCode::BAD_REQUEST,
			Self::UserNotFound => StatusCode::BAD_REQUEST,
			Self::InvalidExpiration => StatusCode::BAD_REQUEST,
			Self::KeyNotFound => StatusCode::NOT_FOUND,
			Self::KeyAlreadyExpired => StatusCode::CONFLICT,
			Self::WrongParameters => StatusCode::BAD_REQUEST,
			Self::ResourceDoesNotExist => StatusCode::NOT_FOUND,
			Self::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// Returns the message that should be used for this error. This is the
	/// message that is user-friendly and can be shown to the user
	pub fn message(&self) -> impl Into<String> {
		match self {
			Self::Unauthorized => "You are not authorized to perform that action",
			Self::MalformedApiToken => "The API token provided is not a valid token",
			Self::UserNotFound => "No user exists with that name",
			Self::InvalidExpiration => "The requested expiration is not within the allowed window",
			Self::KeyNotFound => "That auth key does not exist",
			Self::KeyAlreadyExpired => "That auth key has already expired",
			Self::WrongParameters => "The parameters sent with that request are invalid",
			Self::ResourceDoesNotExist => "The resource you are trying to access does not exist",
			Self::InternalServerError(_) => "An internal server error has occured",
		}
	}

	/// Creates an [`ErrorType::InternalServerError`] with the given message
	pub fn server_error(message: impl Display) -> Self {
		Self::InternalServerError(anyhow::anyhow!(message.to_string()))
	}
}

impl PartialEq for ErrorType {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::InternalServerError(_), Self::InternalServerError(_)) => true,
			_ => mem::discriminant(self) == mem::discriminant(other),
		}
	}
}

impl Eq for ErrorType {}

impl<Error> From<Error> for ErrorType
where
	Error: StdError + Send + Sync + 'static,
{
	fn from(error: Error) -> Self {
		Self::InternalServerError(error.into())
	}
}

impl Clone for ErrorType {
	fn clone(&self) -> Self {
		match self {
			Self::Unauthorized => Self::Unauthorized,
			Self::MalformedApiToken => Self::MalformedApiToken,
			Self::UserNotFound => Self::UserNotFound,
			Self::InvalidExpiration => Self::InvalidExpiration,
			Self::KeyNotFound => Self::KeyNotFound,
			Self::KeyAlreadyExpired => Self::KeyAlreadyExpired,
			Self::WrongParameters => Self::WrongParameters,
			Self::ResourceDoesNotExist => Self::ResourceDoesNotExist,
			Self::InternalServerError(arg0) => {
				Self::InternalServerError(anyhow::anyhow!(arg0.to_string()))
			}
		}
	}
}

impl Display for ErrorType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.message().into())
	}
}

impl Serialize for ErrorType {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		match self {
			Self::Unauthorized => serializer.serialize_str("unauthorized"),
			Self::MalformedApiToken => serializer.serialize_str("malformedApiToken"),
			Self::UserNotFound => serializer.serialize_str("userNotFound"),
			Self::InvalidExpiration => serializer.serialize_str("invalidExpiration"),
			Self::KeyNotFound => serializer.serialize_str("keyNotFound"),
			Self::KeyAlreadyExpired => serializer.serialize_str("keyAlreadyExpired"),
			Self::WrongParameters => serializer.serialize_str("wrongParameters"),
			Self::ResourceDoesNotExist => serializer.serialize_str("resourceDoesNotExist"),
			Self::InternalServerError(_) => serializer.serialize_str("internalServerError"),
		}
	}
}

impl<'de> Deserialize<'de> for ErrorType {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let string = String::deserialize(deserializer)?;
		Ok(match string.as_str() {
			"unauthorized" => Self::Unauthorized,
			"malformedApiToken" => Self::MalformedApiToken,
			"userNotFound" => Self::UserNotFound,
			"invalidExpiration" => Self::InvalidExpiration,
			"keyNotFound" => Self::KeyNotFound,
			"keyAlreadyExpired" => Self::KeyAlreadyExpired,
			"wrongParameters" => Self::WrongParameters,
			"resourceDoesNotExist" => Self::ResourceDoesNotExist,
			"internalServerError" => {
				Self::InternalServerError(anyhow::anyhow!("Internal Server Error"))
			}
			unknown => return Err(Error::custom(format!("unknown variant: {unknown}"))),
		})
	}
}
