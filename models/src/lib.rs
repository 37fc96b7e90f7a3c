#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::missing_docs_in_private_items)]
#![cfg_attr(
	debug_assertions,
	allow(unused_variables, dead_code, unused_mut),
	allow(missing_docs, clippy::missing_docs_in_private_items)
)]

//! Shared type index for the Meshboard console: the endpoint contracts of
//! the coordination server's API, the success / error response envelope,
//! and the entity types the dashboard exchanges with it.

pub mod api;
pub mod utils;

mod endpoint;
mod error;
mod request;
mod response;

pub use self::{endpoint::*, error::*, request::*, response::*};

/// Prelude module. Used to re-export commonly used items.
pub mod prelude {
	pub use crate::{
		utils::{False, True},
		ApiEndpoint,
		ApiErrorResponse,
		ApiErrorResponseBody,
		ApiRequest,
		ApiResponseBody,
		ApiSuccessResponse,
		ApiSuccessResponseBody,
		ErrorType,
	};
}
