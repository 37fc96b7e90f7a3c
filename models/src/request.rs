use typed_builder::TypedBuilder;

use crate::ApiEndpoint;

/// This struct represents a request to the coordination server API. It
/// contains the path, query and body of the request, and provides a builder
/// API to make it easier to construct requests.
#[derive(TypedBuilder)]
pub struct ApiRequest<E>
where
	E: ApiEndpoint,
{
	/// The path of the request. This is the part of the URL after the domain
	/// and port.
	pub path: E::RequestPath,
	/// The query of the request. This is the part of the URL after the `?`.
	pub query: E::RequestQuery,
	/// The body of the request. This is the actual data that is sent to the
	/// server, serialized as JSON.
	pub body: E::RequestBody,
}
