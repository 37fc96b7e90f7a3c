use std::fmt::Debug;

use axum_extra::routing::TypedPath;
use serde::{de::DeserializeOwned, Serialize};

/// A trait that defines an API endpoint of the coordination server. It ties
/// together everything the client needs to call the endpoint: the HTTP
/// method, the typed URL path, the query and body types, and the type the
/// successful response body deserializes into.
///
/// The trait is implemented on the endpoint's request type, so a single
/// import brings the whole contract into scope.
pub trait ApiEndpoint
where
	Self: Sized + Clone + Send + Sync + 'static,
	Self::RequestPath: TypedPath + Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
	Self::RequestQuery: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
	Self::RequestBody: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
	Self::ResponseBody: Serialize + DeserializeOwned + Debug + Clone + Send + Sync + 'static,
{
	/// The HTTP method that should be used for this endpoint
	const METHOD: reqwest::Method;
	/// Whether the endpoint requires the caller to present an API token.
	/// Protected endpoints get a bearer Authorization header attached by the
	/// fetch layer.
	const IS_PROTECTED: bool;

	/// The path that should be used for this endpoint. This is a valid URL
	/// path, implemented through [`axum_extra::routing::TypedPath`] so that
	/// the path constant and its display form stay in one place.
	type RequestPath;
	/// The query that should be used for this endpoint. Anything that can be
	/// serialized as URL query parameters. Endpoints without query parameters
	/// use `()`.
	type RequestQuery;
	/// The request body for this endpoint, serialized as JSON. Endpoints
	/// without a body (such as GET requests) use `()`.
	type RequestBody;
	/// The body of a successful response from this endpoint, parsed out of
	/// the JSON success envelope.
	type ResponseBody;
}
