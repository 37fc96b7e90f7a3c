use std::str::FromStr;

use models::{
	utils::False,
	ApiEndpoint,
	ApiErrorResponse,
	ApiErrorResponseBody,
	ApiRequest,
	ApiResponseBody,
	ApiSuccessResponse,
	ApiSuccessResponseBody,
	ErrorType,
};
use url::Url;

use super::constants;

/// Makes a request to the coordination server API. Requires an
/// [`ApiRequest`] object for a specific endpoint, and returns the response
/// corresponding to that endpoint.
///
/// Protected endpoints get the given API token attached as a bearer
/// Authorization header. Transport failures and undecodable responses are
/// folded into the internal-server-error code, so callers always see one
/// error shape.
pub async fn make_request<E>(
	ApiRequest { path, query, body }: ApiRequest<E>,
	access_token: Option<String>,
) -> Result<ApiSuccessResponse<E::ResponseBody>, ApiErrorResponse>
where
	E: ApiEndpoint,
{
	let mut url = Url::from_str(constants::API_BASE_URL)
		.unwrap()
		.join(path.to_string().as_str())
		.unwrap();
	let query = serde_urlencoded::to_string(&query).unwrap_or_default();
	if !query.is_empty() {
		url.set_query(Some(query.as_str()));
	}

	let body = serde_json::to_value(&body).unwrap();
	let builder = reqwest::Client::new().request(E::METHOD, url);
	let builder = match access_token {
		Some(token) if E::IS_PROTECTED => builder.bearer_auth(token),
		_ => builder,
	};
	let response = if body.is_null() {
		builder
	} else {
		builder.json(&body)
	}
	.send()
	.await;

	let response = match response {
		Ok(response) => response,
		Err(error) => {
			log::error!("{}", error.to_string());
			return Err(ApiErrorResponse {
				status_code: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
				body: ApiErrorResponseBody {
					success: False,
					error: ErrorType::server_error(error.to_string()),
					message: error.to_string(),
				},
			});
		}
	};

	let status_code = response.status();

	match response.json::<ApiResponseBody<E::ResponseBody>>().await {
		Ok(ApiResponseBody::Success(ApiSuccessResponseBody {
			success: _,
			response: body,
		})) => Ok(ApiSuccessResponse { status_code, body }),
		Ok(ApiResponseBody::Error(error)) => Err(ApiErrorResponse {
			status_code,
			body: error,
		}),
		Err(error) => {
			log::error!("{}", error.to_string());
			Err(ApiErrorResponse {
				status_code: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
				body: ApiErrorResponseBody {
					success: False,
					error: ErrorType::server_error(error.to_string()),
					message: error.to_string(),
				},
			})
		}
	}
}
