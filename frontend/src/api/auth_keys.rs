use models::{api::preauthkey::*, ApiErrorResponse, ApiRequest};

use crate::utils::make_request;

/// Creates a new pre-auth key on the coordination server.
pub async fn create_auth_key(
	access_token: Option<String>,
	body: CreatePreAuthKeyRequest,
) -> Result<CreatePreAuthKeyResponse, ApiErrorResponse> {
	make_request::<CreatePreAuthKeyRequest>(
		ApiRequest::builder()
			.path(CreatePreAuthKeyPath)
			.query(())
			.body(body)
			.build(),
		access_token,
	)
	.await
	.map(|res| res.body)
}

/// Lists all pre-auth keys owned by the given user.
pub async fn list_auth_keys(
	access_token: Option<String>,
	user: String,
) -> Result<ListPreAuthKeysResponse, ApiErrorResponse> {
	make_request::<ListPreAuthKeysRequest>(
		ApiRequest::builder()
			.path(ListPreAuthKeysPath)
			.query(ListPreAuthKeysQuery { user })
			.body(())
			.build(),
		access_token,
	)
	.await
	.map(|res| res.body)
}

/// Expires the given pre-auth key immediately.
pub async fn expire_auth_key(
	access_token: Option<String>,
	user: String,
	key: String,
) -> Result<ExpirePreAuthKeyResponse, ApiErrorResponse> {
	make_request::<ExpirePreAuthKeyRequest>(
		ApiRequest::builder()
			.path(ExpirePreAuthKeyPath)
			.query(())
			.body(ExpirePreAuthKeyRequest { user, key })
			.build(),
		access_token,
	)
	.await
	.map(|res| res.body)
}
