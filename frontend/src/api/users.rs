use models::{
	api::user::{ListUsersPath, ListUsersRequest, User},
	ApiErrorResponse,
	ApiRequest,
};

use crate::utils::make_request;

/// Lists all users known to the coordination server.
pub async fn list_users(access_token: Option<String>) -> Result<Vec<User>, ApiErrorResponse> {
	make_request::<ListUsersRequest>(
		ApiRequest::builder()
			.path(ListUsersPath)
			.query(())
			.body(())
			.build(),
		access_token,
	)
	.await
	.map(|res| res.body.users)
}
