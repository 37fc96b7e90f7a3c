use leptos::*;
use leptos_use::{use_cookie, utils::FromToStringCodec};

use super::constants;

/// Reads the API token the console authenticates with from the browser
/// cookie storage. Returns `None` while no token is stored; protected
/// requests made without one come back as unauthorized.
pub fn access_token() -> Option<String> {
	use_cookie::<String, FromToStringCodec>(constants::ACCESS_TOKEN)
		.0
		.get_untracked()
}
