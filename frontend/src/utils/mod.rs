mod fetch;
mod storage;

pub use self::{fetch::*, storage::*};

/// All the constants used in the application.
/// Constants are used to avoid hardcoding values, since that might
/// introduce typos.
pub mod constants {
	/// Base URL for the coordination server API. The console is expected to
	/// be served next to the server it manages.
	pub const API_BASE_URL: &str = "http://127.0.0.1:8080";
	/// Name of the cookie holding the API token the console authenticates
	/// with
	pub const ACCESS_TOKEN: &str = "accessToken";
}
