#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::missing_docs_in_private_items)]

//! Admin console for a self-hosted mesh VPN coordination server.

/// Prelude module. Used to re-export commonly used items.
pub mod prelude {
	pub use components::prelude::*;
	pub use leptos::*;
	pub use log::{debug, error, info, trace, warn};

	pub use crate::{api::*, utils::*};
}

use prelude::*;

/// The API module. This contains one thin wrapper per endpoint of the
/// coordination server the console calls.
pub mod api;
/// The application shell. Provides document metadata and renders the pages.
pub mod app;
/// The pages module. This contains all the pages used in the application.
pub mod pages;
/// The utils module. This contains the fetch layer, token storage and other
/// things needed to make the application work.
pub mod utils;

use app::App;

/// Main function. Called when the application is started.
pub fn main() {
	wasm_logger::init(wasm_logger::Config::default());

	if cfg!(debug_assertions) {
		console_error_panic_hook::set_once();
	}

	mount_to_body(App);
}
