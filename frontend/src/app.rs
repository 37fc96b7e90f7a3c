use leptos_meta::{provide_meta_context, Title};

use crate::{pages::AuthKeysPage, prelude::*};

/// The application shell. Provides the document metadata context and
/// renders the auth-keys page.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Title formatter=|title: String| {
			if title.is_empty() {
				"Meshboard".to_string()
			} else {
				format!("{title} | Meshboard")
			}
		} />

		<main class="full-page bg-secondary fc-fs-fs px-xl py-lg">
			<AuthKeysPage />
		</main>
	}
}
