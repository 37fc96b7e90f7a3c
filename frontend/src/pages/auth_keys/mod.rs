mod auth_key_card;
mod create_key_modal;
mod form;

use leptos_meta::Title;
use models::api::user::User;

pub use self::{auth_key_card::*, create_key_modal::*};
use crate::prelude::*;

/// The auth-keys page: lists the keys of the selected owner and hosts the
/// create-key modal. Creating a key refetches the list; dismissing the
/// modal just closes it.
#[component]
pub fn AuthKeysPage() -> impl IntoView {
	let show_create_key = create_rw_signal(false);
	let selected_user = create_rw_signal(String::new());

	let users = create_resource(
		|| (),
		|()| async move { list_users(access_token()).await.unwrap_or_default() },
	);

	// preselect the first owner once the user list arrives
	create_effect(move |_| {
		if selected_user.with(String::is_empty) {
			if let Some(first) = users.get().and_then(|users| users.into_iter().next()) {
				selected_user.set(first.name);
			}
		}
	});

	let keys = create_resource(
		move || selected_user.get(),
		|user| async move {
			if user.is_empty() {
				return Vec::new();
			}
			list_auth_keys(access_token(), user)
				.await
				.map(|res| res.pre_auth_keys)
				.unwrap_or_default()
		},
	);

	let owner_options = Signal::derive(move || {
		users
			.get()
			.unwrap_or_default()
			.into_iter()
			.map(|User { name, .. }| InputDropdownOption {
				value: name.clone(),
				label: name,
				icon: None,
				disabled: false,
			})
			.collect::<Vec<_>>()
	});

	view! {
		<Title text="Auth keys" />

		<section class="full-width fc-fs-fs">
			<div class="fr-sb-ct full-width mb-md">
				<h2 class="txt-white txt-xl txt-medium fr-fs-ct">
					<Icon icon={IconType::Key} size={Size::Small} class="mr-sm" />
					"Auth keys"
				</h2>
				<Link
					style_variant={LinkStyleVariant::Contained}
					on_click={Box::new(move |_| show_create_key.set(true))}
				>
					<Icon icon={IconType::Plus} size={Size::ExtraSmall} class="mr-xxs" />
					"GENERATE AUTH KEY"
				</Link>
			</div>

			<div class="fr-fs-ct mb-md">
				<span class="txt-grey txt-sm mr-sm">"Owner"</span>
				<InputDropdown
					options={owner_options}
					value={selected_user}
					placeholder={"Select an owner".to_string()}
					on_select={move |user: String| selected_user.set(user)}
				/>
			</div>

			{move || match keys.get() {
				None => view! {
					<Spinner class="mx-auto mt-xl" />
				}
				.into_view(),
				Some(key_list) if key_list.is_empty() => view! {
					<p class="txt-grey txt-sm mx-auto mt-xl">
						"No auth keys yet. Generate one to register nodes without an interactive login."
					</p>
				}
				.into_view(),
				Some(key_list) => view! {
					<div class="full-width fc-fs-fs">
						<For
							each=move || key_list.clone()
							key=|key| key.id.clone()
							let:child
						>
							<AuthKeyCard
								auth_key={child}
								on_expired={Callback::new(move |_| keys.refetch())}
							/>
						</For>
					</div>
				}
				.into_view(),
			}}
		</section>

		<CreateAuthKeyModal
			is_open={show_create_key}
			users={Signal::derive(move || users.get().unwrap_or_default())}
			on_success={Callback::new(move |_| keys.refetch())}
			on_dismiss={Callback::new(move |_| show_create_key.set(false))}
		/>
	}
}
