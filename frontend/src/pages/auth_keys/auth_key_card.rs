use models::api::preauthkey::AuthKey;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use crate::prelude::*;

/// One row of the auth-key list: the key prefix, its owner, its flags and
/// its expiry, plus the expire affordance.
#[component]
pub fn AuthKeyCard(
	/// The key to render
	auth_key: AuthKey,
	/// Called after the key was expired on the server
	#[prop(into)]
	on_expired: Callback<()>,
) -> impl IntoView {
	let expiring = create_rw_signal(false);
	let is_expired = auth_key.expiration <= OffsetDateTime::now_utc();

	let expiration_text = auth_key
		.expiration
		.format(&Rfc3339)
		.unwrap_or_default();
	let key_prefix = auth_key.key.chars().take(12).collect::<String>();

	let handle_expire = {
		let user = auth_key.user.clone();
		let key = auth_key.key.clone();
		move |_: &ev::MouseEvent| {
			if expiring.get_untracked() {
				return;
			}
			expiring.set(true);

			let user = user.clone();
			let key = key.clone();
			spawn_local(async move {
				match expire_auth_key(access_token(), user, key).await {
					Ok(_) => on_expired.call(()),
					Err(err) => {
						error!("failed to expire auth key: {}", err.body.message);
						expiring.set(false);
					}
				}
			});
		}
	};

	view! {
		<div class="row-card fr-sb-ct full-width bg-secondary-light br-sm px-lg py-sm mb-sm">
			<div class="fc-fs-fs">
				<code class="txt-white txt-sm">{key_prefix}"…"</code>
				<span class="txt-grey txt-xxs fr-fs-ct">
					<Icon icon={IconType::User} size={Size::ExtraExtraSmall} class="mr-xxs" />
					{auth_key.user.clone()}
				</span>
			</div>

			<div class="fr-fe-ct">
				{auth_key.reusable.then(|| view! {
					<span class="txt-info txt-xxs mr-sm">"reusable"</span>
				})}
				{auth_key.ephemeral.then(|| view! {
					<span class="txt-warning txt-xxs mr-sm">"ephemeral"</span>
				})}
				{auth_key.used.then(|| view! {
					<span class="txt-grey txt-xxs mr-sm">"used"</span>
				})}
				<span class=format!(
					"txt-xxs mr-md fr-fs-ct {}",
					if is_expired { "txt-error" } else { "txt-grey" },
				)>
					<Icon icon={IconType::Clock} size={Size::ExtraExtraSmall} class="mr-xxs" />
					{if is_expired { "expired".to_string() } else { expiration_text }}
				</span>
				<Link
					color={Color::Error}
					disabled={Signal::derive(move || is_expired || expiring.get())}
					on_click={Box::new(handle_expire)}
				>
					"EXPIRE"
				</Link>
			</div>
		</div>
	}
}
