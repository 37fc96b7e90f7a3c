use models::api::user::User;
use time::OffsetDateTime;

use super::form::{avatar_icon_class, AuthKeyCreateFlow, FieldError, SideEffect};
use crate::prelude::*;

/// The "generate auth key" modal.
///
/// Owns a fresh draft per open, validates it on every change, and issues
/// the create request on submit. On success it notifies `on_success` and
/// then asks `on_dismiss` to close the modal, in that order; on failure it
/// renders the error inline and leaves the form editable. The candidate
/// owners come in from the page; the modal never loads them itself.
#[component]
pub fn CreateAuthKeyModal(
	/// Whether the modal is open
	#[prop(into)]
	is_open: MaybeSignal<bool>,
	/// The candidate owners of the new key
	#[prop(into)]
	users: MaybeSignal<Vec<User>>,
	/// Called exactly once after a key is created
	#[prop(into)]
	on_success: Callback<()>,
	/// Called when the modal should close
	#[prop(into)]
	on_dismiss: Callback<()>,
) -> impl IntoView {
	let flow = create_rw_signal(AuthKeyCreateFlow::default());
	// errors render once the field changed or a submit was attempted
	let user_touched = create_rw_signal(false);
	let expiration_touched = create_rw_signal(false);

	// every open starts over from a fresh draft
	{
		let is_open = is_open.clone();
		create_effect(move |_| {
			if is_open.get() {
				flow.set(AuthKeyCreateFlow::default());
				user_touched.set(false);
				expiration_touched.set(false);
			}
		});
	}

	let options = Signal::derive(move || {
		users.with(|users| {
			users
				.iter()
				.map(|user| InputDropdownOption {
					value: user.name.clone(),
					label: user.name.clone(),
					icon: Some(avatar_icon_class(&user.id)),
					disabled: false,
				})
				.collect::<Vec<_>>()
		})
	});

	let validation = Signal::derive(move || flow.with(|flow| flow.form.validate()));
	let submitting = Signal::derive(move || flow.with(|flow| !flow.is_editable()));
	let selected_user = Signal::derive(move || flow.with(|flow| flow.form.user.clone()));
	let reusable = Signal::derive(move || flow.with(|flow| flow.form.reusable));
	let ephemeral = Signal::derive(move || flow.with(|flow| flow.form.ephemeral));
	let expiration_days = Signal::derive(move || flow.with(|flow| flow.form.expiration_days.clone()));
	let submit_error = Signal::derive(move || flow.with(AuthKeyCreateFlow::submit_error));

	let user_error = Signal::derive(move || {
		user_touched
			.get()
			.then(|| validation.get().user.map(FieldError::message))
			.flatten()
	});
	let expiration_error = Signal::derive(move || {
		expiration_touched
			.get()
			.then(|| validation.get().expiration_days.map(FieldError::message))
			.flatten()
	});

	let handle_submit = move |ev: ev::SubmitEvent| {
		ev.prevent_default();
		user_touched.set(true);
		expiration_touched.set(true);

		let Some(request) = flow
			.try_update(|flow| flow.begin_submit(OffsetDateTime::now_utc()))
			.flatten()
		else {
			return;
		};

		spawn_local(async move {
			let result = create_auth_key(access_token(), request)
				.await
				.map(|_| ())
				.map_err(|error| error.body.error);
			let effects = flow
				.try_update(|flow| flow.finish_submit(result))
				.unwrap_or_default();

			for effect in effects {
				match effect {
					SideEffect::NotifyCreated => on_success.call(()),
					SideEffect::Dismiss => on_dismiss.call(()),
				}
			}
		});
	};

	view! {
		<Modal is_open={is_open} on_dismiss={on_dismiss}>
			<div class="fr-sb-ct full-width mb-md">
				<h3 class="txt-white txt-lg txt-medium">"Generate auth key"</h3>
				<button
					type="button"
					class="btn-icon ml-auto"
					on:click=move |_| on_dismiss.call(())
				>
					<Icon icon={IconType::X} size={Size::ExtraSmall} />
				</button>
			</div>

			<form class="full-width fc-fs-fs" on:submit=handle_submit>
				<div class="full-width mb-sm">
					<label class="txt-white txt-sm txt-medium" for="key-owner">
						"Owner"
					</label>
					<p class="txt-grey txt-xxs mb-xxs">
						"Nodes registered with this key belong to the selected user"
					</p>
					<InputDropdown
						options={options}
						value={selected_user}
						placeholder={"Select an owner".to_string()}
						disabled={submitting}
						loading={Signal::derive(move || options.with(Vec::is_empty))}
						on_select={move |user: String| {
							user_touched.set(true);
							flow.update(|flow| flow.form.user = user);
						}}
					/>
					{move || user_error.get().map(|message| view! {
						<Alert r#type={NotificationType::Error} class="mt-xs" message={message} />
					})}
				</div>

				<div class="fr-sb-ct full-width mb-sm">
					<div class="fc-fs-fs">
						<label class="txt-white txt-sm txt-medium" for="key-reusable">
							"Reusable"
						</label>
						<p class="txt-grey txt-xxs">
							"Allow the key to register more than one node"
						</p>
					</div>
					<ToggleSwitch
						id="key-reusable"
						checked={reusable}
						disabled={submitting}
						on_toggle={Box::new(move |ev| {
							let checked = event_target_checked(&ev);
							flow.update(|flow| flow.form.reusable = checked);
						})}
					/>
				</div>

				<div class="full-width mb-sm">
					<label class="txt-white txt-sm txt-medium" for="key-expiration">
						"Expiration"
					</label>
					<p class="txt-grey txt-xxs mb-xxs">
						"How long the key stays valid, between 1 and 90 days"
					</p>
					<Input
						id="key-expiration"
						r#type={InputType::Number}
						class="full-width"
						disabled={submitting}
						value={expiration_days}
						end_text={Some("days".to_string())}
						on_input={Box::new(move |ev| {
							let value = event_target_value(&ev);
							expiration_touched.set(true);
							flow.update(|flow| flow.form.expiration_days = value);
						})}
					/>
					{move || expiration_error.get().map(|message| view! {
						<Alert r#type={NotificationType::Error} class="mt-xs" message={message} />
					})}
				</div>

				<hr class="full-width mb-sm" />

				<div class="fr-sb-ct full-width mb-md">
					<div class="fc-fs-fs">
						<label class="txt-white txt-sm txt-medium" for="key-ephemeral">
							"Ephemeral"
						</label>
						<p class="txt-grey txt-xxs">
							"Nodes registered with this key are removed shortly after they go offline"
						</p>
					</div>
					<ToggleSwitch
						id="key-ephemeral"
						checked={ephemeral}
						disabled={submitting}
						on_toggle={Box::new(move |ev| {
							let checked = event_target_checked(&ev);
							flow.update(|flow| flow.form.ephemeral = checked);
						})}
					/>
				</div>

				{move || if submitting.get() {
					view! {
						<Spinner class="ml-auto mr-xl" />
					}
					.into_view()
				} else {
					view! {
						<Link
							style_variant={LinkStyleVariant::Contained}
							should_submit={true}
							class="full-width"
						>
							"CREATE"
						</Link>
					}
					.into_view()
				}}
				{move || submit_error.get().map(|message| view! {
					<Alert r#type={NotificationType::Error} class="mt-xs" message={message} />
				})}
			</form>
		</Modal>
	}
}
