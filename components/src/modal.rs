use crate::imports::*;

/// A modal dialog shell.
///
/// Renders nothing while closed. While open it renders a backdrop plus its
/// children, and delegates every host-level dismiss trigger (the backdrop
/// click and the Escape key) to `on_dismiss`. It holds no state of its own;
/// whether the modal is open belongs to the caller.
#[component]
pub fn Modal(
	/// Whether the modal is currently shown
	#[prop(into)]
	is_open: MaybeSignal<bool>,
	/// Called when the user asks to dismiss the modal
	#[prop(into)]
	on_dismiss: Callback<()>,
	/// The shade the modal surface renders in
	#[prop(optional, default = SecondaryColorVariant::Light)]
	color_variant: SecondaryColorVariant,
	/// The content of the modal
	children: ChildrenFn,
) -> impl IntoView {
	let keydown = {
		let is_open = is_open.clone();
		window_event_listener(ev::keydown, move |ev| {
			if is_open.get_untracked() && ev.key() == "Escape" {
				on_dismiss.call(());
			}
		})
	};
	on_cleanup(move || keydown.remove());

	let surface_class = format!(
		"center-modal bg-secondary-{} br-sm p-xl show-center-modal txt-white fc-fs-fs",
		color_variant.as_css_name(),
	);

	view! {
		<Show when=move || is_open.get()>
			<div
				class="modal-backdrop full-page fr-ct-ct"
				on:click=move |_| on_dismiss.call(())
			>
				<div
					class={surface_class.clone()}
					on:click=|ev| ev.stop_propagation()
				>
					{children()}
				</div>
			</div>
		</Show>
	}
}
