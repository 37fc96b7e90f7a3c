use crate::imports::*;

/// An on/off switch backed by a checkbox input.
#[component]
pub fn ToggleSwitch(
	/// The ID of the underlying checkbox.
	#[prop(into, optional)]
	id: MaybeSignal<String>,
	/// Whether the switch is on.
	#[prop(into)]
	checked: MaybeSignal<bool>,
	/// Whether the switch is disabled.
	#[prop(into, optional, default = false.into())]
	disabled: MaybeSignal<bool>,
	/// Change event handler
	#[prop(optional, default = Box::new(|_| ()))]
	on_toggle: Box<dyn FnMut(ev::Event)>,
	/// Additional class names to apply to the switch, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
) -> impl IntoView {
	view! {
		<label class=move || format!("toggle-switch fr-fs-ct {}", class.get())>
			<input
				id={move || id.get()}
				class="toggle-switch-checkbox"
				type="checkbox"
				prop:checked={move || checked.get()}
				disabled={move || disabled.get()}
				on:change=on_toggle
			/>
			<span class="toggle-switch-slider br-lg" />
		</label>
	}
}
