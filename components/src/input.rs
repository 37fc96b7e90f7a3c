use crate::imports::*;

/// The HTML input types the [`Input`] component supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InputType {
	/// The default value. A single-line text field.
	#[default]
	Text,
	/// A field for editing an email address.
	Email,
	/// A single-line text field whose value is obscured.
	Password,
	/// A control for entering a telephone number.
	Phone,
	/// A control for entering a number. Displays a numeric keypad in some
	/// devices with dynamic keypads.
	Number,
	/// A check box allowing single values to be selected/deselected.
	Checkbox,
}

impl InputType {
	/// Returns the value of the `type` attribute for this input type.
	pub const fn as_html_attribute(self) -> &'static str {
		match self {
			Self::Text => "text",
			Self::Email => "email",
			Self::Phone => "tel",
			Self::Number => "number",
			Self::Checkbox => "checkbox",
			Self::Password => "password",
		}
	}
}

/// An input field with an optional label and optional start/end text.
#[component]
pub fn Input(
	/// Additional class names to apply to the outer div, if any.
	#[prop(into, optional)]
	class: MaybeSignal<String>,
	/// The ID of the input.
	#[prop(into, optional)]
	id: MaybeSignal<String>,
	/// Placeholder text for the input.
	#[prop(into, optional)]
	placeholder: MaybeSignal<String>,
	/// The type of input
	#[prop(into, optional, default = InputType::Text.into())]
	r#type: MaybeSignal<InputType>,
	/// Whether the input is disabled.
	#[prop(into, optional, default = false.into())]
	disabled: MaybeSignal<bool>,
	/// Input event handler
	#[prop(optional, default = Box::new(|_| ()))]
	on_input: Box<dyn FnMut(ev::Event)>,
	/// The color variant of the input
	#[prop(into, optional)]
	variant: MaybeSignal<SecondaryColorVariant>,
	/// Label for the input. An empty string doesn't render a label.
	#[prop(into, optional, default = "".into())]
	label: String,
	/// The current value of the input
	#[prop(into, optional)]
	value: MaybeSignal<String>,
	/// Text rendered after the input, if any (for example a unit)
	#[prop(into, optional)]
	end_text: MaybeSignal<Option<String>>,
	/// Text rendered before the input, if any
	#[prop(into, optional)]
	start_text: MaybeSignal<Option<String>>,
) -> impl IntoView {
	let cloned_label = label.clone();
	let show_label = move || !cloned_label.is_empty();

	let class = move || {
		format!(
			"input fr-fs-ct row-card bg-secondary-{} {}",
			variant.get().as_css_name(),
			class.get()
		)
	};

	view! {
		<div class={class}>
			<Show when={show_label}>
				<label>{label.clone()}</label>
			</Show>
			{move || start_text.get()}
			<input
				id={move || id.get()}
				class="mx-md of-hidden txt-of-ellipsis"
				placeholder={move || placeholder.get()}
				disabled={move || disabled.get()}
				on:input=on_input
				prop:value={move || value.get()}
				type={move || r#type.get().as_html_attribute()}
			/>
			{move || end_text.get()}
		</div>
	}
}
