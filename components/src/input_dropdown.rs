use crate::imports::*;

/// A single selectable option of an [`InputDropdown`].
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct InputDropdownOption {
	/// The value reported when the option is selected
	pub value: String,
	/// The text shown for the option
	pub label: String,
	/// Decorative icon class rendered before the label, if any
	pub icon: Option<String>,
	/// Whether the option can be selected
	pub disabled: bool,
}

/// An input showing its options in a dropdown. Reports the selected
/// option's value through `on_select`.
#[component]
pub fn InputDropdown(
	/// The list of options to display
	#[prop(into, optional, default = vec![].into())]
	options: MaybeSignal<Vec<InputDropdownOption>>,
	/// Additional class names to apply to the outer div, if any.
	#[prop(into, optional)]
	class: MaybeSignal<String>,
	/// The color variant of the component
	#[prop(optional, default = SecondaryColorVariant::Light)]
	variant: SecondaryColorVariant,
	/// The value of the currently selected option. If no option carries this
	/// value, the placeholder is shown.
	#[prop(into, optional, default = "".to_owned().into())]
	value: MaybeSignal<String>,
	/// Placeholder to show while no option is selected
	#[prop(optional, default = "Select...".to_owned())]
	placeholder: String,
	/// Whether the component is disabled or not
	#[prop(optional, into, default = false.into())]
	disabled: MaybeSignal<bool>,
	/// Whether the component is in a loading state or not
	#[prop(optional, into, default = false.into())]
	loading: MaybeSignal<bool>,
	/// Called with the value of the option the user picks
	#[prop(into)]
	on_select: Callback<String>,
) -> impl IntoView {
	let show_dropdown = create_rw_signal(false);

	let store_options = store_value(options);

	let selected = {
		let value = value.clone();
		Signal::derive(move || {
			store_options.with_value(|options| {
				options.with(|options| {
					options
						.iter()
						.find(|option| value.with(|value| option.value == *value))
						.cloned()
				})
			})
		})
	};

	let outer_div_class = move || {
		format!(
			"fr-fs-ct br-sm row-card full-width pos-rel px-xl py-xxs input-dropdown bg-secondary-{} {} {}",
			variant.as_css_name(),
			class.get(),
			if value.with(String::is_empty) || disabled.get() || loading.get() {
				"txt-disabled"
			} else {
				"txt-white"
			},
		)
	};

	let dropdown_class = move || {
		format!(
			"pos-abs drop-down txt-white fc-fs-fs br-sm of-hidden full-width mt-lg bg-secondary-{}",
			variant.as_css_name(),
		)
	};

	let handle_click = move |_| {
		if !disabled.get() && !loading.get() {
			show_dropdown.update(|val| *val = !*val);
		}
	};

	view! {
		<div on:click=handle_click class=outer_div_class>
			{move || {
				selected
					.get()
					.and_then(|option| option.icon)
					.map(|icon| view! {
						<span class={format!("{icon} mr-sm")} />
					})
			}}
			<span class="full-width full-height txt-medium pl-sm mr-sm py-xxs br-sm">
				{move || {
					selected
						.get()
						.map(|option| option.label)
						.unwrap_or_else(|| placeholder.clone())
				}}
			</span>
			<Icon
				icon={IconType::ChevronDown}
				class="ml-auto"
				size={Size::ExtraSmall}
			/>

			<Show when=move || show_dropdown.get()>
				<div class=dropdown_class>
					<ul class="full-width full-height ofx-hidden ofy-hidden fc-fs-fs">
						<For
							each=move || store_options.with_value(|options| options.get())
							key=|option| option.value.clone()
							let:child
						>
							{
								let value = child.value.clone();
								let is_disabled = child.disabled;
								let item_class = format!(
									"px-xl py-sm ul-light fr-fs-ct full-width br-bottom-sm {}",
									if is_disabled { "txt-disabled" } else { "txt-white" },
								);
								view! {
									<li
										on:click=move |ev: ev::MouseEvent| {
											ev.stop_propagation();
											if !is_disabled {
												on_select.call(value.clone());
												show_dropdown.set(false);
											}
										}
										class=item_class
									>
										{child.icon.clone().map(|icon| view! {
											<span class={format!("{icon} mr-sm")} />
										})}
										{child.label.clone()}
									</li>
								}
							}
						</For>
					</ul>
				</div>
			</Show>
		</div>
	}
}
