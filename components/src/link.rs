use crate::imports::*;

/// A button-shaped action control. Despite the name it renders a `<button>`
/// so it can submit forms and carry click handlers; the Plain variant makes
/// it look like a text link.
#[component]
pub fn Link(
	/// The children of the link, usually the link text
	children: Children,
	/// Additional class names to apply to the link, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
	/// Color of the link
	#[prop(into, optional)]
	color: MaybeSignal<Color>,
	/// Style variant, a filled button or a plain text link
	#[prop(into, optional)]
	style_variant: MaybeSignal<LinkStyleVariant>,
	/// Whether the link is disabled
	#[prop(into, optional, default = false.into())]
	disabled: MaybeSignal<bool>,
	/// Whether the link submits the form it sits in
	#[prop(into, optional, default = false.into())]
	should_submit: MaybeSignal<bool>,
	/// Click handler, if any
	#[prop(optional)]
	on_click: Option<Box<dyn FnMut(&ev::MouseEvent)>>,
) -> impl IntoView {
	let class = move || {
		format!(
			"fr-ct-ct {} {}",
			if style_variant.get() == LinkStyleVariant::Contained {
				format!("btn btn-{}", color.get().as_css_name())
			} else {
				format!("btn-plain txt-{}", color.get().as_css_name())
			},
			class.get()
		)
	};

	let mut on_click = on_click;

	view! {
		<button
			class={class}
			disabled={move || disabled.get()}
			type={move || if should_submit.get() { "submit" } else { "button" }}
			on:click=move |ev| {
				if let Some(on_click) = on_click.as_mut() {
					on_click(&ev);
				}
			}
		>
			{children()}
		</button>
	}
}
