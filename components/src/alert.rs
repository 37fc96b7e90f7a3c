use crate::imports::*;

/// An inline notification line, rendered below the control it refers to.
#[component]
pub fn Alert(
	/// The tone of the notification
	#[prop(into)]
	r#type: MaybeSignal<NotificationType>,
	/// The message to show
	#[prop(into)]
	message: MaybeSignal<String>,
	/// Additional class names to apply to the alert, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
) -> impl IntoView {
	let class = move || {
		format!(
			"alert fr-fs-ct txt-xxs {} {}",
			r#type.get().as_color().as_css_text_color(),
			class.get()
		)
	};

	let icon = move || match r#type.get() {
		NotificationType::Success => IconType::CheckCircle,
		NotificationType::Warning => IconType::AlertCircle,
		NotificationType::Error => IconType::XCircle,
	};

	view! {
		<p class={class}>
			<Icon
				icon={Signal::derive(icon)}
				size={Size::ExtraExtraSmall}
				class="mr-xxs"
			/>
			{move || message.get()}
		</p>
	}
}
