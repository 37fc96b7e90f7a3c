use crate::imports::*;

/// The kind of icon to display. This is taken directly from the Feather
/// icon set, trimmed to the small subset the console is likely to need.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconType {
	/// <https://feathericons.com/?query=alert-circle>
	AlertCircle,
	/// <https://feathericons.com/?query=check>
	Check,
	/// <https://feathericons.com/?query=check-circle>
	CheckCircle,
	/// <https://feathericons.com/?query=chevron-down>
	ChevronDown,
	/// <https://feathericons.com/?query=clock>
	Clock,
	/// <https://feathericons.com/?query=copy>
	Copy,
	/// <https://feathericons.com/?query=key>
	Key,
	/// <https://feathericons.com/?query=plus>
	Plus,
	/// <https://feathericons.com/?query=plus-circle>
	PlusCircle,
	/// <https://feathericons.com/?query=refresh-cw>
	RefreshCw,
	/// <https://feathericons.com/?query=trash-2>
	Trash2,
	/// <https://feathericons.com/?query=user>
	User,
	/// <https://feathericons.com/?query=users>
	Users,
	/// <https://feathericons.com/?query=x>
	X,
	/// <https://feathericons.com/?query=x-circle>
	XCircle,
}

impl IconType {
	/// Returns the name of the icon in the feather sprite.
	pub const fn as_feather_name(self) -> &'static str {
		match self {
			Self::AlertCircle => "alert-circle",
			Self::Check => "check",
			Self::CheckCircle => "check-circle",
			Self::ChevronDown => "chevron-down",
			Self::Clock => "clock",
			Self::Copy => "copy",
			Self::Key => "key",
			Self::Plus => "plus",
			Self::PlusCircle => "plus-circle",
			Self::RefreshCw => "refresh-cw",
			Self::Trash2 => "trash-2",
			Self::User => "user",
			Self::Users => "users",
			Self::X => "x",
			Self::XCircle => "x-circle",
		}
	}
}

/// Renders a single icon from the feather sprite.
#[component]
pub fn Icon(
	/// The icon to display
	#[prop(into)]
	icon: MaybeSignal<IconType>,
	/// The size of the icon
	#[prop(into, optional)]
	size: MaybeSignal<Size>,
	/// The color of the icon
	#[prop(into, optional)]
	color: MaybeSignal<Color>,
	/// Additional class names to apply to the icon, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
) -> impl IntoView {
	let class = move || {
		format!(
			"icon icon-{} {} {}",
			size.get().as_css_name(),
			color.get().as_css_text_color(),
			class.get()
		)
	};

	view! {
		<svg class={class}>
			<use_ href={move || {
				format!("{}#{}", consts::FEATHER_IMG, icon.get().as_feather_name())
			}} />
		</svg>
	}
}
