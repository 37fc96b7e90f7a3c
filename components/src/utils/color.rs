/// All the colors supported by CSS class names in the app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Color {
	/// The accent color. This is the default.
	#[default]
	Primary,
	/// The background color
	Secondary,
	/// White text
	White,
	/// Black text
	Black,
	/// Muted text
	Grey,
	/// Success green
	Success,
	/// Warning yellow
	Warning,
	/// Error red
	Error,
	/// Info blue
	Info,
	/// Disabled grey
	Disabled,
}

impl Color {
	/// Returns the CSS name of the color.
	pub const fn as_css_name(&self) -> &'static str {
		match self {
			Primary => "primary",
			Secondary => "secondary",
			White => "white",
			Black => "black",
			Grey => "grey",
			Success => "success",
			Warning => "warning",
			Error => "error",
			Info => "info",
			Disabled => "disabled",
		}
	}

	/// Returns the CSS class name that colors text with this color.
	pub const fn as_css_text_color(&self) -> &'static str {
		match self {
			Primary => "txt-primary",
			Secondary => "txt-secondary",
			White => "txt-white",
			Black => "txt-black",
			Grey => "txt-grey",
			Success => "txt-success",
			Warning => "txt-warning",
			Error => "txt-error",
			Info => "txt-info",
			Disabled => "txt-disabled",
		}
	}
}

pub use Color::*;

/// Shades of the secondary background color, used by inputs, dropdowns and
/// modals to blend into the surface they sit on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum SecondaryColorVariant {
	/// The lightest shade
	#[default]
	Light,
	/// The middle shade
	Medium,
	/// The darkest shade
	Dark,
}

impl SecondaryColorVariant {
	/// Returns the CSS name of the variant.
	pub const fn as_css_name(&self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Medium => "medium",
			Self::Dark => "dark",
		}
	}
}
