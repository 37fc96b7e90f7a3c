mod color;
mod notification_type;
mod size;
mod variant;

pub use self::{color::*, notification_type::*, size::*, variant::*};

pub mod consts {
	/// Path to the feather icon sprite the [`Icon`](crate::icon::Icon)
	/// component renders from
	pub const FEATHER_IMG: &str = "/icons/sprite/feather-sprite.svg";
}
