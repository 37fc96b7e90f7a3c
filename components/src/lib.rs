#![forbid(unsafe_code)]

//! Reusable UI components for the Meshboard console. Most building blocks
//! like inputs, dropdowns, modals and alerts are defined here.

pub mod prelude {
	pub use crate::{
		alert::*,
		icon::*,
		input::*,
		input_dropdown::*,
		link::*,
		modal::*,
		spinner::*,
		toggle_switch::*,
		utils::*,
	};
}

mod imports {
	pub use leptos::*;

	pub use crate::prelude::*;
}

pub mod alert;
pub mod icon;
pub mod input;
pub mod input_dropdown;
pub mod link;
pub mod modal;
pub mod spinner;
pub mod toggle_switch;

pub mod utils;
