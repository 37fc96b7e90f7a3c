mod auth_keys;
mod users;

pub use self::{auth_keys::*, users::*};
