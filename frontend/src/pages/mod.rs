mod auth_keys;

pub use self::auth_keys::*;
