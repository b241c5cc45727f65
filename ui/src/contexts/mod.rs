pub mod map;
pub mod toast;
