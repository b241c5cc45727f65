mod use_logout;

pub use use_logout::use_logout;
