pub mod use_outside_dismiss;

pub use use_outside_dismiss::use_outside_dismiss;
