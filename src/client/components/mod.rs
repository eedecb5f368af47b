pub mod auth_trigger;
pub mod logo;
pub mod navbar;
pub mod page;
pub mod user_button;

pub use auth_trigger::AuthTriggerButton;
pub use logo::TrainiumLogo;
pub use navbar::Navbar;
pub use page::Page;
pub use user_button::UserButton;
