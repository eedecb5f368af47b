pub mod get_user;
