pub mod generate_program;
pub mod home;
pub mod not_found;
pub mod profile;

pub use generate_program::GenerateProgram;
pub use home::Home;
pub use not_found::NotFound;
pub use profile::Profile;
