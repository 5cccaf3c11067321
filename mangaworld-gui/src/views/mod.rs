pub mod authors;
pub mod home;
pub mod settings;
pub mod works;
