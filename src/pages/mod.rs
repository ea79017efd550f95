pub mod home;
pub mod lessons;
pub mod not_found;
