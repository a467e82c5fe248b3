pub mod home;
pub mod upload;
