pub mod embed_page;
pub mod home;
pub mod spin_wheel;
