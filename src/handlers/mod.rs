pub mod pages;
pub mod preferences;
pub mod resolve;
pub mod shorten;
