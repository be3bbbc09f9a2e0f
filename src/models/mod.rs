pub mod lookup;
pub mod preferences;
pub mod shorten;
