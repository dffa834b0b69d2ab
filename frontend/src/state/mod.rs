pub mod lead;
pub mod preferences;
