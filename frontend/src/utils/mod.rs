pub mod dom;
pub mod encoding;
