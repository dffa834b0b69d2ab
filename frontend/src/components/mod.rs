pub mod accessibility_toolbar;
pub mod common;
pub mod icons;
