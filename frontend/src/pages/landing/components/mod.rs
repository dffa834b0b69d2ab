pub mod contact_form;
pub mod contact_links;
pub mod customers;
pub mod hero;
pub mod services;
pub mod showcase;
