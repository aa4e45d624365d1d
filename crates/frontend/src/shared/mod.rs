pub mod dom;
pub mod site_config;
