pub mod customization;
pub mod factory;
