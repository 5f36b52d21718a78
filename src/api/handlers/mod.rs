pub mod customization;
pub mod health;
pub mod resort;
