pub mod customization;
pub mod resort;
pub mod view;
