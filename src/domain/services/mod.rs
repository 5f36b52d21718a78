pub mod compose;
pub mod derive;
pub mod profile;
pub mod selection;
