pub mod backup;
pub mod letter;
pub mod photo;
