pub mod backup;
pub mod gallery;
pub mod letters;
pub mod note;
