pub mod analysis;
pub mod book;
