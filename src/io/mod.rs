pub mod walker;
pub mod writer;
