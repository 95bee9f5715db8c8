pub mod avatar;
pub mod reader;
pub mod writer;
