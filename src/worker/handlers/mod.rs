pub mod avatar;
pub mod entry;
pub mod selection;
pub mod target;
