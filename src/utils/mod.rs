//! Small helpers shared by the content and data layers.

pub mod date;
pub mod slug;
