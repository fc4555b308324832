pub mod api;
pub mod scroll;
