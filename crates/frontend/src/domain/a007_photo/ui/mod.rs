pub mod list;
pub mod viewer;
