pub mod details;
pub mod view;
