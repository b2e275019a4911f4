//! DTOs exchanged between the school dashboard and its REST backend.

pub mod dashboards;
pub mod domain;
pub mod shared;
