//! Service layer shared by the route handlers.

pub mod catalog;
