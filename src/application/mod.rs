//! Application layer: one handler per use case.

pub mod handlers;
