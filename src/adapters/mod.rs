//! Adapters wiring the ports to real infrastructure.

pub mod http;
pub mod postgres;
