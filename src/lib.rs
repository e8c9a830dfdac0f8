//! Gym Ledger - Membership management backend
//!
//! This crate implements the membership ledger for a gym: a plan catalog,
//! the membership lifecycle engine (registration, renewal, check-in,
//! corporate billing) and the read-side reporting aggregator.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
