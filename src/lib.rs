// src/lib.rs

#[macro_use]
pub mod macros;

#[macro_use]
pub mod log;

pub mod core;
pub mod error;
pub mod notify;
pub mod params;

pub mod acquire;
pub mod channel;
pub mod cli;
pub mod combine;
pub mod csv;
pub mod export;
pub mod normalize;
pub mod resolve;
pub mod session;
