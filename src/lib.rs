//! Daycare attendance core.
//!
//! This crate implements teacher clock-in/clock-out with geofenced overtime,
//! child arrival recording with quantized overtime, and the repository
//! boundary those operations persist through. An axum router exposes the
//! operations over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod attendance;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
