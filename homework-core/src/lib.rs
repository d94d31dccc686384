//! Homework Core
//!
//! Core types shared by the homework status bot crates.
//!
//! This crate contains:
//! - Domain types: review statuses and review records
//! - DTOs: wire representations of the Practicum and Telegram APIs
//! - Errors: the response shape taxonomy

pub mod domain;
pub mod dto;
pub mod error;

pub use error::ShapeError;
