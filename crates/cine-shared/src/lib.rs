//! # Cine Shared
//!
//! Wire types shared between the HTTP dispatcher and its clients.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
