//! Tandem Core Types and Definitions
//!
//! This crate provides the backend-independent building blocks of Tandem
//! diagrams:
//!
//! - **Geometry**: Integer logical coordinates ([`geometry`] module)
//! - **Colors**: CSS colors and fill classification ([`color::Color`])
//! - **Draw**: Rectangle and text definitions shared by every backend ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
