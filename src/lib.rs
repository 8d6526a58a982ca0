//! Chroma Vision
//!
//! Color picker service: color codes, WCAG contrast, color-blindness
//! simulation, palette generation and export over HTTP and the command line.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
