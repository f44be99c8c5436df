//! HTTP request handlers.
//!
//! This module organizes the API handlers into logical groups:
//! - `api` - Health check endpoint
//! - `panel` - Panel state, mode toggle, prompt, and media-metadata event
//! - `podcast` - Generate and upload endpoints

pub mod api;
pub mod panel;
pub mod podcast;
