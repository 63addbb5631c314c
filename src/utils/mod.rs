//! Utility functions for alias generation, URL processing, and request handling.
//!
//! This module provides helper functions used across the application:
//!
//! - [`code_generator`] - Short alias minting
//! - [`url_validator`] - URL validation, domain checks, and scheme normalization
//! - [`client_ip`] - Client IP resolution from connection info and headers

pub mod client_ip;
pub mod code_generator;
pub mod url_validator;
