//! Extrato Server Library
//!
//! This crate exposes the server's modules for integration testing.
//! The server binary is in main.rs.
//!
//! # Modules
//!
//! - `engine`: PDF conversion engine (MuPDF-backed) and converter singleton
//! - `routes`: HTTP handlers for `/extract` and `/health`
//! - `upload`: staging of upload bytes to temporary files

pub mod config;
pub mod engine;
pub mod error;
pub mod routes;
pub mod state;
pub mod upload;
