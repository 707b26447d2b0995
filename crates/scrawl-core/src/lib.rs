//! # scrawl-core
//!
//! The formatted-output engine of the scrawl compiler runtime.
//!
//! This crate provides a transport-agnostic output stream that renders
//! primitive values, pointers, booleans, and user-defined types into byte
//! runs using a compact printf-like mini-language. Formatting itself never
//! allocates; all scratch space is fixed-size and stack-resident, and
//! finished runs flush straight through the stream's transport.

#![deny(unsafe_code)]

pub mod config;
pub mod fmt;
