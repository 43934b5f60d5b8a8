//! Core types and definitions for the TACSCOPE simulation kernel.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, events, snapshot views, errors, constants, and the
//! persisted scenario schema. It has no dependency on any runtime host.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod events;
pub mod persist;
pub mod state;
pub mod types;
pub mod variants;
