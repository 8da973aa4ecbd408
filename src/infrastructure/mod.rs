//! Infrastructure layer for external integrations and technical concerns.
//!
//! This module contains the todo persistence backends.

pub mod persistence;
