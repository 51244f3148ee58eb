//! Core modules: content model, lookups and everything built on them.

pub mod catalog;
pub mod config;
pub mod envelope;
pub mod error;
pub mod fragment;
pub mod model;
pub mod render;
pub mod search;
pub mod validate;
