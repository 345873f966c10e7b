//! Shared configuration and data models for both Lambda functions

pub mod config;
pub mod models;
