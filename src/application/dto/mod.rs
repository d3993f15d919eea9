//! # Data Transfer Objects

pub mod aggregate_config;
