//! Core state for sections, scratch tabs, export and configuration

pub mod config;
pub mod export;
pub mod sections;
pub mod social;
pub mod surface;
pub mod tabs;
pub mod workspace;
