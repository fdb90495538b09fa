//! UI components for Folio

pub mod editor;
pub mod social_links;
pub mod tab_strip;
