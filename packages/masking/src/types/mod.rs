//! Data types shared by every stage of the masking pipeline.

pub mod analysis;
pub mod config;
pub mod record;
