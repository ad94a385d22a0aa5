//! Core trait abstractions.

pub mod generator;
