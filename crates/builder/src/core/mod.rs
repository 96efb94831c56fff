//! Core module containing the pipeline and its context

pub mod builder;
pub mod context;
