pub mod aligner;
pub mod alignment_configuration;
pub mod alignment_matrix;
pub mod alignment_result;
pub mod backtrack;
pub mod config;
pub mod error;
pub mod request;
