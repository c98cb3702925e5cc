//! Data models for the upload layer
//!
//! Inputs and outputs of the provider contract, organized by what they describe.

mod delete;
mod resource;
mod upload;

pub use delete::*;
pub use resource::*;
pub use upload::*;
