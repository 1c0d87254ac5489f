//! LLVM backend for compiled values
//!
//! Binds the IR handles to inkwell's value types and emits the variable
//! loads with an inkwell `Builder`.

pub mod builder;
pub mod types;

// Re-export main types
pub use builder::{LlvmBuilder, LoadError};
pub use types::{null_constant, Llvm};
