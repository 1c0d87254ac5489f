//! compiled-value - what an expression evaluates to during code generation
//!
//! When a compiler lowers an expression to IR, the result may be an
//! immediate, a constant, a variable's memory location, a slice, a callable,
//! a location/value pair or a complex number. This crate provides the one
//! vocabulary the code generator uses to pass those results between lowering
//! steps: `CompiledValue`, with uniform access to the value's type, its
//! location (lvalue) and its loaded value (rvalue).
//!
//! The type system and the IR are consumed, not owned: see [`backend`].
//! Enable the `llvm` feature for an inkwell-backed IR.

pub mod aggregate;
pub mod backend;
pub mod callable;
pub mod constant;
pub mod error;
pub mod value;
pub mod variable;

// LLVM backend (optional, requires llvm feature)
#[cfg(feature = "llvm")]
pub mod llvm;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use aggregate::{ComplexValue, PairedValue, SliceValue};
pub use backend::{Ir, IrBuilder, TypeSystem};
pub use callable::CallableValue;
pub use constant::{ConstantValue, ImmediateValue};
pub use error::{ValueError, ValueResult};
pub use value::{CompiledValue, ValueKind};
pub use variable::VariableValue;

#[cfg(feature = "llvm")]
pub use llvm::{Llvm, LlvmBuilder};
