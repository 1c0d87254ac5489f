//! Interfaces consumed from the rest of the compiler
//!
//! Compiled values never own the things they point at. Semantic types and
//! declarations are borrowed from the front end's type system, IR handles
//! are plain copyable views into a module owned by the code generator.

use std::error::Error;
use std::fmt::Debug;

/// The front end's semantic type system, as seen by lowering.
pub trait TypeSystem {
    /// Semantic type attached to every compiled value.
    type Type: ?Sized + Debug;
    /// Variable declaration a variable value may point back to.
    type VarDecl: ?Sized + Debug;
    /// Function or method declaration a callable value points back to.
    type FuncDecl: ?Sized + Debug;

    /// Declared type of a variable.
    fn var_type(decl: &Self::VarDecl) -> &Self::Type;

    /// Type of a function declaration.
    fn func_type(decl: &Self::FuncDecl) -> &Self::Type;

    /// Aggregates passed by reference are used through their address,
    /// so loading a variable of such a type yields the address itself.
    fn passed_by_ref(_ty: &Self::Type) -> bool {
        false
    }
}

/// Handle types of the target IR.
pub trait Ir {
    /// A general IR value (instruction result, argument, global, ...).
    type Value: Copy + Debug + PartialEq;
    /// A compile-time constant.
    type Constant: Copy + Debug + PartialEq;

    /// Refine a constant to a general value handle.
    fn constant_to_value(constant: Self::Constant) -> Self::Value;
}

/// The one IR construction operation compiled values need.
pub trait IrBuilder<T: TypeSystem, I: Ir> {
    type Error: Error;

    /// Emit a load of a `ty` value from `location`.
    fn load(&self, ty: &T::Type, location: I::Value) -> Result<I::Value, Self::Error>;
}
