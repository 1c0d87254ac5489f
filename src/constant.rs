//! Values that are already materialized: immediates and constants

use std::fmt;

use crate::backend::{Ir, TypeSystem};
use crate::value::ValueKind;

/// An IR value with no memory behind it.
pub struct ImmediateValue<'a, T: TypeSystem, I: Ir> {
    ty: &'a T::Type,
    value: I::Value,
    in_place: bool,
}

impl<'a, T: TypeSystem, I: Ir> ImmediateValue<'a, T, I> {
    pub fn new(ty: &'a T::Type, value: I::Value) -> Self {
        ImmediateValue {
            ty,
            value,
            in_place: false,
        }
    }

    /// An immediate already written into its final destination, so the
    /// generator can skip copying it there again.
    pub fn new_in_place(ty: &'a T::Type, value: I::Value) -> Self {
        ImmediateValue {
            ty,
            value,
            in_place: true,
        }
    }

    pub fn ty(&self) -> &'a T::Type {
        self.ty
    }

    pub fn value(&self) -> I::Value {
        self.value
    }

    pub fn in_place(&self) -> bool {
        self.in_place
    }
}

impl<T: TypeSystem, I: Ir> Clone for ImmediateValue<'_, T, I> {
    fn clone(&self) -> Self {
        ImmediateValue {
            ty: self.ty,
            value: self.value,
            in_place: self.in_place,
        }
    }
}

impl<T: TypeSystem, I: Ir> fmt::Debug for ImmediateValue<'_, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImmediateValue")
            .field("ty", &self.ty)
            .field("value", &self.value)
            .field("in_place", &self.in_place)
            .finish()
    }
}

/// A compile-time constant. The null flag marks the zero/null constant of
/// its type so null checks can recognise it without looking at its bits.
pub struct ConstantValue<'a, T: TypeSystem, I: Ir> {
    ty: &'a T::Type,
    constant: I::Constant,
    null: bool,
}

impl<'a, T: TypeSystem, I: Ir> ConstantValue<'a, T, I> {
    pub fn new(ty: &'a T::Type, constant: I::Constant) -> Self {
        ConstantValue {
            ty,
            constant,
            null: false,
        }
    }

    /// `constant` must be the null representation of `ty`.
    pub fn null(ty: &'a T::Type, constant: I::Constant) -> Self {
        ConstantValue {
            ty,
            constant,
            null: true,
        }
    }

    pub fn ty(&self) -> &'a T::Type {
        self.ty
    }

    pub fn constant(&self) -> I::Constant {
        self.constant
    }

    pub fn is_null(&self) -> bool {
        self.null
    }

    /// The constant as a general IR value.
    pub fn value(&self) -> I::Value {
        I::constant_to_value(self.constant)
    }

    pub fn kind(&self) -> ValueKind {
        if self.null {
            ValueKind::Null
        } else {
            ValueKind::Constant
        }
    }
}

impl<T: TypeSystem, I: Ir> Clone for ConstantValue<'_, T, I> {
    fn clone(&self) -> Self {
        ConstantValue {
            ty: self.ty,
            constant: self.constant,
            null: self.null,
        }
    }
}

impl<T: TypeSystem, I: Ir> fmt::Debug for ConstantValue<'_, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstantValue")
            .field("ty", &self.ty)
            .field("constant", &self.constant)
            .field("null", &self.null)
            .finish()
    }
}
