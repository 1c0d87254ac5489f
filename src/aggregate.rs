//! Values split over several IR handles

use std::fmt;

use crate::backend::{Ir, TypeSystem};
use crate::error::{ValueError, ValueResult};
use crate::value::ValueKind;

/// A dynamic array view, kept as its (length, pointer) pair.
pub struct SliceValue<'a, T: TypeSystem, I: Ir> {
    ty: &'a T::Type,
    len: I::Value,
    ptr: I::Value,
}

impl<'a, T: TypeSystem, I: Ir> SliceValue<'a, T, I> {
    pub fn new(ty: &'a T::Type, len: I::Value, ptr: I::Value) -> Self {
        SliceValue { ty, len, ptr }
    }

    pub fn ty(&self) -> &'a T::Type {
        self.ty
    }

    pub fn len(&self) -> I::Value {
        self.len
    }

    pub fn ptr(&self) -> I::Value {
        self.ptr
    }
}

impl<T: TypeSystem, I: Ir> Clone for SliceValue<'_, T, I> {
    fn clone(&self) -> Self {
        SliceValue {
            ty: self.ty,
            len: self.len,
            ptr: self.ptr,
        }
    }
}

impl<T: TypeSystem, I: Ir> fmt::Debug for SliceValue<'_, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceValue")
            .field("ty", &self.ty)
            .field("len", &self.len)
            .field("ptr", &self.ptr)
            .finish()
    }
}

/// A complex number kept as separate real and imaginary parts.
pub struct ComplexValue<'a, T: TypeSystem, I: Ir> {
    ty: &'a T::Type,
    re: I::Value,
    im: I::Value,
}

impl<'a, T: TypeSystem, I: Ir> ComplexValue<'a, T, I> {
    pub fn new(ty: &'a T::Type, re: I::Value, im: I::Value) -> Self {
        ComplexValue { ty, re, im }
    }

    pub fn ty(&self) -> &'a T::Type {
        self.ty
    }

    pub fn re(&self) -> I::Value {
        self.re
    }

    pub fn im(&self) -> I::Value {
        self.im
    }
}

impl<T: TypeSystem, I: Ir> Clone for ComplexValue<'_, T, I> {
    fn clone(&self) -> Self {
        ComplexValue {
            ty: self.ty,
            re: self.re,
            im: self.im,
        }
    }
}

impl<T: TypeSystem, I: Ir> fmt::Debug for ComplexValue<'_, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComplexValue")
            .field("ty", &self.ty)
            .field("re", &self.re)
            .field("im", &self.im)
            .finish()
    }
}

/// A location of one type paired with a value of another.
///
/// `ty` deliberately reports the value side. Code that needs the storage
/// type asks for `location_type`.
pub struct PairedValue<'a, T: TypeSystem, I: Ir> {
    location_ty: &'a T::Type,
    location: Option<I::Value>,
    value_ty: &'a T::Type,
    value: Option<I::Value>,
}

impl<'a, T: TypeSystem, I: Ir> PairedValue<'a, T, I> {
    pub fn new(
        location_ty: &'a T::Type,
        location: Option<I::Value>,
        value_ty: &'a T::Type,
        value: Option<I::Value>,
    ) -> Self {
        PairedValue {
            location_ty,
            location,
            value_ty,
            value,
        }
    }

    pub fn ty(&self) -> &'a T::Type {
        self.value_ty
    }

    pub fn location_type(&self) -> &'a T::Type {
        self.location_ty
    }

    pub fn value_type(&self) -> &'a T::Type {
        self.value_ty
    }

    pub fn is_lval(&self) -> bool {
        self.location.is_some()
    }

    pub fn try_lval(&self) -> ValueResult<I::Value> {
        self.location.ok_or(ValueError::NoLocation {
            kind: ValueKind::Paired,
        })
    }

    pub fn try_rval(&self) -> ValueResult<I::Value> {
        self.value.ok_or(ValueError::NoRvalue {
            kind: ValueKind::Paired,
        })
    }
}

impl<T: TypeSystem, I: Ir> Clone for PairedValue<'_, T, I> {
    fn clone(&self) -> Self {
        PairedValue {
            location_ty: self.location_ty,
            location: self.location,
            value_ty: self.value_ty,
            value: self.value,
        }
    }
}

impl<T: TypeSystem, I: Ir> fmt::Debug for PairedValue<'_, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairedValue")
            .field("location_ty", &self.location_ty)
            .field("location", &self.location)
            .field("value_ty", &self.value_ty)
            .field("value", &self.value)
            .finish()
    }
}
