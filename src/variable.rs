//! Values backed by memory: variables, aggregate fields and the receiver

use std::cell::Cell;
use std::fmt;

use crate::backend::{Ir, IrBuilder, TypeSystem};
use crate::error::{ValueError, ValueResult};
use crate::value::ValueKind;

/// Which flavour of memory-backed value this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Storage {
    Variable,
    Field,
    This,
}

/// A memory location plus its loaded value, computed on first use.
///
/// The location is optional: a variable built from an already loaded
/// value may have nowhere to point. `is_lval` needs both a location and
/// the eligibility flag; `lval` only needs the location.
pub struct VariableValue<'a, T: TypeSystem, I: Ir> {
    ty: &'a T::Type,
    decl: Option<&'a T::VarDecl>,
    location: Option<I::Value>,
    rval: Cell<Option<I::Value>>,
    lvalue: bool,
    storage: Storage,
}

impl<'a, T: TypeSystem, I: Ir> VariableValue<'a, T, I> {
    fn build(
        ty: &'a T::Type,
        decl: Option<&'a T::VarDecl>,
        location: Option<I::Value>,
        rval: Option<I::Value>,
        lvalue: bool,
        storage: Storage,
    ) -> Self {
        VariableValue {
            ty,
            decl,
            location,
            rval: Cell::new(rval),
            lvalue,
            storage,
        }
    }

    /// A declared variable living at `location`. The type comes from the
    /// declaration.
    pub fn from_decl(decl: &'a T::VarDecl, location: I::Value, lvalue: bool) -> Self {
        Self::build(
            T::var_type(decl),
            Some(decl),
            Some(location),
            None,
            lvalue,
            Storage::Variable,
        )
    }

    /// Location and loaded value are both known up front; no load is ever
    /// emitted for this value.
    pub fn with_rval(ty: &'a T::Type, location: Option<I::Value>, rval: I::Value) -> Self {
        Self::build(ty, None, location, Some(rval), true, Storage::Variable)
    }

    pub fn new(ty: &'a T::Type, location: I::Value, lvalue: bool) -> Self {
        Self::build(ty, None, Some(location), None, lvalue, Storage::Variable)
    }

    /// A field of an aggregate, addressed by `location`.
    pub fn field(ty: &'a T::Type, location: I::Value, lvalue: bool) -> Self {
        Self::build(ty, None, Some(location), None, lvalue, Storage::Field)
    }

    /// The implicit receiver. Always addressable.
    pub fn this(decl: &'a T::VarDecl, location: I::Value) -> Self {
        Self::build(
            T::var_type(decl),
            Some(decl),
            Some(location),
            None,
            true,
            Storage::This,
        )
    }

    /// Override lvalue eligibility. The receiver stays addressable.
    pub fn with_lvalue(mut self, lvalue: bool) -> Self {
        self.lvalue = lvalue || self.storage == Storage::This;
        self
    }

    pub fn ty(&self) -> &'a T::Type {
        self.ty
    }

    pub fn decl(&self) -> Option<&'a T::VarDecl> {
        self.decl
    }

    pub fn location(&self) -> Option<I::Value> {
        self.location
    }

    pub fn kind(&self) -> ValueKind {
        match self.storage {
            Storage::Variable => ValueKind::Variable,
            Storage::Field => ValueKind::Field,
            Storage::This => ValueKind::This,
        }
    }

    pub fn is_field(&self) -> bool {
        self.storage == Storage::Field
    }

    pub fn is_this(&self) -> bool {
        self.storage == Storage::This
    }

    pub fn is_lval(&self) -> bool {
        self.location.is_some() && self.lvalue
    }

    /// Whether the loaded value is already known.
    pub fn is_loaded(&self) -> bool {
        self.rval.get().is_some()
    }

    pub fn try_lval(&self) -> ValueResult<I::Value> {
        self.location
            .ok_or_else(|| ValueError::NoLocation { kind: self.kind() })
    }

    /// The loaded value. The first call without a supplied value emits a
    /// single load through `builder`; later calls reuse it.
    pub fn try_rval<B>(&self, builder: &B) -> ValueResult<I::Value>
    where
        B: IrBuilder<T, I> + ?Sized,
    {
        if let Some(rval) = self.rval.get() {
            return Ok(rval);
        }

        let location = self
            .location
            .ok_or_else(|| ValueError::NoRvalue { kind: self.kind() })?;

        let rval = if T::passed_by_ref(self.ty) {
            log::trace!("{} value of type {:?} used by reference", self.kind(), self.ty);
            location
        } else {
            log::trace!("loading {} value of type {:?}", self.kind(), self.ty);
            builder
                .load(self.ty, location)
                .map_err(|e| ValueError::Load {
                    kind: self.kind(),
                    message: e.to_string(),
                })?
        };

        self.rval.set(Some(rval));
        Ok(rval)
    }
}

impl<T: TypeSystem, I: Ir> Clone for VariableValue<'_, T, I> {
    fn clone(&self) -> Self {
        VariableValue {
            ty: self.ty,
            decl: self.decl,
            location: self.location,
            rval: Cell::new(self.rval.get()),
            lvalue: self.lvalue,
            storage: self.storage,
        }
    }
}

impl<T: TypeSystem, I: Ir> fmt::Debug for VariableValue<'_, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariableValue")
            .field("kind", &self.kind())
            .field("ty", &self.ty)
            .field("decl", &self.decl)
            .field("location", &self.location)
            .field("rval", &self.rval.get())
            .field("lvalue", &self.lvalue)
            .finish()
    }
}
