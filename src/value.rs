//! What an expression evaluates to once lowered
//!
//! Every expression the code generator lowers produces a `CompiledValue`.
//! Later lowering steps take it as an operand and ask it for its location
//! (`lval`) or its loaded value (`rval`) without knowing up front which kind
//! of value they were handed. When they do need to know, they narrow with
//! the `as_*` accessors, which hand back the concrete record only when the
//! kind matches.
//!
//! `CompiledValue` is deliberately not `Clone`: it is passed along by value
//! or by reference, never duplicated behind the generator's back. The
//! concrete records are `Clone` for owners that really want a copy.

use std::fmt;

use crate::aggregate::{ComplexValue, PairedValue, SliceValue};
use crate::backend::{Ir, IrBuilder, TypeSystem};
use crate::callable::CallableValue;
use crate::constant::{ConstantValue, ImmediateValue};
use crate::error::{ValueError, ValueResult};
use crate::variable::VariableValue;

/// The fully specialised kind of a compiled value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Immediate,
    Constant,
    Null,
    Variable,
    Field,
    This,
    Slice,
    Callable,
    Paired,
    Complex,
}

impl ValueKind {
    pub const ALL: [ValueKind; 10] = [
        ValueKind::Immediate,
        ValueKind::Constant,
        ValueKind::Null,
        ValueKind::Variable,
        ValueKind::Field,
        ValueKind::This,
        ValueKind::Slice,
        ValueKind::Callable,
        ValueKind::Paired,
        ValueKind::Complex,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Immediate => "immediate",
            ValueKind::Constant => "constant",
            ValueKind::Null => "null",
            ValueKind::Variable => "variable",
            ValueKind::Field => "field",
            ValueKind::This => "this",
            ValueKind::Slice => "slice",
            ValueKind::Callable => "callable",
            ValueKind::Paired => "paired",
            ValueKind::Complex => "complex",
        }
    }

    /// Null is a constant, field and this are variables.
    pub fn is_a(self, other: ValueKind) -> bool {
        self == other
            || matches!(
                (self, other),
                (ValueKind::Null, ValueKind::Constant)
                    | (ValueKind::Field, ValueKind::Variable)
                    | (ValueKind::This, ValueKind::Variable)
            )
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lowered expression.
pub enum CompiledValue<'a, T: TypeSystem, I: Ir> {
    Immediate(ImmediateValue<'a, T, I>),
    Constant(ConstantValue<'a, T, I>),
    Variable(VariableValue<'a, T, I>),
    Slice(SliceValue<'a, T, I>),
    Callable(CallableValue<'a, T, I>),
    Paired(PairedValue<'a, T, I>),
    Complex(ComplexValue<'a, T, I>),
}

impl<'a, T: TypeSystem, I: Ir> CompiledValue<'a, T, I> {
    /// Semantic type. For paired values this is the value-side type.
    pub fn ty(&self) -> &'a T::Type {
        match self {
            CompiledValue::Immediate(v) => v.ty(),
            CompiledValue::Constant(v) => v.ty(),
            CompiledValue::Variable(v) => v.ty(),
            CompiledValue::Slice(v) => v.ty(),
            CompiledValue::Callable(v) => v.ty(),
            CompiledValue::Paired(v) => v.ty(),
            CompiledValue::Complex(v) => v.ty(),
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            CompiledValue::Immediate(_) => ValueKind::Immediate,
            CompiledValue::Constant(v) => v.kind(),
            CompiledValue::Variable(v) => v.kind(),
            CompiledValue::Slice(_) => ValueKind::Slice,
            CompiledValue::Callable(_) => ValueKind::Callable,
            CompiledValue::Paired(_) => ValueKind::Paired,
            CompiledValue::Complex(_) => ValueKind::Complex,
        }
    }

    /// Whether the value currently has an eligible, addressable location.
    pub fn is_lval(&self) -> bool {
        match self {
            CompiledValue::Variable(v) => v.is_lval(),
            CompiledValue::Paired(v) => v.is_lval(),
            _ => false,
        }
    }

    /// True for an immediate already materialized in its destination.
    pub fn in_place(&self) -> bool {
        match self {
            CompiledValue::Immediate(v) => v.in_place(),
            _ => false,
        }
    }

    pub fn try_lval(&self) -> ValueResult<I::Value> {
        match self {
            CompiledValue::Variable(v) => v.try_lval(),
            CompiledValue::Paired(v) => v.try_lval(),
            _ => Err(ValueError::NoLocation { kind: self.kind() }),
        }
    }

    /// The addressable location.
    ///
    /// # Panics
    ///
    /// If the value has no location.
    #[track_caller]
    pub fn lval(&self) -> I::Value {
        match self.try_lval() {
            Ok(location) => location,
            Err(e) => e.violated(),
        }
    }

    /// The loaded or immediate value. Variables without a cached value
    /// load it through `builder` once.
    pub fn try_rval<B>(&self, builder: &B) -> ValueResult<I::Value>
    where
        B: IrBuilder<T, I> + ?Sized,
    {
        match self {
            CompiledValue::Immediate(v) => Ok(v.value()),
            CompiledValue::Constant(v) => Ok(v.value()),
            CompiledValue::Variable(v) => v.try_rval(builder),
            CompiledValue::Callable(v) => Ok(v.code()),
            CompiledValue::Paired(v) => v.try_rval(),
            CompiledValue::Slice(_) | CompiledValue::Complex(_) => {
                Err(ValueError::NoRvalue { kind: self.kind() })
            }
        }
    }

    /// # Panics
    ///
    /// If the value has no rvalue (slices, complex numbers, paired values
    /// built without one) or the load fails.
    #[track_caller]
    pub fn rval<B>(&self, builder: &B) -> I::Value
    where
        B: IrBuilder<T, I> + ?Sized,
    {
        match self.try_rval(builder) {
            Ok(value) => value,
            Err(e) => e.violated(),
        }
    }

    pub fn as_immediate(&self) -> Option<&ImmediateValue<'a, T, I>> {
        match self {
            CompiledValue::Immediate(v) => Some(v),
            _ => None,
        }
    }

    /// Also matches null constants.
    pub fn as_constant(&self) -> Option<&ConstantValue<'a, T, I>> {
        match self {
            CompiledValue::Constant(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_null(&self) -> Option<&ConstantValue<'a, T, I>> {
        self.as_constant().filter(|v| v.is_null())
    }

    /// Also matches fields and the receiver.
    pub fn as_variable(&self) -> Option<&VariableValue<'a, T, I>> {
        match self {
            CompiledValue::Variable(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_field(&self) -> Option<&VariableValue<'a, T, I>> {
        self.as_variable().filter(|v| v.is_field())
    }

    pub fn as_this(&self) -> Option<&VariableValue<'a, T, I>> {
        self.as_variable().filter(|v| v.is_this())
    }

    pub fn as_slice(&self) -> Option<&SliceValue<'a, T, I>> {
        match self {
            CompiledValue::Slice(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_callable(&self) -> Option<&CallableValue<'a, T, I>> {
        match self {
            CompiledValue::Callable(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<&ComplexValue<'a, T, I>> {
        match self {
            CompiledValue::Complex(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_paired(&self) -> Option<&PairedValue<'a, T, I>> {
        match self {
            CompiledValue::Paired(v) => Some(v),
            _ => None,
        }
    }

    /// Whether the narrowing accessor for `kind` succeeds on this value.
    pub fn narrows_to(&self, kind: ValueKind) -> bool {
        match kind {
            ValueKind::Immediate => self.as_immediate().is_some(),
            ValueKind::Constant => self.as_constant().is_some(),
            ValueKind::Null => self.as_null().is_some(),
            ValueKind::Variable => self.as_variable().is_some(),
            ValueKind::Field => self.as_field().is_some(),
            ValueKind::This => self.as_this().is_some(),
            ValueKind::Slice => self.as_slice().is_some(),
            ValueKind::Callable => self.as_callable().is_some(),
            ValueKind::Paired => self.as_paired().is_some(),
            ValueKind::Complex => self.as_complex().is_some(),
        }
    }
}

impl<T: TypeSystem, I: Ir> fmt::Debug for CompiledValue<'_, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompiledValue::Immediate(v) => fmt::Debug::fmt(v, f),
            CompiledValue::Constant(v) => fmt::Debug::fmt(v, f),
            CompiledValue::Variable(v) => fmt::Debug::fmt(v, f),
            CompiledValue::Slice(v) => fmt::Debug::fmt(v, f),
            CompiledValue::Callable(v) => fmt::Debug::fmt(v, f),
            CompiledValue::Paired(v) => fmt::Debug::fmt(v, f),
            CompiledValue::Complex(v) => fmt::Debug::fmt(v, f),
        }
    }
}

impl<'a, T: TypeSystem, I: Ir> From<ImmediateValue<'a, T, I>> for CompiledValue<'a, T, I> {
    fn from(v: ImmediateValue<'a, T, I>) -> Self {
        CompiledValue::Immediate(v)
    }
}

impl<'a, T: TypeSystem, I: Ir> From<ConstantValue<'a, T, I>> for CompiledValue<'a, T, I> {
    fn from(v: ConstantValue<'a, T, I>) -> Self {
        CompiledValue::Constant(v)
    }
}

impl<'a, T: TypeSystem, I: Ir> From<VariableValue<'a, T, I>> for CompiledValue<'a, T, I> {
    fn from(v: VariableValue<'a, T, I>) -> Self {
        CompiledValue::Variable(v)
    }
}

impl<'a, T: TypeSystem, I: Ir> From<SliceValue<'a, T, I>> for CompiledValue<'a, T, I> {
    fn from(v: SliceValue<'a, T, I>) -> Self {
        CompiledValue::Slice(v)
    }
}

impl<'a, T: TypeSystem, I: Ir> From<CallableValue<'a, T, I>> for CompiledValue<'a, T, I> {
    fn from(v: CallableValue<'a, T, I>) -> Self {
        CompiledValue::Callable(v)
    }
}

impl<'a, T: TypeSystem, I: Ir> From<PairedValue<'a, T, I>> for CompiledValue<'a, T, I> {
    fn from(v: PairedValue<'a, T, I>) -> Self {
        CompiledValue::Paired(v)
    }
}

impl<'a, T: TypeSystem, I: Ir> From<ComplexValue<'a, T, I>> for CompiledValue<'a, T, I> {
    fn from(v: ComplexValue<'a, T, I>) -> Self {
        CompiledValue::Complex(v)
    }
}
