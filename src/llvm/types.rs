//! LLVM handle types

use std::marker::PhantomData;

use inkwell::types::BasicTypeEnum;
use inkwell::values::BasicValueEnum;

use crate::backend::{Ir, TypeSystem};
use crate::constant::ConstantValue;

/// inkwell handles living in a context `'ctx`.
///
/// inkwell has no separate constant handle; constants are ordinary
/// `BasicValueEnum`s for which `is_const` holds.
#[derive(Debug, Clone, Copy)]
pub struct Llvm<'ctx> {
    _context: PhantomData<&'ctx ()>,
}

impl<'ctx> Ir for Llvm<'ctx> {
    type Value = BasicValueEnum<'ctx>;
    type Constant = BasicValueEnum<'ctx>;

    fn constant_to_value(constant: BasicValueEnum<'ctx>) -> BasicValueEnum<'ctx> {
        constant
    }
}

/// The null constant of `ty`, whose IR type is `ir_ty`.
pub fn null_constant<'a, 'ctx, T: TypeSystem>(
    ty: &'a T::Type,
    ir_ty: BasicTypeEnum<'ctx>,
) -> ConstantValue<'a, T, Llvm<'ctx>> {
    ConstantValue::null(ty, ir_ty.const_zero())
}
