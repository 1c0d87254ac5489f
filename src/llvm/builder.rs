//! Loads through an inkwell builder

use inkwell::builder::{Builder, BuilderError};
use inkwell::types::{AnyType, BasicTypeEnum};
use inkwell::values::BasicValueEnum;
use thiserror::Error;

use crate::backend::{IrBuilder, TypeSystem};

use super::types::Llvm;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("location of type {0} is not a pointer")]
    NotAPointer(String),

    #[error(transparent)]
    Builder(#[from] BuilderError),
}

/// Emits variable loads at the builder's current position.
///
/// `lower` maps a semantic type to the IR type that gets loaded, since
/// opaque pointers carry no pointee type.
pub struct LlvmBuilder<'b, 'ctx, F> {
    builder: &'b Builder<'ctx>,
    lower: F,
}

impl<'b, 'ctx, F> LlvmBuilder<'b, 'ctx, F> {
    pub fn new(builder: &'b Builder<'ctx>, lower: F) -> Self {
        LlvmBuilder { builder, lower }
    }

    pub fn builder(&self) -> &'b Builder<'ctx> {
        self.builder
    }
}

impl<'b, 'ctx, T, F> IrBuilder<T, Llvm<'ctx>> for LlvmBuilder<'b, 'ctx, F>
where
    T: TypeSystem,
    F: Fn(&T::Type) -> BasicTypeEnum<'ctx>,
{
    type Error = LoadError;

    fn load(
        &self,
        ty: &T::Type,
        location: BasicValueEnum<'ctx>,
    ) -> Result<BasicValueEnum<'ctx>, LoadError> {
        if !location.is_pointer_value() {
            return Err(LoadError::NotAPointer(
                location.get_type().print_to_string().to_string(),
            ));
        }

        let pointee = (self.lower)(ty);
        let loaded = self
            .builder
            .build_load(pointee, location.into_pointer_value(), "load")?;
        Ok(loaded)
    }
}
