use std::fmt;

use crate::backend::{Ir, TypeSystem};

/// A function or method reference, with the receiver it is bound to when
/// it is a non-static method.
pub struct CallableValue<'a, T: TypeSystem, I: Ir> {
    ty: &'a T::Type,
    decl: &'a T::FuncDecl,
    code: I::Value,
    receiver: Option<I::Value>,
}

impl<'a, T: TypeSystem, I: Ir> CallableValue<'a, T, I> {
    pub fn new(decl: &'a T::FuncDecl, code: I::Value, receiver: Option<I::Value>) -> Self {
        CallableValue {
            ty: T::func_type(decl),
            decl,
            code,
            receiver,
        }
    }

    pub fn ty(&self) -> &'a T::Type {
        self.ty
    }

    pub fn decl(&self) -> &'a T::FuncDecl {
        self.decl
    }

    pub fn code(&self) -> I::Value {
        self.code
    }

    pub fn receiver(&self) -> Option<I::Value> {
        self.receiver
    }
}

impl<T: TypeSystem, I: Ir> Clone for CallableValue<'_, T, I> {
    fn clone(&self) -> Self {
        CallableValue {
            ty: self.ty,
            decl: self.decl,
            code: self.code,
            receiver: self.receiver,
        }
    }
}

impl<T: TypeSystem, I: Ir> fmt::Debug for CallableValue<'_, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallableValue")
            .field("ty", &self.ty)
            .field("decl", &self.decl)
            .field("code", &self.code)
            .field("receiver", &self.receiver)
            .finish()
    }
}
