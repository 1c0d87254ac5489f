//! A toy type system and IR for unit tests

use std::cell::Cell;

use thiserror::Error;

use crate::backend::{Ir, IrBuilder, TypeSystem};

#[derive(Debug, PartialEq)]
pub struct Ty {
    pub name: &'static str,
    pub by_ref: bool,
}

impl Ty {
    pub fn scalar(name: &'static str) -> Self {
        Ty {
            name,
            by_ref: false,
        }
    }

    pub fn by_ref(name: &'static str) -> Self {
        Ty { name, by_ref: true }
    }
}

#[derive(Debug)]
pub struct Decl {
    pub name: &'static str,
    pub ty: Ty,
}

impl Decl {
    pub fn new(name: &'static str, ty: Ty) -> Self {
        Decl { name, ty }
    }
}

pub struct Sem;

impl TypeSystem for Sem {
    type Type = Ty;
    type VarDecl = Decl;
    type FuncDecl = Decl;

    fn var_type(decl: &Decl) -> &Ty {
        &decl.ty
    }

    fn func_type(decl: &Decl) -> &Ty {
        &decl.ty
    }

    fn passed_by_ref(ty: &Ty) -> bool {
        ty.by_ref
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Handle {
    Reg(u32),
    Const(u32),
    Loaded(u32),
}

pub struct Toy;

impl Ir for Toy {
    type Value = Handle;
    type Constant = u32;

    fn constant_to_value(constant: u32) -> Handle {
        Handle::Const(constant)
    }
}

#[derive(Debug, Error)]
#[error("{0:?} is not an address")]
pub struct NotAnAddress(Handle);

/// Loads from `Reg(n)` yield `Loaded(n)`; every call is counted.
pub struct CountingBuilder {
    loads: Cell<usize>,
}

impl CountingBuilder {
    pub fn new() -> Self {
        CountingBuilder {
            loads: Cell::new(0),
        }
    }

    pub fn loads(&self) -> usize {
        self.loads.get()
    }
}

impl IrBuilder<Sem, Toy> for CountingBuilder {
    type Error = NotAnAddress;

    fn load(&self, _ty: &Ty, location: Handle) -> Result<Handle, NotAnAddress> {
        self.loads.set(self.loads.get() + 1);
        match location {
            Handle::Reg(n) => Ok(Handle::Loaded(n)),
            other => Err(NotAnAddress(other)),
        }
    }
}
