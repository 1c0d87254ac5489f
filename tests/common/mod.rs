//! Shared fixtures: a small type system and an IR that only counts loads.

#![allow(dead_code)]

use std::cell::RefCell;

use compiled_value::{CompiledValue, Ir, IrBuilder, TypeSystem};

#[derive(Debug, PartialEq)]
pub enum Type {
    Int,
    Double,
    Pointer(Box<Type>),
    Struct(&'static str),
    Function,
}

#[derive(Debug)]
pub struct VarDecl {
    pub name: &'static str,
    pub ty: Type,
}

#[derive(Debug)]
pub struct FuncDecl {
    pub name: &'static str,
    pub ty: Type,
    pub is_static: bool,
}

pub struct Front;

impl TypeSystem for Front {
    type Type = Type;
    type VarDecl = VarDecl;
    type FuncDecl = FuncDecl;

    fn var_type(decl: &VarDecl) -> &Type {
        &decl.ty
    }

    fn func_type(decl: &FuncDecl) -> &Type {
        &decl.ty
    }

    fn passed_by_ref(ty: &Type) -> bool {
        matches!(ty, Type::Struct(_))
    }
}

/// An IR value: either a numbered register or the result of the n-th load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reg {
    Arg(u32),
    Alloca(u32),
    Const(i64),
    Load(usize),
}

pub struct FakeIr;

impl Ir for FakeIr {
    type Value = Reg;
    type Constant = i64;

    fn constant_to_value(constant: i64) -> Reg {
        Reg::Const(constant)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("cannot load from {0:?}")]
pub struct BadLoad(pub Reg);

/// Records every load it is asked to emit.
#[derive(Default)]
pub struct LoadRecorder {
    loads: RefCell<Vec<Reg>>,
}

impl LoadRecorder {
    pub fn count(&self) -> usize {
        self.loads.borrow().len()
    }

    pub fn loaded_from(&self) -> Vec<Reg> {
        self.loads.borrow().clone()
    }
}

impl IrBuilder<Front, FakeIr> for LoadRecorder {
    type Error = BadLoad;

    fn load(&self, _ty: &Type, location: Reg) -> Result<Reg, BadLoad> {
        match location {
            Reg::Alloca(_) | Reg::Arg(_) => {
                let mut loads = self.loads.borrow_mut();
                loads.push(location);
                Ok(Reg::Load(loads.len() - 1))
            }
            other => Err(BadLoad(other)),
        }
    }
}

pub type Value<'a> = CompiledValue<'a, Front, FakeIr>;
