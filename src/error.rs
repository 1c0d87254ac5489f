use thiserror::Error;

use crate::value::ValueKind;

/// Misuse of a compiled value by the surrounding code generator.
///
/// Every variant is a precondition violation: the plain accessors
/// (`lval`, `rval`) panic with this message, the `try_` forms hand it back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("{kind} value has no addressable location")]
    NoLocation { kind: ValueKind },

    #[error("{kind} value has no rvalue")]
    NoRvalue { kind: ValueKind },

    #[error("failed to load {kind} value from its location: {message}")]
    Load { kind: ValueKind, message: String },
}

impl ValueError {
    pub fn kind(&self) -> ValueKind {
        match self {
            ValueError::NoLocation { kind } => *kind,
            ValueError::NoRvalue { kind } => *kind,
            ValueError::Load { kind, .. } => *kind,
        }
    }

    /// Abort code generation. Used by the panicking accessors.
    #[track_caller]
    pub(crate) fn violated(self) -> ! {
        log::debug!("compiled value precondition violated: {}", self);
        panic!("{}", self)
    }
}

pub type ValueResult<T> = Result<T, ValueError>;
