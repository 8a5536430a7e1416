//! Typed variable handles, the enum-mode binding currency.
//!
//! [`shm_vars!`](crate::shm_vars) declares one `const` handle per project
//! variable. Each table kind has its own scalar and array handle type, and
//! each accessor only accepts its own type, so handing a coordinate-scoped
//! name to a global accessor (or an array name to a scalar accessor) fails
//! to compile. That check is the entire point of enum mode; script and raw
//! mode trade it away for direct substitution.
//!
//! Handles are plain slot numbers at run time; the types exist only to carry
//! the namespace through the compiler.

use serde::{Deserialize, Serialize};
use static_assertions::assert_eq_size;

/// Scalar global ("P") variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PVar(usize);

impl PVar {
    pub const fn new(base: usize) -> Self {
        Self(base)
    }

    pub const fn base(self) -> usize {
        self.0
    }
}

/// Global ("P") array variable: base slot plus declared arity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PArray {
    base: usize,
    arity: usize,
}

impl PArray {
    pub const fn new(base: usize, arity: usize) -> Self {
        Self { base, arity }
    }

    pub const fn base(self) -> usize {
        self.base
    }

    /// Declared element count. Advisory only: indexing past it wraps modulo
    /// the table capacity instead of failing.
    pub const fn arity(self) -> usize {
        self.arity
    }
}

/// Scalar coordinate-scoped ("Q") variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QVar(usize);

impl QVar {
    pub const fn new(base: usize) -> Self {
        Self(base)
    }

    pub const fn base(self) -> usize {
        self.0
    }
}

/// Coordinate-scoped ("Q") array variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QArray {
    base: usize,
    arity: usize,
}

impl QArray {
    pub const fn new(base: usize, arity: usize) -> Self {
        Self { base, arity }
    }

    pub const fn base(self) -> usize {
        self.base
    }

    /// Declared element count, advisory only.
    pub const fn arity(self) -> usize {
        self.arity
    }
}

/// Scalar indirect ("M") variable, a slot in the pointer-definition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MVar(usize);

impl MVar {
    pub const fn new(base: usize) -> Self {
        Self(base)
    }

    pub const fn base(self) -> usize {
        self.0
    }
}

/// Indirect ("M") array variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MArray {
    base: usize,
    arity: usize,
}

impl MArray {
    pub const fn new(base: usize, arity: usize) -> Self {
        Self { base, arity }
    }

    pub const fn base(self) -> usize {
        self.base
    }

    /// Declared element count, advisory only.
    pub const fn arity(self) -> usize {
        self.arity
    }
}

// Scalar handles must not cost more than the raw slot number they replace.
assert_eq_size!(PVar, usize);
assert_eq_size!(QVar, usize);
assert_eq_size!(MVar, usize);
