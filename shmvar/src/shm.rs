use static_assertions::const_assert;

use crate::indirect::PtrDef;

/// Capacity of the firmware's global P table.
pub const MAX_P: usize = 65536;
/// Q registers per coordinate system.
pub const MAX_Q: usize = 8192;
/// Entries in the pointer-definition table.
pub const MAX_M: usize = 65536;
/// Number of coordinate systems.
pub const MAX_COORDS: usize = 128;

const_assert!(MAX_P > 0);
const_assert!(MAX_Q > 0);
const_assert!(MAX_M > 0);
const_assert!(MAX_COORDS > 0);

/// One coordinate system's register bank.
pub struct CoordSys {
    /// Q registers, zero-initialized. Length is the owning table's Q capacity.
    pub q: Box<[f64]>,
}

/// Host-side model of the controller's shared-memory variable tables.
///
/// Capacities are const generics so tests and host tooling can work with
/// small tables; [`DefaultShm`] matches the firmware layout. The addressing
/// layer only ever indexes into these tables. It never allocates, resizes or
/// reinterprets them; layout belongs to the runtime that owns the real
/// shared memory.
///
/// Every slot computation reduces modulo the owning table's capacity, so no
/// accessor can index out of range: a bad slot aliases a valid one instead
/// of faulting. A controller mid-motion must not fault on a misconfigured
/// index, so the reduction is unconditional rather than an error path.
pub struct SharedMem<const P: usize, const Q: usize, const M: usize, const C: usize> {
    /// Global P registers.
    pub p: Box<[f64]>,
    /// Per-coordinate-system Q banks, one per coordinate system.
    pub coord: Box<[CoordSys]>,
    /// Pointer-definition table for M variables. Dereferenced only through
    /// the runtime's indirect primitives, never read as data.
    pub mdef: Box<[PtrDef]>,
}

impl<const P: usize, const Q: usize, const M: usize, const C: usize> SharedMem<P, Q, M, C> {
    /// Zero-initialized tables.
    pub fn new() -> Self {
        Self {
            p: vec![0.0; P].into_boxed_slice(),
            coord: (0..C)
                .map(|_| CoordSys {
                    q: vec![0.0; Q].into_boxed_slice(),
                })
                .collect(),
            mdef: vec![PtrDef::default(); M].into_boxed_slice(),
        }
    }

    pub const fn max_p(&self) -> usize {
        P
    }

    pub const fn max_q(&self) -> usize {
        Q
    }

    pub const fn max_m(&self) -> usize {
        M
    }

    pub const fn max_coords(&self) -> usize {
        C
    }
}

impl<const P: usize, const Q: usize, const M: usize, const C: usize> Default
    for SharedMem<P, Q, M, C>
{
    fn default() -> Self {
        Self::new()
    }
}

/// The firmware's table layout.
pub type DefaultShm = SharedMem<MAX_P, MAX_Q, MAX_M, MAX_COORDS>;
