//! Symbolic addressing for a motion controller's shared-memory variable
//! tables.
//!
//! Application code on the controller reaches its shared memory through three
//! kinds of variables:
//!
//! - **P** variables: one flat, global table of `f64` registers,
//! - **Q** variables: one register bank per coordinate system,
//! - **M** variables: pointer-style entries dereferenced through the
//!   runtime's indirect read/write primitives.
//!
//! Projects refer to specific slots by symbolic name. The [`shm_vars!`]
//! macro fixes the name-to-slot bindings at compile time; nothing is looked
//! up at run time, and an unbound name simply fails to compile.
//!
//! Three Cargo features choose the binding strategy, mirroring the three
//! preprocessor modes of the generated C header this crate replaces:
//!
//! | feature           | binding                                                        |
//! |-------------------|----------------------------------------------------------------|
//! | `script-mode`     | each name becomes a macro expanding to the table-cell place    |
//! | `enum-mode`       | each name becomes a typed handle; accessors are typed per kind |
//! | `raw-mode` / none | each name becomes a bare `usize` slot constant                 |
//!
//! When several are enabled, the strongest one wins: `script-mode` overrides
//! `enum-mode`, which overrides raw. `enum-mode` is the package default; it
//! is the only strategy that turns cross-namespace misuse (a coordinate name
//! handed to a global accessor, say) into a build error.
//!
//! All array indexing wraps modulo the owning table's capacity. An
//! out-of-range index silently aliases a valid slot instead of faulting;
//! a controller mid-motion must never fault on a misconfigured index, so
//! every address computation here is total.
//!
#![cfg_attr(all(feature = "enum-mode", not(feature = "script-mode")), doc = " ```")]
#![cfg_attr(
    not(all(feature = "enum-mode", not(feature = "script-mode"))),
    doc = " ```ignore"
)]
//! use shmvar::{shm_vars, SharedMem};
//!
//! shm_vars! {
//!     global EncPos = 8216;
//!     global Harmonics[37] = 8192;
//! }
//!
//! fn main() {
//!     let mut shm = SharedMem::<16384, 64, 64, 4>::new();
//!     shm.set_global(EncPos, 2.5);
//!     assert_eq!(shm.get_global(EncPos), 2.5);
//!
//!     // Indexing past the declared arity is not an error; the effective
//!     // slot is (base + index) mod capacity.
//!     shm.set_global_array(Harmonics, 40, 1.0);
//!     assert_eq!(shm.get_global_array(Harmonics, 40), 1.0);
//!     assert_eq!(shm.p[8232], 1.0);
//! }
//! ```

mod access;
mod declare;
mod indirect;
mod shm;
mod vars;

pub use indirect::{IndirectIo, MappedBus, PtrCache, PtrDef};
pub use shm::{CoordSys, DefaultShm, SharedMem, MAX_COORDS, MAX_M, MAX_P, MAX_Q};
pub use vars::{MArray, MVar, PArray, PVar, QArray, QVar};
