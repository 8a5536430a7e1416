//! The indirect-access seam for M variables.
//!
//! M variables never address shared memory directly. The resolver selects an
//! entry of the pointer-definition table and hands it, together with a
//! caller-owned scratch token, to the runtime's indirect read/write
//! primitives. Everything behind that seam (decoding the definition,
//! touching the bus, failure behavior) belongs to the runtime; this module
//! only defines the seam and a host-side stand-in for it.

use log::trace;
use serde::{Deserialize, Serialize};

/// One pointer-definition table entry.
///
/// The firmware decodes a full definition (address, width, format); the
/// resolver never looks inside one, so the host-side model keeps just the
/// resolved bus address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PtrDef {
    /// Word address on the backing bus.
    pub target: usize,
}

/// Scratch state threaded through indirect accesses.
///
/// The runtime's primitives memoize decoding work for the last definition
/// they touched. Callers own their token and pass it by reference on every
/// call; nothing in this layer holds one globally.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct PtrCache {
    last_target: Option<usize>,
}

impl PtrCache {
    pub const fn new() -> Self {
        Self { last_target: None }
    }

    /// Bus address of the most recent indirect access, if any.
    pub const fn last_target(&self) -> Option<usize> {
        self.last_target
    }

    /// Called by the [`IndirectIo`] implementor on every dereference.
    pub fn record(&mut self, target: usize) {
        self.last_target = Some(target);
    }
}

/// The runtime's indirect read/write primitives.
///
/// The resolver computes which definition to hand over and forwards the
/// caller's cache token; the implementor does the dereference. Failure
/// behavior behind this seam is the implementor's.
pub trait IndirectIo {
    fn read(&mut self, def: &PtrDef, cache: &mut PtrCache) -> f64;
    fn write(&mut self, def: &PtrDef, value: f64, cache: &mut PtrCache);
}

/// Word-addressed in-memory register file standing in for memory-mapped
/// hardware during host-side testing. Definition targets reduce modulo the
/// bus length.
pub struct MappedBus {
    words: Box<[f64]>,
}

impl MappedBus {
    /// `len` must be nonzero.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "MappedBus needs at least one word");
        Self {
            words: vec![0.0; len].into_boxed_slice(),
        }
    }

    /// Direct peek at a bus word, for assertions.
    pub fn word(&self, at: usize) -> f64 {
        self.words[at % self.words.len()]
    }
}

impl IndirectIo for MappedBus {
    fn read(&mut self, def: &PtrDef, cache: &mut PtrCache) -> f64 {
        let at = def.target % self.words.len();
        cache.record(def.target);
        let value = self.words[at];
        trace!("im_read  [{at}] -> {value}");
        value
    }

    fn write(&mut self, def: &PtrDef, value: f64, cache: &mut PtrCache) {
        let at = def.target % self.words.len();
        cache.record(def.target);
        trace!("im_write [{at}] <- {value}");
        self.words[at] = value;
    }
}
