//! Mode-selected accessor surface.
//!
//! Enum mode carries the typed accessors. Script mode keeps the same twelve
//! entry points with untyped slots, because code written against the
//! accessor API must still build when a project flips modes (the generated C
//! header keeps its accessor functions in script mode for the same reason).
//! Raw mode has no accessors at all; callers index the public tables
//! themselves.
//!
//! Scalar bases reduce modulo capacity exactly like array indices do, so no
//! accessor has a panic path; see the module notes on [`SharedMem`].

#[cfg(any(feature = "enum-mode", feature = "script-mode"))]
use crate::indirect::{IndirectIo, PtrCache};
#[cfg(any(feature = "enum-mode", feature = "script-mode"))]
use crate::shm::SharedMem;
#[cfg(all(feature = "enum-mode", not(feature = "script-mode")))]
use crate::vars::{MArray, MVar, PArray, PVar, QArray, QVar};

#[cfg(all(feature = "enum-mode", not(feature = "script-mode")))]
impl<const P: usize, const Q: usize, const M: usize, const C: usize> SharedMem<P, Q, M, C> {
    /// Reads a scalar global variable.
    ///
    /// Only global handles fit; a coordinate-scoped name is rejected at
    /// build time:
    ///
    /// ```compile_fail
    /// use shmvar::{shm_vars, SharedMem};
    ///
    /// shm_vars! { coord CsHomePos = 10; }
    ///
    /// fn main() {
    ///     let shm = SharedMem::<64, 64, 64, 4>::new();
    ///     shm.get_global(CsHomePos); // QVar where PVar is expected
    /// }
    /// ```
    #[inline]
    pub fn get_global(&self, var: PVar) -> f64 {
        self.p[var.base() % P]
    }

    /// Writes a scalar global variable.
    ///
    /// ```compile_fail
    /// use shmvar::{shm_vars, SharedMem};
    ///
    /// shm_vars! { ptr AdcGain = 100; }
    ///
    /// fn main() {
    ///     let mut shm = SharedMem::<64, 64, 64, 4>::new();
    ///     shm.set_global(AdcGain, 1.0); // MVar where PVar is expected
    /// }
    /// ```
    #[inline]
    pub fn set_global(&mut self, var: PVar, value: f64) {
        self.p[var.base() % P] = value;
    }

    /// Reads element `index` of a global array. The effective slot is
    /// `(base + index) mod P`; an out-of-range index aliases a valid slot.
    ///
    /// Scalar names do not fit array accessors:
    ///
    /// ```compile_fail
    /// use shmvar::{shm_vars, SharedMem};
    ///
    /// shm_vars! { global EncPos = 8216; }
    ///
    /// fn main() {
    ///     let shm = SharedMem::<16384, 64, 64, 4>::new();
    ///     shm.get_global_array(EncPos, 0); // PVar where PArray is expected
    /// }
    /// ```
    #[inline]
    pub fn get_global_array(&self, var: PArray, index: usize) -> f64 {
        self.p[var.base().wrapping_add(index) % P]
    }

    /// Writes element `index` of a global array, with the same wraparound.
    #[inline]
    pub fn set_global_array(&mut self, var: PArray, index: usize, value: f64) {
        self.p[var.base().wrapping_add(index) % P] = value;
    }

    /// Reads a scalar coordinate-scoped variable from coordinate system
    /// `cs mod MAX_COORDS`.
    ///
    /// ```compile_fail
    /// use shmvar::{shm_vars, SharedMem};
    ///
    /// shm_vars! { global EncPos = 8216; }
    ///
    /// fn main() {
    ///     let shm = SharedMem::<16384, 64, 64, 4>::new();
    ///     shm.get_coord(EncPos, 0); // PVar where QVar is expected
    /// }
    /// ```
    #[inline]
    pub fn get_coord(&self, var: QVar, cs: usize) -> f64 {
        self.coord[cs % C].q[var.base() % Q]
    }

    /// Writes a scalar coordinate-scoped variable.
    #[inline]
    pub fn set_coord(&mut self, var: QVar, cs: usize, value: f64) {
        self.coord[cs % C].q[var.base() % Q] = value;
    }

    /// Reads element `index` of a coordinate-scoped array. The coordinate
    /// system reduces modulo `MAX_COORDS` and the register modulo `MAX_Q`;
    /// the two reductions are independent.
    #[inline]
    pub fn get_coord_array(&self, var: QArray, cs: usize, index: usize) -> f64 {
        self.coord[cs % C].q[var.base().wrapping_add(index) % Q]
    }

    /// Writes element `index` of a coordinate-scoped array.
    #[inline]
    pub fn set_coord_array(&mut self, var: QArray, cs: usize, index: usize, value: f64) {
        self.coord[cs % C].q[var.base().wrapping_add(index) % Q] = value;
    }

    /// Reads a scalar indirect variable through the runtime's primitive.
    /// The resolver only selects the definition slot (`base mod MAX_M`) and
    /// forwards the caller's cache token.
    #[inline]
    pub fn get_ptr<B: IndirectIo>(&self, var: MVar, bus: &mut B, cache: &mut PtrCache) -> f64 {
        bus.read(&self.mdef[var.base() % M], cache)
    }

    /// Writes a scalar indirect variable through the runtime's primitive.
    #[inline]
    pub fn set_ptr<B: IndirectIo>(
        &self,
        var: MVar,
        value: f64,
        bus: &mut B,
        cache: &mut PtrCache,
    ) {
        bus.write(&self.mdef[var.base() % M], value, cache)
    }

    /// Reads element `index` of an indirect array; the definition slot is
    /// `(base + index) mod MAX_M`.
    #[inline]
    pub fn get_ptr_array<B: IndirectIo>(
        &self,
        var: MArray,
        index: usize,
        bus: &mut B,
        cache: &mut PtrCache,
    ) -> f64 {
        bus.read(&self.mdef[var.base().wrapping_add(index) % M], cache)
    }

    /// Writes element `index` of an indirect array.
    #[inline]
    pub fn set_ptr_array<B: IndirectIo>(
        &self,
        var: MArray,
        index: usize,
        value: f64,
        bus: &mut B,
        cache: &mut PtrCache,
    ) {
        bus.write(&self.mdef[var.base().wrapping_add(index) % M], value, cache)
    }
}

// Script mode: same entry points, untyped slots. The name macros generated
// by `shm_vars!` expand straight to the table cells; these methods exist so
// accessor-style call sites keep building after a mode flip.
#[cfg(feature = "script-mode")]
impl<const P: usize, const Q: usize, const M: usize, const C: usize> SharedMem<P, Q, M, C> {
    #[inline]
    pub fn get_global(&self, slot: usize) -> f64 {
        self.p[slot % P]
    }

    #[inline]
    pub fn set_global(&mut self, slot: usize, value: f64) {
        self.p[slot % P] = value;
    }

    #[inline]
    pub fn get_global_array(&self, base: usize, index: usize) -> f64 {
        self.p[base.wrapping_add(index) % P]
    }

    #[inline]
    pub fn set_global_array(&mut self, base: usize, index: usize, value: f64) {
        self.p[base.wrapping_add(index) % P] = value;
    }

    #[inline]
    pub fn get_coord(&self, slot: usize, cs: usize) -> f64 {
        self.coord[cs % C].q[slot % Q]
    }

    #[inline]
    pub fn set_coord(&mut self, slot: usize, cs: usize, value: f64) {
        self.coord[cs % C].q[slot % Q] = value;
    }

    #[inline]
    pub fn get_coord_array(&self, base: usize, cs: usize, index: usize) -> f64 {
        self.coord[cs % C].q[base.wrapping_add(index) % Q]
    }

    #[inline]
    pub fn set_coord_array(&mut self, base: usize, cs: usize, index: usize, value: f64) {
        self.coord[cs % C].q[base.wrapping_add(index) % Q] = value;
    }

    #[inline]
    pub fn get_ptr<B: IndirectIo>(&self, slot: usize, bus: &mut B, cache: &mut PtrCache) -> f64 {
        bus.read(&self.mdef[slot % M], cache)
    }

    #[inline]
    pub fn set_ptr<B: IndirectIo>(
        &self,
        slot: usize,
        value: f64,
        bus: &mut B,
        cache: &mut PtrCache,
    ) {
        bus.write(&self.mdef[slot % M], value, cache)
    }

    #[inline]
    pub fn get_ptr_array<B: IndirectIo>(
        &self,
        base: usize,
        index: usize,
        bus: &mut B,
        cache: &mut PtrCache,
    ) -> f64 {
        bus.read(&self.mdef[base.wrapping_add(index) % M], cache)
    }

    #[inline]
    pub fn set_ptr_array<B: IndirectIo>(
        &self,
        base: usize,
        index: usize,
        value: f64,
        bus: &mut B,
        cache: &mut PtrCache,
    ) {
        bus.write(&self.mdef[base.wrapping_add(index) % M], value, cache)
    }
}

#[cfg(all(test, feature = "enum-mode", not(feature = "script-mode")))]
mod tests {
    use rand::{thread_rng, Rng};

    use crate::indirect::{MappedBus, PtrCache, PtrDef};
    use crate::shm::SharedMem;
    use crate::vars::{MArray, MVar, PArray, PVar, QArray, QVar};

    type SmallShm = SharedMem<64, 16, 8, 4>;

    #[test]
    fn global_read_after_write() {
        let mut shm = SmallShm::new();
        let mut rng = thread_rng();
        for _ in 0..200 {
            let var = PVar::new(rng.gen_range(0..64));
            let value = rng.gen::<f64>();
            shm.set_global(var, value);
            assert_eq!(shm.get_global(var), value);
        }
    }

    #[test]
    fn global_scalar_base_aliases_modulo_capacity() {
        let mut shm = SmallShm::new();
        shm.set_global(PVar::new(64 + 5), 7.0);
        assert_eq!(shm.p[5], 7.0);
        assert_eq!(shm.get_global(PVar::new(5)), 7.0);
    }

    #[test]
    fn global_array_round_trips_past_arity_and_capacity() {
        let mut shm = SmallShm::new();
        let arr = PArray::new(40, 8);
        for i in [0usize, 7, 8, 63, 64, 200] {
            let value = i as f64 + 0.5;
            shm.set_global_array(arr, i, value);
            assert_eq!(shm.get_global_array(arr, i), value);
            assert_eq!(shm.p[(40 + i) % 64], value);
        }
    }

    // The scenario from the original deployment: capacity 8192 + 37, array
    // of 37 at base 8192. Index 36 is the last in-arity slot; index 37 runs
    // off the end of the table and aliases slot (8192 + 37) % 8229 = 0.
    #[test]
    fn array_indexing_wraps_at_table_end() {
        const CAP: usize = 8192 + 37;
        let mut shm = SharedMem::<CAP, 1, 1, 1>::new();
        let arr = PArray::new(8192, 37);

        shm.set_global_array(arr, 36, 42.0);
        assert_eq!(shm.get_global_array(arr, 36), 42.0);
        assert_eq!(shm.p[8228], 42.0);

        shm.set_global_array(arr, 37, 1.0);
        assert_eq!(shm.get_global_array(arr, 37), 1.0);
        assert_eq!(shm.p[0], 1.0);
    }

    #[test]
    fn coord_banks_are_independent() {
        let mut shm = SmallShm::new();
        let var = QVar::new(10);
        shm.set_coord(var, 1, 1.5);
        shm.set_coord(var, 2, 2.5);
        assert_eq!(shm.get_coord(var, 1), 1.5);
        assert_eq!(shm.get_coord(var, 2), 2.5);
        assert_eq!(shm.get_coord(var, 0), 0.0);
    }

    #[test]
    fn coord_index_wraps_modulo_coord_count() {
        let mut shm = SmallShm::new();
        let var = QVar::new(3);
        shm.set_coord(var, 4 + 1, 9.0);
        assert_eq!(shm.get_coord(var, 1), 9.0);
        assert_eq!(shm.coord[1].q[3], 9.0);
    }

    // cs reduces modulo the coordinate count and the register modulo the Q
    // capacity; both reductions apply on the same access.
    #[test]
    fn coord_array_reductions_compose() {
        let mut shm = SmallShm::new();
        let arr = QArray::new(12, 4);
        shm.set_coord_array(arr, 4 + 2, 10, 3.0);
        assert_eq!(shm.get_coord_array(arr, 2, 10), 3.0);
        assert_eq!(shm.coord[2].q[(12 + 10) % 16], 3.0);
    }

    #[test]
    fn ptr_access_goes_through_the_bus() {
        let mut shm = SmallShm::new();
        shm.mdef[5] = PtrDef { target: 33 };
        let mut bus = MappedBus::new(64);
        let mut cache = PtrCache::new();
        let var = MVar::new(5);

        shm.set_ptr(var, 6.5, &mut bus, &mut cache);
        assert_eq!(shm.get_ptr(var, &mut bus, &mut cache), 6.5);
        assert_eq!(bus.word(33), 6.5);
        assert_eq!(cache.last_target(), Some(33));
        // The table itself is untouched; only the bus was written.
        assert!(shm.p.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn ptr_array_slot_wraps_modulo_mdef_capacity() {
        let mut shm = SmallShm::new();
        shm.mdef[2] = PtrDef { target: 11 };
        let mut bus = MappedBus::new(64);
        let mut cache = PtrCache::new();
        let arr = MArray::new(6, 4);

        // (6 + 4) % 8 = 2: past-the-end index lands on definition slot 2.
        shm.set_ptr_array(arr, 4, 5.0, &mut bus, &mut cache);
        assert_eq!(bus.word(11), 5.0);
        assert_eq!(shm.get_ptr_array(arr, 4, &mut bus, &mut cache), 5.0);
    }
}
