//! The [`shm_vars!`](crate::shm_vars) binding declaration macro.
//!
//! One definition per addressing mode, picked by the same feature precedence
//! as the accessors. All three accept the same declaration grammar, modeled
//! on the controller-script declarations the original header generator
//! consumed (`global Mypvar`, `global Myparray(32)`, `csglobal Myqvar`,
//! `ptr Mymvar`):
//!
//! ```text
//! global <name>          = <base>;   // scalar P variable
//! global <name>[<arity>] = <base>;   // P array
//! coord  <name>          = <base>;   // scalar Q variable
//! coord  <name>[<arity>] = <base>;   // Q array
//! ptr    <name>          = <base>;   // scalar M variable
//! ptr    <name>[<arity>] = <base>;   // M array
//! ```
//!
//! Bindings are per-deployment data: two machines may bind the same name at
//! different bases, and each compiles against its own declaration block.
//! The macro only fixes names to slots; it never touches the tables.

/// Declares project variable bindings.
///
/// Raw mode: every name becomes a bare `usize` slot constant, array arity is
/// dropped, and no namespace information survives. Callers index the tables
/// themselves.
#[cfg(not(any(feature = "script-mode", feature = "enum-mode")))]
#[macro_export]
macro_rules! shm_vars {
    () => {};
    (global $name:ident [$arity:expr] = $base:expr; $($rest:tt)*) => {
        #[allow(non_upper_case_globals)]
        pub const $name: usize = $base;
        $crate::shm_vars! { $($rest)* }
    };
    (global $name:ident = $base:expr; $($rest:tt)*) => {
        #[allow(non_upper_case_globals)]
        pub const $name: usize = $base;
        $crate::shm_vars! { $($rest)* }
    };
    (coord $name:ident [$arity:expr] = $base:expr; $($rest:tt)*) => {
        #[allow(non_upper_case_globals)]
        pub const $name: usize = $base;
        $crate::shm_vars! { $($rest)* }
    };
    (coord $name:ident = $base:expr; $($rest:tt)*) => {
        #[allow(non_upper_case_globals)]
        pub const $name: usize = $base;
        $crate::shm_vars! { $($rest)* }
    };
    (ptr $name:ident [$arity:expr] = $base:expr; $($rest:tt)*) => {
        #[allow(non_upper_case_globals)]
        pub const $name: usize = $base;
        $crate::shm_vars! { $($rest)* }
    };
    (ptr $name:ident = $base:expr; $($rest:tt)*) => {
        #[allow(non_upper_case_globals)]
        pub const $name: usize = $base;
        $crate::shm_vars! { $($rest)* }
    };
}

/// Declares project variable bindings.
///
/// Enum mode: every name becomes a `const` of the handle type matching its
/// declaration — [`PVar`](crate::PVar)/[`PArray`](crate::PArray) for
/// `global`, [`QVar`](crate::QVar)/[`QArray`](crate::QArray) for `coord`,
/// [`MVar`](crate::MVar)/[`MArray`](crate::MArray) for `ptr` — so each
/// accessor only accepts names from its own namespace.
#[cfg(all(feature = "enum-mode", not(feature = "script-mode")))]
#[macro_export]
macro_rules! shm_vars {
    () => {};
    (global $name:ident [$arity:expr] = $base:expr; $($rest:tt)*) => {
        #[allow(non_upper_case_globals)]
        pub const $name: $crate::PArray = $crate::PArray::new($base, $arity);
        $crate::shm_vars! { $($rest)* }
    };
    (global $name:ident = $base:expr; $($rest:tt)*) => {
        #[allow(non_upper_case_globals)]
        pub const $name: $crate::PVar = $crate::PVar::new($base);
        $crate::shm_vars! { $($rest)* }
    };
    (coord $name:ident [$arity:expr] = $base:expr; $($rest:tt)*) => {
        #[allow(non_upper_case_globals)]
        pub const $name: $crate::QArray = $crate::QArray::new($base, $arity);
        $crate::shm_vars! { $($rest)* }
    };
    (coord $name:ident = $base:expr; $($rest:tt)*) => {
        #[allow(non_upper_case_globals)]
        pub const $name: $crate::QVar = $crate::QVar::new($base);
        $crate::shm_vars! { $($rest)* }
    };
    (ptr $name:ident [$arity:expr] = $base:expr; $($rest:tt)*) => {
        #[allow(non_upper_case_globals)]
        pub const $name: $crate::MArray = $crate::MArray::new($base, $arity);
        $crate::shm_vars! { $($rest)* }
    };
    (ptr $name:ident = $base:expr; $($rest:tt)*) => {
        #[allow(non_upper_case_globals)]
        pub const $name: $crate::MVar = $crate::MVar::new($base);
        $crate::shm_vars! { $($rest)* }
    };
}

/// Declares project variable bindings.
///
/// Script mode: every name becomes a macro expanding to the table-cell place
/// expression, so reads and writes go straight to the cell with no accessor
/// in between:
///
/// - `global Pos = 8216;` gives `Pos!(shm)`, usable on either side of an
///   assignment;
/// - `global Buf[32] = 8300;` gives `Buf!(shm, i)`;
/// - `coord Home = 10;` gives `Home!(shm, cs)`, and a `coord` array takes
///   `(shm, cs, i)`;
/// - `ptr Adc = 100;` gives `Adc!(shm)`, which is the pointer-definition
///   cell to hand to the runtime's indirect primitives (a `ptr` array takes
///   `(shm, i)`).
///
/// Array and coordinate indices wrap modulo the table capacities, as in the
/// other modes. No namespace checking happens here; that is enum mode's job.
#[cfg(feature = "script-mode")]
#[macro_export]
macro_rules! shm_vars {
    ($($decl:tt)*) => {
        $crate::__shm_vars_script! { ($) $($decl)* }
    };
}

// The `($d:tt)` argument smuggles a literal `$` into the generated macros.
#[cfg(feature = "script-mode")]
#[doc(hidden)]
#[macro_export]
macro_rules! __shm_vars_script {
    ( ($d:tt) ) => {};
    ( ($d:tt) global $name:ident [$arity:expr] = $base:expr; $($rest:tt)*) => {
        #[allow(unused_macros)]
        macro_rules! $name {
            ($d shm:expr, $d index:expr) => {
                ($d shm).p[($base + $d index) % ($d shm).max_p()]
            };
        }
        $crate::__shm_vars_script! { ($d) $($rest)* }
    };
    ( ($d:tt) global $name:ident = $base:expr; $($rest:tt)*) => {
        #[allow(unused_macros)]
        macro_rules! $name {
            ($d shm:expr) => {
                ($d shm).p[$base % ($d shm).max_p()]
            };
        }
        $crate::__shm_vars_script! { ($d) $($rest)* }
    };
    ( ($d:tt) coord $name:ident [$arity:expr] = $base:expr; $($rest:tt)*) => {
        #[allow(unused_macros)]
        macro_rules! $name {
            ($d shm:expr, $d cs:expr, $d index:expr) => {
                ($d shm).coord[$d cs % ($d shm).max_coords()].q
                    [($base + $d index) % ($d shm).max_q()]
            };
        }
        $crate::__shm_vars_script! { ($d) $($rest)* }
    };
    ( ($d:tt) coord $name:ident = $base:expr; $($rest:tt)*) => {
        #[allow(unused_macros)]
        macro_rules! $name {
            ($d shm:expr, $d cs:expr) => {
                ($d shm).coord[$d cs % ($d shm).max_coords()].q[$base % ($d shm).max_q()]
            };
        }
        $crate::__shm_vars_script! { ($d) $($rest)* }
    };
    ( ($d:tt) ptr $name:ident [$arity:expr] = $base:expr; $($rest:tt)*) => {
        #[allow(unused_macros)]
        macro_rules! $name {
            ($d shm:expr, $d index:expr) => {
                ($d shm).mdef[($base + $d index) % ($d shm).max_m()]
            };
        }
        $crate::__shm_vars_script! { ($d) $($rest)* }
    };
    ( ($d:tt) ptr $name:ident = $base:expr; $($rest:tt)*) => {
        #[allow(unused_macros)]
        macro_rules! $name {
            ($d shm:expr) => {
                ($d shm).mdef[$base % ($d shm).max_m()]
            };
        }
        $crate::__shm_vars_script! { ($d) $($rest)* }
    };
}

#[cfg(all(test, feature = "enum-mode", not(feature = "script-mode")))]
mod tests {
    use crate::shm::SharedMem;
    use crate::vars::{MArray, MVar, PArray, PVar, QArray, QVar};

    crate::shm_vars! {
        global EncPos = 8216;
        global Harmonics[37] = 8192;
        coord CsHomePos = 10;
        coord CsOffsets[8] = 40;
        ptr AdcGain = 100;
        ptr DacOut[4] = 120;
    }

    #[test]
    fn declarations_produce_typed_handles() {
        let _: PVar = EncPos;
        let _: PArray = Harmonics;
        let _: QVar = CsHomePos;
        let _: QArray = CsOffsets;
        let _: MVar = AdcGain;
        let _: MArray = DacOut;

        assert_eq!(EncPos.base(), 8216);
        assert_eq!(Harmonics.base(), 8192);
        assert_eq!(Harmonics.arity(), 37);
        assert_eq!(CsOffsets.arity(), 8);
        assert_eq!(DacOut.base(), 120);
    }

    // Two machines bind the same name at different bases (8212 on one
    // deployment, 8216 on the other); each compiles against its own block.
    mod site_a {
        crate::shm_vars! { global EncPos = 8212; }
    }
    mod site_b {
        crate::shm_vars! { global EncPos = 8216; }
    }

    #[test]
    fn bindings_are_deployment_data() {
        assert_eq!(site_a::EncPos.base(), 8212);
        assert_eq!(site_b::EncPos.base(), 8216);

        let mut shm = SharedMem::<16384, 8, 8, 2>::new();
        shm.set_global(site_a::EncPos, 1.0);
        shm.set_global(site_b::EncPos, 2.0);
        assert_eq!(shm.p[8212], 1.0);
        assert_eq!(shm.p[8216], 2.0);
    }
}
