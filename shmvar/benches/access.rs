#[cfg(all(feature = "enum-mode", not(feature = "script-mode")))]
use std::hint::black_box;

#[cfg(all(feature = "enum-mode", not(feature = "script-mode")))]
use criterion::{criterion_group, criterion_main, Criterion};
#[cfg(all(feature = "enum-mode", not(feature = "script-mode")))]
use shmvar::{PArray, PVar, SharedMem};

// Typed accessors must cost no more than hand-written indexing; the
// `direct_index` entries are the baseline.
#[cfg(all(feature = "enum-mode", not(feature = "script-mode")))]
fn bench_accessors(c: &mut Criterion) {
    let mut shm = SharedMem::<8192, 64, 64, 4>::new();
    let enc = PVar::new(4096);
    let buf = PArray::new(1024, 512);

    c.bench_function("get_global", |b| {
        b.iter(|| black_box(shm.get_global(black_box(enc))))
    });

    c.bench_function("get_global_direct_index", |b| {
        b.iter(|| black_box(shm.p[black_box(4096usize) % 8192]))
    });

    c.bench_function("set_global_array", |b| {
        let mut i = 0usize;
        b.iter(|| {
            shm.set_global_array(black_box(buf), i, 1.0);
            i = i.wrapping_add(1);
        })
    });

    c.bench_function("set_global_array_direct_index", |b| {
        let mut i = 0usize;
        b.iter(|| {
            shm.p[(1024usize.wrapping_add(black_box(i))) % 8192] = 1.0;
            i = i.wrapping_add(1);
        })
    });
}

#[cfg(all(feature = "enum-mode", not(feature = "script-mode")))]
criterion_group!(benches, bench_accessors);
#[cfg(all(feature = "enum-mode", not(feature = "script-mode")))]
criterion_main!(benches);

#[cfg(not(all(feature = "enum-mode", not(feature = "script-mode"))))]
fn main() {}
