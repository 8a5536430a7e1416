//! Host-side walkthrough of one deployment's binding table, lifted from a
//! stretched-wire measurement bench. The numeric assignments are that
//! machine's data; another deployment binds the same names elsewhere and
//! recompiles against its own block.
//!
//! Run with `RUST_LOG=trace` to watch the indirect accesses hit the bus.

#[cfg(all(feature = "enum-mode", not(feature = "script-mode")))]
mod demo {
    use shmvar::{shm_vars, DefaultShm, MappedBus, PtrCache, PtrDef};

    shm_vars! {
        global distance = 8194;
        global acce = 8195;
        global n_scans = 8196;
        global Motor1Homed = 8197;
        global EncPos = 8216;
        global startPos = 8217;
        global endPos = 8218;
        global targetPos = 8219;
        global ScanResults[8] = 8300;
        coord CsFeedScale = 10;
        ptr Ch1Adc = 100;
    }

    pub fn run() {
        env_logger::init();

        let mut shm = DefaultShm::new();
        let mut bus = MappedBus::new(256);
        let mut cache = PtrCache::new();

        // The ADC lives behind one level of indirection.
        shm.mdef[Ch1Adc.base()] = PtrDef { target: 40 };
        shm.set_ptr(Ch1Adc, 0.8315, &mut bus, &mut cache);

        // Scan setup, the way the controller script would do it.
        shm.set_global(startPos, -50.0);
        shm.set_global(endPos, 50.0);
        shm.set_global(distance, 100.0);
        shm.set_global(acce, 2.0);
        shm.set_global(n_scans, 8.0);
        shm.set_global(Motor1Homed, 1.0);
        shm.set_coord(CsFeedScale, 1, 0.25);

        let scans = shm.get_global(n_scans) as usize;
        for scan in 0..scans {
            let span = shm.get_global(endPos) - shm.get_global(startPos);
            let target = shm.get_global(startPos) + span * (scan as f64) / (scans as f64);
            shm.set_global(targetPos, target);
            shm.set_global(EncPos, target); // pretend the move completed
            let adc = shm.get_ptr(Ch1Adc, &mut bus, &mut cache);
            shm.set_global_array(ScanResults, scan, adc * target);
        }

        println!("homed:      {}", shm.get_global(Motor1Homed) != 0.0);
        println!("feed scale: {}", shm.get_coord(CsFeedScale, 1));
        println!("last adc at {:?}", cache.last_target());
        for scan in 0..scans {
            println!(
                "scan {scan}: result = {:+.3}",
                shm.get_global_array(ScanResults, scan)
            );
        }
    }
}

#[cfg(all(feature = "enum-mode", not(feature = "script-mode")))]
fn main() {
    demo::run()
}

#[cfg(not(all(feature = "enum-mode", not(feature = "script-mode"))))]
fn main() {}
