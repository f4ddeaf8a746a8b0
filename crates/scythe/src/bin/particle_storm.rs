//! # Particle Storm Demo
//!
//! End-to-end exercise of the pool lifecycle:
//! 1. One emitter seeds the pool
//! 2. Each frame it spawns a particle *through the view*, mid-cycle
//! 3. Particles age out and destroy themselves
//! 4. A destroy listener counts every reclaim
//!
//! The run passes when every spawned entity has been reclaimed and the
//! pool drains to empty.
//!
//! Run with: `cargo run --bin particle_storm`

use std::cell::RefCell;
use std::rc::Rc;

use scythe::{DriverConfig, FrameDriver};
use scythe_core::{PoolConfig, PoolView, Updatable};

/// Frames to drive; generously past the point the storm dies down.
const FRAMES: u64 = 100;

/// Particles the emitter releases before retiring itself.
const EMITTER_BUDGET: u32 = 64;

/// One inhabitant of the storm.
struct Actor {
    kind: Kind,
    destroyed: bool,
}

enum Kind {
    /// Spawns one particle per frame until its budget runs out.
    Emitter { remaining: u32 },
    /// Lives for `ttl` frames, then destroys itself.
    Particle { ttl: u32 },
}

impl Actor {
    fn emitter(budget: u32) -> Self {
        Self {
            kind: Kind::Emitter { remaining: budget },
            destroyed: false,
        }
    }

    fn particle(ttl: u32) -> Self {
        Self {
            kind: Kind::Particle { ttl },
            destroyed: false,
        }
    }
}

impl Updatable for Actor {
    fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn destroy(&mut self) {
        self.destroyed = true;
    }

    fn update(&mut self, view: &PoolView<Self>) {
        match &mut self.kind {
            Kind::Emitter { remaining } => {
                if *remaining == 0 {
                    self.destroyed = true;
                    return;
                }
                *remaining -= 1;
                // Vary particle lifetimes so reclaims spread across frames.
                let ttl = (*remaining % 5) + 1;
                let _ = view.add_instance(Rc::new(RefCell::new(Actor::particle(ttl))));
            }
            Kind::Particle { ttl } => {
                *ttl -= 1;
                if *ttl == 0 {
                    self.destroyed = true;
                }
            }
        }
    }

    fn draw(&self) {}
}

fn main() {
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                     PARTICLE STORM DEMO                          ║");
    println!("║       emitter → particles → self-destruction → reclaim           ║");
    println!("╠══════════════════════════════════════════════════════════════════╣");
    println!("║  Budget: {EMITTER_BUDGET} particles over {FRAMES} frames                          ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");

    let config = DriverConfig {
        pool: PoolConfig {
            capacity: 128,
            trace_cycles: false,
        },
        target_fps: 60,
        enable_timing_logs: false,
    };
    let mut driver: FrameDriver<Actor> = FrameDriver::new(config);

    let reclaimed = Rc::new(RefCell::new(0u32));
    let sink = Rc::clone(&reclaimed);
    let _ = driver
        .pool_mut()
        .add_destroy_listener(Box::new(move |_| *sink.borrow_mut() += 1));

    let _ = driver
        .pool()
        .add_instance(Rc::new(RefCell::new(Actor::emitter(EMITTER_BUDGET))));

    driver.run_frames(FRAMES);
    driver.stats().print_summary();

    // Emitter plus every particle it released must have been reclaimed.
    let expected = EMITTER_BUDGET + 1;
    let total = *reclaimed.borrow();
    let drained = driver.pool().is_empty();

    println!();
    println!("┌─ VERDICT ──────────────────────────────────────────────────────┐");
    println!("│ Reclaimed:          {total} / {expected}                       ");
    println!("│ Pool drained:       {drained}                                  ");
    println!("└──────────────────────────────────────────────────────────────────┘");

    if total == expected && drained {
        std::process::exit(0);
    } else {
        std::process::exit(1);
    }
}
