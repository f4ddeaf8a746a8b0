//! # Pool Lifecycle Verification Tests
//!
//! These tests drive the public API end-to-end:
//!
//! 1. **Capacity-2 scenario**: overflow drop, destroy, notify, sweep
//! 2. **Churn soak**: repeated destroy/reclaim waves keep survivor order
//! 3. **Mid-cycle spawning**: entities appended through the view mid-pass
//!
//! Run with: cargo test --package scythe_core --test pool_lifecycle

use std::cell::RefCell;
use std::rc::Rc;

use scythe_core::{PoolView, SharedUpdatable, Updatable, UpdatePool};

/// Minimal entity for lifecycle tests: counts its own updates and destroys
/// itself once its time-to-live runs out.
struct Mote {
    id: u32,
    ttl: Option<u32>,
    updates: u32,
    destroyed: bool,
}

impl Mote {
    fn shared(id: u32) -> SharedUpdatable<Self> {
        Rc::new(RefCell::new(Self {
            id,
            ttl: None,
            updates: 0,
            destroyed: false,
        }))
    }

    fn shared_with_ttl(id: u32, ttl: u32) -> SharedUpdatable<Self> {
        let mote = Self::shared(id);
        mote.borrow_mut().ttl = Some(ttl);
        mote
    }
}

impl Updatable for Mote {
    fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn destroy(&mut self) {
        self.destroyed = true;
    }

    fn update(&mut self, _view: &PoolView<Self>) {
        self.updates += 1;
        if let Some(ttl) = self.ttl.as_mut() {
            *ttl -= 1;
            if *ttl == 0 {
                self.destroyed = true;
            }
        }
    }

    fn draw(&self) {}
}

// ============================================================================
// SCENARIO 1: CAPACITY-2 END TO END
// ============================================================================

#[test]
fn verify_capacity_two_scenario() {
    let mut pool: UpdatePool<Mote> = UpdatePool::new(2);

    // Insert A, B, C into a capacity-2 pool: C is silently dropped.
    let a = pool.add_instance(Mote::shared(0));
    let _b = pool.add_instance(Mote::shared(1));
    let c = pool.add_instance(Mote::shared(2));
    assert_eq!(pool.len(), 2);
    assert_eq!(Rc::strong_count(&c), 1, "C must not be retained by the pool");

    // Destroy A, register a listener, run one cycle.
    a.borrow_mut().destroy();
    let notified = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&notified);
    let _ = pool.add_destroy_listener(Box::new(move |mote| {
        sink.borrow_mut().push(mote.borrow().id);
    }));

    let report = pool.update_cycle();

    // The listener fired exactly once, for A.
    assert_eq!(*notified.borrow(), vec![0]);
    // B was processed; A was not.
    assert_eq!(report.updated, 1);
    assert_eq!(report.reclaimed, 1);
    assert_eq!(a.borrow().updates, 0);

    // Post-cycle: only B remains, at index 0.
    assert_eq!(pool.len(), 1);
    let survivor = pool.view().get_by_index(0).expect("B must remain");
    assert_eq!(survivor.borrow().id, 1);
    assert_eq!(survivor.borrow().updates, 1);
    assert!(pool.view().get_by_index(1).is_none());
}

// ============================================================================
// SCENARIO 2: CHURN SOAK
// ============================================================================

#[test]
fn verify_churn_preserves_survivor_order() {
    const COUNT: u32 = 100;

    let mut pool: UpdatePool<Mote> = UpdatePool::new(COUNT as usize);
    for id in 0..COUNT {
        // Every third entity dies after two cycles; the rest are immortal.
        let mote = if id % 3 == 0 {
            Mote::shared_with_ttl(id, 2)
        } else {
            Mote::shared(id)
        };
        let _ = pool.add_instance(mote);
    }

    // Cycle 1 and 2: everyone is still live (flags flip during cycle 2).
    assert_eq!(pool.update_cycle().reclaimed, 0);
    assert_eq!(pool.update_cycle().reclaimed, 0);

    // Cycle 3 observes the flags and reclaims the doomed third.
    let report = pool.update_cycle();
    assert_eq!(report.reclaimed as u32, COUNT.div_ceil(3));

    let survivors: Vec<u32> = pool.view().iter().map(|m| m.borrow().id).collect();
    let expected: Vec<u32> = (0..COUNT).filter(|id| id % 3 != 0).collect();
    assert_eq!(survivors, expected, "survivor order must be insertion order");

    // Steady state afterwards: nothing left to reclaim.
    let report = pool.update_cycle();
    assert_eq!(report.reclaimed, 0);
    assert_eq!(report.updated as u32, COUNT - COUNT.div_ceil(3));
}

// ============================================================================
// SCENARIO 3: SPAWN THROUGH THE VIEW, MID-CYCLE
// ============================================================================

/// Entity that spawns a replacement wave through the view as it dies.
struct Spawner {
    generation: u32,
    destroyed: bool,
}

impl Updatable for Spawner {
    fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn destroy(&mut self) {
        self.destroyed = true;
    }

    fn update(&mut self, view: &PoolView<Self>) {
        if self.generation < 3 {
            let _ = view.add_instance(Rc::new(RefCell::new(Spawner {
                generation: self.generation + 1,
                destroyed: false,
            })));
        }
        self.destroyed = true;
    }

    fn draw(&self) {}
}

#[test]
fn verify_mid_cycle_spawn_chain_runs_in_one_pass() {
    let mut pool: UpdatePool<Spawner> = UpdatePool::new(8);
    let _ = pool.add_instance(Rc::new(RefCell::new(Spawner {
        generation: 0,
        destroyed: false,
    })));

    // Each generation appends the next beyond the cursor, so generations
    // 0 through 3 all update within this single pass.
    let report = pool.update_cycle();
    assert_eq!(report.updated, 4);
    assert_eq!(report.reclaimed, 0);
    assert_eq!(pool.len(), 4);

    // Every spawner flagged itself during the pass; the next cycle sweeps
    // them all.
    let report = pool.update_cycle();
    assert_eq!(report.updated, 0);
    assert_eq!(report.reclaimed, 4);
    assert!(pool.is_empty());
}
