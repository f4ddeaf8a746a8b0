//! # Frame Driver
//!
//! The external loop the pool expects: one `update_cycle` per frame, with
//! timing recorded around it. The driver owns the pool; everything else
//! reaches the entities through the pool's view.

use std::time::{Duration, Instant};

use scythe_core::{PoolConfig, Updatable, UpdatePool};

/// Default frame budget for 60 FPS, in microseconds.
pub const TARGET_FRAME_US: u64 = 16_666;

/// Configuration for the frame driver.
#[derive(Clone, Debug)]
pub struct DriverConfig {
    /// Pool configuration (capacity, per-cycle tracing).
    pub pool: PoolConfig,
    /// Target frames per second; defines the over-budget threshold.
    pub target_fps: u32,
    /// Warn (via `tracing`) when a frame exceeds its budget.
    pub enable_timing_logs: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            pool: PoolConfig::default(),
            target_fps: 60,
            enable_timing_logs: false,
        }
    }
}

impl DriverConfig {
    /// Returns the per-frame budget implied by `target_fps`.
    #[must_use]
    pub fn frame_budget(&self) -> Duration {
        if self.target_fps == 0 {
            return Duration::from_micros(TARGET_FRAME_US);
        }
        Duration::from_secs(1) / self.target_fps
    }
}

/// Timing record for a single frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct CycleStats {
    /// Frame number.
    pub frame: u64,
    /// Cycle time in microseconds.
    pub cycle_us: u64,
    /// Entities updated this frame.
    pub updated: usize,
    /// Entities reclaimed this frame.
    pub reclaimed: usize,
}

/// The frame orchestrator.
///
/// Owns the pool and its frame counter; each `run_frame` call drives exactly
/// one cycle and folds the outcome into the accumulated statistics.
pub struct FrameDriver<T: Updatable> {
    /// The pool this driver ticks.
    pool: UpdatePool<T>,
    /// Configuration.
    config: DriverConfig,
    /// Frames driven so far.
    frame_count: u64,
    /// Accumulated statistics.
    stats: CycleStatsAccumulator,
}

impl<T: Updatable> FrameDriver<T> {
    /// Creates a driver and its pool from a configuration.
    ///
    /// # Panics
    ///
    /// Panics if the pool configuration carries a zero capacity; validate
    /// loaded configs first.
    #[must_use]
    pub fn new(config: DriverConfig) -> Self {
        let pool = UpdatePool::with_config(&config.pool);
        Self {
            pool,
            config,
            frame_count: 0,
            stats: CycleStatsAccumulator::new(),
        }
    }

    /// Returns the driven pool.
    #[must_use]
    pub fn pool(&self) -> &UpdatePool<T> {
        &self.pool
    }

    /// Returns the driven pool, mutably (e.g. to register listeners).
    pub fn pool_mut(&mut self) -> &mut UpdatePool<T> {
        &mut self.pool
    }

    /// Returns the number of frames driven so far.
    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Returns the accumulated statistics.
    #[must_use]
    pub fn stats(&self) -> &CycleStatsAccumulator {
        &self.stats
    }

    /// Drives one frame: a single cycle, timed and recorded.
    pub fn run_frame(&mut self) -> CycleStats {
        let budget = self.config.frame_budget();

        let started = Instant::now();
        let report = self.pool.update_cycle();
        let elapsed = started.elapsed();

        let stats = CycleStats {
            frame: self.frame_count,
            cycle_us: u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
            updated: report.updated,
            reclaimed: report.reclaimed,
        };

        self.frame_count += 1;
        self.stats.record(stats, budget);

        if self.config.enable_timing_logs && elapsed > budget {
            tracing::warn!(
                frame = stats.frame,
                cycle_us = stats.cycle_us,
                budget_us = u64::try_from(budget.as_micros()).unwrap_or(u64::MAX),
                "frame exceeded budget"
            );
        }

        stats
    }

    /// Drives `frames` consecutive frames.
    pub fn run_frames(&mut self, frames: u64) {
        for _ in 0..frames {
            let _ = self.run_frame();
        }
    }
}

/// Accumulator for frame statistics.
#[derive(Clone, Debug)]
pub struct CycleStatsAccumulator {
    /// Total frames recorded.
    pub frames_recorded: u64,
    /// Sum of cycle times.
    pub cycle_us_sum: u64,
    /// Total entities updated.
    pub updated_sum: u64,
    /// Total entities reclaimed.
    pub reclaimed_sum: u64,
    /// Min cycle time.
    pub min_cycle_us: u64,
    /// Max cycle time.
    pub max_cycle_us: u64,
    /// Frames that exceeded their budget.
    pub frames_over_budget: u64,
}

impl CycleStatsAccumulator {
    /// Creates a new accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frames_recorded: 0,
            cycle_us_sum: 0,
            updated_sum: 0,
            reclaimed_sum: 0,
            min_cycle_us: u64::MAX,
            max_cycle_us: 0,
            frames_over_budget: 0,
        }
    }

    /// Records one frame's statistics against its budget.
    pub fn record(&mut self, stats: CycleStats, budget: Duration) {
        self.frames_recorded += 1;
        self.cycle_us_sum += stats.cycle_us;
        self.updated_sum += stats.updated as u64;
        self.reclaimed_sum += stats.reclaimed as u64;
        self.min_cycle_us = self.min_cycle_us.min(stats.cycle_us);
        self.max_cycle_us = self.max_cycle_us.max(stats.cycle_us);

        if u128::from(stats.cycle_us) > budget.as_micros() {
            self.frames_over_budget += 1;
        }
    }

    /// Returns average cycle time in milliseconds.
    #[must_use]
    pub fn avg_cycle_ms(&self) -> f64 {
        if self.frames_recorded == 0 {
            return 0.0;
        }
        (self.cycle_us_sum as f64 / self.frames_recorded as f64) / 1000.0
    }

    /// Returns the percentage of frames over budget.
    #[must_use]
    pub fn over_budget_ratio(&self) -> f64 {
        if self.frames_recorded == 0 {
            return 0.0;
        }
        self.frames_over_budget as f64 / self.frames_recorded as f64
    }

    /// Prints a summary of the statistics.
    pub fn print_summary(&self) {
        println!("╔══════════════════════════════════════════════════════════════════╗");
        println!("║                    CYCLE STATISTICS SUMMARY                      ║");
        println!("╚══════════════════════════════════════════════════════════════════╝");
        println!();
        println!("┌─ TIMING ───────────────────────────────────────────────────────┐");
        println!("│ Frames Recorded:    {}                                        ", self.frames_recorded);
        println!("│ Average Cycle:      {:.3} ms                                  ", self.avg_cycle_ms());
        println!("│ Min Cycle:          {:.3} ms                                  ", self.min_cycle_us as f64 / 1000.0);
        println!("│ Max Cycle:          {:.3} ms                                  ", self.max_cycle_us as f64 / 1000.0);
        println!("│ Over Budget:        {} frames ({:.1}%)                        ",
            self.frames_over_budget,
            self.over_budget_ratio() * 100.0);
        println!("└──────────────────────────────────────────────────────────────────┘");
        println!();
        println!("┌─ ENTITIES ─────────────────────────────────────────────────────┐");
        println!("│ Updated (total):    {}                                        ", self.updated_sum);
        println!("│ Reclaimed (total):  {}                                        ", self.reclaimed_sum);
        println!("└──────────────────────────────────────────────────────────────────┘");
    }
}

impl Default for CycleStatsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
