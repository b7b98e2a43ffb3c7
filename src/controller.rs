// controller.rs - Simulation controller
//
// Owns the two generation buffers and the repeating timer. Every mutation
// of the buffers (a timer-driven step, a user edit, a reset) goes through
// one mutex, so a step never races an edit and reconfiguration never races
// an in-flight step.

use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use rand::thread_rng;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, trace, warn};

use crate::board::Board;
use crate::engine;
use crate::error::{Error, Result};
use crate::patterns::{self, Pattern};

/// Smallest supported update period.
pub const MIN_PERIOD: Duration = Duration::from_millis(100);

/// Board edge used when nothing else is configured.
pub const DEFAULT_SIZE: usize = 100;
/// Update period used when nothing else is configured.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(100);

/// Two same-sized boards plus the index of the one that is externally
/// visible. A step reads the active board, writes the other one, then
/// flips the index; nothing is ever reallocated.
#[derive(Debug)]
struct Buffers {
    boards: [Board; 2],
    active: usize,
    generation: u64,
}

impl Buffers {
    fn new(width: usize, height: usize) -> Result<Self> {
        Ok(Self {
            boards: [Board::new(width, height)?, Board::new(width, height)?],
            active: 0,
            generation: 0,
        })
    }

    fn active(&self) -> &Board {
        &self.boards[self.active]
    }

    fn active_mut(&mut self) -> &mut Board {
        &mut self.boards[self.active]
    }

    fn step(&mut self) {
        let (front, back) = self.boards.split_at_mut(1);
        let (src, dst) = if self.active == 0 {
            (&front[0], &mut back[0])
        } else {
            (&back[0], &mut front[0])
        };
        engine::next_generation(src, dst);
        self.active ^= 1;
        self.generation += 1;
    }
}

#[derive(Debug)]
struct Shared {
    buffers: Buffers,
    running: bool,
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Read access to the currently active board. Holds the controller lock,
/// so the timer cannot flip buffers while a view exists; drop it promptly.
pub struct BoardView<'a> {
    guard: MutexGuard<'a, Shared>,
}

impl Deref for BoardView<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.guard.buffers.active()
    }
}

/// The simulation controller: double-buffered board state, current period,
/// and the repeating timer that advances generations while running.
#[derive(Debug)]
pub struct LifeGame {
    shared: Arc<Mutex<Shared>>,
    period: Duration,
    runtime: Runtime,
    timer: Option<JoinHandle<()>>,
}

impl LifeGame {
    /// Builds a stopped controller with two all-dead `width` x `height`
    /// buffers. Fails without building anything if a dimension or the
    /// period is out of range.
    pub fn new(width: usize, height: usize, period: Duration) -> Result<Self> {
        validate_period(period)?;
        let buffers = Buffers::new(width, height)?;
        Ok(Self {
            shared: Arc::new(Mutex::new(Shared {
                buffers,
                running: false,
            })),
            period,
            runtime: Runtime::new().expect("failed to start timer runtime"),
            timer: None,
        })
    }

    pub fn width(&self) -> usize {
        lock(&self.shared).buffers.active().width()
    }

    pub fn height(&self) -> usize {
        lock(&self.shared).buffers.active().height()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn generation(&self) -> u64 {
        lock(&self.shared).buffers.generation
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// The active buffer, for rendering.
    pub fn current_board(&self) -> BoardView<'_> {
        BoardView {
            guard: lock(&self.shared),
        }
    }

    /// Advances the simulation one generation and flips the active buffer.
    pub fn step(&self) {
        let mut state = lock(&self.shared);
        state.buffers.step();
        trace!(generation = state.buffers.generation, "stepped");
    }

    /// Flips one cell on the active buffer.
    pub fn toggle(&self, x: usize, y: usize) -> Result<()> {
        lock(&self.shared).buffers.active_mut().toggle(x, y)
    }

    /// Kills every cell on the active buffer. The inactive buffer keeps its
    /// stale contents; the next step overwrites them before reading.
    pub fn clear(&self) {
        let mut state = lock(&self.shared);
        state.buffers.active_mut().clear();
        state.buffers.generation = 0;
    }

    /// Sets every cell on the active buffer to a coin flip.
    pub fn randomize(&self) {
        let mut state = lock(&self.shared);
        state.buffers.active_mut().randomize(&mut thread_rng());
        state.buffers.generation = 0;
    }

    /// Clears the active buffer and stamps a named pattern centered on it.
    pub fn apply_pattern(&self, pattern: &Pattern) {
        let mut state = lock(&self.shared);
        patterns::apply_pattern(state.buffers.active_mut(), pattern);
        state.buffers.generation = 0;
        debug!(pattern = pattern.name, "applied pattern");
    }

    /// Begins stepping every `period`. Idempotent while already running:
    /// a second call spawns no second timer.
    pub fn start(&mut self) {
        if self.timer.is_some() {
            return;
        }
        lock(&self.shared).running = true;

        let shared = Arc::clone(&self.shared);
        let period = self.period;
        self.timer = Some(self.runtime.spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick of a tokio interval completes immediately;
            // consume it so the first step lands one period after start.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let mut state = lock(&shared);
                if !state.running {
                    break;
                }
                state.buffers.step();
                trace!(generation = state.buffers.generation, "tick");
            }
        }));
        info!(period_ms = self.period.as_millis() as u64, "started");
    }

    /// Cancels the timer. No step executes after this returns: flipping
    /// the running flag takes the same lock as a step, so an in-flight
    /// step finishes first, and any tick delivered afterwards sees the
    /// flag and does nothing. Idempotent while stopped.
    pub fn stop(&mut self) {
        let Some(timer) = self.timer.take() else {
            return;
        };
        lock(&self.shared).running = false;
        timer.abort();
        info!("stopped");
    }

    /// Changes the update period. While running, the timer is restarted
    /// stop-then-start so the new interval takes effect cleanly.
    pub fn set_period(&mut self, period: Duration) -> Result<()> {
        validate_period(period).inspect_err(|_| {
            warn!(?period, "rejected period below minimum");
        })?;
        self.period = period;
        if self.timer.is_some() {
            self.stop();
            self.start();
        }
        debug!(period_ms = period.as_millis() as u64, "period changed");
        Ok(())
    }

    /// Discards both buffers and rebuilds them all-dead at the new size.
    /// Stops the simulation first. A rejected size changes nothing.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        // Build the replacement before touching anything, so failure
        // leaves the previous board fully intact.
        let buffers = Buffers::new(width, height).inspect_err(|_| {
            warn!(width, height, "rejected out-of-range board size");
        })?;
        self.stop();
        lock(&self.shared).buffers = buffers;
        info!(width, height, "board resized");
        Ok(())
    }
}

impl Drop for LifeGame {
    fn drop(&mut self) {
        self.stop();
    }
}

impl Default for LifeGame {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_SIZE, DEFAULT_PERIOD)
            .expect("default configuration is within the supported ranges")
    }
}

fn validate_period(period: Duration) -> Result<()> {
    if period < MIN_PERIOD {
        return Err(Error::InvalidPeriod(period));
    }
    Ok(())
}
