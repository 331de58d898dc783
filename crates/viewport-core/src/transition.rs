//! Transition poll and the per-frame scheduling abstraction it runs on.
//!
//! A panel toggle animates the container width for a fixed window. During
//! that window the viewport has to be re-sampled every frame; afterwards the
//! poll goes back to idle on its own. Whether a frame still falls inside the
//! window is a pure function of elapsed time ([`transition_active`]).

use instant::Instant;
use std::cell::RefCell;
use std::time::Duration;

/// Whether a transition started `elapsed` ago is still animating.
#[inline]
pub fn transition_active(elapsed: Duration, window: Duration) -> bool {
    elapsed < window
}

#[inline]
fn elapsed_since(start: Instant, now: Instant) -> Duration {
    if now > start {
        now - start
    } else {
        Duration::ZERO
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollState {
    Idle,
    Polling { started: Instant },
}

/// What a scheduled poll frame should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollStep {
    /// Still inside the window: re-sample and re-apply the viewport size.
    Resample,
    /// Window elapsed; the poll is idle again.
    Finished,
    /// A newer toggle owns the poll now.
    Superseded,
}

#[derive(Clone, Debug)]
pub struct TransitionPoll {
    window: Duration,
    state: PollState,
    generation: u64,
}

impl TransitionPoll {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            state: PollState::Idle,
            generation: 0,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    pub fn is_polling(&self) -> bool {
        matches!(self.state, PollState::Polling { .. })
    }

    /// Start (or restart) the window at `now`. The returned generation
    /// identifies this toggle; ticks carrying an older one are superseded.
    pub fn begin(&mut self, now: Instant) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.state = PollState::Polling { started: now };
        self.generation
    }

    pub fn tick(&mut self, generation: u64, now: Instant) -> PollStep {
        if generation != self.generation {
            return PollStep::Superseded;
        }
        match self.state {
            PollState::Idle => PollStep::Finished,
            PollState::Polling { started } => {
                if transition_active(elapsed_since(started, now), self.window) {
                    PollStep::Resample
                } else {
                    self.state = PollState::Idle;
                    PollStep::Finished
                }
            }
        }
    }
}

/// Result of one scheduled frame step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Stop,
}

pub type FrameStep = Box<dyn FnMut(Instant) -> Tick>;

/// Runs a step once per frame until it returns [`Tick::Stop`].
pub trait FrameScheduler {
    fn schedule(&self, step: FrameStep);
}

/// In-process scheduler: every call to [`FrameQueue::advance`] is one frame.
#[derive(Default)]
pub struct FrameQueue {
    steps: RefCell<Vec<FrameStep>>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.steps.borrow().len()
    }

    /// Run one frame at `now`. Returns how many steps ran.
    pub fn advance(&self, now: Instant) -> usize {
        let mut current = std::mem::take(&mut *self.steps.borrow_mut());
        let ran = current.len();
        current.retain_mut(|step| step(now) == Tick::Continue);
        // Steps scheduled while running go after the survivors.
        let mut steps = self.steps.borrow_mut();
        let scheduled_meanwhile = std::mem::take(&mut *steps);
        *steps = current;
        steps.extend(scheduled_meanwhile);
        ran
    }
}

impl FrameScheduler for FrameQueue {
    fn schedule(&self, step: FrameStep) {
        self.steps.borrow_mut().push(step);
    }
}
