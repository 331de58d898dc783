// Host-side tests for the transition poll state machine and the frame queue.

use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use viewport_core::*;

const WINDOW: Duration = Duration::from_millis(300);

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn transition_active_is_a_pure_window_check() {
    assert!(transition_active(ms(0), WINDOW));
    assert!(transition_active(ms(299), WINDOW));
    assert!(!transition_active(ms(300), WINDOW));
    assert!(!transition_active(ms(301), WINDOW));
}

#[test]
fn poll_resamples_then_finishes() {
    let t0 = Instant::now();
    let mut poll = TransitionPoll::new(WINDOW);
    assert_eq!(poll.state(), PollState::Idle);

    let gen = poll.begin(t0);
    assert!(poll.is_polling());
    assert_eq!(poll.tick(gen, t0), PollStep::Resample);
    assert_eq!(poll.tick(gen, t0 + ms(150)), PollStep::Resample);
    assert_eq!(poll.tick(gen, t0 + ms(301)), PollStep::Finished);
    assert_eq!(poll.state(), PollState::Idle);
    // Stays finished afterwards
    assert_eq!(poll.tick(gen, t0 + ms(302)), PollStep::Finished);
}

#[test]
fn newer_toggle_supersedes_older_poll() {
    let t0 = Instant::now();
    let mut poll = TransitionPoll::new(WINDOW);
    let first = poll.begin(t0);
    let second = poll.begin(t0 + ms(100));
    assert_ne!(first, second);
    assert_eq!(poll.tick(first, t0 + ms(120)), PollStep::Superseded);
    // The second window runs from its own start
    assert_eq!(poll.tick(second, t0 + ms(350)), PollStep::Resample);
    assert_eq!(poll.tick(second, t0 + ms(400)), PollStep::Finished);
}

#[test]
fn frame_earlier_than_start_counts_as_zero_elapsed() {
    let t0 = Instant::now() + ms(50);
    let mut poll = TransitionPoll::new(WINDOW);
    let gen = poll.begin(t0);
    assert_eq!(poll.tick(gen, t0 - ms(10)), PollStep::Resample);
}

#[test]
fn frame_queue_drops_stopped_steps() {
    let queue = FrameQueue::new();
    let calls = Rc::new(Cell::new(0u32));
    let c = calls.clone();
    queue.schedule(Box::new(move |_| {
        c.set(c.get() + 1);
        if c.get() < 3 {
            Tick::Continue
        } else {
            Tick::Stop
        }
    }));
    let t0 = Instant::now();
    for i in 0..10u64 {
        queue.advance(t0 + ms(16 * i));
    }
    assert_eq!(calls.get(), 3);
    assert_eq!(queue.pending(), 0);
}

#[test]
fn frame_queue_keeps_steps_scheduled_during_a_frame() {
    let queue = Rc::new(FrameQueue::new());
    let inner_calls = Rc::new(Cell::new(0u32));
    let q = queue.clone();
    let ic = inner_calls.clone();
    queue.schedule(Box::new(move |_| {
        let ic = ic.clone();
        q.schedule(Box::new(move |_| {
            ic.set(ic.get() + 1);
            Tick::Stop
        }));
        Tick::Stop
    }));
    let t0 = Instant::now();
    assert_eq!(queue.advance(t0), 1);
    assert_eq!(queue.pending(), 1);
    assert_eq!(queue.advance(t0 + ms(16)), 1);
    assert_eq!(inner_calls.get(), 1);
    assert_eq!(queue.pending(), 0);
}
