//! Character-by-character reveal of a fixed string (the hero "typing" line).
//!
//! The progress counter only moves through [`next_progress`]. Scheduling is
//! left to whoever drives [`Reveal::tick`]; [`RevealTimer`] makes sure that
//! driver owns at most one live timer.

use std::time::Duration;

/// Delay between two revealed characters.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    Advance(usize),
    Done,
}

pub fn next_progress(current: usize, target_len: usize) -> RevealStep {
    if current < target_len {
        RevealStep::Advance(current + 1)
    } else {
        RevealStep::Done
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    target: String,
    // in chars, not bytes
    len: usize,
    progress: usize,
}

impl Reveal {
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        let len = target.chars().count();
        Self {
            target,
            len,
            progress: 0,
        }
    }

    pub fn progress(&self) -> usize {
        self.progress
    }

    pub fn is_done(&self) -> bool {
        self.progress >= self.len
    }

    /// The prefix currently shown.
    pub fn visible(&self) -> &str {
        let end = self
            .target
            .char_indices()
            .nth(self.progress)
            .map(|(i, _)| i)
            .unwrap_or(self.target.len());
        &self.target[..end]
    }

    /// Reveals one more character. Returns the new prefix, or `None` once the
    /// whole target is visible.
    pub fn tick(&mut self) -> Option<&str> {
        match next_progress(self.progress, self.len) {
            RevealStep::Advance(next) => {
                self.progress = next;
                Some(self.visible())
            }
            RevealStep::Done => None,
        }
    }

    pub fn reset(&mut self) {
        self.progress = 0;
    }

    /// Jumps straight to the fully revealed state.
    pub fn finish(&mut self) {
        self.progress = self.len;
    }

    /// Every prefix the reveal will still emit, in order.
    pub fn frames(self) -> Frames {
        Frames { reveal: self }
    }
}

pub struct Frames {
    reveal: Reveal,
}

impl Iterator for Frames {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.reveal.tick().map(str::to_owned)
    }
}

/// A scheduled, repeating callback that can be stopped.
pub trait TimerHandle {
    fn cancel(self);
}

/// Owner of the (at most one) running reveal timer.
///
/// Dropping the owner cancels whatever it still holds.
pub struct RevealTimer<H: TimerHandle> {
    active: Option<H>,
}

impl<H: TimerHandle> Default for RevealTimer<H> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<H: TimerHandle> RevealTimer<H> {
    /// Cancels the running timer, if any, then schedules a new one.
    pub fn start<E>(&mut self, spawn: impl FnOnce() -> Result<H, E>) -> Result<(), E> {
        self.cancel();
        self.active = Some(spawn()?);
        Ok(())
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.active.take() {
            log::trace!("reveal timer cancelled");
            handle.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }
}

impl<H: TimerHandle> Drop for RevealTimer<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct FakeHandle {
        live: Arc<AtomicUsize>,
    }

    impl FakeHandle {
        fn spawn(live: &Arc<AtomicUsize>) -> Result<Self, Infallible> {
            live.fetch_add(1, Ordering::SeqCst);
            Ok(Self { live: live.clone() })
        }
    }

    impl TimerHandle for FakeHandle {
        fn cancel(self) {
            self.live.fetch_sub(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_next_progress() {
        assert_eq!(next_progress(0, 3), RevealStep::Advance(1));
        assert_eq!(next_progress(2, 3), RevealStep::Advance(3));
        assert_eq!(next_progress(3, 3), RevealStep::Done);
        assert_eq!(next_progress(0, 0), RevealStep::Done);
    }

    #[test]
    fn test_two_char_reveal() {
        let mut reveal = Reveal::new("Hi");
        assert_eq!(reveal.visible(), "");
        assert_eq!(reveal.tick(), Some("H"));
        assert_eq!(reveal.tick(), Some("Hi"));
        assert_eq!(reveal.tick(), None);
        assert_eq!(reveal.tick(), None);
        assert_eq!(reveal.visible(), "Hi");
        assert!(reveal.is_done());
    }

    #[test]
    fn test_frames_stop_after_full_text() {
        let frames: Vec<String> = Reveal::new("Hi").frames().collect();
        assert_eq!(frames, vec!["H", "Hi"]);
    }

    #[test]
    fn test_empty_target_is_terminal() {
        let mut reveal = Reveal::new("");
        assert!(reveal.is_done());
        assert_eq!(reveal.tick(), None);
        assert_eq!(Reveal::new("").frames().count(), 0);
    }

    #[test]
    fn test_multibyte_prefixes() {
        let frames: Vec<String> = Reveal::new("né→x").frames().collect();
        assert_eq!(frames, vec!["n", "né", "né→", "né→x"]);
    }

    #[test]
    fn test_progress_is_monotonic_until_reset() {
        let mut reveal = Reveal::new("Backend");
        let mut last = reveal.progress();
        while reveal.tick().is_some() {
            assert!(reveal.progress() > last);
            last = reveal.progress();
        }
        assert_eq!(last, 7);
        reveal.reset();
        assert_eq!(reveal.progress(), 0);
        assert_eq!(reveal.visible(), "");
    }

    #[test]
    fn test_finish() {
        let mut reveal = Reveal::new("abc");
        reveal.tick();
        reveal.finish();
        assert_eq!(reveal.visible(), "abc");
        assert_eq!(reveal.tick(), None);
    }

    #[test]
    fn test_restart_keeps_single_timer() {
        let live = Arc::new(AtomicUsize::new(0));
        let mut timer = RevealTimer::default();
        timer.start(|| FakeHandle::spawn(&live)).unwrap();
        assert_eq!(live.load(Ordering::SeqCst), 1);

        // remount
        timer.start(|| FakeHandle::spawn(&live)).unwrap();
        assert_eq!(live.load(Ordering::SeqCst), 1);
        assert!(timer.is_running());

        timer.cancel();
        assert_eq!(live.load(Ordering::SeqCst), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_previous_timer_cancelled_before_spawn() {
        let live = Arc::new(AtomicUsize::new(0));
        let mut timer = RevealTimer::default();
        timer.start(|| FakeHandle::spawn(&live)).unwrap();
        timer
            .start(|| {
                assert_eq!(live.load(Ordering::SeqCst), 0);
                FakeHandle::spawn(&live)
            })
            .unwrap();
    }

    #[test]
    fn test_failed_spawn_leaves_nothing_running() {
        let live = Arc::new(AtomicUsize::new(0));
        let mut timer = RevealTimer::default();
        timer.start(|| FakeHandle::spawn(&live)).unwrap();
        let res = timer.start(|| Err::<FakeHandle, _>("no window"));
        assert_eq!(res, Err("no window"));
        assert!(!timer.is_running());
        assert_eq!(live.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_drop_cancels() {
        let live = Arc::new(AtomicUsize::new(0));
        {
            let mut timer = RevealTimer::default();
            timer.start(|| FakeHandle::spawn(&live)).unwrap();
        }
        assert_eq!(live.load(Ordering::SeqCst), 0);
    }
}
