//! Note Auto-Save State Machine
//!
//! Tracks the editor-sync cycle: an edit arms a debounce timer, the timer
//! issues one persist call, and at most one persist call is in flight at a
//! time. A save requested while another is in flight (manual save, or a timer
//! elapsing mid-save) is queued and issued once, right after the in-flight
//! call succeeds. Timers are identified by a generation counter; arming a new
//! one supersedes the previous, so a burst of edits inside the window
//! coalesces into a single save carrying the latest content.
//!
//! The machine is pure state; the component drives it with `TimeoutFuture`
//! timers and re-reads the current content whenever it is told to persist.

/// Debounce window between the last edit and the persist call
pub const DEBOUNCE_MS: u32 = 1_500;

/// Where the sync cycle currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveState {
    /// No pending change
    #[default]
    Idle,
    /// Change detected, debounce timer armed
    Pending,
    /// Persist call in flight
    Saving,
}

/// What the status indicator should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    None,
    Saving,
    Saved,
    Failed,
}

#[derive(Debug, Default)]
pub struct Autosave {
    state: SaveState,
    generation: u64,
    queued: bool,
}

impl Autosave {
    pub fn state(&self) -> SaveState {
        self.state
    }

    /// Content changed. Returns the generation the caller arms a timer with;
    /// any previously armed timer is superseded.
    pub fn edited(&mut self) -> u64 {
        self.generation += 1;
        if self.state == SaveState::Idle {
            self.state = SaveState::Pending;
        }
        self.generation
    }

    /// The timer armed with `gen` elapsed. True when this timer should issue
    /// the persist call now.
    ///
    /// A matching generation in `Idle` means the in-flight save finished
    /// before this timer fired; the edit it belongs to is still unpersisted,
    /// so it saves too.
    pub fn timer_elapsed(&mut self, gen: u64) -> bool {
        if gen != self.generation {
            return false;
        }
        match self.state {
            SaveState::Idle | SaveState::Pending => {
                self.state = SaveState::Saving;
                true
            }
            SaveState::Saving => {
                self.queued = true;
                false
            }
        }
    }

    /// Manual save requested. True when the caller should issue the persist
    /// call now; false when one is already in flight and a single follow-up
    /// was queued instead.
    pub fn save_now(&mut self) -> bool {
        // supersede any armed debounce timer
        self.generation += 1;
        match self.state {
            SaveState::Idle | SaveState::Pending => {
                self.state = SaveState::Saving;
                true
            }
            SaveState::Saving => {
                self.queued = true;
                false
            }
        }
    }

    /// The persist call finished. True when a queued follow-up save should be
    /// issued immediately. A failed save drops the queue: no automatic retry,
    /// the next edit restarts the cycle.
    pub fn finished(&mut self, ok: bool) -> bool {
        if ok && self.queued {
            self.queued = false;
            // state stays Saving for the follow-up call
            true
        } else {
            self.queued = false;
            self.state = SaveState::Idle;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debounce_coalesces_rapid_edits_into_one_save() {
        let mut sm = Autosave::default();
        let g1 = sm.edited();
        let g2 = sm.edited();
        let g3 = sm.edited();
        assert_eq!(sm.state(), SaveState::Pending);

        // earlier timers were superseded and must not save
        assert!(!sm.timer_elapsed(g1));
        assert!(!sm.timer_elapsed(g2));

        assert!(sm.timer_elapsed(g3));
        assert_eq!(sm.state(), SaveState::Saving);

        assert!(!sm.finished(true));
        assert_eq!(sm.state(), SaveState::Idle);
    }

    #[test]
    fn manual_save_supersedes_armed_timer() {
        let mut sm = Autosave::default();
        let gen = sm.edited();
        assert!(sm.save_now());
        // the debounced timer fires later and must not double-save
        assert!(!sm.timer_elapsed(gen));
        assert!(!sm.finished(true));
        assert_eq!(sm.state(), SaveState::Idle);
    }

    #[test]
    fn manual_save_during_flight_queues_exactly_one_follow_up() {
        let mut sm = Autosave::default();
        assert!(sm.save_now());
        // repeated manual saves while in flight collapse into one follow-up
        assert!(!sm.save_now());
        assert!(!sm.save_now());

        assert!(sm.finished(true));
        assert_eq!(sm.state(), SaveState::Saving);
        assert!(!sm.finished(true));
        assert_eq!(sm.state(), SaveState::Idle);
    }

    #[test]
    fn edit_while_saving_persists_after_flight_ends() {
        let mut sm = Autosave::default();
        assert!(sm.save_now());
        let gen = sm.edited();
        assert_eq!(sm.state(), SaveState::Saving);

        // timer elapses while the call is still in flight: queued, not raced
        assert!(!sm.timer_elapsed(gen));
        assert!(sm.finished(true));
        assert!(!sm.finished(true));
        assert_eq!(sm.state(), SaveState::Idle);
    }

    #[test]
    fn edit_whose_timer_outlives_the_flight_still_persists() {
        let mut sm = Autosave::default();
        assert!(sm.save_now());
        let gen = sm.edited();
        // the save finishes before the debounce window closes
        assert!(!sm.finished(true));
        assert_eq!(sm.state(), SaveState::Idle);

        // the live timer then fires and must still save the newer content
        assert!(sm.timer_elapsed(gen));
        assert_eq!(sm.state(), SaveState::Saving);
    }

    #[test]
    fn failure_drops_queued_follow_up() {
        let mut sm = Autosave::default();
        assert!(sm.save_now());
        assert!(!sm.save_now());

        assert!(!sm.finished(false));
        assert_eq!(sm.state(), SaveState::Idle);

        // a fresh edit restarts the cycle normally
        let gen = sm.edited();
        assert!(sm.timer_elapsed(gen));
    }

    #[test]
    fn stale_timer_in_idle_does_nothing() {
        let mut sm = Autosave::default();
        let gen = sm.edited();
        assert!(sm.timer_elapsed(gen));
        assert!(!sm.finished(true));
        // a superseded generation stays inert no matter the state
        assert!(!sm.timer_elapsed(gen - 1));
        assert_eq!(sm.state(), SaveState::Idle);
    }
}
