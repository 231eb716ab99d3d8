//! One-shot animations triggered by viewport intersection.
//!
//! Fade-ins, stat counters, and skill bars each start the first time their
//! element scrolls into view and never run again, like an observer that
//! unobserves its target after the first hit.

use std::collections::HashSet;
use std::time::Duration;

/// Frame interval for counter animation (~60fps).
pub const COUNTER_FRAME: Duration = Duration::from_millis(16);

/// Total counter animation time.
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealKind {
    FadeIn,
    Counter,
    SkillBar,
}

impl RevealKind {
    /// Fraction of the element that must be visible to trigger.
    pub fn threshold(&self) -> f64 {
        match self {
            RevealKind::FadeIn | RevealKind::Counter => 0.2,
            RevealKind::SkillBar => 0.5,
        }
    }
}

/// Remembers which elements have already been revealed.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: HashSet<String>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an intersection sample for `target`.
    ///
    /// Returns `true` exactly once per target: the first time its visible
    /// ratio reaches the threshold for `kind`.
    pub fn intersect(&mut self, target: &str, kind: RevealKind, ratio: f64) -> bool {
        if ratio < kind.threshold() || self.revealed.contains(target) {
            return false;
        }
        tracing::trace!(element = target, ?kind, ratio, "Revealed");
        self.revealed.insert(target.to_string());
        true
    }

    pub fn is_revealed(&self, target: &str) -> bool {
        self.revealed.contains(target)
    }
}

/// Counts from zero up to a target over [`COUNTER_DURATION`].
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    current: f64,
    step: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        let frames = COUNTER_DURATION.as_secs_f64() / COUNTER_FRAME.as_secs_f64();
        Self {
            target,
            current: 0.0,
            step: target as f64 / frames,
            done: false,
        }
    }

    /// Value to display after the next frame, `None` once finished.
    ///
    /// Intermediate frames show the floor of the running value; the last
    /// frame shows the exact target.
    pub fn tick(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }
        self.current += self.step;
        if self.current < self.target as f64 {
            Some(self.current.floor() as u64)
        } else {
            self.done = true;
            Some(self.target)
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn target(&self) -> u64 {
        self.target
    }
}

/// CSS width for a skill bar: its progress once revealed, zero before.
pub fn skill_bar_width(progress: u8, revealed: bool) -> String {
    if revealed {
        format!("{}%", progress.min(100))
    } else {
        "0%".to_string()
    }
}
