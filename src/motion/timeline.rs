//! Timeline sequencer: ordered reveal steps with relative start offsets.
//!
//! A timeline composes per-element tweens into one unit that plays, reverses,
//! or cancels atomically. Steps may overlap by starting relative to the
//! previous step's end (a negative offset starts a step before the previous
//! one finishes), which is what produces the choreographed, overlapping
//! entrances used by every section.

use super::oneshot::OneShot;
use super::tween::{Motion, Tween};

/// Identifier of an animated element within one timeline.
pub type TargetId = usize;

/// Where a step starts relative to the rest of the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepStart {
    /// Immediately after the previous step ends
    After,
    /// Offset in seconds against the previous step's end (negative = overlap)
    Relative(f32),
    /// At an absolute time from the timeline's start
    At(f32),
}

#[derive(Debug, Clone, Copy)]
struct ScheduledStep {
    target: TargetId,
    tween: Tween,
    start: f32,
}

impl ScheduledStep {
    fn end(&self) -> f32 {
        self.start + self.tween.duration
    }
}

/// Playback direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Builder assembling steps into a [`Timeline`].
#[derive(Debug, Default)]
pub struct TimelineBuilder {
    steps: Vec<ScheduledStep>,
    cursor: f32,
}

impl TimelineBuilder {
    /// Appends a step for `target` at the given start position.
    #[must_use]
    pub fn step(mut self, target: TargetId, tween: Tween, start: StepStart) -> Self {
        let start = match start {
            StepStart::After => self.cursor,
            StepStart::Relative(offset) => (self.cursor + offset).max(0.0),
            StepStart::At(at) => at.max(0.0),
        };
        let step = ScheduledStep {
            target,
            tween,
            start,
        };
        self.cursor = self.cursor.max(step.end());
        self.steps.push(step);
        self
    }

    /// Appends the same tween for a group of targets, delaying each successive
    /// element's start by `gap` seconds. The group as a whole starts at the
    /// given position.
    #[must_use]
    pub fn stagger(mut self, targets: &[TargetId], tween: Tween, gap: f32, start: StepStart) -> Self {
        let base = match start {
            StepStart::After => self.cursor,
            StepStart::Relative(offset) => (self.cursor + offset).max(0.0),
            StepStart::At(at) => at.max(0.0),
        };
        let mut last_end = self.cursor;
        for (i, &target) in targets.iter().enumerate() {
            let step = ScheduledStep {
                target,
                tween,
                start: base + gap * i as f32,
            };
            last_end = last_end.max(step.end());
            self.steps.push(step);
        }
        self.cursor = last_end;
        self
    }

    /// Finishes the timeline. Steps are ordered by start time so sampling can
    /// resolve "latest applicable step wins" for targets animated twice.
    #[must_use]
    pub fn build(mut self) -> Timeline {
        self.steps
            .sort_by(|a, b| a.start.partial_cmp(&b.start).unwrap_or(std::cmp::Ordering::Equal));
        let total = self
            .steps
            .iter()
            .map(ScheduledStep::end)
            .fold(0.0_f32, f32::max);
        Timeline {
            steps: self.steps,
            total,
            clock: 0.0,
            direction: Direction::Forward,
            playing: false,
            cancelled: false,
            completion: OneShot::new(),
        }
    }
}

/// An ordered composition of reveal steps sharing one clock.
#[derive(Debug)]
pub struct Timeline {
    steps: Vec<ScheduledStep>,
    total: f32,
    clock: f32,
    direction: Direction,
    playing: bool,
    cancelled: bool,
    completion: OneShot,
}

impl Timeline {
    /// Starts building a timeline.
    #[must_use]
    pub fn builder() -> TimelineBuilder {
        TimelineBuilder::default()
    }

    /// Plays the timeline forward from its current clock.
    pub fn play(&mut self) {
        if self.cancelled {
            return;
        }
        self.direction = Direction::Forward;
        self.playing = true;
    }

    /// Plays the timeline backward from its current clock.
    pub fn reverse(&mut self) {
        if self.cancelled {
            return;
        }
        self.direction = Direction::Backward;
        self.playing = true;
    }

    /// Stops all interpolation immediately. A cancelled timeline never fires
    /// its completion and ignores later play/reverse calls.
    pub fn cancel(&mut self) {
        self.playing = false;
        self.cancelled = true;
    }

    /// Whether the timeline has been cancelled.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Whether the clock is currently moving.
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    /// Advances the clock by `dt` seconds in the current direction.
    ///
    /// Returns true exactly once, on the tick where forward playback first
    /// reaches the end of the timeline.
    pub fn advance(&mut self, dt: f32) -> bool {
        if !self.playing || self.cancelled {
            return false;
        }
        match self.direction {
            Direction::Forward => {
                self.clock = (self.clock + dt).min(self.total);
                if self.clock >= self.total {
                    self.playing = false;
                    return self.completion.fire();
                }
            }
            Direction::Backward => {
                self.clock = (self.clock - dt).max(0.0);
                if self.clock <= 0.0 {
                    self.playing = false;
                }
            }
        }
        false
    }

    /// Jumps straight to the fully-played state (reduced motion).
    ///
    /// Returns true if this fired the completion signal.
    pub fn finish(&mut self) -> bool {
        if self.cancelled {
            return false;
        }
        self.clock = self.total;
        self.direction = Direction::Forward;
        self.playing = false;
        self.completion.fire()
    }

    /// Jumps straight back to the unplayed state (reduced motion reversal).
    pub fn rewind(&mut self) {
        if self.cancelled {
            return;
        }
        self.clock = 0.0;
        self.playing = false;
    }

    /// Samples the current visual state of `target`.
    ///
    /// Targets without any step are a silent no-op and sample as resting.
    /// Before a target's first step begins it holds that step's initial state;
    /// afterwards the latest step whose start has been reached wins.
    #[must_use]
    pub fn sample(&self, target: TargetId) -> Motion {
        let mut result: Option<Motion> = None;
        for step in self.steps.iter().filter(|s| s.target == target) {
            if self.clock >= step.start {
                result = Some(step.tween.sample(self.clock - step.start));
            } else if result.is_none() {
                result = Some(step.tween.from);
            }
        }
        result.unwrap_or_else(Motion::visible)
    }

    /// Eased progress of the latest applicable step for `target` in [0, 1].
    #[must_use]
    pub fn step_progress(&self, target: TargetId) -> f32 {
        let mut result = 0.0;
        for step in self.steps.iter().filter(|s| s.target == target) {
            if self.clock >= step.start {
                result = step.tween.progress(self.clock - step.start);
            }
        }
        result
    }

    /// Overall clock progress in [0, 1].
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.total <= 0.0 {
            1.0
        } else {
            (self.clock / self.total).clamp(0.0, 1.0)
        }
    }

    /// Total duration in seconds.
    #[must_use]
    pub const fn total(&self) -> f32 {
        self.total
    }

    /// Whether forward playback has reached the end.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.clock >= self.total
    }

    /// Whether the clock sits at the very start.
    #[must_use]
    pub fn at_start(&self) -> bool {
        self.clock <= 0.0
    }
}
