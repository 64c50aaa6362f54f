//! One-shot phase timelines for the page animations.
//!
//! A [`Timeline`] is a degenerate state machine: an initial phase plus a list
//! of cues, each an absolute offset from mount and the phase it switches to.
//! Transitions are unconditional, time-triggered and strictly forward; the
//! last cue is terminal.
//!
//! ```rust
//! use std::time::Duration;
//! use ikul_core::timeline::{PreloaderPhase, preloader};
//!
//! let timeline = preloader();
//! assert_eq!(timeline.phase_at(Duration::from_millis(1000)), PreloaderPhase::Letters(3));
//! assert_eq!(timeline.phase_at(Duration::from_millis(5000)), PreloaderPhase::Done);
//! ```

use std::time::Duration;

use crate::error::TimelineError;

/// Switch to `phase` once `at` has elapsed since mount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cue<P> {
    /// Offset from mount
    pub at: Duration,
    /// Phase entered at that offset
    pub phase: P,
}

impl<P> Cue<P> {
    /// Cue at `ms` milliseconds.
    pub const fn at_ms(ms: u64, phase: P) -> Self {
        Self {
            at: Duration::from_millis(ms),
            phase,
        }
    }
}

/// Ordered, monotonic phase schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timeline<P> {
    initial: P,
    cues: Vec<Cue<P>>,
}

impl<P: Clone + Ord> Timeline<P> {
    /// Validate and build a timeline.
    pub fn new(initial: P, cues: Vec<Cue<P>>) -> Result<Self, TimelineError> {
        validate(&initial, &cues)?;
        Ok(Self { initial, cues })
    }

    fn fixed(initial: P, cues: Vec<Cue<P>>) -> Self {
        debug_assert!(validate(&initial, &cues).is_ok());
        Self { initial, cues }
    }

    /// Phase at mount.
    pub fn initial(&self) -> &P {
        &self.initial
    }

    /// All cues in firing order.
    pub fn cues(&self) -> &[Cue<P>] {
        &self.cues
    }

    /// Terminal phase.
    pub fn final_phase(&self) -> &P {
        self.cues.last().map_or(&self.initial, |cue| &cue.phase)
    }

    /// Offset of the last cue.
    pub fn duration(&self) -> Duration {
        self.cues.last().map_or(Duration::ZERO, |cue| cue.at)
    }

    /// Phase active `elapsed` after mount.
    pub fn phase_at(&self, elapsed: Duration) -> P {
        self.cues
            .iter()
            .take_while(|cue| cue.at <= elapsed)
            .last()
            .map_or_else(|| self.initial.clone(), |cue| cue.phase.clone())
    }

    /// Whether the terminal phase has been reached.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration()
    }
}

/// Move `current` to `next` only if that goes forward. Returns whether it moved.
///
/// Timer callbacks can be delivered late or out of order; this keeps the
/// phase from ever reversing.
pub fn advance<P: Ord>(current: &mut P, next: P) -> bool {
    if next > *current {
        *current = next;
        true
    } else {
        false
    }
}

fn validate<P: Ord>(initial: &P, cues: &[Cue<P>]) -> Result<(), TimelineError> {
    let mut last_at: Option<Duration> = None;
    let mut last_phase = initial;
    for (index, cue) in cues.iter().enumerate() {
        if last_at.is_some_and(|at| cue.at <= at) {
            return Err(TimelineError::OffsetNotIncreasing {
                index,
                at_ms: cue.at.as_millis(),
            });
        }
        if cue.phase <= *last_phase {
            return Err(TimelineError::PhaseNotAdvancing { index });
        }
        last_at = Some(cue.at);
        last_phase = &cue.phase;
    }
    Ok(())
}

/// Preloader choreography.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreloaderPhase {
    /// Wordmark letters appearing; the count revealed so far
    Letters(u8),
    /// "I Know U Like" spelled out
    Phrase,
    /// Phrase collapsing back into the wordmark
    Collapse,
    /// Wordmark fading out
    Fade,
    /// Preloader removed, page shown
    Done,
}

impl PreloaderPhase {
    /// The wordmark, revealed one letter per cue.
    pub const WORDMARK: [&'static str; 4] = ["I", "K", "U", "L"];

    /// How many wordmark letters are visible.
    pub fn revealed_letters(self) -> usize {
        match self {
            Self::Letters(count) => usize::from(count).min(Self::WORDMARK.len()),
            _ => Self::WORDMARK.len(),
        }
    }
}

/// Letters at 300/600/900/1200 ms, phrase at 1800, collapse at 3300, fade at
/// 4200, done at 4500.
pub fn preloader() -> Timeline<PreloaderPhase> {
    use PreloaderPhase::*;
    Timeline::fixed(
        Letters(0),
        vec![
            Cue::at_ms(300, Letters(1)),
            Cue::at_ms(600, Letters(2)),
            Cue::at_ms(900, Letters(3)),
            Cue::at_ms(1200, Letters(4)),
            Cue::at_ms(1800, Phrase),
            Cue::at_ms(3300, Collapse),
            Cue::at_ms(4200, Fade),
            Cue::at_ms(4500, Done),
        ],
    )
}

/// Hero tagline and scroll hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeroPhase {
    /// Tagline typing animation running
    Typing,
    /// Tagline rendered with the gradient
    Typed,
    /// Scroll indicator visible
    ScrollHint,
}

/// Typing done at 3500 ms, scroll hint at 4000 ms.
pub fn hero() -> Timeline<HeroPhase> {
    Timeline::fixed(
        HeroPhase::Typing,
        vec![
            Cue::at_ms(3500, HeroPhase::Typed),
            Cue::at_ms(4000, HeroPhase::ScrollHint),
        ],
    )
}

/// Number of value cards revealed so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RevealPhase(pub u8);

impl RevealPhase {
    /// Whether card `index` is visible.
    pub fn shows(self, index: usize) -> bool {
        index < usize::from(self.0)
    }
}

/// Cards revealed at 200/600/1000 ms after the section scrolls into view.
pub fn reveal() -> Timeline<RevealPhase> {
    Timeline::fixed(
        RevealPhase(0),
        vec![
            Cue::at_ms(200, RevealPhase(1)),
            Cue::at_ms(600, RevealPhase(2)),
            Cue::at_ms(1000, RevealPhase(3)),
        ],
    )
}
