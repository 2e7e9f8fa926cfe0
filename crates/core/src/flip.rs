//! Card flip animation geometry.
//!
//! The animation squeezes the card to a sliver and widens it again, swapping
//! the printed face at the midpoint. It is advanced one frame per scheduled
//! wake-up; nothing here sleeps.

use std::time::Duration;

/// Width of a card at rest, in pixels.
pub const CARD_WIDTH: u32 = 800;

/// Number of frame intervals in one flip. Frames are drawn for steps `0..=FLIP_STEPS`.
pub const FLIP_STEPS: u32 = 10;

/// How long the front of a fresh card is shown before it flips by itself.
pub const AUTO_FLIP_DELAY: Duration = Duration::from_millis(3000);

/// Delay between two animation frames.
pub const FLIP_FRAME_INTERVAL: Duration = Duration::from_millis(30);

/// Pause after a back-to-front flip before the next card is drawn.
pub const NEXT_CARD_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardFace {
    /// Foreign-language term.
    Front,
    /// English term.
    Back,
}

impl CardFace {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            CardFace::Front => CardFace::Back,
            CardFace::Back => CardFace::Front,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlipDirection {
    FrontToBack,
    BackToFront,
}

impl FlipDirection {
    #[must_use]
    pub const fn from_face(self) -> CardFace {
        match self {
            FlipDirection::FrontToBack => CardFace::Front,
            FlipDirection::BackToFront => CardFace::Back,
        }
    }

    #[must_use]
    pub const fn to_face(self) -> CardFace {
        self.from_face().flipped()
    }
}

/// What the card looks like for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipFrame {
    pub face: CardFace,
    pub width: u32,
}

impl FlipFrame {
    /// A card lying still at full width.
    #[must_use]
    pub const fn resting(face: CardFace) -> Self {
        Self {
            face,
            width: CARD_WIDTH,
        }
    }
}

/// Outcome of advancing an animation by one wake-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipStep {
    /// Draw this frame and schedule another wake-up.
    Frame(FlipFrame),
    /// The flip is over; the card now rests on this face.
    Finished(CardFace),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipAnimation {
    direction: FlipDirection,
    step: u32,
}

impl FlipAnimation {
    #[must_use]
    pub const fn new(direction: FlipDirection) -> Self {
        Self { direction, step: 0 }
    }

    #[must_use]
    pub const fn direction(&self) -> FlipDirection {
        self.direction
    }

    /// Frame for a given step, or `None` past the last one.
    #[must_use]
    pub fn frame_at(direction: FlipDirection, step: u32) -> Option<FlipFrame> {
        if step > FLIP_STEPS {
            return None;
        }
        let midpoint = FLIP_STEPS / 2;
        let progress = f64::from(step) / f64::from(FLIP_STEPS);
        let scale = 1.0 - (0.5 - progress).abs() * 2.0;
        // Truncates toward zero; scale stays within 0.0..=1.0.
        let width = ((f64::from(CARD_WIDTH) * scale) as u32).max(1);
        let shows_front = match direction {
            FlipDirection::FrontToBack => step < midpoint,
            FlipDirection::BackToFront => step >= midpoint,
        };
        let face = if shows_front {
            CardFace::Front
        } else {
            CardFace::Back
        };
        Some(FlipFrame { face, width })
    }

    /// Produce the current frame and move on, or report the resting face.
    pub fn advance(&mut self) -> FlipStep {
        match Self::frame_at(self.direction, self.step) {
            Some(frame) => {
                self.step += 1;
                FlipStep::Frame(frame)
            }
            None => FlipStep::Finished(self.direction.to_face()),
        }
    }
}
