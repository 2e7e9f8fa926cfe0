use std::fmt;

use flash_core::flip::{CardFace, FlipAnimation, FlipDirection, FlipFrame, FlipStep};
use flash_core::model::{Language, ProgressCounts, WordPair};
use rand::SeedableRng;
use rand::rngs::StdRng;
use storage::{StoreError, WordSetStore};

use super::notice::Notice;
use super::state::{Action, DoneReason, SessionState};
use super::timer::{Scheduler, TimerHandle, TimerKind, TimerTicket};
use crate::error::SessionError;

/// Learning session for one language.
///
/// Owns the remaining words and the current card. Every call runs to
/// completion synchronously; animation and auto-flip are driven by wake-ups
/// the host delivers through [`SessionController::on_timer`].
pub struct SessionController {
    store: WordSetStore,
    scheduler: Box<dyn Scheduler>,
    rng: StdRng,
    language: Option<Language>,
    remaining: Vec<WordPair>,
    total: usize,
    current: Option<WordPair>,
    state: SessionState,
    frame: FlipFrame,
    epoch: u64,
    outstanding: Option<(TimerHandle, TimerTicket)>,
    notice: Option<Notice>,
}

impl SessionController {
    #[must_use]
    pub fn new(store: WordSetStore, scheduler: Box<dyn Scheduler>) -> Self {
        Self {
            store,
            scheduler,
            rng: StdRng::from_os_rng(),
            language: None,
            remaining: Vec::new(),
            total: 0,
            current: None,
            state: SessionState::Idle,
            frame: FlipFrame::resting(CardFace::Front),
            epoch: 0,
            outstanding: None,
            notice: None,
        }
    }

    /// Use a deterministic card order.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn language(&self) -> Option<Language> {
        self.language
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&WordPair> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn remaining(&self) -> &[WordPair] {
        &self.remaining
    }

    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn progress(&self) -> ProgressCounts {
        ProgressCounts::new(self.remaining_count(), self.total_count())
    }

    /// How the card should be drawn right now.
    #[must_use]
    pub fn frame(&self) -> FlipFrame {
        self.frame
    }

    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// The wake-up the controller is currently waiting for.
    #[must_use]
    pub fn outstanding_timer(&self) -> Option<TimerTicket> {
        self.outstanding.map(|(_, ticket)| ticket)
    }

    /// Load a language and show its first card.
    ///
    /// Load failures end the session in [`DoneReason::Unavailable`] instead of
    /// returning an error.
    pub fn start(&mut self, language: Language) {
        self.leave_state();
        self.language = Some(language);
        self.notice = None;
        self.current = None;

        let words = match self.store.load_session(language) {
            Ok(words) => words,
            Err(err) => return self.fail(language, &err),
        };
        let total = words.total;
        self.total = total;
        self.remaining = words.remaining;
        if total == 0 {
            return self.finish(DoneReason::NothingToLearn);
        }
        log::info!(
            "started {language} session with {} / {total} words remaining",
            self.remaining.len()
        );
        self.select_next();
    }

    /// Remove the current card from the remaining words and move on.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotReady` unless a card is at rest.
    pub fn mark_known(&mut self) -> Result<(), SessionError> {
        self.ensure_showing(Action::MarkKnown)?;
        let language = self.language.ok_or(SessionError::NoLanguage)?;

        let position = self
            .current
            .as_ref()
            .and_then(|card| self.remaining.iter().position(|word| word == card));
        if let Some(position) = position {
            self.remaining.remove(position);
            if let Err(err) = self.store.save_remaining(language, &self.remaining) {
                log::error!("{err}");
                self.notice = Some(Notice::ProgressNotSaved);
            }
        }

        self.select_next();
        Ok(())
    }

    /// Leave the current card in place and draw another, possibly the same one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotReady` unless a card is at rest.
    pub fn skip(&mut self) -> Result<(), SessionError> {
        self.ensure_showing(Action::Skip)?;
        self.select_next();
        Ok(())
    }

    /// Turn the front of the card over to the English side.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotReady` unless the front of a card is at rest.
    pub fn auto_flip(&mut self) -> Result<(), SessionError> {
        if self.state != (SessionState::Showing { face: CardFace::Front }) {
            return Err(self.not_ready(Action::AutoFlip));
        }
        self.begin_flip(FlipDirection::FrontToBack);
        Ok(())
    }

    /// Flip the card back to the front, then draw the next card.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotReady` unless a card is at rest.
    pub fn manual_flip_back(&mut self) -> Result<(), SessionError> {
        self.ensure_showing(Action::ManualFlipBack)?;
        self.begin_flip(FlipDirection::BackToFront);
        Ok(())
    }

    /// Forget saved progress and start over with the full table.
    ///
    /// A failed deletion is reported through [`SessionController::notice`]; the
    /// session restarts regardless.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoLanguage` if no language was ever started.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        let language = self.language.ok_or(SessionError::NoLanguage)?;
        self.leave_state();
        self.notice = None;
        self.current = None;

        if let Err(err) = self.store.delete_progress(language) {
            log::warn!("{err}");
            self.notice = Some(Notice::ProgressNotDeleted);
        }

        match self.store.load_full_table(language) {
            Ok(words) => {
                self.total = words.len();
                self.remaining = words;
            }
            Err(err) => {
                self.fail(language, &err);
                return Ok(());
            }
        }
        log::info!("reset {language} session to {} words", self.total);

        if self.total == 0 {
            self.finish(DoneReason::NothingToLearn);
        } else {
            self.select_next();
        }
        Ok(())
    }

    /// End the session. Wake-ups still in flight become no-ops.
    pub fn close(&mut self) {
        self.leave_state();
        self.state = SessionState::Idle;
        self.language = None;
        self.remaining.clear();
        self.total = 0;
        self.current = None;
        self.frame = FlipFrame::resting(CardFace::Front);
    }

    /// Deliver a wake-up. Returns `false` if the ticket was stale and ignored.
    pub fn on_timer(&mut self, ticket: TimerTicket) -> bool {
        match self.outstanding {
            Some((_, pending)) if pending == ticket => self.outstanding = None,
            _ => {
                log::debug!("ignoring stale timer {ticket:?}");
                return false;
            }
        }

        match ticket.kind() {
            TimerKind::AutoFlip => self.auto_flip().is_ok(),
            TimerKind::FlipFrame => {
                self.step_animation();
                true
            }
            TimerKind::NextCard => {
                if self.state.is_showing() {
                    self.select_next();
                }
                true
            }
        }
    }

    fn select_next(&mut self) {
        self.leave_state();
        if self.remaining.is_empty() {
            self.current = None;
            return self.finish(DoneReason::AllLearned);
        }
        let Ok(card) = self.store.pick_random(&self.remaining, &mut self.rng).cloned() else {
            self.current = None;
            return self.finish(DoneReason::AllLearned);
        };

        self.current = Some(card);
        self.state = SessionState::Showing {
            face: CardFace::Front,
        };
        self.frame = FlipFrame::resting(CardFace::Front);
        self.schedule(TimerKind::AutoFlip);
    }

    fn begin_flip(&mut self, direction: FlipDirection) {
        self.leave_state();
        self.state = SessionState::Flipping {
            animation: FlipAnimation::new(direction),
        };
        self.step_animation();
    }

    fn step_animation(&mut self) {
        let SessionState::Flipping { mut animation } = self.state else {
            return;
        };
        match animation.advance() {
            FlipStep::Frame(frame) => {
                self.frame = frame;
                self.state = SessionState::Flipping { animation };
                self.schedule(TimerKind::FlipFrame);
            }
            FlipStep::Finished(face) => {
                self.leave_state();
                self.frame = FlipFrame::resting(face);
                self.state = SessionState::Showing { face };
                if animation.direction() == FlipDirection::BackToFront {
                    self.schedule(TimerKind::NextCard);
                }
            }
        }
    }

    fn finish(&mut self, reason: DoneReason) {
        log::info!("session done: {}", reason.message());
        self.state = SessionState::Done { reason };
        self.frame = FlipFrame::resting(CardFace::Front);
    }

    fn fail(&mut self, language: Language, err: &StoreError) {
        log::error!("{err}");
        self.remaining.clear();
        self.total = 0;
        self.current = None;
        self.finish(DoneReason::Unavailable {
            message: format!("Cannot load language {language}"),
        });
    }

    fn schedule(&mut self, kind: TimerKind) {
        self.cancel_timer();
        let ticket = TimerTicket::new(self.epoch, kind);
        let handle = self.scheduler.schedule(kind.delay(), ticket);
        self.outstanding = Some((handle, ticket));
    }

    fn cancel_timer(&mut self) {
        if let Some((handle, _)) = self.outstanding.take() {
            self.scheduler.cancel(handle);
        }
    }

    /// Every state-exiting transition goes through here.
    fn leave_state(&mut self) {
        self.cancel_timer();
        self.epoch = self.epoch.wrapping_add(1);
    }

    fn ensure_showing(&self, action: Action) -> Result<(), SessionError> {
        if self.state.is_showing() {
            Ok(())
        } else {
            Err(self.not_ready(action))
        }
    }

    fn not_ready(&self, action: Action) -> SessionError {
        SessionError::NotReady {
            action,
            state: self.state.name(),
        }
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

impl fmt::Debug for SessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionController")
            .field("language", &self.language)
            .field("state", &self.state)
            .field("remaining_len", &self.remaining.len())
            .field("total", &self.total)
            .field("epoch", &self.epoch)
            .field("outstanding", &self.outstanding)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
