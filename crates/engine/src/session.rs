//! Session: one game driven by the fixed-timestep loop
//!
//! The session owns the game state, the random source and the accumulator.
//! The host owns the collaborators (input, renderer) and calls
//! [`Session::poll`] as often as it likes; frames run at most at 60 Hz.

use std::convert::Infallible;
use std::time::Duration;

use crate::core::{project_into, DrawList, FrameReport, GameState, RandomSource};
use crate::timestep::FixedTimestep;
use crate::types::HeldKeys;

/// Source of held logical keys, polled once per frame
pub trait InputSource {
    type Error;

    fn poll_keys(&mut self) -> Result<HeldKeys, Self::Error>;
}

/// Consumer of the per-frame draw list
pub trait Renderer {
    type Error;

    fn present(&mut self, frame: &DrawList) -> Result<(), Self::Error>;
}

/// Result of one [`Session::poll`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Not enough time has accumulated for a frame
    Idle,
    /// One frame ran and was presented
    Stepped(FrameReport),
    /// Quit was requested; the host should stop polling
    Quit,
}

pub struct Session<R: RandomSource> {
    state: GameState,
    rng: R,
    timestep: FixedTimestep,
    frame: DrawList,
}

impl<R: RandomSource> Session<R> {
    pub fn new(rng: R) -> Self {
        Self::with_timestep(rng, FixedTimestep::sixty_hz())
    }

    pub fn with_timestep(rng: R, timestep: FixedTimestep) -> Self {
        Self {
            state: GameState::new(),
            rng,
            timestep,
            frame: DrawList::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn timestep(&self) -> &FixedTimestep {
        &self.timestep
    }

    /// Draw list produced by the most recent frame
    pub fn last_frame(&self) -> &DrawList {
        &self.frame
    }

    /// Run one frame with the given keys and refresh the draw list
    pub fn step_frame(&mut self, keys: HeldKeys) -> FrameReport {
        let report = self.state.step(keys, &mut self.rng);
        project_into(self.state.board(), self.state.active(), &mut self.frame);
        report
    }

    /// Add elapsed time and, if a frame is due, run one frame against the collaborators
    ///
    /// Once quit has been requested every further poll returns
    /// [`PollOutcome::Quit`] without stepping. The frame on which quit is
    /// first seen is still presented.
    pub fn poll<I, D>(
        &mut self,
        elapsed: Duration,
        input: &mut I,
        renderer: &mut D,
    ) -> Result<PollOutcome, D::Error>
    where
        I: InputSource,
        D: Renderer,
        D::Error: From<I::Error>,
    {
        if self.state.quit_requested() {
            return Ok(PollOutcome::Quit);
        }
        self.timestep.accumulate(elapsed);
        if !self.timestep.is_due() {
            return Ok(PollOutcome::Idle);
        }

        // A failed input poll leaves the step in the accumulator.
        let keys = input.poll_keys()?;
        self.timestep.consume();
        let report = self.step_frame(keys);
        renderer.present(&self.frame)?;

        if report.quit_requested {
            Ok(PollOutcome::Quit)
        } else {
            Ok(PollOutcome::Stepped(report))
        }
    }
}

/// Replays a fixed list of key states, one per frame, then idles
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: Vec<HeldKeys>,
    pos: usize,
}

impl ScriptedInput {
    pub fn new(frames: impl Into<Vec<HeldKeys>>) -> Self {
        Self {
            frames: frames.into(),
            pos: 0,
        }
    }
}

impl InputSource for ScriptedInput {
    type Error = Infallible;

    fn poll_keys(&mut self) -> Result<HeldKeys, Self::Error> {
        let keys = self.frames.get(self.pos).copied().unwrap_or_default();
        self.pos += 1;
        Ok(keys)
    }
}

/// Renderer that only counts presented frames
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer {
    pub frames: u64,
}

impl Renderer for NullRenderer {
    type Error = Infallible;

    fn present(&mut self, _frame: &DrawList) -> Result<(), Self::Error> {
        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SequenceSource;
    use crate::types::{BlockType, LogicalKey, FRAME_MICROS};

    const OVER_ONE_FRAME: Duration = Duration::from_micros(FRAME_MICROS + 1);

    fn session() -> Session<SequenceSource> {
        Session::new(SequenceSource::of_blocks(&[BlockType::I]))
    }

    #[test]
    fn idle_until_a_frame_has_accumulated() {
        let mut s = session();
        let mut input = ScriptedInput::default();
        let mut out = NullRenderer::default();

        let outcome = s.poll(Duration::from_micros(1000), &mut input, &mut out).unwrap();
        assert_eq!(outcome, PollOutcome::Idle);
        assert_eq!(out.frames, 0);
        assert!(s.state().active().is_none());
    }

    #[test]
    fn stepped_frame_is_presented() {
        let mut s = session();
        let mut input = ScriptedInput::default();
        let mut out = NullRenderer::default();

        let outcome = s.poll(OVER_ONE_FRAME, &mut input, &mut out).unwrap();
        match outcome {
            PollOutcome::Stepped(report) => assert_eq!(report.spawned, Some(BlockType::I)),
            other => panic!("expected a stepped frame, got {:?}", other),
        }
        assert_eq!(out.frames, 1);
        // Four I cells on the top row plus the danger line.
        assert_eq!(s.last_frame().len(), 5);
    }

    #[test]
    fn quit_presents_last_frame_then_stops() {
        let mut s = session();
        let mut input = ScriptedInput::new(vec![HeldKeys::new().with(LogicalKey::Quit)]);
        let mut out = NullRenderer::default();

        assert_eq!(
            s.poll(OVER_ONE_FRAME, &mut input, &mut out).unwrap(),
            PollOutcome::Quit
        );
        assert_eq!(out.frames, 1);

        assert_eq!(
            s.poll(OVER_ONE_FRAME, &mut input, &mut out).unwrap(),
            PollOutcome::Quit
        );
        assert_eq!(out.frames, 1);
        assert_eq!(s.state().frame(), 1);
    }

    #[test]
    fn scripted_input_idles_after_script() {
        let mut input = ScriptedInput::new(vec![HeldKeys::new().with(LogicalKey::Left)]);
        assert!(input.poll_keys().unwrap().is_held(LogicalKey::Left));
        assert!(input.poll_keys().unwrap().is_empty());
    }
}
