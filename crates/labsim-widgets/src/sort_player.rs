//! Playback state for one sorting visualizer card.

use rand::Rng;

use labsim_core::sorting::{apply_step, generate_steps, replay, random_array, Algorithm};
use labsim_types::{PlaybackSettings, SortStep, StepTrace};

/// Bars per visualizer card
const ARRAY_LEN: usize = 24;

/// Bar value spread passed to the random generator
const VALUE_SPREAD: u32 = 120;

/// One algorithm's visualizer: the generated trace, the array as replayed
/// so far, and the play/pause clock state. Driven by `tick(now_ms)` from
/// the host's frame loop.
#[derive(Debug, Clone)]
pub struct SortPlayer {
    algorithm: Algorithm,
    trace: StepTrace,

    /// Array state after the first `pos` steps
    array: Vec<u32>,

    /// Steps applied so far; also the index of the pending step
    pos: usize,

    playing: bool,
    settings: PlaybackSettings,
    delay_ms: u32,

    /// When the next automatic step is due, in the caller's clock
    next_step_at: Option<u64>,
}

impl SortPlayer {
    /// New player over a fresh random array
    pub fn new<R: Rng>(algorithm: Algorithm, rng: &mut R) -> Self {
        Self::with_array(algorithm, random_array(rng, ARRAY_LEN, VALUE_SPREAD))
    }

    /// New player over a caller-supplied array
    pub fn with_array(algorithm: Algorithm, array: Vec<u32>) -> Self {
        let trace = generate_steps(algorithm, &array);
        let settings = PlaybackSettings::default();
        Self {
            algorithm,
            array,
            trace,
            pos: 0,
            playing: false,
            delay_ms: settings.default_delay(),
            settings,
            next_step_at: None,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Current bar heights for rendering
    pub fn array(&self) -> &[u32] {
        &self.array
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn step_count(&self) -> usize {
        self.trace.len()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_done(&self) -> bool {
        self.pos >= self.trace.len()
    }

    /// The step about to be applied, for highlighting the involved bars
    pub fn highlighted(&self) -> Option<&SortStep> {
        self.trace.steps.get(self.pos)
    }

    /// Begin automatic stepping from the next tick
    pub fn play(&mut self) {
        if self.is_done() {
            return;
        }
        self.playing = true;
        self.next_step_at = None;
    }

    /// Stop automatic stepping; any step already scheduled is discarded
    pub fn pause(&mut self) {
        self.playing = false;
        self.next_step_at = None;
    }

    /// Advance the clock. Applies at most one step per call, when playing
    /// and the step delay has elapsed. Returns true if a step was applied.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.playing {
            return false;
        }
        match self.next_step_at {
            None => {
                // first tick after play: schedule, don't step
                self.next_step_at = Some(now_ms + u64::from(self.delay_ms));
                false
            }
            Some(due) if now_ms >= due => {
                self.step_forward();
                if self.playing {
                    self.next_step_at = Some(now_ms + u64::from(self.delay_ms));
                }
                true
            }
            Some(_) => false,
        }
    }

    /// Apply the pending step. Pauses automatically once the trace is
    /// exhausted.
    pub fn step_forward(&mut self) {
        if let Some(step) = self.trace.steps.get(self.pos) {
            apply_step(&mut self.array, step);
            self.pos += 1;
        }
        if self.is_done() {
            self.pause();
        }
    }

    /// Undo the last applied step by replaying the prefix before it.
    /// Manual back-stepping pauses playback.
    pub fn step_backward(&mut self) {
        self.pause();
        if self.pos > 0 {
            self.pos -= 1;
            self.array = replay(&self.trace, self.pos);
        }
    }

    /// Rewind to the unsorted base array
    pub fn reset(&mut self) {
        self.pause();
        self.pos = 0;
        self.array = self.trace.base.clone();
    }

    /// Replace the array with a fresh random one and rewind
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        let array = random_array(rng, ARRAY_LEN, VALUE_SPREAD);
        self.trace = generate_steps(self.algorithm, &array);
        self.array = array;
        self.pos = 0;
        self.pause();
    }

    /// Move the speed slider; takes effect on the next scheduled step
    pub fn set_speed(&mut self, speed: u32) {
        self.delay_ms = self.settings.delay_for_speed(speed);
        self.next_step_at = None;
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> SortPlayer {
        SortPlayer::with_array(Algorithm::Bubble, vec![3, 1, 2])
    }

    #[test]
    fn test_forward_then_backward_restores_state() {
        let mut p = player();
        p.step_forward();
        p.step_forward();
        let snapshot = p.array().to_vec();
        p.step_forward();
        p.step_backward();
        assert_eq!(p.array(), snapshot);
        assert_eq!(p.pos(), 2);
    }

    #[test]
    fn test_backward_at_start_is_noop() {
        let mut p = player();
        p.step_backward();
        assert_eq!(p.pos(), 0);
        assert_eq!(p.array(), &[3, 1, 2]);
    }

    #[test]
    fn test_tick_respects_delay_and_pause() {
        let mut p = player();
        p.set_speed(800); // fastest: 60 ms delay
        p.play();

        // first tick only schedules
        assert!(!p.tick(1_000));
        // too early
        assert!(!p.tick(1_030));
        // due
        assert!(p.tick(1_060));
        assert_eq!(p.pos(), 1);

        // pause cancels the scheduled step
        p.pause();
        assert!(!p.tick(10_000));
        assert_eq!(p.pos(), 1);
    }

    #[test]
    fn test_playback_stops_at_end() {
        let mut p = player();
        p.play();
        let mut now = 0;
        for _ in 0..1_000 {
            now += 1_000;
            p.tick(now);
            if p.is_done() {
                break;
            }
        }
        assert!(p.is_done());
        assert!(!p.is_playing());
        assert_eq!(p.array(), &[1, 2, 3]);
        assert!(p.highlighted().is_none());
    }

    #[test]
    fn test_reset_rewinds_to_base() {
        let mut p = player();
        p.step_forward();
        p.step_forward();
        p.reset();
        assert_eq!(p.pos(), 0);
        assert_eq!(p.array(), &[3, 1, 2]);
        assert!(!p.is_playing());
    }

    #[test]
    fn test_speed_slider_inverts_to_delay() {
        let mut p = player();
        p.set_speed(800);
        assert_eq!(p.delay_ms(), 60);
        p.set_speed(60);
        assert_eq!(p.delay_ms(), 800);
    }
}
