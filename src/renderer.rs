//! Frame dispatch and outcome reporting.

use embassy_time::Duration;

use crate::color::Rgbw;
use crate::config::RenderConfig;
use crate::mode::Mode;
use crate::modes;
use crate::phase::PhaseTracker;

/// Why a frame left the pixel array untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The payload belongs to a universe this output does not listen to.
    UniverseMismatch,
    /// The payload is shorter than the selected mode requires.
    ShortFrame,
}

/// Result of one render call.
///
/// The renderer never raises an error: a frame either applies or is
/// silently skipped with the pixels left exactly as they were. Hosts and
/// tests observe the no-op here instead of inspecting pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The frame was rendered into the pixel array.
    Applied,
    /// Nothing was written.
    Skipped(SkipReason),
}

impl FrameOutcome {
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Lifetime counters for applied and skipped frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub applied: u32,
    pub skipped: u32,
}

/// Renders one universe's channel payloads into an `N`-pixel frame.
///
/// Owns the per-output animation phase, so independent outputs get
/// independent, deterministic time behavior. `render` runs to completion
/// with no I/O and must not be called concurrently for the same instance.
pub struct ModeRenderer<const N: usize> {
    config: RenderConfig,
    phase: PhaseTracker,
    stats: RenderStats,
}

impl<const N: usize> ModeRenderer<N> {
    pub const fn new(config: RenderConfig) -> Self {
        Self {
            config,
            phase: PhaseTracker::new(),
            stats: RenderStats {
                applied: 0,
                skipped: 0,
            },
        }
    }

    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Replace the settings. The animation phase carries over.
    pub fn set_config(&mut self, config: RenderConfig) {
        self.config = config;
    }

    pub const fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Render one channel payload into `frame`.
    ///
    /// `universe` identifies the payload's DMX universe, `now` is time since
    /// startup. On any skip the frame keeps its previous contents.
    pub fn render(
        &mut self,
        universe: u16,
        data: &[u8],
        now: Duration,
        frame: &mut [Rgbw; N],
    ) -> FrameOutcome {
        let outcome = self.dispatch(universe, data, now, frame);
        match outcome {
            FrameOutcome::Applied => self.stats.applied += 1,
            FrameOutcome::Skipped(reason) => {
                self.stats.skipped += 1;
                log::debug!(
                    "skipping frame for universe {universe} ({} bytes): {reason:?}",
                    data.len()
                );
            }
        }
        outcome
    }

    fn dispatch(
        &mut self,
        universe: u16,
        data: &[u8],
        now: Duration,
        frame: &mut [Rgbw; N],
    ) -> FrameOutcome {
        let config = &self.config;
        let rendered = match config.mode {
            // passthrough addresses every universe relative to its own
            Mode::Passthrough => {
                modes::passthrough::render(config, universe, data, frame);
                Some(())
            }
            _ if universe != config.universe => {
                return FrameOutcome::Skipped(SkipReason::UniverseMismatch);
            }
            Mode::Solid => modes::uniform::solid(config, data, frame),
            Mode::TwoColorMix => modes::uniform::two_color_mix(config, data, frame),
            Mode::Blink => modes::blink::blink(config, &mut self.phase, data, now, frame),
            Mode::BlinkMix => modes::blink::blink_mix(config, &mut self.phase, data, now, frame),
            Mode::Segment => modes::segment::segment(config, data, frame),
            Mode::SegmentMix => modes::segment::segment_mix(config, data, frame),
            Mode::Ring => modes::ring::ring(config, data, frame),
            Mode::RingMix => modes::ring::ring_mix(config, data, frame),
            Mode::Spinner => modes::spinner::spinner(config, &mut self.phase, data, now, frame),
            Mode::Rainbow => modes::rainbow::rainbow(config, &mut self.phase, data, now, frame),
        };
        match rendered {
            Some(()) => FrameOutcome::Applied,
            None => FrameOutcome::Skipped(SkipReason::ShortFrame),
        }
    }
}
