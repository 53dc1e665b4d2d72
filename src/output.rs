//! Renderer-to-driver glue.

use embassy_time::Duration;

use crate::color::{BLACK, Rgbw};
use crate::config::RenderConfig;
use crate::driver::LedDriver;
use crate::renderer::{FrameOutcome, ModeRenderer, RenderStats};

/// One physical light output: a renderer, its pixel frame, and the driver.
///
/// Feed it every decoded universe payload; it renders synchronously and
/// pushes to the driver only when the frame actually applied, so a skipped
/// frame leaves the strip showing its previous state.
pub struct LightOutput<D: LedDriver<N>, const N: usize> {
    renderer: ModeRenderer<N>,
    driver: D,
    frame: [Rgbw; N],
}

impl<D: LedDriver<N>, const N: usize> LightOutput<D, N> {
    pub fn new(driver: D, config: RenderConfig) -> Self {
        Self {
            renderer: ModeRenderer::new(config),
            driver,
            frame: [BLACK; N],
        }
    }

    /// Handle one universe payload at time `now`.
    pub fn handle_frame(&mut self, universe: u16, data: &[u8], now: Duration) -> FrameOutcome {
        let outcome = self.renderer.render(universe, data, now, &mut self.frame);
        if outcome.is_applied() {
            self.driver.write(&self.frame);
        }
        outcome
    }

    /// The most recently rendered frame.
    pub const fn frame(&self) -> &[Rgbw; N] {
        &self.frame
    }

    pub const fn config(&self) -> &RenderConfig {
        self.renderer.config()
    }

    /// Replace the settings, e.g. after the user edits them.
    pub fn set_config(&mut self, config: RenderConfig) {
        self.renderer.set_config(config);
    }

    pub const fn stats(&self) -> RenderStats {
        self.renderer.stats()
    }
}
