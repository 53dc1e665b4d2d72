#![cfg_attr(not(test), no_std)]

//! Art-Net/DMX color mode renderer for addressable RGB(W) pixel arrays.
//!
//! One renderer instance listens to a single DMX universe and turns each
//! incoming channel payload, together with the current time, into a full
//! pixel frame. The active algorithm is selected by [`Mode`]; all algorithms
//! share the angle/cross-fade helpers in [`math`] and the color machinery in
//! [`color`].
//!
//! Layers:
//! - `config` - the per-output settings record ([`RenderConfig`])
//! - `mode` - the mode catalog ([`Mode`])
//! - `renderer` - dispatch, time-phase state, and frame outcome reporting
//! - `driver` - hardware abstraction ([`LedDriver`] trait)
//! - `output` - renderer-to-driver glue owning the pixel frame
//!
//! Rendering is synchronous and free of I/O: one call computes one frame.
//! Malformed input (a payload too short for the selected mode, or a frame
//! for another universe) leaves the pixel frame untouched and is reported
//! through [`FrameOutcome`] rather than an error path.

pub mod color;
pub mod config;
pub mod driver;
pub mod math;
pub mod mode;
mod modes;
pub mod output;
pub mod phase;
pub mod renderer;

pub use color::{BLACK, Rgbw, hsv_to_rgb, rgbw};
pub use config::{ChannelLayout, ConfigError, RenderConfig};
pub use driver::LedDriver;
pub use mode::Mode;
pub use output::LightOutput;
pub use phase::PhaseTracker;
pub use renderer::{FrameOutcome, ModeRenderer, RenderStats, SkipReason};
