//! The mode algorithms.
//!
//! Every function reads its channels through [`crate::color::ChannelReader`]
//! before touching a single pixel, so a payload that is too short results in
//! zero writes, never a partially updated frame. All return `None` on a
//! short payload; the renderer turns that into a skipped-frame outcome.

pub(crate) mod blink;
pub(crate) mod passthrough;
pub(crate) mod rainbow;
pub(crate) mod ring;
pub(crate) mod segment;
pub(crate) mod spinner;
pub(crate) mod uniform;
