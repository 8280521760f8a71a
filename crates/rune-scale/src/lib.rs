//! rune-scale: HiDPI scale factors and scaled asset path candidates.
//!
//! A [`ScaleFactor`] maps logical lengths to device pixels. Given a base asset
//! path it also yields the `name@Nx.ext` variants an asset loader should try,
//! best match first and the unscaled path last.

mod dpi;
mod error;
mod resource;
mod scale;

pub use dpi::{logical_multiplier, snap_to_device};
pub use error::{Result, ScaleError};
pub use resource::{ScaledResource, ScaledResources};
pub use scale::ScaleFactor;
