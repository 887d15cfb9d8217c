//! Monochrome raster engine core.
//!
//! The crate provides a 1-bit-per-pixel bitmap type, [`BitPlane`], and a
//! bit-block transfer primitive that composes a source rectangle onto a
//! destination rectangle under one of sixteen Boolean raster operations
//! ([`Rop2`], with the unary subset [`Rop1`] for in-place fills and
//! inversion). The blit clips arbitrary rectangles against both planes,
//! brings source bits into destination phase through a carry-propagating
//! shift pipeline, and edge-masks the first and last byte of every scan
//! line so bits outside the logical rectangle are preserved.
//!
//! Planes either own their storage or borrow it from the caller, which is
//! how static patterns are wrapped:
//!
//! ```
//! use rasterium_core::{BitPlane, Rop1, Rop2};
//!
//! let pattern_bits = [
//!     0x40u8, // #.
//!     0x80,   // .#
//! ];
//! let pattern = BitPlane::from_bits(2, 2, &pattern_bits);
//!
//! let mut image = BitPlane::new();
//! image.create(8, 8);
//! for y in (0..image.height()).step_by(2) {
//!     for x in (0..image.width()).step_by(2) {
//!         image.bit_blt(x, y, 2, 2, &pattern, 0, 0, Rop2::SRC_COPY);
//!     }
//! }
//! assert_eq!(image.pixel(0, 0), Some(false));
//! assert_eq!(image.pixel(1, 0), Some(true));
//!
//! // In-place unary operations go through the same clipped, masked blit.
//! image.pat_blt(0, 0, 8, 8, Rop1::DstInvert);
//! assert_eq!(image.pixel(0, 0), Some(true));
//! ```

pub mod error;
pub mod plane;
pub mod rop;

mod blt;
mod phase;

pub use error::Error;
pub use plane::BitPlane;
pub use rop::{Rop1, Rop2};
