//! Canvas ambient backdrops for the hero, why, and CTA sections.
//!
//! Each backdrop is an independent pipeline on one canvas:
//! - Bind a 2D surface sized to the parent container at a capped
//!   device-pixel-ratio scale
//! - Generate a particle or star set once from a density clamp
//! - Run a self-rescheduling frame loop that draws and advances it
//! - Watch the parent for resizes, ignoring sub-threshold jitter and
//!   repositioning entities proportionally otherwise
//!
//! # Example
//!
//! ```ignore
//! use relay_site::components::backdrop::{NetworkCanvas, NetworkStyle};
//!
//! view! {
//!     <section class="relative">
//!         <NetworkCanvas style=NetworkStyle::wireframe() class="absolute inset-0" />
//!     </section>
//! }
//! ```

mod component;
mod field;
mod render;
mod rng;
mod starfield;
pub mod style;
mod surface;

pub use component::{NetworkCanvas, StarfieldCanvas};
pub use style::{NetworkStyle, StarStyle};
