//! Falling-star canvas effect.
//!
//! Stars enter from the left or right edge of the viewport and streak across
//! it with a tapered, glowing trail. Clicking near a star collects it and sets
//! off a firework burst at the pointer. The simulation in [`SkyState`] is plain
//! Rust driven through the [`DrawingSurface`], [`Viewport`] and
//! [`CounterDisplay`] traits, so it runs the same in the browser and in tests.
//!
//! # Example
//!
//! ```ignore
//! use portfolio_sky::{SkyConfig, StarfallCanvas};
//!
//! view! { <StarfallCanvas config=SkyConfig::default() show_counter=true /> }
//! ```

mod component;
mod particles;
mod render;
mod star;
mod state;
mod surface;
mod theme;
mod types;

pub use component::StarfallCanvas;
pub use particles::{FireworkBurst, Particle};
pub use render::star_outline;
pub use star::Star;
pub use state::SkyState;
pub use surface::{CounterDisplay, DrawingSurface, Viewport};
pub use theme::{Color, StarPalette};
pub use types::SkyConfig;
