//! portfolio-sky: page behaviour for a static portfolio site.
//!
//! Wires the mobile navigation menu, stamps the footer year, reveals sections
//! as they scroll into view, and mounts a canvas of falling stars that can be
//! clicked to set off fireworks.

use leptos::prelude::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::page::{reveal_on_scroll, stamp_footer_year, wire_mobile_menu};
pub use components::starfall::{
	Color, CounterDisplay, DrawingSurface, FireworkBurst, Particle, SkyConfig, SkyState, Star,
	StarPalette, StarfallCanvas, Viewport, star_outline,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-sky: logging initialized");
}

/// Parse starfall settings, falling back to defaults on malformed input.
pub fn parse_sky_config(json: &str) -> SkyConfig {
	match serde_json::from_str::<SkyConfig>(json) {
		Ok(config) => config,
		Err(e) => {
			warn!("portfolio-sky: failed to parse sky config: {}", e);
			SkyConfig::default()
		}
	}
}

/// Load settings from a script element with id="sky-config", if the page has one.
fn load_sky_config() -> SkyConfig {
	let script = || -> Option<String> {
		let window: Window = web_sys::window()?;
		let element = window.document()?.get_element_by_id("sky-config")?;
		let script: HtmlScriptElement = element.dyn_into().ok()?;
		script.text().ok()
	};
	script()
		.map(|json| parse_sky_config(&json))
		.unwrap_or_default()
}

/// Root component: the starfall overlay with the page's settings.
#[component]
pub fn App() -> impl IntoView {
	let config = load_sky_config();

	view! { <StarfallCanvas config=config show_counter=true /> }
}

/// Attach the page behaviours and mount the starfall overlay.
pub fn start() {
	if let Some(document) = web_sys::window().and_then(|w| w.document()) {
		wire_mobile_menu(&document);
		stamp_footer_year(&document);
		reveal_on_scroll(&document);
	}

	mount_to_body(|| {
		view! { <App /> }
	})
}
