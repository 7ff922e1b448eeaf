//! Leptos component hosting the starfall canvas.
//!
//! Creates a full-viewport canvas and wires the browser callbacks to
//! [`SkyState`]: a `setInterval` spawn timer, a document click listener, a
//! window resize listener and a `requestAnimationFrame` loop. If the canvas or
//! its 2D context is unavailable nothing is registered.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::info;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::state::SkyState;
use super::surface::{CounterDisplay, Viewport};
use super::types::SkyConfig;

impl CounterDisplay for WriteSignal<u32> {
	fn show_count(&mut self, count: u32) {
		self.set(count);
	}
}

type Callback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Renders falling stars behind the page and, optionally, the collected-star
/// counter.
///
/// Stars can be clicked anywhere on the document; a hit removes the star,
/// bumps the counter and sets off a firework at the pointer.
#[component]
pub fn StarfallCanvas(
	#[prop(optional)] config: SkyConfig,
	#[prop(default = true)] show_counter: bool,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let (collected, set_collected) = signal(0u32);

	let sky: Rc<RefCell<Option<SkyState>>> = Rc::new(RefCell::new(None));
	let animate: Callback = Rc::new(RefCell::new(None));
	let spawn_cb: Callback = Rc::new(RefCell::new(None));
	let resize_cb: Callback = Rc::new(RefCell::new(None));
	let click_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(document) = window.document() else {
			return;
		};
		let Some((w, h)) = window.dimensions() else {
			return;
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(mut ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			info!("portfolio-sky: no 2d canvas context, starfall disabled");
			return;
		};

		let mut state = SkyState::new(&config, w, h, fastrand::Rng::new());
		if show_counter {
			state = state.with_counter(Box::new(set_collected));
		}
		*sky.borrow_mut() = Some(state);
		info!("portfolio-sky: starfall running on {}x{} canvas", w, h);

		let (sky_resize, canvas_resize) = (sky.clone(), canvas.clone());
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let Some(win): Option<Window> = web_sys::window() else {
				return;
			};
			if let Some((nw, nh)) = win.dimensions() {
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
			}
			if let Some(ref mut s) = *sky_resize.borrow_mut() {
				s.resize(&win);
			}
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let sky_spawn = sky.clone();
		*spawn_cb.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *sky_spawn.borrow_mut() {
				s.spawn_star();
			}
		}));
		if let Some(ref cb) = *spawn_cb.borrow() {
			let _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
				cb.as_ref().unchecked_ref(),
				config.spawn_timeout(),
			);
		}

		let sky_click = sky.clone();
		*click_cb.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			if let Some(ref mut s) = *sky_click.borrow_mut() {
				s.handle_click(ev.client_x() as f64, ev.client_y() as f64);
			}
		}));
		if let Some(ref cb) = *click_cb.borrow() {
			let _ = document.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
		}

		let (sky_anim, animate_inner) = (sky.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *sky_anim.borrow_mut() {
				s.tick(&mut ctx);
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="star-canvas"
			class="star-canvas"
			style="position: fixed; top: 0; left: 0; pointer-events: none; z-index: 0;"
		/>
		{show_counter.then(move || view! {
			<div class="star-counter">
				"Stars collected: "
				<span id="star-count-value">{move || collected.get()}</span>
			</div>
		})}
	}
}
