//! Small behaviours for the static page markup: the mobile menu, the footer
//! year and scroll-triggered reveals. Each one quietly does nothing when the
//! elements it needs are missing.

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{
	Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

/// Class that slides the mobile nav list in.
const MENU_OPEN: &str = "active";
/// Class that fades a `.reveal` section into place.
const REVEALED: &str = "in-view";
/// Fraction of an element that must be visible before it is revealed.
const REVEAL_THRESHOLD: f64 = 0.1;

/// Toggle `.nav-links` from the `#mobile-menu` button and close it again
/// whenever one of its links is followed.
pub fn wire_mobile_menu(document: &Document) {
	let (Some(toggle), Ok(Some(nav))) = (
		document.get_element_by_id("mobile-menu"),
		document.query_selector(".nav-links"),
	) else {
		return;
	};

	let nav_toggle = nav.clone();
	let on_toggle = Closure::<dyn FnMut()>::new(move || {
		let _ = nav_toggle.class_list().toggle(MENU_OPEN);
	});
	let _ = toggle.add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref());
	on_toggle.forget();

	let Ok(links) = nav.query_selector_all("a") else {
		return;
	};
	for link in (0..links.length()).filter_map(|i| links.item(i)) {
		let nav_close = nav.clone();
		let on_follow = Closure::<dyn FnMut()>::new(move || {
			let _ = nav_close.class_list().remove_1(MENU_OPEN);
		});
		let _ = link.add_event_listener_with_callback("click", on_follow.as_ref().unchecked_ref());
		on_follow.forget();
	}
}

/// Write the current year into `#year`.
pub fn stamp_footer_year(document: &Document) {
	if let Some(span) = document.get_element_by_id("year") {
		let year = js_sys::Date::new_0().get_full_year();
		span.set_text_content(Some(&year.to_string()));
	}
}

/// Reveal each `.reveal` element once, the first time a tenth of it scrolls
/// into view. Browsers without `IntersectionObserver` get everything revealed
/// up front.
pub fn reveal_on_scroll(document: &Document) {
	let Ok(nodes) = document.query_selector_all(".reveal") else {
		return;
	};
	let targets: Vec<Element> = (0..nodes.length())
		.filter_map(|i| nodes.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect();
	if targets.is_empty() {
		return;
	}

	let supported = web_sys::window().is_some_and(|w| {
		js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
	});
	if !supported {
		reveal_all(&targets);
		return;
	}

	let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
		move |entries: js_sys::Array, observer: IntersectionObserver| {
			for entry in entries.iter() {
				let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
					continue;
				};
				if entry.is_intersecting() {
					let target = entry.target();
					let _ = target.class_list().add_1(REVEALED);
					observer.unobserve(&target);
				}
			}
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
	match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options) {
		Ok(observer) => {
			on_intersect.forget();
			for target in &targets {
				observer.observe(target);
			}
		}
		Err(e) => {
			warn!("portfolio-sky: IntersectionObserver unavailable: {:?}", e);
			reveal_all(&targets);
		}
	}
}

fn reveal_all(targets: &[Element]) {
	for target in targets {
		let _ = target.class_list().add_1(REVEALED);
	}
}
