//! Marquee FX entry point
//!
//! Wires the showcase effects to the page on load and exposes the
//! `openFilm` action for markup-level click handlers.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
        IntersectionObserverInit, MouseEvent, Window,
    };

    use marquee_fx::Settings;
    use marquee_fx::consts::*;
    use marquee_fx::motion::{
        CountUp, RippleBox, StaggerQueue, StatValue, glow_percent, parallax_offset, pointer_local,
        ripple_geometry, scramble_tick, tilt_degrees,
    };
    use marquee_fx::rating::{parse_rating, render_stars};

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Marquee FX starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let settings = Settings::load();

        // Each component is guarded on its own so one bad corner of the
        // page can't take the rest of the effects down with it.
        guard("reveal", setup_reveal(&document, &settings));
        guard("cards", setup_cards(&document, &settings));
        guard("cursor light", setup_cursor_light(&window, &document, &settings));
        guard("stat counters", setup_counters(&document));
        guard("ratings", setup_ratings(&document, &settings));
        guard("parallax", setup_parallax(&window, &document, &settings));
        guard("logo scramble", setup_logo_scramble(&document, &settings));
        guard("year stamp", setup_year(&document));

        log::info!("Marquee FX running!");
    }

    fn guard(component: &str, result: Result<(), JsValue>) {
        if let Err(err) = result {
            log::error!("{component} setup failed: {err:?}");
        }
    }

    /// All HTML elements matching `.{class}`, in document order
    fn elements_by_class(document: &Document, class: &str) -> Vec<HtmlElement> {
        let mut found = Vec::new();
        if let Ok(list) = document.query_selector_all(&format!(".{class}")) {
            for i in 0..list.length() {
                if let Some(el) = list.get(i).and_then(|node| node.dyn_into::<HtmlElement>().ok())
                {
                    found.push(el);
                }
            }
        }
        found
    }

    /// One-shot timer (setTimeout)
    fn on_timeout<F: FnOnce() + 'static>(callback: F, delay_ms: i32) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(callback);
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms,
        );
        closure.forget();
    }

    // === Reveal ===

    fn setup_reveal(document: &Document, settings: &Settings) -> Result<(), JsValue> {
        let cards = elements_by_class(document, CARD_CLASS);
        if cards.is_empty() {
            log::info!("Reveal: no {CARD_CLASS} elements");
            return Ok(());
        }

        // Under reduced motion the content shows up without the choreography
        if settings.reduced_motion {
            for card in &cards {
                let _ = card.class_list().add_1(REVEALED_CLASS);
            }
            return Ok(());
        }

        for card in &cards {
            let style = card.style();
            style.set_property("opacity", "0")?;
            style.set_property("transform", &format!("translateY({REVEAL_RISE_PX}px)"))?;
            style.set_property(
                "transition",
                &format!(
                    "opacity {REVEAL_TRANSITION_S}s ease, transform {REVEAL_TRANSITION_S}s ease"
                ),
            )?;
        }

        let cards = Rc::new(cards);
        let queue = Rc::new(RefCell::new(StaggerQueue::new(
            cards.len(),
            REVEAL_STAGGER_MS,
        )));

        let cards_ref = cards.clone();
        let callback = Closure::<dyn FnMut(_, _)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let mut batch = Vec::new();
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let position = cards_ref.iter().position(|card| {
                        let card: &Element = card.as_ref();
                        card == &target
                    });
                    if let Some(index) = position {
                        batch.push(index);
                    }
                }

                let mut queue = queue.borrow_mut();
                for (index, delay) in queue.admit(&batch) {
                    let card = cards_ref[index].clone();
                    observer.unobserve(card.as_ref());
                    on_timeout(move || reveal_card(&card), delay as i32);
                }
                if queue.pending() == 0 {
                    observer.disconnect();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for card in cards.iter() {
            observer.observe(card.as_ref());
        }
        callback.forget();
        Ok(())
    }

    fn reveal_card(card: &HtmlElement) {
        let style = card.style();
        let _ = style.set_property("opacity", "1");
        let _ = style.set_property("transform", "translateY(0)");
        let _ = card.class_list().add_1(REVEALED_CLASS);
    }

    // === Cards: tilt, glow, ripple, press ===

    fn setup_cards(document: &Document, settings: &Settings) -> Result<(), JsValue> {
        let cards = elements_by_class(document, CARD_CLASS);
        if cards.is_empty() {
            return Ok(());
        }

        if settings.effective_ripples() {
            ensure_ripple_keyframes(document)?;
        }

        for card in cards {
            if settings.effective_tilt() {
                wire_tilt(&card)?;
            }
            wire_click(&card, settings.effective_ripples())?;
            shield_nested_buttons(&card)?;
        }
        Ok(())
    }

    fn wire_tilt(card: &HtmlElement) -> Result<(), JsValue> {
        // Pointer move - update the tilt and glow custom properties
        {
            let card_ref = card.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = card_ref.get_bounding_client_rect();
                let local = pointer_local(
                    Vec2::new(event.client_x() as f32, event.client_y() as f32),
                    Vec2::new(rect.left() as f32, rect.top() as f32),
                );
                let size = Vec2::new(rect.width() as f32, rect.height() as f32);

                let tilt = tilt_degrees(local, size, TILT_MAX_DEG);
                let glow = glow_percent(local, size);
                let style = card_ref.style();
                let _ = style.set_property("--tilt", &format!("{tilt:.2}deg"));
                let _ = style.set_property("--glow-x", &format!("{:.1}%", glow.x));
                let _ = style.set_property("--glow-y", &format!("{:.1}%", glow.y));
            });
            card.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Pointer leave - back to neutral tilt; the glow fade is the
        // stylesheet's job, so its position is left where it was
        {
            let card_ref = card.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let _ = card_ref.style().set_property("--tilt", "0deg");
            });
            card.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn wire_click(card: &HtmlElement, ripples: bool) -> Result<(), JsValue> {
        // Cards without a film page are display-only
        let Some(url) = card.get_attribute(DATA_URL) else {
            return Ok(());
        };

        let card_ref = card.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            if ripples {
                let rect = card_ref.get_bounding_client_rect();
                let local = pointer_local(
                    Vec2::new(event.client_x() as f32, event.client_y() as f32),
                    Vec2::new(rect.left() as f32, rect.top() as f32),
                );
                let size = Vec2::new(rect.width() as f32, rect.height() as f32);
                spawn_ripple(&card_ref, ripple_geometry(local, size));
            }
            press_and_open(&card_ref, url.clone());
        });
        card.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Clicks on a card's own buttons must not run the card's click
    /// sequence on top of their own action.
    fn shield_nested_buttons(card: &HtmlElement) -> Result<(), JsValue> {
        let buttons = card.query_selector_all("button")?;
        for i in 0..buttons.length() {
            let Some(button) = buttons.get(i) else {
                continue;
            };
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.stop_propagation();
            });
            button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    /// The ripple's burst animation ships with the module rather than the
    /// page stylesheet; inject its keyframes once.
    fn ensure_ripple_keyframes(document: &Document) -> Result<(), JsValue> {
        const STYLE_ID: &str = "marquee-fx-ripple-keyframes";
        if document.get_element_by_id(STYLE_ID).is_some() {
            return Ok(());
        }
        let Some(head) = document.head() else {
            return Ok(());
        };
        let style = document.create_element("style")?;
        style.set_id(STYLE_ID);
        style.set_text_content(Some(
            "@keyframes ripple-burst { to { transform: scale(4); opacity: 0; } }",
        ));
        head.append_child(&style)?;
        Ok(())
    }

    /// Drop a one-shot ripple into the card at the click point. Cleanup
    /// runs on its own timer and never blocks navigation.
    fn spawn_ripple(card: &HtmlElement, shape: RippleBox) {
        let document = web_sys::window().unwrap().document().unwrap();
        let Ok(ripple) = document.create_element("div") else {
            return;
        };
        ripple.set_class_name(RIPPLE_CLASS);
        let style = format!(
            "position:absolute;left:{:.1}px;top:{:.1}px;width:{:.1}px;height:{:.1}px;\
             border-radius:50%;background:rgba(255,215,0,0.35);transform:scale(0);\
             animation:ripple-burst {}ms linear;pointer-events:none;",
            shape.left, shape.top, shape.size, shape.size, RIPPLE_DURATION_MS
        );
        let _ = ripple.set_attribute("style", &style);
        if card.append_child(&ripple).is_err() {
            return;
        }

        on_timeout(move || ripple.remove(), RIPPLE_DURATION_MS);
    }

    /// Press feedback, then navigation once the press has been seen.
    pub fn press_and_open(el: &HtmlElement, url: String) {
        let _ = el.style().set_property("transform", &format!("scale({PRESS_SCALE})"));
        let el = el.clone();
        on_timeout(
            move || {
                let _ = el.style().remove_property("transform");
                open_url(&url);
            },
            PRESS_DELAY_MS,
        );
    }

    /// Always a fresh tab, never this page.
    pub fn open_url(url: &str) {
        let window = web_sys::window().unwrap();
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => log::info!("Opened {url}"),
            Ok(None) => log::warn!("Popup blocked while opening {url}"),
            Err(err) => log::error!("Failed to open {url}: {err:?}"),
        }
    }

    // === Cursor light ===

    /// Visibility state for the cursor light. The pointer-inside flag is
    /// scoped here instead of floating around as a global.
    struct LightState {
        inside: bool,
    }

    impl LightState {
        fn apply(&self, light: &HtmlElement) {
            let opacity = if self.inside { "1" } else { "0" };
            let _ = light.style().set_property("opacity", opacity);
        }
    }

    fn setup_cursor_light(
        window: &Window,
        document: &Document,
        settings: &Settings,
    ) -> Result<(), JsValue> {
        if !settings.effective_cursor_light() {
            return Ok(());
        }
        let Some(light) = document.get_element_by_id(CURSOR_LIGHT_ID) else {
            log::info!("Cursor light: no #{CURSOR_LIGHT_ID} element");
            return Ok(());
        };
        let light: HtmlElement = light
            .dyn_into()
            .map_err(|_| JsValue::from_str("cursor light is not an HTML element"))?;
        let Some(body) = document.body() else {
            return Ok(());
        };

        let state = Rc::new(RefCell::new(LightState { inside: false }));
        state.borrow().apply(&light);

        // Position follows every pointer move; visibility is not touched
        // here, so a stationary light stays put when the pointer returns
        {
            let light = light.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let half = f64::from(light.offset_width()) / 2.0;
                let style = light.style();
                let _ = style.set_property("left", &format!("{:.0}px", f64::from(event.client_x()) - half));
                let _ = style.set_property("top", &format!("{:.0}px", f64::from(event.client_y()) - half));
            });
            window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Visibility follows page enter/leave only
        {
            let light = light.clone();
            let state = state.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut state = state.borrow_mut();
                state.inside = true;
                state.apply(&light);
            });
            body.add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut state = state.borrow_mut();
                state.inside = false;
                state.apply(&light);
            });
            body.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    // === Stat counters ===

    fn setup_counters(document: &Document) -> Result<(), JsValue> {
        let stats = elements_by_class(document, STAT_CLASS);
        if stats.is_empty() {
            return Ok(());
        }

        for stat in stats {
            let Some(raw) = stat.get_attribute(DATA_VALUE) else {
                log::warn!("Stat counter: missing {DATA_VALUE}, skipping");
                continue;
            };
            match StatValue::parse(&raw) {
                // Opaque labels are shown as-is, no animation
                StatValue::Text(label) => stat.set_text_content(Some(&label)),
                StatValue::Count(target) => {
                    stat.set_text_content(Some("0"));
                    on_timeout(
                        move || run_counter(stat, CountUp::for_target(target)),
                        COUNTER_START_DELAY_MS,
                    );
                }
            }
        }
        Ok(())
    }

    /// Drive one stat element through its count-up, one value per animation
    /// frame. Stops quietly if the element leaves the document mid-run.
    fn run_counter(el: HtmlElement, mut driver: CountUp) {
        let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let frame_ref = frame.clone();

        *frame.borrow_mut() = Some(Closure::new(move || {
            if !el.is_connected() {
                frame_ref.borrow_mut().take();
                return;
            }
            match driver.next() {
                Some(value) => {
                    el.set_text_content(Some(&value.to_string()));
                    if let Some(closure) = frame_ref.borrow().as_ref() {
                        request_frame(closure);
                    }
                }
                // Run complete - drop the closure to end the chain
                None => {
                    frame_ref.borrow_mut().take();
                }
            }
        }));

        if let Some(closure) = frame.borrow().as_ref() {
            request_frame(closure);
        }
    }

    fn request_frame(closure: &Closure<dyn FnMut()>) {
        let window = web_sys::window().unwrap();
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    }

    // === Ratings ===

    fn setup_ratings(document: &Document, settings: &Settings) -> Result<(), JsValue> {
        let rows = elements_by_class(document, STARS_CLASS);
        for row in rows {
            let Some(raw) = row.get_attribute(DATA_RATING) else {
                log::warn!("Rating: missing {DATA_RATING}, skipping");
                continue;
            };
            match parse_rating(&raw) {
                Some(rating) => {
                    row.set_text_content(Some(&render_stars(rating, settings.half_star_rule)));
                }
                None => log::warn!("Rating: malformed {DATA_RATING}={raw:?}, skipping"),
            }
        }
        Ok(())
    }

    // === Parallax ===

    fn setup_parallax(
        window: &Window,
        document: &Document,
        settings: &Settings,
    ) -> Result<(), JsValue> {
        if !settings.effective_parallax() {
            return Ok(());
        }
        let floaters = elements_by_class(document, FLOATING_CLASS);
        if floaters.is_empty() {
            return Ok(());
        }

        let win = window.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let scrolled = win.page_y_offset().unwrap_or(0.0);
            for (index, floater) in floaters.iter().enumerate() {
                let offset = parallax_offset(scrolled, index);
                let _ = floater
                    .style()
                    .set_property("transform", &format!("translateY({offset:.1}px)"));
            }
        });
        window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    // === Logo scramble ===

    fn setup_logo_scramble(document: &Document, settings: &Settings) -> Result<(), JsValue> {
        if !settings.effective_scramble() {
            return Ok(());
        }
        let Some(logo) = document.query_selector(&format!(".{LOGO_CLASS}"))? else {
            return Ok(());
        };
        let Ok(logo) = logo.dyn_into::<HtmlElement>() else {
            return Ok(());
        };
        let original = logo.text_content().unwrap_or_default();
        if original.is_empty() {
            return Ok(());
        }

        // One animation at a time per logo
        let busy = Rc::new(Cell::new(false));

        let target = logo.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            if busy.get() {
                return;
            }
            busy.set(true);
            run_scramble(logo.clone(), original.clone(), busy.clone());
        });
        target.add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// A burst of uppercase noise, then the original text comes back.
    fn run_scramble(logo: HtmlElement, original: String, busy: Rc<Cell<bool>>) {
        let mut rng = Pcg32::seed_from_u64(js_sys::Date::now() as u64);
        let ticks = Cell::new(0u32);
        let handle = Rc::new(Cell::new(0i32));
        let tick_closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let handle_ref = handle.clone();
        let closure_ref = tick_closure.clone();
        *tick_closure.borrow_mut() = Some(Closure::new(move || {
            let tick = ticks.get() + 1;
            ticks.set(tick);
            if tick > SCRAMBLE_TICKS || !logo.is_connected() {
                logo.set_text_content(Some(&original));
                busy.set(false);
                web_sys::window()
                    .unwrap()
                    .clear_interval_with_handle(handle_ref.get());
                closure_ref.borrow_mut().take();
                return;
            }
            logo.set_text_content(Some(&scramble_tick(
                &original,
                SCRAMBLE_KEEP_PROB,
                &mut rng,
            )));
        }));

        let window = web_sys::window().unwrap();
        let started = tick_closure.borrow().as_ref().map(|closure| {
            window.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                SCRAMBLE_INTERVAL_MS,
            )
        });
        match started {
            Some(Ok(id)) => handle.set(id),
            _ => {
                log::error!("Scramble: interval setup failed");
                tick_closure.borrow_mut().take();
            }
        }
    }

    // === Year stamp ===

    fn setup_year(document: &Document) -> Result<(), JsValue> {
        if let Some(el) = document.get_element_by_id(YEAR_ID) {
            let year = js_sys::Date::new_0().get_full_year();
            el.set_text_content(Some(&year.to_string()));
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

/// Navigation action for markup-level click handlers:
/// `openFilm(url, this)` plays the press feedback on the source element
/// before opening; without a source element the URL opens directly.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = openFilm)]
pub fn open_film(url: String, source: Option<web_sys::HtmlElement>) {
    match source {
        Some(el) => wasm_app::press_and_open(&el, url),
        None => {
            log::error!("openFilm called without a source element; opening directly");
            wasm_app::open_url(&url);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Marquee FX (native) starting...");
    log::info!("Native mode has no DOM - run with `trunk serve` for the web version");

    // Run self-checks
    println!("\nRunning effect self-checks...");
    test_rating_and_counter();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn test_rating_and_counter() {
    use marquee_fx::motion::CountUp;
    use marquee_fx::rating::{HalfStarRule, render_stars};

    assert_eq!(render_stars(3.6, HalfStarRule::QuarterWindow), "★★★✭☆");
    assert_eq!(render_stars(4.9, HalfStarRule::QuarterWindow), "★★★★★");

    let final_value = CountUp::for_target(1000).last();
    assert_eq!(final_value, Some(1000), "Count-up must land on its target");
    println!("✓ Rating and counter self-checks passed!");
}
