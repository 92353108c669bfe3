use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::{Interval, Timeout};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    window, Document, HtmlElement, HtmlInputElement, HtmlTextAreaElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, MouseEvent, Node,
    ScrollBehavior, ScrollToOptions, Window,
};
use yew::prelude::*;

use crate::controllers::{
    nav_link_target, particle_drift, particle_specs, tilt_transform, validate_submission,
    BannerKind, FocusWrap, FormSubmission, KonamiTracker, LazyImageTracker, MenuController,
    MenuEvent, RevealController, RevealKind, ScrollController, SectionGeometry, SkillBar,
    TypingAnimator, ANCHOR_HEADER_OFFSET, BANNER_CLEAR_DELAY_MS, BODY_TARGET,
    EASTER_EGG_DURATION_MS, GLOW_MIN_VIEWPORT, HAMBURGER_TARGET, NAVBAR_TARGET, NAV_MENU_TARGET,
    PARTICLE_COUNT, PARTICLE_MIN_VIEWPORT, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD,
    SCROLL_TOP_TARGET, SUBMIT_IDLE_LABEL, SUBMIT_SENDING_LABEL, SUBMIT_SIMULATED_DELAY_MS,
    SUBMIT_SUCCESS_MESSAGE, TYPING_TARGET, TYPING_TICK_MS,
};
use crate::surface::Surface;

const TYPING_PHRASES: [&str; 3] = [
    "Systems Engineer",
    "WebAssembly Tinkerer",
    "Open Source Contributor",
];

const REVEAL_SELECTOR: &str =
    ".section-header, .about-content, .project-card, .skill-category, .service-card, .contact-content";
const TILT_SELECTOR: &str = ".project-card, .service-card";
const MENU_FOCUSABLE_SELECTOR: &str = "a[href], button";

const CURSOR_GLOW_STYLE: &str = "position: fixed; width: 400px; height: 400px; \
    border-radius: 50%; background: radial-gradient(circle, rgba(0, 212, 255, 0.15), transparent); \
    pointer-events: none; transform: translate(-50%, -50%); transition: opacity 0.3s ease; \
    opacity: 0; z-index: 9999; mix-blend-mode: screen;";

const PARTICLE_CONTAINER_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100%; \
    height: 100%; pointer-events: none; z-index: 0; overflow: hidden;";

const RAINBOW_KEYFRAMES: &str =
    "@keyframes rainbow { 0% { filter: hue-rotate(0deg); } 100% { filter: hue-rotate(360deg); } }";

struct DomSurface {
    targets: HashMap<String, HtmlElement>,
}

impl DomSurface {
    fn new() -> Self {
        Self {
            targets: HashMap::new(),
        }
    }

    fn register(&mut self, target: impl Into<String>, element: HtmlElement) {
        self.targets.insert(target.into(), element);
    }

    fn element(&self, target: &str) -> Option<&HtmlElement> {
        self.targets.get(target)
    }
}

impl Surface for DomSurface {
    fn set_class(&mut self, target: &str, class: &str, on: bool) {
        let Some(element) = self.targets.get(target) else { return };
        let list = element.class_list();
        let _ = if on { list.add_1(class) } else { list.remove_1(class) };
    }

    fn set_style(&mut self, target: &str, property: &str, value: &str) {
        let Some(element) = self.targets.get(target) else { return };
        let _ = element.style().set_property(property, value);
    }

    fn set_text(&mut self, target: &str, text: &str) {
        if let Some(element) = self.targets.get(target) {
            element.set_text_content(Some(text));
        }
    }
}

fn viewport_width() -> f64 {
    window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0)
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|win| {
            win.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn page_offset(win: &Window) -> f64 {
    win.page_y_offset().unwrap_or(0.0)
}

fn scroll_to_smooth(win: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

fn query_html_elements(root: &web_sys::Element, selector: &str) -> Vec<HtmlElement> {
    let mut elements = Vec::new();
    let Ok(nodes) = root.query_selector_all(selector) else {
        return elements;
    };
    for index in 0..nodes.length() {
        if let Some(element) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        {
            elements.push(element);
        }
    }
    elements
}

fn document_html_elements(doc: &Document, selector: &str) -> Vec<HtmlElement> {
    doc.document_element()
        .map(|root| query_html_elements(&root, selector))
        .unwrap_or_default()
}

type ObserverCallback = Closure<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>;

/// Everything the mount effect wires up; dropping it unhooks the page.
#[derive(Default)]
struct PageWiring {
    listeners: Vec<EventListener>,
    typing: Option<Interval>,
    observers: Vec<IntersectionObserver>,
    observer_callbacks: Vec<ObserverCallback>,
}

impl Drop for PageWiring {
    fn drop(&mut self) {
        for observer in &self.observers {
            observer.disconnect();
        }
    }
}

fn wire_page() -> PageWiring {
    let mut wiring = PageWiring::default();

    let Some(win) = window() else { return wiring };
    let Some(doc) = win.document() else { return wiring };

    let surface = Rc::new(RefCell::new(DomSurface::new()));
    register_page_targets(&doc, &surface);

    if let Some(body) = doc.body() {
        let _ = body.class_list().add_1("loaded");
        surface.borrow_mut().register(BODY_TARGET, body);
    }

    wire_scroll(&win, &doc, &surface, &mut wiring);
    wire_anchors(&win, &doc, &mut wiring);
    wire_menu(&doc, &surface, &mut wiring);
    wire_reveal(&doc, &surface, &mut wiring);
    wire_lazy_images(&doc, &mut wiring);
    wire_easter_egg(&doc, &mut wiring);

    if prefers_reduced_motion() {
        surface.borrow_mut().set_text(TYPING_TARGET, TYPING_PHRASES[0]);
    } else {
        wire_typing(&surface, &mut wiring);
        wire_cursor_glow(&doc, &mut wiring);
        spawn_particles(&doc);
        wire_card_tilt(&doc, &mut wiring);
    }

    log_console_banner();

    wiring
}

fn register_page_targets(doc: &Document, surface: &Rc<RefCell<DomSurface>>) {
    let mut surface = surface.borrow_mut();

    for id in [
        NAVBAR_TARGET,
        HAMBURGER_TARGET,
        NAV_MENU_TARGET,
        SCROLL_TOP_TARGET,
        TYPING_TARGET,
    ] {
        if let Some(element) = doc
            .get_element_by_id(id)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        {
            surface.register(id, element);
        }
    }

    for link in document_html_elements(doc, ".nav-link") {
        let Some(href) = link.get_attribute("href") else { continue };
        let Some(section_id) = href.strip_prefix('#') else { continue };
        surface.register(nav_link_target(section_id), link.clone());
    }
}

fn collect_sections(doc: &Document) -> Vec<(String, HtmlElement)> {
    document_html_elements(doc, "section[id]")
        .into_iter()
        .map(|element| (element.id(), element))
        .filter(|(id, _)| !id.is_empty())
        .collect()
}

fn measure_sections(sections: &[(String, HtmlElement)]) -> Vec<SectionGeometry> {
    sections
        .iter()
        .map(|(id, element)| SectionGeometry {
            id: id.clone(),
            top: f64::from(element.offset_top()),
            height: f64::from(element.offset_height()),
        })
        .collect()
}

fn wire_scroll(
    win: &Window,
    doc: &Document,
    surface: &Rc<RefCell<DomSurface>>,
    wiring: &mut PageWiring,
) {
    let sections = Rc::new(collect_sections(doc));
    let controller = Rc::new(RefCell::new(ScrollController::new()));
    let frame_queued = Rc::new(Cell::new(false));

    let listener = {
        let win = win.clone();
        let surface = surface.clone();
        let sections = sections.clone();
        let controller = controller.clone();
        let frame_queued = frame_queued.clone();
        EventListener::new(&win.clone(), "scroll", move |_event| {
            // coalesce bursts of scroll events into one evaluation per frame
            if frame_queued.get() {
                return;
            }
            frame_queued.set(true);

            let surface = surface.clone();
            let sections = sections.clone();
            let controller = controller.clone();
            let frame_queued = frame_queued.clone();
            let frame_win = win.clone();
            let frame = Closure::once_into_js(move || {
                frame_queued.set(false);
                let offset = page_offset(&frame_win);
                let geometry = measure_sections(&sections);
                controller
                    .borrow_mut()
                    .on_scroll(offset, &geometry, &mut *surface.borrow_mut());
            });
            let _ = win.request_animation_frame(frame.unchecked_ref());
        })
    };
    wiring.listeners.push(listener);

    // reflect a restored scroll position before the first scroll event
    {
        let offset = page_offset(win);
        let geometry = measure_sections(&sections);
        controller
            .borrow_mut()
            .on_scroll(offset, &geometry, &mut *surface.borrow_mut());
    }

    let scroll_top = surface.borrow().element(SCROLL_TOP_TARGET).cloned();
    if let Some(button) = scroll_top {
        let win = win.clone();
        let listener = EventListener::new(&button, "click", move |_event| {
            scroll_to_smooth(&win, 0.0);
        });
        wiring.listeners.push(listener);
    }
}

fn wire_anchors(win: &Window, doc: &Document, wiring: &mut PageWiring) {
    for anchor in document_html_elements(doc, "a[href^='#']") {
        let Some(href) = anchor.get_attribute("href") else { continue };
        let Some(section_id) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
            continue;
        };
        let section_id = section_id.to_string();
        let win = win.clone();
        let doc = doc.clone();
        let listener = EventListener::new(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(target) = doc
                .get_element_by_id(&section_id)
                .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            scroll_to_smooth(&win, f64::from(target.offset_top()) - ANCHOR_HEADER_OFFSET);
        });
        wiring.listeners.push(listener);
    }
}

fn wire_menu(doc: &Document, surface: &Rc<RefCell<DomSurface>>, wiring: &mut PageWiring) {
    let controller = Rc::new(RefCell::new(MenuController::new()));

    let hamburger = surface.borrow().element(HAMBURGER_TARGET).cloned();
    let menu = surface.borrow().element(NAV_MENU_TARGET).cloned();
    let (Some(hamburger), Some(menu)) = (hamburger, menu) else { return };

    {
        let controller = controller.clone();
        let surface = surface.clone();
        let listener = EventListener::new(&hamburger, "click", move |_event| {
            controller
                .borrow_mut()
                .handle(MenuEvent::ToggleRequested, &mut *surface.borrow_mut());
        });
        wiring.listeners.push(listener);
    }

    for link in query_html_elements(&menu, ".nav-link") {
        let controller = controller.clone();
        let surface = surface.clone();
        let listener = EventListener::new(&link, "click", move |_event| {
            controller
                .borrow_mut()
                .handle(MenuEvent::LinkActivated, &mut *surface.borrow_mut());
        });
        wiring.listeners.push(listener);
    }

    {
        let controller = controller.clone();
        let surface = surface.clone();
        let menu = menu.clone();
        let hamburger = hamburger.clone();
        let listener = EventListener::new(&doc.clone(), "click", move |event| {
            if !controller.borrow().is_open() {
                return;
            }
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = target
                .as_ref()
                .is_some_and(|node| menu.contains(Some(node)) || hamburger.contains(Some(node)));
            if !inside {
                controller
                    .borrow_mut()
                    .handle(MenuEvent::OutsideActivated, &mut *surface.borrow_mut());
            }
        });
        wiring.listeners.push(listener);
    }

    let focusables = query_html_elements(&menu, MENU_FOCUSABLE_SELECTOR);
    let first = focusables.first().cloned();
    let last = focusables.last().cloned();
    {
        let controller = controller.clone();
        let surface = surface.clone();
        let doc_handle = doc.clone();
        let listener = EventListener::new(&doc.clone(), "keydown", move |event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else { return };
            match key_event.key().as_str() {
                "Escape" => {
                    controller
                        .borrow_mut()
                        .handle(MenuEvent::EscapePressed, &mut *surface.borrow_mut());
                }
                "Tab" => {
                    let (Some(first), Some(last)) = (first.as_ref(), last.as_ref()) else {
                        return;
                    };
                    let active = doc_handle.active_element();
                    let on_first = active.as_ref() == Some(first.as_ref());
                    let on_last = active.as_ref() == Some(last.as_ref());
                    let wrap = controller
                        .borrow()
                        .trap_tab(key_event.shift_key(), on_first, on_last);
                    if let Some(wrap) = wrap {
                        key_event.prevent_default();
                        let _ = match wrap {
                            FocusWrap::First => first.focus(),
                            FocusWrap::Last => last.focus(),
                        };
                    }
                }
                _ => {}
            }
        });
        wiring.listeners.push(listener);
    }
}

fn wire_reveal(doc: &Document, surface: &Rc<RefCell<DomSurface>>, wiring: &mut PageWiring) {
    let controller = Rc::new(RefCell::new(RevealController::new()));

    let elements = document_html_elements(doc, REVEAL_SELECTOR);
    if elements.is_empty() {
        return;
    }

    let mut bar_counter = 0usize;
    for (index, element) in elements.iter().enumerate() {
        let target = format!("reveal:{index}");
        let kind = if element.class_list().contains("skill-category") {
            let mut bars = Vec::new();
            for bar in query_html_elements(element, ".skill-progress") {
                let Some(width) = bar.get_attribute("data-progress") else { continue };
                let bar_target = format!("skill-bar:{bar_counter}");
                bar_counter += 1;
                surface.borrow_mut().register(bar_target.clone(), bar);
                bars.push(SkillBar {
                    target: bar_target,
                    width,
                });
            }
            RevealKind::SkillCategory { bars }
        } else {
            RevealKind::Block
        };

        let _ = element.set_attribute("data-reveal", &target);
        surface.borrow_mut().register(target.clone(), element.clone());
        controller
            .borrow_mut()
            .watch(target, kind, &mut *surface.borrow_mut());
    }

    let callback: ObserverCallback = Closure::new({
        let controller = controller.clone();
        let surface = surface.clone();
        move |entries: Vec<IntersectionObserverEntry>, _observer: IntersectionObserver| {
            for entry in entries {
                let Some(target) = entry.target().get_attribute("data-reveal") else {
                    continue;
                };
                controller.borrow_mut().on_intersection(
                    &target,
                    entry.is_intersecting(),
                    &mut *surface.borrow_mut(),
                );
            }
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
    else {
        return;
    };
    for element in &elements {
        observer.observe(element);
    }
    wiring.observers.push(observer);
    wiring.observer_callbacks.push(callback);
}

fn wire_lazy_images(doc: &Document, wiring: &mut PageWiring) {
    let images = document_html_elements(doc, "img[data-src]");
    if images.is_empty() {
        return;
    }

    let tracker = Rc::new(RefCell::new(LazyImageTracker::new()));
    let callback: ObserverCallback = Closure::new({
        let tracker = tracker.clone();
        move |entries: Vec<IntersectionObserverEntry>, observer: IntersectionObserver| {
            for entry in entries {
                let element = entry.target();
                let Some(src) = element.get_attribute("data-src") else { continue };
                if tracker
                    .borrow_mut()
                    .should_load(&src, entry.is_intersecting())
                {
                    let _ = element.set_attribute("src", &src);
                    let _ = element.remove_attribute("data-src");
                    observer.unobserve(&element);
                }
            }
        }
    });

    let Ok(observer) = IntersectionObserver::new(callback.as_ref().unchecked_ref()) else {
        return;
    };
    for image in &images {
        observer.observe(image);
    }
    wiring.observers.push(observer);
    wiring.observer_callbacks.push(callback);
}

fn wire_typing(surface: &Rc<RefCell<DomSurface>>, wiring: &mut PageWiring) {
    if surface.borrow().element(TYPING_TARGET).is_none() {
        return;
    }
    let phrases = TYPING_PHRASES.iter().map(|text| text.to_string()).collect();
    let animator = Rc::new(RefCell::new(TypingAnimator::new(phrases)));

    let surface = surface.clone();
    let interval = Interval::new(TYPING_TICK_MS, move || {
        if let Some(text) = animator.borrow_mut().tick() {
            surface.borrow_mut().set_text(TYPING_TARGET, &text);
        }
    });
    wiring.typing = Some(interval);
}

fn wire_cursor_glow(doc: &Document, wiring: &mut PageWiring) {
    if viewport_width() <= GLOW_MIN_VIEWPORT {
        return;
    }
    let Some(body) = doc.body() else { return };
    let Ok(glow) = doc.create_element("div") else { return };
    let _ = glow.set_attribute("style", CURSOR_GLOW_STYLE);
    let _ = body.append_child(&glow);
    let Ok(glow) = glow.dyn_into::<HtmlElement>() else { return };

    {
        let glow = glow.clone();
        let listener = EventListener::new(&doc.clone(), "mousemove", move |event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else { return };
            let style = glow.style();
            let _ = style.set_property("left", &format!("{}px", mouse.client_x()));
            let _ = style.set_property("top", &format!("{}px", mouse.client_y()));
            let _ = style.set_property("opacity", "1");
        });
        wiring.listeners.push(listener);
    }
    {
        let listener = EventListener::new(&doc.clone(), "mouseleave", move |_event| {
            let _ = glow.style().set_property("opacity", "0");
        });
        wiring.listeners.push(listener);
    }
}

fn spawn_particles(doc: &Document) {
    if viewport_width() <= PARTICLE_MIN_VIEWPORT {
        return;
    }
    let Some(body) = doc.body() else { return };

    let mut rng = fastrand::Rng::new();
    let _ = inject_keyframes(doc, &float_particle_keyframes(particle_drift(&mut rng)));

    let Ok(container) = doc.create_element("div") else { return };
    let _ = container.set_attribute("style", PARTICLE_CONTAINER_STYLE);

    for spec in particle_specs(PARTICLE_COUNT, &mut rng) {
        let Ok(particle) = doc.create_element("div") else { continue };
        let color = if spec.warm {
            "rgba(255, 184, 0, 0.3)"
        } else {
            "rgba(0, 212, 255, 0.3)"
        };
        let style = format!(
            "position: absolute; width: {size:.2}px; height: {size:.2}px; background: {color}; \
             border-radius: 50%; left: {left:.2}%; bottom: -10px; \
             animation: float-particle {duration:.2}s linear {delay:.2}s infinite;",
            size = spec.size,
            left = spec.left_pct,
            duration = spec.duration_s,
            delay = spec.delay_s,
        );
        let _ = particle.set_attribute("style", &style);
        let _ = container.append_child(&particle);
    }

    let _ = body.insert_before(&container, body.first_child().as_ref());
}

fn float_particle_keyframes(drift: f64) -> String {
    format!(
        "@keyframes float-particle {{ \
         0% {{ transform: translateY(0) translateX(0); opacity: 0; }} \
         10% {{ opacity: 1; }} 90% {{ opacity: 1; }} \
         100% {{ transform: translateY(-100vh) translateX({drift:.2}px); opacity: 0; }} }}"
    )
}

fn inject_keyframes(doc: &Document, rules: &str) -> Option<web_sys::Element> {
    let head = doc.head()?;
    let style = doc.create_element("style").ok()?;
    style.set_text_content(Some(rules));
    head.append_child(&style).ok()?;
    Some(style)
}

fn wire_card_tilt(doc: &Document, wiring: &mut PageWiring) {
    for card in document_html_elements(doc, TILT_SELECTOR) {
        {
            let card = card.clone();
            let listener = EventListener::new(&card.clone(), "mousemove", move |event| {
                let Some(mouse) = event.dyn_ref::<MouseEvent>() else { return };
                let rect = card.get_bounding_client_rect();
                let transform = tilt_transform(
                    f64::from(mouse.client_x()) - rect.left(),
                    f64::from(mouse.client_y()) - rect.top(),
                    rect.width(),
                    rect.height(),
                );
                let _ = card.style().set_property("transform", &transform);
            });
            wiring.listeners.push(listener);
        }
        {
            let listener = EventListener::new(&card.clone(), "mouseleave", move |_event| {
                let _ = card.style().remove_property("transform");
            });
            wiring.listeners.push(listener);
        }
    }
}

fn wire_easter_egg(doc: &Document, wiring: &mut PageWiring) {
    let tracker = Rc::new(RefCell::new(KonamiTracker::new()));
    let doc_handle = doc.clone();
    let listener = EventListener::new(&doc.clone(), "keydown", move |event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else { return };
        if tracker.borrow_mut().record(&key_event.key()) {
            activate_easter_egg(&doc_handle);
        }
    });
    wiring.listeners.push(listener);
}

fn activate_easter_egg(doc: &Document) {
    let Some(body) = doc.body() else { return };
    let Some(style) = inject_keyframes(doc, RAINBOW_KEYFRAMES) else { return };
    let _ = body
        .style()
        .set_property("animation", "rainbow 3s linear infinite");
    web_sys::console::log_2(
        &JsValue::from_str("%c🎉 Easter egg activated!"),
        &JsValue::from_str("font-size: 24px; font-weight: bold; color: #ff00ff;"),
    );

    Timeout::new(EASTER_EGG_DURATION_MS, move || {
        let _ = body.style().remove_property("animation");
        style.remove();
    })
    .forget();
}

fn log_console_banner() {
    let lines = [
        (
            "%c👋 Hello, developer!",
            "font-size: 20px; font-weight: bold; color: #00d4ff;",
        ),
        (
            "%cCurious how this page works? It is Rust compiled to WebAssembly.",
            "font-size: 14px; color: #ffb800;",
        ),
    ];
    for (text, style) in lines {
        web_sys::console::log_2(&JsValue::from_str(text), &JsValue::from_str(style));
    }
}

#[derive(Clone, PartialEq)]
struct FormBanner {
    text: AttrValue,
    kind: BannerKind,
}

#[function_component(ContactForm)]
fn contact_form() -> Html {
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let message_ref = use_node_ref();
    let sending = use_state(|| false);
    let banner = use_state(|| None::<FormBanner>);

    let show_banner = {
        let banner = banner.clone();
        Callback::from(move |(text, kind): (String, BannerKind)| {
            banner.set(Some(FormBanner {
                text: text.into(),
                kind,
            }));
            let banner = banner.clone();
            Timeout::new(BANNER_CLEAR_DELAY_MS, move || banner.set(None)).forget();
        })
    };

    let onsubmit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let message_ref = message_ref.clone();
        let sending = sending.clone();
        let show_banner = show_banner.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let Some(name_input) = name_ref.cast::<HtmlInputElement>() else { return };
            let Some(email_input) = email_ref.cast::<HtmlInputElement>() else { return };
            let Some(message_input) = message_ref.cast::<HtmlTextAreaElement>() else { return };

            let name = name_input.value();
            let email = email_input.value();
            let message = message_input.value();
            let submission = FormSubmission {
                name: &name,
                email: &email,
                message: &message,
            };

            if let Err(error) = validate_submission(&submission) {
                show_banner.emit((error.message().to_string(), BannerKind::Error));
                return;
            }

            sending.set(true);
            let sending = sending.clone();
            let show_banner = show_banner.clone();
            spawn_local(async move {
                // stand-in for a transport this page deliberately does not have
                TimeoutFuture::new(SUBMIT_SIMULATED_DELAY_MS).await;
                show_banner.emit((SUBMIT_SUCCESS_MESSAGE.to_string(), BannerKind::Success));
                name_input.set_value("");
                email_input.set_value("");
                message_input.set_value("");
                sending.set(false);
            });
        })
    };

    let banner_class = classes!(
        "form-message",
        banner.as_ref().map(|state| state.kind.class_name())
    );

    html! {
        <form id="contact-form" class="contact-form" onsubmit={onsubmit}>
            <div class="form-group">
                <label for="name">{"Name"}</label>
                <input ref={name_ref} id="name" name="name" type="text" placeholder="Your name" />
            </div>
            <div class="form-group">
                <label for="email">{"Email"}</label>
                <input ref={email_ref} id="email" name="email" type="text" placeholder="you@example.com" />
            </div>
            <div class="form-group">
                <label for="message">{"Message"}</label>
                <textarea ref={message_ref} id="message" name="message" rows="5" placeholder="What can I build for you?"></textarea>
            </div>
            <button class="btn btn-submit" type="submit" disabled={*sending}>
                { if *sending { SUBMIT_SENDING_LABEL } else { SUBMIT_IDLE_LABEL } }
            </button>
            <p class={banner_class} role="status">
                { banner.as_ref().map(|state| state.text.clone()).unwrap_or_default() }
            </p>
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    title: AttrValue,
    description: AttrValue,
    tags: Vec<AttrValue>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    html! {
        <article class="project-card">
            <h3>{props.title.clone()}</h3>
            <p>{props.description.clone()}</p>
            <div class="project-tags">
                { for props.tags.iter().map(|tag| html! { <span class="tag">{tag.clone()}</span> }) }
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct SkillItemProps {
    label: AttrValue,
    progress: AttrValue,
}

#[function_component(SkillItem)]
fn skill_item(props: &SkillItemProps) -> Html {
    html! {
        <div class="skill-item">
            <span class="skill-label">{props.label.clone()}</span>
            <div class="skill-bar">
                <div class="skill-progress" data-progress={props.progress.clone()}></div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SectionHeaderProps {
    title: AttrValue,
    subtitle: AttrValue,
}

#[function_component(SectionHeader)]
fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="section-header">
            <h2>{props.title.clone()}</h2>
            <p>{props.subtitle.clone()}</p>
        </div>
    }
}

const NAV_SECTIONS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("about", "About"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("services", "Services"),
    ("contact", "Contact"),
];

#[function_component(App)]
fn app() -> Html {
    use_effect_with((), |_| {
        let wiring = wire_page();
        move || drop(wiring)
    });

    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <>
            <nav id="navbar" class="navbar">
                <div class="nav-container">
                    <a class="nav-logo" href="#home">{"CT"}</a>
                    <button id="hamburger" class="hamburger" type="button" aria-label="Toggle navigation">
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                    <ul id="nav-menu" class="nav-menu">
                        { for NAV_SECTIONS.iter().map(|(id, label)| html! {
                            <li><a class="nav-link" href={format!("#{id}")}>{*label}</a></li>
                        }) }
                    </ul>
                </div>
            </nav>

            <main>
                <section id="home" class="hero">
                    <p class="hero-greeting">{"Hi, my name is"}</p>
                    <h1>{"Casey Tran"}</h1>
                    <p class="hero-subtitle">
                        <span id="typing-text" class="typing-text"></span>
                        <span class="typing-cursor" aria-hidden="true">{"|"}</span>
                    </p>
                    <div class="hero-actions">
                        <a class="btn btn-primary" href="#projects">{"See my work"}</a>
                        <a class="btn btn-outline" href="#contact">{"Get in touch"}</a>
                    </div>
                </section>

                <section id="about" class="section-block">
                    <SectionHeader title="About" subtitle="A short introduction" />
                    <div class="about-content">
                        <img data-src="/assets/portrait.svg" alt="Portrait of Casey Tran" class="about-portrait" />
                        <div class="about-copy">
                            <p>
                                {"I am a systems engineer who likes small, sharp tools and pages \
                                  that feel instant. Most of my day is spent in Rust, the rest \
                                  poking at whatever the Rust ended up deploying."}
                            </p>
                            <p>
                                {"This site is itself a playground: the interactivity you see is \
                                  compiled to WebAssembly from the same language as the server \
                                  that ships it."}
                            </p>
                        </div>
                    </div>
                </section>

                <section id="projects" class="section-block">
                    <SectionHeader title="Projects" subtitle="Things I have shipped recently" />
                    <div class="projects-grid">
                        <ProjectCard
                            title="meshrelay"
                            description="A resilient message relay for flaky home-lab networks, with store-and-forward delivery."
                            tags={vec![AttrValue::from("rust"), AttrValue::from("tokio"), AttrValue::from("networking")]}
                        />
                        <ProjectCard
                            title="chartley"
                            description="Terminal dashboards from plain CSV files. No config, one binary."
                            tags={vec![AttrValue::from("rust"), AttrValue::from("tui"), AttrValue::from("cli")]}
                        />
                        <ProjectCard
                            title="driftwatch"
                            description="Snapshot diffing for infrastructure state, with human-readable change reports."
                            tags={vec![AttrValue::from("rust"), AttrValue::from("devops")]}
                        />
                    </div>
                </section>

                <section id="skills" class="section-block">
                    <SectionHeader title="Skills" subtitle="Tools I reach for" />
                    <div class="skills-grid">
                        <div class="skill-category">
                            <h3>{"Languages"}</h3>
                            <SkillItem label="Rust" progress="90%" />
                            <SkillItem label="TypeScript" progress="75%" />
                            <SkillItem label="Python" progress="70%" />
                        </div>
                        <div class="skill-category">
                            <h3>{"Infrastructure"}</h3>
                            <SkillItem label="Linux" progress="85%" />
                            <SkillItem label="PostgreSQL" progress="70%" />
                            <SkillItem label="Kubernetes" progress="60%" />
                        </div>
                    </div>
                </section>

                <section id="services" class="section-block">
                    <SectionHeader title="Services" subtitle="How I can help" />
                    <div class="services-grid">
                        <article class="service-card">
                            <h3>{"Systems consulting"}</h3>
                            <p>{"Performance work, profiling, and making slow paths fast."}</p>
                        </article>
                        <article class="service-card">
                            <h3>{"Web tooling"}</h3>
                            <p>{"Build pipelines and WASM integrations that stay out of your way."}</p>
                        </article>
                        <article class="service-card">
                            <h3>{"Code review"}</h3>
                            <p>{"Second pairs of eyes on Rust codebases, large or small."}</p>
                        </article>
                    </div>
                </section>

                <section id="contact" class="section-block">
                    <SectionHeader title="Contact" subtitle="Say hello" />
                    <div class="contact-content">
                        <div class="contact-info">
                            <p>{"Have a project in mind, or just want to talk shop? The form \
                                 reaches me directly."}</p>
                        </div>
                        <ContactForm />
                    </div>
                </section>
            </main>

            <footer class="footer-bottom">
                <p>{format!("© {year} Casey Tran. Built with Rust and WebAssembly.")}</p>
            </footer>

            <button id="scroll-top" class="scroll-top" type="button" aria-label="Back to top">{"↑"}</button>
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
