use std::collections::{HashMap, HashSet, VecDeque};

use crate::surface::Surface;

pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;
pub const SCROLL_TOP_THRESHOLD: f64 = 500.0;
pub const SECTION_PROBE_OFFSET: f64 = 100.0;
pub const ANCHOR_HEADER_OFFSET: f64 = 80.0;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const TYPING_TICK_MS: u32 = 50;
const TYPE_CHAR_TICKS: u32 = 2;
const ERASE_CHAR_TICKS: u32 = 1;
const HOLD_TICKS: u32 = 40;
const CYCLE_GAP_TICKS: u32 = 10;
const START_DELAY_TICKS: u32 = 20;

pub const SUBMIT_SIMULATED_DELAY_MS: u32 = 1_500;
pub const BANNER_CLEAR_DELAY_MS: u32 = 5_000;

pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_MIN_VIEWPORT: f64 = 768.0;
pub const GLOW_MIN_VIEWPORT: f64 = 1024.0;
pub const TILT_DIVISOR: f64 = 20.0;
pub const EASTER_EGG_DURATION_MS: u32 = 10_000;

pub const NAVBAR_TARGET: &str = "navbar";
pub const HAMBURGER_TARGET: &str = "hamburger";
pub const NAV_MENU_TARGET: &str = "nav-menu";
pub const SCROLL_TOP_TARGET: &str = "scroll-top";
pub const TYPING_TARGET: &str = "typing-text";
pub const BODY_TARGET: &str = "body";

pub fn nav_link_target(section_id: &str) -> String {
    format!("nav-link:{section_id}")
}

pub struct SectionGeometry {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Tracks scroll position against the page's labeled sections and keeps
/// the navbar flag, the scroll-to-top affordance and the single active
/// nav link in sync.
#[derive(Default)]
pub struct ScrollController {
    active: Option<String>,
}

impl ScrollController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn on_scroll(&mut self, offset: f64, sections: &[SectionGeometry], surface: &mut dyn Surface) {
        surface.set_class(NAVBAR_TARGET, "scrolled", offset > NAVBAR_SCROLL_THRESHOLD);
        surface.set_class(SCROLL_TOP_TARGET, "visible", offset > SCROLL_TOP_THRESHOLD);

        let mut matched = None;
        for section in sections {
            let probe_top = section.top - SECTION_PROBE_OFFSET;
            if offset > probe_top && offset <= probe_top + section.height {
                matched = Some(section.id.as_str());
            }
        }

        // No match leaves the previously active link highlighted.
        let Some(next) = matched else { return };
        if self.active.as_deref() == Some(next) {
            return;
        }
        if let Some(previous) = self.active.take() {
            surface.set_class(&nav_link_target(&previous), "active", false);
        }
        surface.set_class(&nav_link_target(next), "active", true);
        self.active = Some(next.to_string());
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuEvent {
    ToggleRequested,
    LinkActivated,
    OutsideActivated,
    EscapePressed,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FocusWrap {
    First,
    Last,
}

/// Two-state mobile menu machine. Opening locks body scrolling; any of
/// link click, outside click or Escape forces it closed again.
#[derive(Default)]
pub struct MenuController {
    open: bool,
}

impl MenuController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn handle(&mut self, event: MenuEvent, surface: &mut dyn Surface) -> bool {
        let next = match event {
            MenuEvent::ToggleRequested => !self.open,
            MenuEvent::LinkActivated | MenuEvent::OutsideActivated | MenuEvent::EscapePressed => false,
        };
        if next == self.open {
            return false;
        }
        self.open = next;
        surface.set_class(HAMBURGER_TARGET, "active", self.open);
        surface.set_class(NAV_MENU_TARGET, "active", self.open);
        let overflow = if self.open { "hidden" } else { "auto" };
        surface.set_style(BODY_TARGET, "overflow", overflow);
        true
    }

    /// Focus-trap decision for a Tab press while the menu is open: wrap
    /// from the last focusable to the first and, shifted, from the first
    /// to the last.
    pub fn trap_tab(&self, shift: bool, on_first: bool, on_last: bool) -> Option<FocusWrap> {
        if !self.open {
            return None;
        }
        if shift && on_first {
            Some(FocusWrap::Last)
        } else if !shift && on_last {
            Some(FocusWrap::First)
        } else {
            None
        }
    }
}

pub struct SkillBar {
    pub target: String,
    pub width: String,
}

pub enum RevealKind {
    Block,
    SkillCategory { bars: Vec<SkillBar> },
}

/// One-shot reveal bookkeeping for viewport-intersection animations.
/// Watched elements are primed hidden; the first intersection restores
/// them (and fills skill bars) exactly once.
#[derive(Default)]
pub struct RevealController {
    watched: HashMap<String, RevealKind>,
    revealed: HashSet<String>,
}

impl RevealController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn watch(&mut self, target: impl Into<String>, kind: RevealKind, surface: &mut dyn Surface) {
        let target = target.into();
        surface.set_style(&target, "opacity", "0");
        surface.set_style(&target, "transform", "translateY(30px)");
        surface.set_style(&target, "transition", "opacity 0.8s ease, transform 0.8s ease");
        self.watched.insert(target, kind);
    }

    pub fn on_intersection(&mut self, target: &str, intersecting: bool, surface: &mut dyn Surface) {
        if !intersecting || self.revealed.contains(target) {
            return;
        }
        let Some(kind) = self.watched.get(target) else { return };
        surface.set_style(target, "opacity", "1");
        surface.set_style(target, "transform", "translateY(0)");
        if let RevealKind::SkillCategory { bars } = kind {
            for bar in bars {
                surface.set_style(&bar.target, "width", &bar.width);
            }
        }
        self.revealed.insert(target.to_string());
    }

    pub fn is_revealed(&self, target: &str) -> bool {
        self.revealed.contains(target)
    }
}

/// Once-only gate for deferred image sources.
#[derive(Default)]
pub struct LazyImageTracker {
    loaded: HashSet<String>,
}

impl LazyImageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true exactly once per target, on its first intersection.
    pub fn should_load(&mut self, target: &str, intersecting: bool) -> bool {
        if !intersecting || self.loaded.contains(target) {
            return false;
        }
        self.loaded.insert(target.to_string());
        true
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum TypingPhase {
    Typing,
    Holding,
    Erasing,
    Waiting,
}

/// Typewriter loop as an explicit state machine driven by a fixed 50 ms
/// tick: reveal a character every 100 ms, hold the full phrase 2 s, erase
/// a character every 50 ms, pause 500 ms, advance to the next phrase.
/// Cancellation is dropping the interval that feeds `tick`.
pub struct TypingAnimator {
    phrases: Vec<String>,
    index: usize,
    shown: usize,
    phase: TypingPhase,
    countdown: u32,
}

impl TypingAnimator {
    pub fn new(phrases: Vec<String>) -> Self {
        debug_assert!(!phrases.is_empty());
        Self {
            phrases,
            index: 0,
            shown: 0,
            phase: TypingPhase::Waiting,
            countdown: START_DELAY_TICKS,
        }
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn tick(&mut self) -> Option<String> {
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown > 0 {
            return None;
        }
        match self.phase {
            TypingPhase::Waiting => {
                self.phase = TypingPhase::Typing;
                self.shown = 0;
                Some(self.advance_typing())
            }
            TypingPhase::Typing => Some(self.advance_typing()),
            TypingPhase::Holding => {
                self.phase = TypingPhase::Erasing;
                Some(self.advance_erasing())
            }
            TypingPhase::Erasing => Some(self.advance_erasing()),
        }
    }

    fn advance_typing(&mut self) -> String {
        let phrase = &self.phrases[self.index];
        let total = phrase.chars().count();
        self.shown += 1;
        let text: String = phrase.chars().take(self.shown).collect();
        if self.shown >= total {
            self.phase = TypingPhase::Holding;
            self.countdown = HOLD_TICKS;
        } else {
            self.countdown = TYPE_CHAR_TICKS;
        }
        text
    }

    fn advance_erasing(&mut self) -> String {
        self.shown = self.shown.saturating_sub(1);
        let text: String = self.phrases[self.index].chars().take(self.shown).collect();
        if self.shown == 0 {
            self.index = (self.index + 1) % self.phrases.len();
            self.phase = TypingPhase::Waiting;
            self.countdown = CYCLE_GAP_TICKS;
        } else {
            self.countdown = ERASE_CHAR_TICKS;
        }
        text
    }
}

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";
pub const SUBMIT_IDLE_LABEL: &str = "Send Message";
pub const SUBMIT_SENDING_LABEL: &str = "Sending...";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormError {
    MissingFields,
    InvalidEmail,
}

impl FormError {
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingFields => MISSING_FIELDS_MESSAGE,
            Self::InvalidEmail => INVALID_EMAIL_MESSAGE,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

pub struct FormSubmission<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
}

/// Field presence is checked before email shape; a failed submission
/// never reaches the simulated sending phase.
pub fn validate_submission(submission: &FormSubmission<'_>) -> Result<(), FormError> {
    if submission.name.is_empty() || submission.email.is_empty() || submission.message.is_empty() {
        return Err(FormError::MissingFields);
    }
    if !is_valid_email(submission.email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

/// Shape check equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`: exactly one
/// `@`, no whitespace, and an interior dot in the domain. Deliberately
/// not RFC 5322.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain
        .char_indices()
        .any(|(position, ch)| ch == '.' && position > 0 && position + ch.len_utf8() < domain.len())
}

pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp", "ArrowUp", "ArrowDown", "ArrowDown", "ArrowLeft", "ArrowRight", "ArrowLeft",
    "ArrowRight", "b", "a",
];

/// Sliding window over the last ten key names.
#[derive(Default)]
pub struct KonamiTracker {
    recent: VecDeque<String>,
}

impl KonamiTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a key and reports whether the window now spells the code.
    pub fn record(&mut self, key: &str) -> bool {
        self.recent.push_back(key.to_string());
        while self.recent.len() > KONAMI_SEQUENCE.len() {
            self.recent.pop_front();
        }
        self.recent.len() == KONAMI_SEQUENCE.len()
            && self
                .recent
                .iter()
                .zip(KONAMI_SEQUENCE.iter())
                .all(|(seen, expected)| seen == expected)
    }
}

pub fn tilt_transform(cursor_x: f64, cursor_y: f64, width: f64, height: f64) -> String {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let rotate_x = (cursor_y - center_y) / TILT_DIVISOR;
    let rotate_y = (center_x - cursor_x) / TILT_DIVISOR;
    format!("perspective(1000px) rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg) translateY(-10px)")
}

pub struct ParticleSpec {
    pub size: f64,
    pub left_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub warm: bool,
}

pub fn particle_specs(count: usize, rng: &mut fastrand::Rng) -> Vec<ParticleSpec> {
    (0..count)
        .map(|_| ParticleSpec {
            size: rng.f64() * 3.0 + 1.0,
            left_pct: rng.f64() * 100.0,
            duration_s: rng.f64() * 20.0 + 10.0,
            delay_s: rng.f64() * 5.0,
            warm: rng.bool(),
        })
        .collect()
}

/// One keyframe rule serves every particle; the horizontal drift is
/// sampled once and shared.
pub fn particle_drift(rng: &mut fastrand::Rng) -> f64 {
    rng.f64() * 100.0 - 50.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    fn section(id: &str, top: f64, height: f64) -> SectionGeometry {
        SectionGeometry {
            id: id.to_string(),
            top,
            height,
        }
    }

    fn page_sections() -> Vec<SectionGeometry> {
        vec![
            section("home", 0.0, 600.0),
            section("about", 600.0, 800.0),
            section("projects", 1400.0, 900.0),
            section("contact", 2300.0, 700.0),
        ]
    }

    fn active_links(surface: &RecordingSurface) -> Vec<String> {
        surface
            .targets_with_class("active")
            .into_iter()
            .filter(|target| target.starts_with("nav-link:"))
            .collect()
    }

    #[test]
    fn navbar_scrolled_flag_follows_threshold() {
        let mut controller = ScrollController::new();
        let mut surface = RecordingSurface::new();
        let sections = page_sections();

        controller.on_scroll(51.0, &sections, &mut surface);
        assert!(surface.class_on(NAVBAR_TARGET, "scrolled"));

        controller.on_scroll(50.0, &sections, &mut surface);
        assert!(!surface.class_on(NAVBAR_TARGET, "scrolled"));
    }

    #[test]
    fn scroll_top_affordance_appears_past_500() {
        let mut controller = ScrollController::new();
        let mut surface = RecordingSurface::new();
        let sections = page_sections();

        controller.on_scroll(500.0, &sections, &mut surface);
        assert!(!surface.class_on(SCROLL_TOP_TARGET, "visible"));

        controller.on_scroll(501.0, &sections, &mut surface);
        assert!(surface.class_on(SCROLL_TOP_TARGET, "visible"));
    }

    #[test]
    fn at_most_one_link_is_active_after_any_scroll() {
        let mut controller = ScrollController::new();
        let mut surface = RecordingSurface::new();
        let sections = page_sections();

        for offset in [0.0, 120.0, 650.0, 1500.0, 2400.0, 90.0, 3000.0] {
            controller.on_scroll(offset, &sections, &mut surface);
            assert!(
                active_links(&surface).len() <= 1,
                "offset {offset} left multiple links active"
            );
        }
    }

    #[test]
    fn section_boundaries_use_the_probe_offset() {
        let mut controller = ScrollController::new();
        let mut surface = RecordingSurface::new();
        let sections = page_sections();

        // about spans (500, 1300] after the 100-unit probe shift
        controller.on_scroll(501.0, &sections, &mut surface);
        assert_eq!(controller.active_section(), Some("about"));

        controller.on_scroll(1300.0, &sections, &mut surface);
        assert_eq!(controller.active_section(), Some("about"));

        controller.on_scroll(1301.0, &sections, &mut surface);
        assert_eq!(controller.active_section(), Some("projects"));
    }

    #[test]
    fn no_matching_section_keeps_previous_link() {
        let mut controller = ScrollController::new();
        let mut surface = RecordingSurface::new();
        let sections = vec![section("about", 600.0, 200.0), section("contact", 2000.0, 400.0)];

        controller.on_scroll(650.0, &sections, &mut surface);
        assert_eq!(controller.active_section(), Some("about"));

        // 1500 lies in the gap between the two sections
        controller.on_scroll(1500.0, &sections, &mut surface);
        assert_eq!(controller.active_section(), Some("about"));
        assert_eq!(active_links(&surface), vec![nav_link_target("about")]);
    }

    #[test]
    fn overlapping_sections_resolve_to_the_last_match() {
        let mut controller = ScrollController::new();
        let mut surface = RecordingSurface::new();
        let sections = vec![section("a", 0.0, 1000.0), section("b", 400.0, 1000.0)];

        controller.on_scroll(500.0, &sections, &mut surface);
        assert_eq!(controller.active_section(), Some("b"));
        assert_eq!(active_links(&surface), vec![nav_link_target("b")]);
    }

    #[test]
    fn menu_toggle_opens_and_locks_scrolling() {
        let mut menu = MenuController::new();
        let mut surface = RecordingSurface::new();

        assert!(menu.handle(MenuEvent::ToggleRequested, &mut surface));
        assert!(menu.is_open());
        assert!(surface.class_on(HAMBURGER_TARGET, "active"));
        assert!(surface.class_on(NAV_MENU_TARGET, "active"));
        assert_eq!(surface.style_of(BODY_TARGET, "overflow"), Some("hidden"));

        assert!(menu.handle(MenuEvent::ToggleRequested, &mut surface));
        assert!(!menu.is_open());
        assert_eq!(surface.style_of(BODY_TARGET, "overflow"), Some("auto"));
    }

    #[test]
    fn close_events_only_apply_while_open() {
        let mut menu = MenuController::new();
        let mut surface = RecordingSurface::new();

        for event in [
            MenuEvent::LinkActivated,
            MenuEvent::OutsideActivated,
            MenuEvent::EscapePressed,
        ] {
            assert!(!menu.handle(event, &mut surface));
        }

        for event in [
            MenuEvent::LinkActivated,
            MenuEvent::OutsideActivated,
            MenuEvent::EscapePressed,
        ] {
            menu.handle(MenuEvent::ToggleRequested, &mut surface);
            assert!(menu.handle(event, &mut surface));
            assert!(!menu.is_open());
        }
    }

    #[test]
    fn tab_trap_wraps_at_both_ends_only_while_open() {
        let mut menu = MenuController::new();
        let mut surface = RecordingSurface::new();

        assert_eq!(menu.trap_tab(false, false, true), None);

        menu.handle(MenuEvent::ToggleRequested, &mut surface);
        assert_eq!(menu.trap_tab(false, false, true), Some(FocusWrap::First));
        assert_eq!(menu.trap_tab(true, true, false), Some(FocusWrap::Last));
        assert_eq!(menu.trap_tab(false, true, false), None);
        assert_eq!(menu.trap_tab(true, false, true), None);
        assert_eq!(menu.trap_tab(false, false, false), None);
    }

    #[test]
    fn watched_elements_are_primed_hidden() {
        let mut reveal = RevealController::new();
        let mut surface = RecordingSurface::new();

        reveal.watch("reveal:0", RevealKind::Block, &mut surface);
        assert_eq!(surface.style_of("reveal:0", "opacity"), Some("0"));
        assert_eq!(surface.style_of("reveal:0", "transform"), Some("translateY(30px)"));
    }

    #[test]
    fn reveal_happens_once_and_is_never_reversed() {
        let mut reveal = RevealController::new();
        let mut surface = RecordingSurface::new();
        reveal.watch("reveal:0", RevealKind::Block, &mut surface);

        reveal.on_intersection("reveal:0", false, &mut surface);
        assert!(!reveal.is_revealed("reveal:0"));

        reveal.on_intersection("reveal:0", true, &mut surface);
        assert!(reveal.is_revealed("reveal:0"));
        assert_eq!(surface.style_of("reveal:0", "opacity"), Some("1"));
        assert_eq!(surface.style_of("reveal:0", "transform"), Some("translateY(0)"));

        let writes = surface.writes;
        reveal.on_intersection("reveal:0", true, &mut surface);
        reveal.on_intersection("reveal:0", false, &mut surface);
        assert_eq!(surface.writes, writes);
    }

    #[test]
    fn skill_bars_fill_on_category_reveal() {
        let mut reveal = RevealController::new();
        let mut surface = RecordingSurface::new();
        reveal.watch(
            "reveal:3",
            RevealKind::SkillCategory {
                bars: vec![
                    SkillBar {
                        target: "skill-bar:0".to_string(),
                        width: "90%".to_string(),
                    },
                    SkillBar {
                        target: "skill-bar:1".to_string(),
                        width: "75%".to_string(),
                    },
                ],
            },
            &mut surface,
        );

        reveal.on_intersection("reveal:3", true, &mut surface);
        assert_eq!(surface.style_of("skill-bar:0", "width"), Some("90%"));
        assert_eq!(surface.style_of("skill-bar:1", "width"), Some("75%"));
    }

    #[test]
    fn lazy_images_load_at_most_once() {
        let mut tracker = LazyImageTracker::new();

        assert!(!tracker.should_load("/img/portrait.jpg", false));
        assert!(tracker.should_load("/img/portrait.jpg", true));
        assert!(!tracker.should_load("/img/portrait.jpg", true));
        assert!(tracker.should_load("/img/other.jpg", true));
    }

    fn drain(animator: &mut TypingAnimator, ticks: u32) -> Vec<String> {
        (0..ticks).filter_map(|_| animator.tick()).collect()
    }

    #[test]
    fn typing_starts_after_the_initial_delay() {
        let mut animator = TypingAnimator::new(vec!["ab".to_string()]);
        for _ in 0..START_DELAY_TICKS - 1 {
            assert_eq!(animator.tick(), None);
        }
        assert_eq!(animator.tick(), Some("a".to_string()));
    }

    #[test]
    fn cycle_reveals_holds_erases_then_advances_the_index() {
        let mut animator = TypingAnimator::new(vec!["ab".to_string(), "xyz".to_string()]);

        // 20 ticks start delay, 2 per extra character, 40 hold, 1 per erase
        let updates = drain(&mut animator, 72);
        assert_eq!(updates, ["a", "ab", "a", ""]);
        assert_eq!(animator.phrase_index(), 1);

        // 10-tick gap, then the second phrase types out
        let updates = drain(&mut animator, 15);
        assert_eq!(updates, ["x", "xy", "xyz"]);
    }

    #[test]
    fn displayed_length_walks_up_to_full_and_back_to_zero() {
        let phrase = "rustacean";
        let mut animator = TypingAnimator::new(vec![phrase.to_string()]);
        let updates = drain(&mut animator, 400);

        let lengths: Vec<usize> = updates.iter().map(|text| text.chars().count()).collect();
        let full = phrase.chars().count();
        let mut expected: Vec<usize> = (1..=full).collect();
        expected.extend((0..full).rev());
        assert!(lengths.len() >= expected.len());
        assert_eq!(lengths[..expected.len()], expected[..]);
        assert_eq!(animator.phrase_index(), 0);
    }

    #[test]
    fn updates_follow_the_documented_cadence() {
        let mut animator = TypingAnimator::new(vec!["abc".to_string()]);
        let mut update_ticks = Vec::new();
        for tick in 1..=200u32 {
            if animator.tick().is_some() {
                update_ticks.push(tick);
            }
        }
        // typing: 2 ticks apart; erasing: consecutive ticks
        assert_eq!(update_ticks[1] - update_ticks[0], TYPE_CHAR_TICKS);
        assert_eq!(update_ticks[2] - update_ticks[1], TYPE_CHAR_TICKS);
        assert_eq!(update_ticks[3] - update_ticks[2], HOLD_TICKS);
        assert_eq!(update_ticks[4] - update_ticks[3], ERASE_CHAR_TICKS);
        assert_eq!(update_ticks[5] - update_ticks[4], ERASE_CHAR_TICKS);
    }

    #[test]
    fn single_phrase_list_wraps_onto_itself() {
        let mut animator = TypingAnimator::new(vec!["a".to_string()]);
        let updates = drain(&mut animator, 70);
        assert_eq!(updates, ["a", "", "a"]);
        assert_eq!(animator.phrase_index(), 0);
    }

    fn submission<'a>(name: &'a str, email: &'a str, message: &'a str) -> FormSubmission<'a> {
        FormSubmission { name, email, message }
    }

    #[test]
    fn any_empty_field_is_rejected_before_the_email_check() {
        let cases = [
            submission("", "a@b.co", "hi"),
            submission("Ada", "", "hi"),
            submission("Ada", "a@b.co", ""),
            submission("", "not-an-email", ""),
        ];
        for case in &cases {
            assert_eq!(validate_submission(case), Err(FormError::MissingFields));
        }
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in [
            "plainaddress",
            "a@b",
            "a@b.",
            "a@.b",
            "a b@c.d",
            "a@b c.d",
            "a@@b.c",
            "@b.co",
            "a@",
            "ab.cd@x",
        ] {
            assert_eq!(
                validate_submission(&submission("Ada", email, "hi")),
                Err(FormError::InvalidEmail),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn plausible_emails_pass() {
        for email in ["a@b.co", "a@b.c", "first.last@example.org", "a@b.c.d", "a@b..c"] {
            assert_eq!(
                validate_submission(&submission("Ada", email, "hi")),
                Ok(()),
                "{email} should be accepted"
            );
        }
    }

    #[test]
    fn error_messages_match_the_banner_copy() {
        assert_eq!(FormError::MissingFields.message(), MISSING_FIELDS_MESSAGE);
        assert_eq!(FormError::InvalidEmail.message(), INVALID_EMAIL_MESSAGE);
        assert_eq!(BannerKind::Error.class_name(), "error");
        assert_eq!(BannerKind::Success.class_name(), "success");
    }

    #[test]
    fn konami_fires_on_the_exact_sequence() {
        let mut tracker = KonamiTracker::new();
        let mut fired = false;
        for key in KONAMI_SEQUENCE {
            fired = tracker.record(key);
        }
        assert!(fired);
    }

    #[test]
    fn konami_window_slides_past_leading_noise() {
        let mut tracker = KonamiTracker::new();
        for key in ["x", "y", "Escape"] {
            assert!(!tracker.record(key));
        }
        let mut fired = false;
        for key in KONAMI_SEQUENCE {
            fired = tracker.record(key);
        }
        assert!(fired);
    }

    #[test]
    fn konami_does_not_fire_early_or_after_extra_input() {
        let mut tracker = KonamiTracker::new();
        for key in &KONAMI_SEQUENCE[..9] {
            assert!(!tracker.record(key));
        }
        assert!(tracker.record("a"));
        assert!(!tracker.record("a"));
    }

    #[test]
    fn konami_rejects_a_reordered_sequence() {
        let mut tracker = KonamiTracker::new();
        let mut reordered = KONAMI_SEQUENCE;
        reordered.swap(8, 9);
        let mut fired = false;
        for key in reordered {
            fired = tracker.record(key);
        }
        assert!(!fired);
    }

    #[test]
    fn tilt_is_flat_at_the_card_center() {
        assert_eq!(
            tilt_transform(150.0, 100.0, 300.0, 200.0),
            "perspective(1000px) rotateX(0.00deg) rotateY(0.00deg) translateY(-10px)"
        );
    }

    #[test]
    fn tilt_signs_follow_the_cursor_quadrant() {
        // bottom-right corner: tilt down and toward the cursor
        assert_eq!(
            tilt_transform(100.0, 100.0, 100.0, 100.0),
            "perspective(1000px) rotateX(2.50deg) rotateY(-2.50deg) translateY(-10px)"
        );
        assert_eq!(
            tilt_transform(0.0, 0.0, 100.0, 100.0),
            "perspective(1000px) rotateX(-2.50deg) rotateY(2.50deg) translateY(-10px)"
        );
    }

    #[test]
    fn particle_specs_stay_inside_the_documented_ranges() {
        let mut rng = fastrand::Rng::with_seed(7);
        let specs = particle_specs(PARTICLE_COUNT, &mut rng);
        assert_eq!(specs.len(), PARTICLE_COUNT);
        for spec in &specs {
            assert!((1.0..4.0).contains(&spec.size));
            assert!((0.0..100.0).contains(&spec.left_pct));
            assert!((10.0..30.0).contains(&spec.duration_s));
            assert!((0.0..5.0).contains(&spec.delay_s));
        }
    }

    #[test]
    fn particle_drift_is_bounded() {
        let mut rng = fastrand::Rng::with_seed(11);
        for _ in 0..100 {
            let drift = particle_drift(&mut rng);
            assert!((-50.0..50.0).contains(&drift));
        }
    }
}
