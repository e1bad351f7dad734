//! Page interaction tests
//!
//! Drives the page behaviours over an in-memory document.

use rstest::*;
use site_assets::interaction::accordion::{FONTS_REFRESH_DELAY_MS, HIDE_DELAY_MS, REFRESH_DELAY_MS};
use site_assets::interaction::{Document, NodeId, Rect, Section, Site};

// ============================================================================
// Fixtures
// ============================================================================

struct Page {
    doc: Document,
    header: NodeId,
    menu_btn: NodeId,
    close_btn: NodeId,
    overlay: NodeId,
    first_link: NodeId,
    backdrop: NodeId,
    travel_btn: NodeId,
    travel_panel: NodeId,
    travel_inner: NodeId,
    flavors_btn: NodeId,
    flavors_panel: NodeId,
    nav_travel: NodeId,
    nav_travel_mobile: NodeId,
    nav_home: NodeId,
    logo: NodeId,
    glow: NodeId,
}

fn el(doc: &mut Document, parent: NodeId, tag: &str) -> NodeId {
    let node = doc.create_element(tag);
    doc.append_child(parent, node);
    node
}

fn with_id(doc: &mut Document, parent: NodeId, tag: &str, id: &str) -> NodeId {
    let node = el(doc, parent, tag);
    doc.set_id(node, id);
    node
}

fn acc_panel(doc: &mut Document, parent: NodeId, id: &str) -> (NodeId, NodeId, NodeId) {
    let btn = el(doc, parent, "button");
    doc.add_class(btn, "mobile-acc-btn");
    doc.set_attribute(btn, "aria-controls", id);
    doc.set_attribute(btn, "aria-expanded", "false");
    let panel = with_id(doc, parent, "div", id);
    doc.set_hidden(panel, true);
    let inner = el(doc, panel, "div");
    doc.add_class(inner, "mobile-sub-inner");
    (btn, panel, inner)
}

#[fixture]
fn page() -> Page {
    let mut doc = Document::new();
    let body = doc.body();

    let header = with_id(&mut doc, body, "header", "main-header");
    let nav_travel = el(&mut doc, header, "a");
    doc.set_attribute(nav_travel, "data-nav", "travel");
    let nav_home = el(&mut doc, header, "a");
    doc.set_attribute(nav_home, "data-nav", "home");
    let menu_btn = with_id(&mut doc, header, "button", "central-menu-btn");

    let logo = with_id(&mut doc, header, "a", "logo-header");
    doc.set_rect(logo, Rect::new(100.0, 300.0));
    let glow = el(&mut doc, logo, "span");
    doc.add_class(glow, "font-it");
    doc.set_rect(glow, Rect::new(100.0, 100.0));
    let word = el(&mut doc, logo, "span");
    doc.add_class(word, "font-ex");
    doc.set_attribute(word, "data-text", "EXP");

    let overlay = with_id(&mut doc, body, "div", "mobile-menu-overlay");
    let backdrop = el(&mut doc, overlay, "div");
    doc.set_attribute(backdrop, "data-close", "");
    let nav = el(&mut doc, overlay, "nav");
    let first_link = el(&mut doc, nav, "a");
    let nav_travel_mobile = el(&mut doc, nav, "a");
    doc.set_attribute(nav_travel_mobile, "data-nav", "travel");
    let close_btn = with_id(&mut doc, nav, "button", "close-menu");
    let (travel_btn, travel_panel, travel_inner) = acc_panel(&mut doc, nav, "m-travel");
    let (flavors_btn, flavors_panel, _) = acc_panel(&mut doc, nav, "m-flavors");
    doc.set_scroll_height(travel_inner, 240.0);

    doc.set_root_property("--it-green", " #008C45 ");
    doc.set_root_property("--it-red", "#CD212A");

    Page {
        doc,
        header,
        menu_btn,
        close_btn,
        overlay,
        first_link,
        backdrop,
        travel_btn,
        travel_panel,
        travel_inner,
        flavors_btn,
        flavors_panel,
        nav_travel,
        nav_travel_mobile,
        nav_home,
        logo,
        glow,
    }
}

// ============================================================================
// Letters Tests
// ============================================================================

#[rstest]
fn test_letters_are_rebuilt_idempotently(mut page: Page) {
    let _ = Site::init(&mut page.doc);
    let _ = Site::init(&mut page.doc);

    let letters = page.doc.query_class(page.logo, "letter");
    let text: Vec<&str> = letters.iter().map(|l| page.doc.text(*l)).collect();
    assert_eq!(text, vec!["E", "X", "P"]);
}

#[rstest]
fn test_reinit_adds_no_elements(mut page: Page) {
    let _ = Site::init(&mut page.doc);
    let after_first = page.doc.len();
    for _ in 0..5 {
        let _ = Site::init(&mut page.doc);
    }
    assert_eq!(page.doc.len(), after_first);
}

#[rstest]
fn test_changed_text_rebuilds_letters(mut page: Page) {
    let _ = Site::init(&mut page.doc);
    let word = page.doc.query_class(page.logo, "font-ex")[0];
    page.doc.set_attribute(word, "data-text", "GO");
    let _ = Site::init(&mut page.doc);

    let letters = page.doc.query_class(page.logo, "letter");
    let text: Vec<&str> = letters.iter().map(|l| page.doc.text(*l)).collect();
    assert_eq!(text, vec!["G", "O"]);
}

// ============================================================================
// Active nav Tests
// ============================================================================

#[rstest]
fn test_active_nav_for_gapyear_marks_travel_only(mut page: Page) {
    page.doc.set_path("/ItalianExperience/travel/gapyear/");
    let site = Site::init(&mut page.doc);

    assert_eq!(site.active_section(), Section::Travel);
    let active = page.doc.query_class(page.doc.root(), "active");
    assert_eq!(active, vec![page.nav_travel, page.nav_travel_mobile]);
    assert!(!page.doc.has_class(page.nav_home, "active"));

    assert_eq!(page.doc.attribute(page.travel_btn, "aria-expanded"), Some("true"));
    assert!(!page.doc.is_hidden(page.travel_panel));
    assert!(page.doc.is_hidden(page.flavors_panel));
    // Open panels are measured at init
    assert_eq!(page.doc.style(page.travel_panel, "max-height"), Some("256px"));
}

#[rstest]
fn test_home_path_opens_no_panel(mut page: Page) {
    page.doc.set_path("/");
    let site = Site::init(&mut page.doc);
    assert_eq!(site.active_section(), Section::Home);
    assert!(page.doc.has_class(page.nav_home, "active"));
    assert!(page.doc.is_hidden(page.travel_panel));
}

// ============================================================================
// Accordion Tests
// ============================================================================

#[rstest]
fn test_accordion_expand_and_delayed_collapse(mut page: Page) {
    let mut site = Site::init(&mut page.doc);

    assert!(site.on_click(&mut page.doc, page.flavors_btn));
    assert_eq!(page.doc.attribute(page.flavors_btn, "aria-expanded"), Some("true"));
    assert!(!page.doc.is_hidden(page.flavors_panel));
    assert_eq!(page.doc.style(page.flavors_panel, "max-height"), Some("80px"));

    site.on_click(&mut page.doc, page.flavors_btn);
    assert_eq!(page.doc.style(page.flavors_panel, "max-height"), Some("0px"));
    assert!(!page.doc.is_hidden(page.flavors_panel));

    site.advance(&mut page.doc, HIDE_DELAY_MS - 1);
    assert!(!page.doc.is_hidden(page.flavors_panel));
    site.advance(&mut page.doc, 1);
    assert!(page.doc.is_hidden(page.flavors_panel));
}

#[rstest]
fn test_reopen_before_delay_cancels_hide(mut page: Page) {
    let mut site = Site::init(&mut page.doc);

    site.on_click(&mut page.doc, page.travel_btn);
    site.on_click(&mut page.doc, page.travel_btn);
    site.advance(&mut page.doc, 100);
    site.on_click(&mut page.doc, page.travel_btn);
    site.advance(&mut page.doc, 1000);

    assert!(!page.doc.is_hidden(page.travel_panel));
    assert_eq!(page.doc.style(page.travel_panel, "max-height"), Some("256px"));
}

#[rstest]
fn test_open_panels_are_remeasured_later(mut page: Page) {
    page.doc.set_path("/travel/");
    let mut site = Site::init(&mut page.doc);
    assert_eq!(page.doc.style(page.travel_panel, "max-height"), Some("256px"));

    page.doc.set_scroll_height(page.travel_inner, 300.0);
    site.advance(&mut page.doc, REFRESH_DELAY_MS);
    assert_eq!(page.doc.style(page.travel_panel, "max-height"), Some("316px"));

    page.doc.set_scroll_height(page.travel_inner, 400.0);
    site.fonts_ready();
    site.advance(&mut page.doc, FONTS_REFRESH_DELAY_MS);
    assert_eq!(page.doc.style(page.travel_panel, "max-height"), Some("416px"));
}

// ============================================================================
// Menu Tests
// ============================================================================

#[rstest]
fn test_menu_open_close_restores_focus(mut page: Page) {
    let mut site = Site::init(&mut page.doc);
    page.doc.focus(page.menu_btn);

    site.on_click(&mut page.doc, page.menu_btn);
    assert!(page.doc.has_class(page.overlay, "active"));
    assert_eq!(page.doc.attribute(page.overlay, "aria-hidden"), Some("false"));
    assert_eq!(page.doc.attribute(page.menu_btn, "aria-expanded"), Some("true"));
    assert!(page.doc.has_class(page.doc.body(), "menu-open"));
    assert_eq!(page.doc.active_element(), Some(page.first_link));

    site.on_click(&mut page.doc, page.close_btn);
    assert!(!page.doc.has_class(page.overlay, "active"));
    assert_eq!(page.doc.attribute(page.overlay, "aria-hidden"), Some("true"));
    assert_eq!(page.doc.attribute(page.menu_btn, "aria-expanded"), Some("false"));
    assert!(!page.doc.has_class(page.doc.body(), "menu-open"));
    assert_eq!(page.doc.active_element(), Some(page.menu_btn));
}

#[rstest]
fn test_menu_closes_on_escape_and_backdrop(mut page: Page) {
    let mut site = Site::init(&mut page.doc);

    site.on_click(&mut page.doc, page.menu_btn);
    assert!(site.on_keydown(&mut page.doc, "Escape"));
    assert!(!site.menu().unwrap().is_open());

    site.on_click(&mut page.doc, page.menu_btn);
    assert!(!site.on_keydown(&mut page.doc, "Enter"));
    assert!(site.menu().unwrap().is_open());

    site.on_click(&mut page.doc, page.first_link);
    assert!(site.menu().unwrap().is_open());
    site.on_click(&mut page.doc, page.backdrop);
    assert!(!site.menu().unwrap().is_open());
}

#[rstest]
fn test_menu_requires_all_elements() {
    let mut doc = Document::new();
    let body = doc.body();
    with_id(&mut doc, body, "button", "central-menu-btn");
    with_id(&mut doc, body, "div", "mobile-menu-overlay");
    let site = Site::init(&mut doc);
    assert!(site.menu().is_none());
}

// ============================================================================
// Header scroll Tests
// ============================================================================

#[rstest]
#[case(&[60.0], false, true)]
#[case(&[150.0], true, true)]
#[case(&[150.0, 120.0], false, true)]
#[case(&[150.0, 30.0], false, false)]
#[case(&[90.0, 95.0], false, true)]
fn test_header_scroll_classes(
    mut page: Page,
    #[case] positions: &[f64],
    #[case] nav_up: bool,
    #[case] scrolled: bool,
) {
    let mut site = Site::init(&mut page.doc);
    for y in positions {
        site.on_scroll(&mut page.doc, *y);
    }
    assert_eq!(page.doc.has_class(page.header, "nav-up"), nav_up);
    assert_eq!(page.doc.has_class(page.header, "scrolled"), scrolled);
}

#[rstest]
fn test_overscroll_clamps_last_position(mut page: Page) {
    let mut site = Site::init(&mut page.doc);
    site.on_scroll(&mut page.doc, -40.0);
    assert_eq!(site.scroll_tracker().unwrap().last_y(), 0.0);
}

// ============================================================================
// Logo Tests
// ============================================================================

#[rstest]
fn test_logo_letters_react_to_pointer(mut page: Page) {
    let mut site = Site::init(&mut page.doc);
    let letters = page.doc.query_class(page.logo, "letter");
    page.doc.set_rect(letters[0], Rect::new(200.0, 20.0));
    page.doc.set_rect(letters[1], Rect::new(240.0, 20.0));
    page.doc.set_rect(letters[2], Rect::new(380.0, 20.0));

    // Pointer at x = 210 (viewport) is the centre of the first letter
    site.on_mouse_move(&mut page.doc, page.logo, 210.0);

    assert_eq!(page.doc.style(letters[0], "color"), Some("#FFF"));
    assert_eq!(
        page.doc.style(letters[0], "transform"),
        Some("scale(1.42) translateY(-10px)")
    );
    assert_eq!(page.doc.style(letters[0], "z-index"), Some("20"));
    // 40px left of the second letter's centre
    assert_eq!(page.doc.style(letters[1], "color"), Some("#CD212A"));
    // Out of reach
    assert_eq!(page.doc.style(letters[2], "color"), None);
    assert_eq!(page.doc.style(letters[2], "z-index"), Some("10"));

    // Glow centre is at 150, so the pointer is 60px away
    assert_eq!(
        page.doc.style(page.glow, "text-shadow"),
        Some("0 0 10.5px rgba(197,160,89,0.5)")
    );
    assert_eq!(page.doc.style(page.glow, "transform"), Some("scale(1.035)"));

    site.on_mouse_move(&mut page.doc, page.logo, 270.0);
    assert_eq!(page.doc.style(letters[0], "color"), Some("#008C45"));

    site.on_mouse_leave(&mut page.doc, page.logo);
    for letter in &letters {
        assert_eq!(page.doc.style(*letter, "color"), None);
        assert_eq!(page.doc.style(*letter, "transform"), None);
        assert_eq!(page.doc.style(*letter, "z-index"), None);
    }
    assert_eq!(page.doc.style(page.glow, "text-shadow"), None);
}

#[rstest]
fn test_logo_inert_on_coarse_pointer(mut page: Page) {
    page.doc.set_fine_pointer(false);
    let mut site = Site::init(&mut page.doc);
    site.on_mouse_move(&mut page.doc, page.logo, 210.0);
    assert_eq!(page.doc.style(page.glow, "transform"), None);
}

// ============================================================================
// Teardown Tests
// ============================================================================

#[rstest]
fn test_teardown_unlocks_page_and_drops_timers(mut page: Page) {
    let mut site = Site::init(&mut page.doc);
    site.on_click(&mut page.doc, page.menu_btn);
    site.on_click(&mut page.doc, page.travel_btn);
    site.on_click(&mut page.doc, page.travel_btn);
    site.on_scroll(&mut page.doc, 400.0);
    assert!(!site.timers().is_empty());

    site.teardown(&mut page.doc);
    assert!(!page.doc.has_class(page.doc.body(), "menu-open"));
    assert!(!page.doc.has_class(page.header, "scrolled"));
}
