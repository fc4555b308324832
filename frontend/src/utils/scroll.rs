use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Anchored sections of the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Analyze,
    HowItWorks,
    Demo,
    Pricing,
    Faq,
    Contact,
}

impl Section {
    pub const NAV: [Section; 4] = [
        Section::HowItWorks,
        Section::Demo,
        Section::Pricing,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Analyze => "analyze",
            Section::HowItWorks => "how-it-works",
            Section::Demo => "demo",
            Section::Pricing => "pricing",
            Section::Faq => "faq",
            Section::Contact => "contact",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Analyze => "Analyze",
            Section::HowItWorks => "How it works",
            Section::Demo => "AI Demo",
            Section::Pricing => "Pricing",
            Section::Faq => "FAQ",
            Section::Contact => "Contact",
        }
    }

    /// Parses `#pricing` or `pricing`.
    pub fn from_hash(hash: &str) -> Option<Self> {
        let id = hash.trim_start_matches('#');
        [
            Section::Analyze,
            Section::HowItWorks,
            Section::Demo,
            Section::Pricing,
            Section::Faq,
            Section::Contact,
        ]
        .into_iter()
        .find(|section| section.id() == id)
    }
}

/// Section to scroll to once the home page has mounted.
///
/// Set before navigating home from another route and consumed by the home
/// page's mount effect, when the target element is guaranteed to exist.
#[derive(Debug, Clone, Default)]
pub struct PendingScroll(Rc<Cell<Option<Section>>>);

impl PendingScroll {
    pub fn request(&self, section: Section) {
        self.0.set(Some(section));
    }

    pub fn take(&self) -> Option<Section> {
        self.0.take()
    }
}

impl PartialEq for PendingScroll {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Smoothly scrolls to the element with `id`. Returns false if it is not in the DOM.
pub fn scroll_to_id(id: &str) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id))
    else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

pub fn scroll_to_section(section: Section) -> bool {
    scroll_to_id(section.id())
}

/// Scrolls an input into view and focuses it.
pub fn focus_input(id: &str) {
    if !scroll_to_id(id) {
        return;
    }
    let input = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(input) = input {
        let _ = input.focus();
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
