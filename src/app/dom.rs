use leptos::{prelude::*, wasm_bindgen::JsCast};
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::{
    navigation::PageGeometry,
    sections::{Extent, SectionId},
    timer::Cancel,
};

/// The live browser document. Only call from client-side effects and handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPage;

impl PageGeometry for BrowserPage {
    fn scroll_y(&self) -> f64 {
        window().scroll_y().unwrap_or_default()
    }

    fn section_extent(&self, id: SectionId) -> Option<Extent> {
        let el = document()
            .get_element_by_id(id.as_str())?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(Extent::new(
            f64::from(el.offset_top()),
            f64::from(el.offset_height()),
        ))
    }

    fn scroll_to(&self, top: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&opts);
    }
}

impl Cancel for IntervalHandle {
    fn cancel(&self) {
        self.clear();
    }
}
