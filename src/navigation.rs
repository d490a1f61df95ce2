use thiserror::Error;

use crate::sections::{Extent, SectionId, UnknownSection};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigateError {
    #[error(transparent)]
    UnknownSection(#[from] UnknownSection),
    #[error("section not rendered: {0}")]
    NotRendered(SectionId),
}

/// The parts of the hosting document the navigation and scroll spy read.
pub trait PageGeometry {
    fn scroll_y(&self) -> f64;
    fn section_extent(&self, id: SectionId) -> Option<Extent>;
    /// Smoothly scroll the viewport so that `top` is at the viewport top.
    fn scroll_to(&self, top: f64);
}

/// Open/closed state of the compact overlay menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    pub open: bool,
}

impl NavMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Scrolls to `id` and closes the menu. Returns the scroll target.
pub fn navigate<P: PageGeometry + ?Sized>(
    page: &P,
    menu: &mut NavMenu,
    id: SectionId,
) -> Result<f64, NavigateError> {
    menu.close();
    let extent = page
        .section_extent(id)
        .ok_or(NavigateError::NotRendered(id))?;
    page.scroll_to(extent.top);
    Ok(extent.top)
}

pub fn navigate_to_anchor<P: PageGeometry + ?Sized>(
    page: &P,
    menu: &mut NavMenu,
    anchor: &str,
) -> Result<f64, NavigateError> {
    let id = anchor.trim_start_matches('#').parse::<SectionId>()?;
    navigate(page, menu, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakePage {
        scroll: Cell<f64>,
        scroll_calls: Cell<usize>,
        with_contact: bool,
    }

    impl FakePage {
        fn new(with_contact: bool) -> Self {
            Self {
                scroll: Cell::new(0.0),
                scroll_calls: Cell::new(0),
                with_contact,
            }
        }
    }

    impl PageGeometry for FakePage {
        fn scroll_y(&self) -> f64 {
            self.scroll.get()
        }

        fn section_extent(&self, id: SectionId) -> Option<Extent> {
            match id {
                SectionId::Hero => Some(Extent::new(0.0, 800.0)),
                SectionId::Skills => Some(Extent::new(800.0, 1000.0)),
                SectionId::Projects => Some(Extent::new(1800.0, 1200.0)),
                SectionId::Sdlc => Some(Extent::new(3000.0, 1500.0)),
                SectionId::Contact if self.with_contact => Some(Extent::new(4500.0, 600.0)),
                SectionId::Contact => None,
            }
        }

        fn scroll_to(&self, top: f64) {
            self.scroll_calls.set(self.scroll_calls.get() + 1);
            self.scroll.set(top);
        }
    }

    #[test]
    fn test_navigate_projects() {
        let page = FakePage::new(true);
        let mut menu = NavMenu { open: true };
        let res = navigate(&page, &mut menu, SectionId::Projects);
        assert_eq!(res, Ok(1800.0));
        assert_eq!(page.scroll_y(), 1800.0);
        assert!(!menu.open);
    }

    #[test]
    fn test_navigate_idempotent() {
        let page = FakePage::new(true);
        let mut menu = NavMenu::default();
        navigate(&page, &mut menu, SectionId::Sdlc).unwrap();
        navigate(&page, &mut menu, SectionId::Hero).unwrap();
        let once = page.scroll_y();
        navigate(&page, &mut menu, SectionId::Hero).unwrap();
        assert_eq!(page.scroll_y(), once);
        assert_eq!(once, 0.0);
    }

    #[test]
    fn test_missing_section_is_noop() {
        let page = FakePage::new(false);
        page.scroll_to(900.0);
        let mut menu = NavMenu { open: true };
        let res = navigate(&page, &mut menu, SectionId::Contact);
        assert_eq!(res, Err(NavigateError::NotRendered(SectionId::Contact)));
        assert_eq!(page.scroll_y(), 900.0);
        assert_eq!(page.scroll_calls.get(), 1);
        assert!(!menu.open);
    }

    #[test]
    fn test_navigate_to_anchor() {
        let page = FakePage::new(true);
        let mut menu = NavMenu::default();
        assert_eq!(navigate_to_anchor(&page, &mut menu, "#skills"), Ok(800.0));
        assert_eq!(navigate_to_anchor(&page, &mut menu, "contact"), Ok(4500.0));
        assert_eq!(
            navigate_to_anchor(&page, &mut menu, "#portfolio"),
            Err(NavigateError::UnknownSection(UnknownSection(
                "portfolio".to_string()
            )))
        );
        assert_eq!(page.scroll_y(), 4500.0);
    }

    #[test]
    fn test_menu_toggle() {
        let mut menu = NavMenu::default();
        menu.toggle();
        assert!(menu.open);
        menu.toggle();
        assert!(!menu.open);
        menu.toggle();
        menu.close();
        assert!(!menu.open);
    }
}
