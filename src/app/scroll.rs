use std::{
    cell::RefCell,
    rc::Rc,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use leptos::{ev, prelude::*};

use super::dom::BrowserPage;
use crate::{
    navigation::PageGeometry,
    scroll_spy::{FrameGate, ScrollSpy},
    sections::{SectionId, SECTIONS},
};

/// Installs the scroll spy for the page and returns the active section.
///
/// Scroll and resize events are coalesced to one evaluation per animation
/// frame. Listeners are removed when the owning view is torn down, and a frame
/// already queued at that point is ignored.
pub fn use_scroll_spy() -> ReadSignal<SectionId> {
    let (active, set_active) = signal(SECTIONS[0].id);

    Effect::new(move |_| {
        let page = BrowserPage;
        let spy = Rc::new(RefCell::new(ScrollSpy::default()));
        let gate = Arc::new(Mutex::new(FrameGate::default()));

        let evaluate = move || {
            let next = spy
                .borrow_mut()
                .update(page.scroll_y(), |id| page.section_extent(id));
            if active.get_untracked() != next {
                log::trace!("active section: {next}");
                set_active.set(next);
            }
        };
        evaluate();

        let schedule = {
            let gate = Arc::clone(&gate);
            move || {
                if !lock(&gate).request() {
                    return;
                }
                let gate = Arc::clone(&gate);
                let evaluate = evaluate.clone();
                request_animation_frame(move || {
                    if lock(&gate).release() {
                        evaluate();
                    }
                });
            }
        };

        let on_scroll = window_event_listener(ev::scroll, {
            let schedule = schedule.clone();
            move |_| schedule()
        });
        let on_resize = window_event_listener(ev::resize, move |_| schedule());

        on_cleanup(move || {
            lock(&gate).close();
            on_scroll.remove();
            on_resize.remove();
        });
    });

    active
}

fn lock(gate: &Mutex<FrameGate>) -> MutexGuard<'_, FrameGate> {
    gate.lock().unwrap_or_else(PoisonError::into_inner)
}
