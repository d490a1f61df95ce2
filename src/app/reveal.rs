use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer, UseIntersectionObserverReturn};

use crate::reveal::EntranceFlag;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Entrance {
    #[default]
    FadeUp,
    Fade,
    Scale,
    Tilt,
}

impl Entrance {
    fn class(&self) -> &'static str {
        match self {
            Self::FadeUp => "reveal reveal-fade-up",
            Self::Fade => "reveal reveal-fade",
            Self::Scale => "reveal reveal-scale",
            Self::Tilt => "reveal reveal-tilt",
        }
    }
}

/// Becomes true the first time `target` intersects the viewport and stays true.
pub fn use_entrance(target: NodeRef<html::Div>) -> ReadSignal<bool> {
    let (entered, set_entered) = signal(false);
    let mut flag = EntranceFlag::default();

    let UseIntersectionObserverReturn { stop, .. } =
        use_intersection_observer(target, move |entries, _| {
            let visible = entries.iter().any(|entry| entry.is_intersecting());
            if flag.observe(visible) {
                set_entered.set(true);
            }
        });

    Effect::new(move |_| {
        if entered.get() {
            stop();
        }
    });

    entered
}

#[component]
pub fn Reveal(
    #[prop(into, optional)] class: String,
    #[prop(optional)] entrance: Entrance,
    /// Added to the transition so siblings can stagger.
    #[prop(optional)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let entered = use_entrance(target);
    let classes = move || {
        let state = if entered.get() { "entered" } else { "" };
        format!("{} {} {}", entrance.class(), class, state)
    };

    view! {
        <div node_ref=target class=classes style=format!("transition-delay: {delay_ms}ms")>
            {children()}
        </div>
    }
}
