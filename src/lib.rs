#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod content;
pub mod navigation;
pub mod reveal;
pub mod scroll_spy;
pub mod sections;
pub mod timer;
pub mod typing;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating {}", env!("CARGO_PKG_NAME"));
    leptos::mount::hydrate_body(App);
}

#[cfg(test)]
mod tests {
    const STYLESHEET: &str = include_str!("../input.css");

    /// Bodies of every `@keyframes` rule in the stylesheet.
    fn keyframes(css: &str) -> Vec<(&str, &str)> {
        let mut found = Vec::new();
        let mut rest = css;
        while let Some(at) = rest.find("@keyframes ") {
            let after = &rest[at + "@keyframes ".len()..];
            let Some(open) = after.find('{') else { break };
            let name = after[..open].trim();
            let mut depth = 0;
            let mut end = after.len();
            for (i, c) in after[open..].char_indices() {
                match c {
                    '{' => depth += 1,
                    '}' => {
                        depth -= 1;
                        if depth == 0 {
                            end = open + i;
                            break;
                        }
                    }
                    _ => {}
                }
            }
            found.push((name, &after[open + 1..end]));
            rest = &after[end..];
        }
        found
    }

    #[test]
    fn test_keyframes_leave_centering_alone() {
        let frames = keyframes(STYLESHEET);
        for name in ["nav-in", "nav-in-scale", "drift", "float"] {
            assert!(frames.iter().any(|(n, _)| *n == name), "missing {name}");
        }
        for (name, body) in frames {
            for prop in ["translate:", "scale:", "rotate:"] {
                assert!(
                    !body.split([';', '{']).any(|d| d.trim_start().starts_with(prop)),
                    "{name} animates `{prop}`"
                );
            }
            assert!(!body.contains("-50%"), "{name} re-centers its element");
        }
    }

    #[test]
    fn test_timeline_keeps_fade() {
        let rule = STYLESHEET
            .lines()
            .find(|l| l.starts_with(".timeline-line {"))
            .unwrap();
        assert!(rule.contains("opacity"));
        assert!(rule.contains("transform"));
    }
}
