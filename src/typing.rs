use std::time::Duration;

pub const TAGLINE: &str = "Software Engineer | Full-Stack | Problem Solver";
pub const TYPING_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingStep {
    Revealed(&'static str),
    Finished,
}

/// Reveals a fixed phrase one character per tick, then stops.
#[derive(Debug, Clone)]
pub struct TypingEffect {
    source: &'static str,
    revealed: usize,
    total: usize,
}

impl TypingEffect {
    pub fn new(source: &'static str) -> Self {
        Self {
            source,
            revealed: 0,
            total: source.chars().count(),
        }
    }

    pub fn tick(&mut self) -> TypingStep {
        if self.revealed >= self.total {
            return TypingStep::Finished;
        }
        self.revealed += 1;
        TypingStep::Revealed(self.visible())
    }

    pub fn visible(&self) -> &'static str {
        let end = self
            .source
            .char_indices()
            .nth(self.revealed)
            .map(|(i, _)| i)
            .unwrap_or(self.source.len());
        &self.source[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_after_each_tick() {
        let mut typing = TypingEffect::new(TAGLINE);
        assert_eq!(typing.visible(), "");
        for k in 1..=TAGLINE.len() {
            assert_eq!(typing.tick(), TypingStep::Revealed(&TAGLINE[..k]));
            assert_eq!(typing.visible(), &TAGLINE[..k]);
        }
        assert_eq!(typing.tick(), TypingStep::Finished);
    }

    #[test]
    fn test_frozen_after_completion() {
        let mut typing = TypingEffect::new(TAGLINE);
        while typing.tick() != TypingStep::Finished {}
        for _ in 0..20 {
            assert_eq!(typing.tick(), TypingStep::Finished);
        }
        assert_eq!(typing.visible(), TAGLINE);
    }

    #[test]
    fn test_virtual_clock_scenario() {
        let mut typing = TypingEffect::new(TAGLINE);
        let mut elapsed = Duration::ZERO;
        while elapsed < TYPING_DELAY * 11 {
            elapsed += TYPING_DELAY;
            typing.tick();
        }
        assert_eq!(typing.visible(), "Software En");
    }

    #[test]
    fn test_multibyte_source() {
        let mut typing = TypingEffect::new("héllo ✗");
        typing.tick();
        typing.tick();
        assert_eq!(typing.visible(), "hé");
        for _ in 0..5 {
            typing.tick();
        }
        assert_eq!(typing.visible(), "héllo ✗");
        assert_eq!(typing.tick(), TypingStep::Finished);
    }

    #[test]
    fn test_empty_source_finishes_immediately() {
        let mut typing = TypingEffect::new("");
        assert_eq!(typing.tick(), TypingStep::Finished);
        assert_eq!(typing.visible(), "");
    }
}
