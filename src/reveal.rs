/// One-shot entrance trigger for a content block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntranceFlag {
    played: bool,
}

impl EntranceFlag {
    /// Feed an intersection observation. Returns true only on the first
    /// observation where the block is visible.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.played || !intersecting {
            return false;
        }
        self.played = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once() {
        let mut flag = EntranceFlag::default();
        assert!(!flag.observe(false));
        assert!(!flag.observe(false));
        assert!(flag.observe(true));
        assert!(!flag.observe(false));
        assert!(!flag.observe(true));
    }
}
