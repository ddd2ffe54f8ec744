/// Scroll state for the message pane.
///
/// While `follow_latest` is set the pane is pinned to the last line. Scrolling
/// up releases it; scrolling back down to the tail picks it up again.
#[derive(Debug, Clone)]
pub struct ChatScroll {
    offset: u16,
    follow_latest: bool,
}

impl ChatScroll {
    pub fn new() -> Self {
        Self {
            offset: 0,
            follow_latest: true,
        }
    }

    pub fn is_following_latest(&self) -> bool {
        self.follow_latest
    }

    pub fn scroll_to_latest(&mut self) {
        self.follow_latest = true;
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.follow_latest = false;
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines);
    }

    /// Clamps the offset to the content and returns the row to start drawing
    /// from. Called once per frame with the current content height.
    pub fn resolve(&mut self, total_lines: usize, available_height: u16) -> u16 {
        let total = u16::try_from(total_lines).unwrap_or(u16::MAX);
        let max_scroll = total.saturating_sub(available_height);

        if self.follow_latest || self.offset >= max_scroll {
            self.offset = max_scroll;
            self.follow_latest = true;
        }

        self.offset
    }
}

impl Default for ChatScroll {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follows_tail_by_default() {
        let mut scroll = ChatScroll::new();
        assert_eq!(scroll.resolve(50, 10), 40);
        assert_eq!(scroll.resolve(60, 10), 50);
    }

    #[test]
    fn test_short_content_does_not_scroll() {
        let mut scroll = ChatScroll::new();
        assert_eq!(scroll.resolve(3, 10), 0);
    }

    #[test]
    fn test_scroll_up_releases_and_scroll_down_resumes() {
        let mut scroll = ChatScroll::new();
        scroll.resolve(50, 10);

        scroll.scroll_up(5);
        assert!(!scroll.is_following_latest());
        assert_eq!(scroll.resolve(50, 10), 35);
        // New content does not yank the view while released.
        assert_eq!(scroll.resolve(55, 10), 35);

        scroll.scroll_down(100);
        assert_eq!(scroll.resolve(55, 10), 45);
        assert!(scroll.is_following_latest());
    }

    #[test]
    fn test_scroll_to_latest_snaps_back() {
        let mut scroll = ChatScroll::new();
        scroll.resolve(50, 10);
        scroll.scroll_up(20);
        scroll.scroll_to_latest();
        assert_eq!(scroll.resolve(52, 10), 42);
    }
}
