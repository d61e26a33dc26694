/// Scrollable, capped list of activity lines shown next to the chat.
#[derive(Debug)]
pub struct LogView {
    pub entries: Vec<String>,
    pub scroll_offset: u16,
    capacity: usize,
}

impl LogView {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            scroll_offset: 0,
            capacity,
        }
    }

    pub fn add(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
        if self.entries.len() > self.capacity {
            self.entries.remove(0);
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_drops_oldest_at_capacity() {
        let mut logs = LogView::new(3);
        for i in 0..5 {
            logs.add(format!("entry {}", i));
        }
        assert_eq!(logs.entries.len(), 3);
        assert_eq!(logs.entries[0], "entry 2");
        assert_eq!(logs.entries[2], "entry 4");
    }
}
