pub trait ScrollableList<T> {
    fn select(&mut self, index: Option<usize>);

    fn selected(&self) -> Option<usize>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool;

    fn scroll_up(&mut self) {
        let selection = match self.selected() {
            _ if self.is_empty() => None,
            Some(i) if i > 0 => Some(i - 1),
            _ => Some(0),
        };
        self.select(selection);
    }

    fn scroll_down(&mut self) {
        let selection = match self.selected() {
            _ if self.is_empty() => None,
            Some(i) if i < self.len() - 1 => Some(i + 1),
            Some(_) => Some(self.len() - 1),
            None => Some(0),
        };
        self.select(selection);
    }

    fn scroll_to_top(&mut self) {
        let selection = match self.selected() {
            _ if self.is_empty() => None,
            _ => Some(0),
        };
        self.select(selection);
    }

    fn scroll_to_bottom(&mut self) {
        let selection = match self.selected() {
            _ if self.is_empty() => None,
            _ => Some(self.len() - 1),
        };
        self.select(selection);
    }
}
