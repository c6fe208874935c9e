/// LIFO container: push, pop and top at one end only
#[derive(Clone, Debug, Default)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create a new, empty stack
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Push an item on top
    pub fn push(&mut self, item: T) {
        let before = self.items.len();
        self.items.push(item);
        // --post operation assertion
        assert_eq!(self.items.len(), before + 1, "Stack must grow by one after push");
    }

    /// Remove and return the top item
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Borrow the top item
    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Items from top to bottom
    pub fn iter_from_top(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.items.iter().rev()
    }
}
