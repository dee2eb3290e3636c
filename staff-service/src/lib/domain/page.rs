/// Offset pagination window for list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: u32,
    pub limit: u32,
}

impl Page {
    pub const DEFAULT_LIMIT: u32 = 100;
    pub const MAX_LIMIT: u32 = 1000;

    /// Build a page, clamping `limit` to `1..=MAX_LIMIT`.
    pub fn new(skip: u32, limit: u32) -> Self {
        Self {
            skip,
            limit: limit.clamp(1, Self::MAX_LIMIT),
        }
    }

    /// Apply the window to an already ordered sequence.
    pub fn slice<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.skip as usize)
            .take(self.limit as usize)
            .collect()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_is_clamped() {
        assert_eq!(Page::new(0, 0).limit, 1);
        assert_eq!(Page::new(0, 50_000).limit, Page::MAX_LIMIT);
        assert_eq!(Page::default(), Page::new(0, 100));
    }

    #[test]
    fn test_slice() {
        let page = Page::new(2, 3);
        assert_eq!(page.slice(0..10), vec![2, 3, 4]);
        assert_eq!(Page::new(8, 5).slice(0..10), vec![8, 9]);
        assert!(Page::new(20, 5).slice(0..10).is_empty());
    }
}
