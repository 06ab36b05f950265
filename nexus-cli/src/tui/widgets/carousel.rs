use thiserror::Error;

/// Errors produced by carousel navigation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel requires at least one item")]
    Empty,
    #[error("index {index} out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
}

/// Wraparound "current item of N" selection state.
///
/// Shared by every carousel-style widget on the page (upcoming events,
/// team spotlight). Navigation is pure index arithmetic modulo the item
/// count; the item set is fixed for the lifetime of the state.
#[derive(Debug, Clone)]
pub struct CarouselState<T> {
    items: Vec<T>,
    current: usize,
    paused: bool,
}

impl<T> CarouselState<T> {
    /// Create a carousel over a non-empty item list, first item selected
    pub fn new(items: Vec<T>) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            items,
            current: 0,
            paused: false,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Index of the active item, always in [0, len)
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The active item
    pub fn current(&self) -> &T {
        &self.items[self.current]
    }

    /// Advance to the next item, wrapping from the last back to the first
    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.items.len();
    }

    /// Step to the previous item, wrapping from the first to the last
    pub fn previous(&mut self) {
        self.current = (self.current + self.items.len() - 1) % self.items.len();
    }

    /// Select an item directly (indicator dots, list click).
    ///
    /// Re-selecting the active index is a legal no-op. Out-of-range
    /// indices are rejected and leave the selection unchanged.
    pub fn select(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.items.len() {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Pause or resume auto-advance (set while the user is interacting
    /// with the owning widget)
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Timer-driven advance. Returns false without moving when paused,
    /// so a stale tick never yanks content from under the user.
    pub fn advance_auto(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.next();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(n: usize) -> CarouselState<usize> {
        CarouselState::new((0..n).collect()).unwrap()
    }

    #[test]
    fn test_empty_rejected() {
        let result = CarouselState::<u8>::new(vec![]);
        assert_eq!(result.unwrap_err(), CarouselError::Empty);
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut c = carousel(4);
        for _ in 0..3 {
            c.next();
        }
        assert_eq!(c.current_index(), 3);
        c.next();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut c = carousel(4);
        assert_eq!(c.current_index(), 0);
        c.previous();
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn test_index_stays_in_range() {
        // Wraparound invariant under an arbitrary navigation sequence
        for n in 1..=5 {
            let mut c = carousel(n);
            for i in 0..50 {
                if i % 3 == 0 {
                    c.previous();
                } else {
                    c.next();
                }
                assert!(c.current_index() < n);
            }
        }
    }

    #[test]
    fn test_single_item_is_noop() {
        let mut c = carousel(1);
        c.next();
        assert_eq!(c.current_index(), 0);
        c.previous();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut c = carousel(4);
        c.next();
        let err = c.select(4).unwrap_err();
        assert_eq!(err, CarouselError::OutOfRange { index: 4, len: 4 });
        // Selection unchanged after the failed request
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_reselect_current_is_legal() {
        let mut c = carousel(4);
        c.select(2).unwrap();
        assert!(c.select(2).is_ok());
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_auto_advance_respects_pause() {
        let mut c = carousel(3);
        assert!(c.advance_auto());
        assert_eq!(c.current_index(), 1);

        c.set_paused(true);
        assert!(!c.advance_auto());
        assert_eq!(c.current_index(), 1);

        // Pausing twice is fine, resuming picks back up
        c.set_paused(true);
        c.set_paused(false);
        assert!(c.advance_auto());
        assert_eq!(c.current_index(), 2);
    }
}
