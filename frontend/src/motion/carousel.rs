use crate::error::{MotionError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Set while a slide transition is settling; advances are ignored until released.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TransitionLock {
    engaged: bool,
}

impl TransitionLock {
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    fn engage(&mut self) {
        self.engaged = true;
    }

    fn release(&mut self) {
        self.engaged = false;
    }
}

/// A rotating, wrap-around window of `window` consecutive items.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel<T> {
    items: Vec<T>,
    window: usize,
    index: usize,
    lock: TransitionLock,
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>, window: usize) -> Result<Self> {
        if items.is_empty() {
            return Err(MotionError::InvalidArgument(
                "carousel needs at least one item".into(),
            ));
        }
        if window == 0 || window > items.len() {
            return Err(MotionError::InvalidArgument(format!(
                "carousel window must be in 1..={}, got {window}",
                items.len()
            )));
        }
        Ok(Self {
            items,
            window,
            index: 0,
            lock: TransitionLock::default(),
        })
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Number of distinct window positions the index rotates through.
    pub fn step_count(&self) -> usize {
        self.items.len().saturating_sub(self.window - 1).max(1)
    }

    pub fn is_animating(&self) -> bool {
        self.lock.is_engaged()
    }

    /// Moves one step and engages the transition lock. Returns `false` if the lock was held.
    pub fn advance(&mut self, direction: Direction) -> bool {
        if self.lock.is_engaged() {
            return false;
        }
        self.lock.engage();

        let steps = self.step_count();
        self.index = match direction {
            Direction::Next => (self.index + 1) % steps,
            Direction::Prev => (self.index + steps - 1) % steps,
        };
        true
    }

    /// Called once the settle delay has elapsed.
    pub fn release(&mut self) {
        self.lock.release();
    }

    pub fn visible_window(&self) -> Vec<&T> {
        let len = self.items.len();
        (0..self.window)
            .map(|k| &self.items[(self.index + k) % len])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn letters(n: usize) -> Vec<char> {
        ('A'..='Z').take(n).collect()
    }

    #[test]
    fn empty_items_rejected() {
        let err = Carousel::<char>::new(Vec::new(), 3).unwrap_err();
        assert!(matches!(err, MotionError::InvalidArgument(_)));
    }

    #[test]
    fn bad_window_rejected() {
        assert!(Carousel::new(letters(5), 0).is_err());
        assert!(Carousel::new(letters(2), 3).is_err());
    }

    #[test]
    fn five_items_window_three() {
        let mut carousel = Carousel::new(letters(5), 3).unwrap();
        assert_eq!(carousel.visible_window(), vec![&'A', &'B', &'C']);
        assert_eq!(carousel.step_count(), 3);

        assert!(carousel.advance(Direction::Next));
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.visible_window(), vec![&'B', &'C', &'D']);
    }

    #[test]
    fn next_then_prev_returns_home() {
        let mut carousel = Carousel::new(letters(8), 3).unwrap();
        carousel.advance(Direction::Next);
        carousel.release();
        carousel.advance(Direction::Prev);
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.visible_window().len(), 3);
    }

    #[test]
    fn second_advance_inside_settle_window_is_ignored() {
        let mut carousel = Carousel::new(letters(8), 3).unwrap();
        assert!(carousel.advance(Direction::Next));
        assert!(carousel.is_animating());
        assert!(!carousel.advance(Direction::Next));
        assert_eq!(carousel.current_index(), 1);

        carousel.release();
        assert!(!carousel.is_animating());
        assert!(carousel.advance(Direction::Next));
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn prev_from_start_wraps_to_last_position() {
        let mut carousel = Carousel::new(letters(6), 3).unwrap();
        carousel.advance(Direction::Prev);
        assert_eq!(carousel.current_index(), 3);
        assert_eq!(carousel.visible_window(), vec![&'D', &'E', &'F']);
    }

    #[test]
    fn next_wraps_after_last_distinct_window() {
        let mut carousel = Carousel::new(letters(5), 3).unwrap();
        for _ in 0..3 {
            carousel.advance(Direction::Next);
            carousel.release();
        }
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn window_equal_to_len_has_one_position() {
        let mut carousel = Carousel::new(letters(3), 3).unwrap();
        assert_eq!(carousel.step_count(), 1);
        assert!(carousel.advance(Direction::Next));
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.visible_window(), vec![&'A', &'B', &'C']);
    }

    #[test]
    fn single_item_carousel() {
        let mut carousel = Carousel::new(vec!["only"], 1).unwrap();
        carousel.advance(Direction::Prev);
        assert_eq!(carousel.visible_window(), vec![&"only"]);
    }

    proptest! {
        #[test]
        fn window_is_always_full_and_index_in_range(
            len in 1usize..20,
            window_seed in 0usize..20,
            moves in proptest::collection::vec(any::<bool>(), 0..50),
        ) {
            let window = window_seed % len + 1;
            let mut carousel = Carousel::new((0..len).collect::<Vec<_>>(), window).unwrap();
            for forward in moves {
                carousel.advance(if forward { Direction::Next } else { Direction::Prev });
                carousel.release();
                prop_assert!(carousel.current_index() < carousel.step_count());
                let shown = carousel.visible_window();
                prop_assert_eq!(shown.len(), window);
                for (k, item) in shown.iter().enumerate() {
                    prop_assert_eq!(**item, (carousel.current_index() + k) % len);
                }
            }
        }
    }
}
