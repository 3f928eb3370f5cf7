//! Pointer gestures: drag-swipes and quadrant clicks.
//!
//! Coordinates are board "pixels" with the origin at the board's top-left
//! corner and y growing downwards.

use crate::game::Direction;

/// The axis with the larger displacement wins. Ties and movement not
/// exceeding `threshold` resolve to nothing.
pub fn resolve_direction(dx: f64, dy: f64, threshold: f64) -> Option<Direction> {
    let (ax, ay) = (dx.abs(), dy.abs());

    if ax > ay && ax > threshold {
        Some(if dx > 0.0 { Direction::Right } else { Direction::Left })
    } else if ay > ax && ay > threshold {
        Some(if dy > 0.0 { Direction::Down } else { Direction::Up })
    } else {
        None
    }
}

/// What a finished or ongoing gesture means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Swipe(Direction),
    /// A press and release without a swipe; carries the quadrant direction,
    /// if the click was not dead-centre
    Click(Option<Direction>),
}

/// Tracks one pointer press at a time
#[derive(Debug, Clone)]
pub struct GestureTracker {
    min_swipe_distance: f64,
    /// Where the current press started; cleared once a swipe fired
    origin: Option<(f64, f64)>,
    pressed: bool,
    swiped: bool,
}

impl GestureTracker {
    pub fn new(min_swipe_distance: f64) -> Self {
        Self {
            min_swipe_distance,
            origin: None,
            pressed: false,
            swiped: false,
        }
    }

    pub fn press(&mut self, x: f64, y: f64) {
        self.origin = Some((x, y));
        self.pressed = true;
        self.swiped = false;
    }

    /// Movement while pressed. A swipe fires once per press; short moves
    /// keep waiting for a longer one.
    pub fn drag(&mut self, x: f64, y: f64) -> Option<Gesture> {
        let (ox, oy) = self.origin?;
        let direction = resolve_direction(x - ox, y - oy, self.min_swipe_distance)?;

        self.origin = None;
        self.swiped = true;
        Some(Gesture::Swipe(direction))
    }

    /// Release. Yields a click when the press did not turn into a swipe.
    /// `center` is the board centre the click quadrant is measured from.
    pub fn release(&mut self, x: f64, y: f64, center: (f64, f64)) -> Option<Gesture> {
        let was_click = self.pressed && !self.swiped;
        self.origin = None;
        self.pressed = false;
        self.swiped = false;

        if !was_click {
            return None;
        }
        Some(Gesture::Click(resolve_direction(
            x - center.0,
            y - center.1,
            0.0,
        )))
    }

    pub fn cancel(&mut self) {
        self.origin = None;
        self.pressed = false;
        self.swiped = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_larger_axis_wins() {
        assert_eq!(resolve_direction(40.0, 10.0, 30.0), Some(Direction::Right));
        assert_eq!(resolve_direction(-40.0, 10.0, 30.0), Some(Direction::Left));
        assert_eq!(resolve_direction(5.0, 31.0, 30.0), Some(Direction::Down));
        assert_eq!(resolve_direction(5.0, -31.0, 30.0), Some(Direction::Up));
    }

    #[test]
    fn test_ties_and_short_moves_ignored() {
        assert_eq!(resolve_direction(40.0, 40.0, 30.0), None);
        assert_eq!(resolve_direction(-40.0, 40.0, 30.0), None);
        assert_eq!(resolve_direction(30.0, 0.0, 30.0), None);
        assert_eq!(resolve_direction(0.0, 0.0, 0.0), None);
    }

    #[test]
    fn test_swipe_fires_once_per_press() {
        let mut tracker = GestureTracker::new(30.0);
        tracker.press(100.0, 100.0);

        assert_eq!(tracker.drag(110.0, 100.0), None);
        assert_eq!(tracker.drag(60.0, 95.0), Some(Gesture::Swipe(Direction::Left)));
        assert_eq!(tracker.drag(0.0, 95.0), None);

        // Release after a swipe is not a click
        assert_eq!(tracker.release(0.0, 95.0, (200.0, 200.0)), None);
    }

    #[test]
    fn test_click_resolves_quadrant() {
        let mut tracker = GestureTracker::new(30.0);
        let center = (200.0, 200.0);

        tracker.press(350.0, 220.0);
        assert_eq!(
            tracker.release(350.0, 220.0, center),
            Some(Gesture::Click(Some(Direction::Right)))
        );

        tracker.press(210.0, 20.0);
        assert_eq!(
            tracker.release(210.0, 20.0, center),
            Some(Gesture::Click(Some(Direction::Up)))
        );

        tracker.press(200.0, 200.0);
        assert_eq!(tracker.release(200.0, 200.0, center), Some(Gesture::Click(None)));
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut tracker = GestureTracker::new(30.0);
        assert_eq!(tracker.drag(500.0, 0.0), None);
        assert_eq!(tracker.release(10.0, 10.0, (200.0, 200.0)), None);

        tracker.press(1.0, 1.0);
        tracker.cancel();
        assert_eq!(tracker.release(1.0, 1.0, (200.0, 200.0)), None);
    }
}
