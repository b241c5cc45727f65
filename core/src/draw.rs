use crate::geo::{Bounds, LatLng};

/// The two-click rectangle interaction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DrawSession {
    active: bool,
    start: Option<LatLng>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawStep {
    /// Draw mode is off; the click belongs to the map.
    Ignored,
    /// First corner recorded.
    Started(LatLng),
    /// Second corner recorded; draw mode has switched itself off.
    Completed(Bounds),
}

impl DrawSession {
    /// Flips draw mode and returns the new state. Turning it off drops any
    /// pending corner.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        if !self.active {
            self.start = None;
        }
        self.active
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn pending(&self) -> Option<LatLng> {
        self.start
    }

    pub fn click(&mut self, point: LatLng) -> DrawStep {
        if !self.active {
            return DrawStep::Ignored;
        }
        match self.start.take() {
            None => {
                self.start = Some(point);
                DrawStep::Started(point)
            }
            Some(start) => {
                self.active = false;
                DrawStep::Completed(Bounds::from_corners(start, point))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicks_outside_draw_mode_are_ignored() {
        let mut session = DrawSession::default();
        assert_eq!(session.click(LatLng::new(1.0, 1.0)), DrawStep::Ignored);
        assert_eq!(session.pending(), None);
    }

    #[test]
    fn second_click_completes_and_disarms() {
        let mut session = DrawSession::default();
        assert!(session.toggle());
        let a = LatLng::new(1.0, 2.0);
        let b = LatLng::new(0.0, 3.0);
        assert_eq!(session.click(a), DrawStep::Started(a));
        assert_eq!(
            session.click(b),
            DrawStep::Completed(Bounds::from_corners(a, b))
        );
        assert!(!session.is_active());
        assert_eq!(session.pending(), None);
    }

    #[test]
    fn toggling_off_drops_the_pending_corner() {
        let mut session = DrawSession::default();
        session.toggle();
        session.click(LatLng::new(5.0, 5.0));
        assert!(!session.toggle());
        assert_eq!(session.pending(), None);
    }
}
