// Copyright 2025 the gtmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gtmap_gesture::{InputEvent, TouchPhase};
use kurbo::{Point, Rect};

use super::Interaction;
use crate::lifecycle::Handler;
use crate::types::{HookError, Interactions, ViewChange};

/// Pan by dragging with the primary pointer or a single finger.
///
/// Emits the pointer movement since the previous event as [`ViewChange::Pan`], so the map
/// content follows the pointer. A second finger ends the drag; the pinch handlers take over.
#[derive(Clone, Debug, Default)]
pub struct DragPan {
    last: Option<Point>,
    // Set while a one-finger drag is in progress.
    touch_id: Option<i32>,
}

impl DragPan {
    /// Create an idle drag handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }

    fn start(&mut self, pos: Point, touch_id: Option<i32>) {
        self.last = Some(pos);
        self.touch_id = touch_id;
    }

    fn step(&mut self, pos: Point) -> Option<ViewChange> {
        let last = self.last?;
        self.last = Some(pos);
        let delta = pos - last;
        (delta.x != 0.0 || delta.y != 0.0).then_some(ViewChange::Pan(delta))
    }

    fn end(&mut self) {
        self.last = None;
        self.touch_id = None;
    }
}

impl Handler for DragPan {
    fn add_hooks(&mut self) -> Result<(), HookError> {
        self.end();
        Ok(())
    }

    fn remove_hooks(&mut self) -> Result<(), HookError> {
        self.end();
        Ok(())
    }
}

impl Interaction for DragPan {
    fn kind(&self) -> Interactions {
        Interactions::DRAG
    }

    fn handle(&mut self, event: &InputEvent, _viewport: Rect) -> Option<ViewChange> {
        match event {
            InputEvent::PointerDown { position } => {
                self.start(*position, None);
                None
            }
            InputEvent::PointerMove { position } if self.touch_id.is_none() => {
                self.step(*position)
            }
            InputEvent::PointerUp { .. } if self.touch_id.is_none() => {
                self.end();
                None
            }
            InputEvent::Touch { phase, contacts } => match (phase, contacts.as_slice()) {
                (TouchPhase::Start | TouchPhase::Move, [only]) => {
                    if self.touch_id == Some(only.id) {
                        self.step(only.client)
                    } else {
                        // New finger, or the survivor of a pinch: re-anchor without jumping.
                        self.start(only.client, Some(only.id));
                        None
                    }
                }
                _ => {
                    self.end();
                    None
                }
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtmap_gesture::TouchContact;
    use kurbo::Vec2;

    const VIEW: Rect = Rect::new(0.0, 0.0, 400.0, 300.0);

    fn touch(phase: TouchPhase, pts: &[(i32, f64, f64)]) -> InputEvent {
        InputEvent::Touch {
            phase,
            contacts: pts
                .iter()
                .map(|&(id, x, y)| TouchContact::new(id, Point::new(x, y)))
                .collect(),
        }
    }

    #[test]
    fn mouse_drag_emits_incremental_pans() {
        let mut d = DragPan::new();
        let down = InputEvent::PointerDown {
            position: Point::new(10.0, 10.0),
        };
        assert_eq!(d.handle(&down, VIEW), None);
        assert!(d.is_dragging());

        let mv = |x, y| InputEvent::PointerMove {
            position: Point::new(x, y),
        };
        assert_eq!(
            d.handle(&mv(15.0, 12.0), VIEW),
            Some(ViewChange::Pan(Vec2::new(5.0, 2.0)))
        );
        assert_eq!(
            d.handle(&mv(10.0, 20.0), VIEW),
            Some(ViewChange::Pan(Vec2::new(-5.0, 8.0)))
        );
        assert_eq!(d.handle(&mv(10.0, 20.0), VIEW), None);

        let up = InputEvent::PointerUp {
            position: Point::new(10.0, 20.0),
        };
        assert_eq!(d.handle(&up, VIEW), None);
        assert!(!d.is_dragging());
        assert_eq!(d.handle(&mv(50.0, 50.0), VIEW), None);
    }

    #[test]
    fn hover_moves_without_press_do_nothing() {
        let mut d = DragPan::new();
        let mv = InputEvent::PointerMove {
            position: Point::new(3.0, 3.0),
        };
        assert_eq!(d.handle(&mv, VIEW), None);
    }

    #[test]
    fn one_finger_drag_pans() {
        let mut d = DragPan::new();
        assert_eq!(d.handle(&touch(TouchPhase::Start, &[(1, 0.0, 0.0)]), VIEW), None);
        assert_eq!(
            d.handle(&touch(TouchPhase::Move, &[(1, 4.0, -3.0)]), VIEW),
            Some(ViewChange::Pan(Vec2::new(4.0, -3.0)))
        );
    }

    #[test]
    fn second_finger_ends_drag_and_survivor_reanchors() {
        let mut d = DragPan::new();
        let _ = d.handle(&touch(TouchPhase::Start, &[(1, 0.0, 0.0)]), VIEW);
        let two = touch(TouchPhase::Start, &[(1, 0.0, 0.0), (2, 50.0, 0.0)]);
        assert_eq!(d.handle(&two, VIEW), None);
        assert!(!d.is_dragging());

        // Finger 1 lifts; finger 2 remains at a different spot. No jump.
        let survivor = touch(TouchPhase::End, &[(2, 60.0, 5.0)]);
        assert_eq!(d.handle(&survivor, VIEW), None);
        let moved = touch(TouchPhase::Move, &[(2, 61.0, 5.0)]);
        assert_eq!(d.handle(&moved, VIEW), None);
        let moved_again = touch(TouchPhase::Move, &[(2, 63.0, 5.0)]);
        assert_eq!(
            d.handle(&moved_again, VIEW),
            Some(ViewChange::Pan(Vec2::new(2.0, 0.0)))
        );
    }

    #[test]
    fn remove_hooks_cancels_drag() {
        let mut d = DragPan::new();
        let _ = d.handle(
            &InputEvent::PointerDown {
                position: Point::ORIGIN,
            },
            VIEW,
        );
        d.remove_hooks().unwrap();
        assert!(!d.is_dragging());
    }
}
