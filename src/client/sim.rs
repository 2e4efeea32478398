//! Keyboard-driven stand-in for the webcam and hand-tracking stack.
//!
//! Arrow keys move the simulated fingertip, Space raises the thumb for one
//! frame, `h` hides the hand entirely. The synthesized pose rides the frame
//! and flows through the same classifier and gate as a tracked hand would,
//! so the whole pipeline runs with no camera attached.

use std::cell::RefCell;
use std::rc::Rc;

use crate::hand::landmarks::{LandmarkSet, Point};
use crate::hand::oracle::{Frame, FrameSource};

/// How far one key press moves the fingertip, in normalized units. One
/// press clears the swipe threshold on its own.
pub const NUDGE: f32 = 0.1;

/// The simulated hand, steered by the frame loop's key handling. Shared
/// with the rig through an `Rc` since everything runs on the loop thread.
pub struct SimPose {
    x: f32,
    y: f32,
    thumb_raised: bool,
    hand_visible: bool,
}

impl SimPose {
    fn new() -> Self {
        Self { x: 0.5, y: 0.5, thumb_raised: false, hand_visible: true }
    }

    pub fn nudge(&mut self, dx: f32, dy: f32) {
        self.x = (self.x + dx).clamp(0.0, 1.0);
        self.y = (self.y + dy).clamp(0.0, 1.0);
    }

    pub fn raise_thumb(&mut self) {
        self.thumb_raised = true;
    }

    pub fn toggle_hand(&mut self) {
        self.hand_visible = !self.hand_visible;
    }

    fn landmarks(&self) -> Option<LandmarkSet> {
        if !self.hand_visible {
            return None;
        }
        let tip = Point::new(self.x, self.y);
        Some(if self.thumb_raised {
            LandmarkSet::thumbs_up(tip)
        } else {
            LandmarkSet::resting(tip)
        })
    }
}

/// Frame source that "captures" the simulated hand. Pair it with
/// [`EmbeddedPoseOracle`](crate::hand::oracle::EmbeddedPoseOracle).
pub struct SimHandRig {
    pose: Rc<RefCell<SimPose>>,
    seq: u64,
    released: bool,
}

impl SimHandRig {
    /// The rig plus the steering handle the frame loop keeps.
    pub fn new() -> (Self, Rc<RefCell<SimPose>>) {
        let pose = Rc::new(RefCell::new(SimPose::new()));
        let rig = Self { pose: Rc::clone(&pose), seq: 0, released: false };
        (rig, pose)
    }
}

impl FrameSource for SimHandRig {
    fn next_frame(&mut self) -> Option<Frame> {
        if self.released {
            return None;
        }
        self.seq += 1;
        let mut pose = self.pose.borrow_mut();
        let frame = Frame::with_pose(self.seq, pose.landmarks());
        // The raised thumb is momentary: it rides exactly one frame.
        pose.thumb_raised = false;
        Some(frame)
    }

    fn release(&mut self) {
        self.released = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::gesture::{GestureClassifier, GestureEvent, GestureMode};
    use crate::hand::oracle::{EmbeddedPoseOracle, LandmarkOracle};

    #[test]
    fn a_raised_thumb_rides_exactly_one_frame() {
        let (mut rig, pose) = SimHandRig::new();
        let mut oracle = EmbeddedPoseOracle;
        let mut classifier = GestureClassifier::new(GestureMode::ThumbOverIndexTip);

        pose.borrow_mut().raise_thumb();

        let frame = rig.next_frame().unwrap();
        let hand = oracle.detect(&frame);
        assert_eq!(classifier.classify(hand.as_ref()), GestureEvent::ShootTrigger);

        let frame = rig.next_frame().unwrap();
        let hand = oracle.detect(&frame);
        assert_ne!(classifier.classify(hand.as_ref()), GestureEvent::ShootTrigger);
    }

    #[test]
    fn a_nudge_reads_back_as_a_swipe() {
        let (mut rig, pose) = SimHandRig::new();
        let mut oracle = EmbeddedPoseOracle;
        let mut classifier = GestureClassifier::new(GestureMode::Swipe);

        let frame = rig.next_frame().unwrap();
        classifier.classify(oracle.detect(&frame).as_ref());

        pose.borrow_mut().nudge(NUDGE, 0.0);
        let frame = rig.next_frame().unwrap();
        let event = classifier.classify(oracle.detect(&frame).as_ref());
        assert!(matches!(event, GestureEvent::Swipe(_)));
    }

    #[test]
    fn a_hidden_hand_is_no_hand() {
        let (mut rig, pose) = SimHandRig::new();
        pose.borrow_mut().toggle_hand();

        let frame = rig.next_frame().unwrap();
        assert!(frame.pose().is_none());

        pose.borrow_mut().toggle_hand();
        let frame = rig.next_frame().unwrap();
        assert!(frame.pose().is_some());
    }

    #[test]
    fn a_released_rig_stops_producing_frames() {
        let (mut rig, _pose) = SimHandRig::new();
        assert!(rig.next_frame().is_some());

        rig.release();
        assert!(rig.next_frame().is_none());
    }

    #[test]
    fn the_fingertip_stays_in_frame() {
        let (mut rig, pose) = SimHandRig::new();
        for _ in 0..30 {
            pose.borrow_mut().nudge(NUDGE, NUDGE);
        }
        let frame = rig.next_frame().unwrap();
        let hand = frame.pose().unwrap();
        assert!(hand.index_tip.x <= 1.0);
        assert!(hand.index_tip.y <= 1.0);
    }
}
