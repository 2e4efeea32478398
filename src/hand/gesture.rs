//! Reduces raw landmark sets to discrete gesture events.
//!
//! Every test here is a single scalar comparison between named landmarks.
//! That keeps the input channel auditable: given the same two frames, the
//! classifier always produces the same event.

use super::landmarks::LandmarkSet;

/// Minimum rightward displacement of the index fingertip, in normalized
/// units between consecutive frames, for a swipe to register.
pub const SWIPE_THRESHOLD: f32 = 0.08;

/// A discrete semantic event derived from one frame of landmarks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Rightward swipe; payload is the fingertip's x displacement since the
    /// previous frame.
    Swipe(f32),
    /// Thumb raised above the mode's reference joint.
    ShootTrigger,
    /// Hand visible but no discrete gesture this frame; payload is the
    /// index fingertip.
    AimPoint(f32, f32),
    /// No hand detected.
    None,
}

/// Which relational test the classifier runs each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureMode {
    /// Index fingertip moved right past [`SWIPE_THRESHOLD`].
    Swipe,
    /// Thumb tip above the index fingertip (thumbs-up, the dice-roll sign).
    ThumbOverIndexTip,
    /// Thumb tip above the index finger's base joint (the shoot sign).
    ThumbOverIndexMcp,
}

/// Stateful per-session classifier. Holds the previous frame's fingertip
/// reference for swipe displacement and the most recent aim point.
pub struct GestureClassifier {
    mode: GestureMode,
    last_index_x: Option<f32>,
    aim: Option<(f32, f32)>,
}

impl GestureClassifier {
    pub fn new(mode: GestureMode) -> Self {
        Self { mode, last_index_x: None, aim: None }
    }

    /// Classify the current frame. Exactly one event per call.
    pub fn classify(&mut self, hand: Option<&LandmarkSet>) -> GestureEvent {
        let Some(hand) = hand else {
            return GestureEvent::None;
        };

        let tip = hand.index_tip;
        self.aim = Some((tip.x, tip.y));

        match self.mode {
            GestureMode::Swipe => {
                // No displacement is computable on the first observed frame.
                let Some(last_x) = self.last_index_x.replace(tip.x) else {
                    return GestureEvent::None;
                };
                let dx = tip.x - last_x;
                if dx > SWIPE_THRESHOLD {
                    GestureEvent::Swipe(dx)
                } else {
                    GestureEvent::None
                }
            }
            GestureMode::ThumbOverIndexTip => {
                // Image y grows downward, so "above" is numerically smaller.
                if hand.thumb_tip.y < tip.y {
                    GestureEvent::ShootTrigger
                } else {
                    GestureEvent::AimPoint(tip.x, tip.y)
                }
            }
            GestureMode::ThumbOverIndexMcp => {
                if hand.thumb_tip.y < hand.index_mcp.y {
                    GestureEvent::ShootTrigger
                } else {
                    GestureEvent::AimPoint(tip.x, tip.y)
                }
            }
        }
    }

    /// The index fingertip seen most recently, kept current on every frame
    /// with a visible hand regardless of which event fired.
    pub fn aim(&self) -> Option<(f32, f32)> {
        self.aim
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::landmarks::Point;

    fn hand_at(x: f32, y: f32) -> LandmarkSet {
        LandmarkSet::resting(Point::new(x, y))
    }

    #[test]
    fn no_hand_yields_none() {
        let mut classifier = GestureClassifier::new(GestureMode::Swipe);
        assert_eq!(classifier.classify(None), GestureEvent::None);
        assert_eq!(classifier.aim(), None);
    }

    #[test]
    fn first_observed_frame_never_swipes() {
        let mut classifier = GestureClassifier::new(GestureMode::Swipe);
        assert_eq!(classifier.classify(Some(&hand_at(0.9, 0.5))), GestureEvent::None);
    }

    #[test]
    fn swipe_fires_past_threshold_only() {
        let mut classifier = GestureClassifier::new(GestureMode::Swipe);
        classifier.classify(Some(&hand_at(0.2, 0.5)));

        // below threshold
        assert_eq!(classifier.classify(Some(&hand_at(0.25, 0.5))), GestureEvent::None);

        // past threshold
        match classifier.classify(Some(&hand_at(0.40, 0.5))) {
            GestureEvent::Swipe(dx) => assert!((dx - 0.15).abs() < 1e-5),
            other => panic!("expected swipe, got {other:?}"),
        }
    }

    #[test]
    fn leftward_motion_is_not_a_swipe() {
        let mut classifier = GestureClassifier::new(GestureMode::Swipe);
        classifier.classify(Some(&hand_at(0.8, 0.5)));
        assert_eq!(classifier.classify(Some(&hand_at(0.5, 0.5))), GestureEvent::None);
    }

    #[test]
    fn thumbs_up_triggers_over_index_tip() {
        let mut classifier = GestureClassifier::new(GestureMode::ThumbOverIndexTip);
        let tip = Point::new(0.5, 0.5);

        assert_eq!(
            classifier.classify(Some(&LandmarkSet::thumbs_up(tip))),
            GestureEvent::ShootTrigger
        );
        assert_eq!(
            classifier.classify(Some(&LandmarkSet::resting(tip))),
            GestureEvent::AimPoint(0.5, 0.5)
        );
    }

    #[test]
    fn mcp_mode_needs_thumb_above_the_base_joint() {
        let mut classifier = GestureClassifier::new(GestureMode::ThumbOverIndexMcp);
        let tip = Point::new(0.5, 0.5);

        // Thumb between fingertip and base joint: above the tip test's bar
        // but below the MCP's.
        let mut between = LandmarkSet::resting(tip);
        between.thumb_tip = Point::new(0.44, tip.y + 0.12);
        assert_eq!(
            classifier.classify(Some(&between)),
            GestureEvent::AimPoint(0.5, 0.5)
        );

        assert_eq!(
            classifier.classify(Some(&LandmarkSet::thumbs_up(tip))),
            GestureEvent::ShootTrigger
        );
    }

    #[test]
    fn aim_stays_current_whether_or_not_shoot_fires() {
        let mut classifier = GestureClassifier::new(GestureMode::ThumbOverIndexMcp);

        classifier.classify(Some(&LandmarkSet::thumbs_up(Point::new(0.3, 0.4))));
        assert_eq!(classifier.aim(), Some((0.3, 0.4)));

        classifier.classify(Some(&LandmarkSet::resting(Point::new(0.7, 0.6))));
        assert_eq!(classifier.aim(), Some((0.7, 0.6)));

        // A dropped hand keeps the last known aim rather than clearing it.
        classifier.classify(None);
        assert_eq!(classifier.aim(), Some((0.7, 0.6)));
    }
}
