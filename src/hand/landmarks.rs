//! Named hand-landmark records delivered by the tracking model.
//!
//! Coordinates are normalized to the frame: x and y in 0.0–1.0, y growing
//! downward. Only the anatomical points the games actually read are carried;
//! resolving them as struct fields rules out the mislabeled-index lookups a
//! flat 21-point array invites.

/// One landmark position in normalized image coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The hand pose for one frame. Recreated every frame, never retained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LandmarkSet {
    pub wrist: Point,
    pub thumb_tip: Point,
    /// Base joint of the index finger.
    pub index_mcp: Point,
    pub index_tip: Point,
}

impl LandmarkSet {
    /// A neutral open-hand pose centered on `tip`, with the thumb resting
    /// below the index finger. Handy for simulators and tests; the joint
    /// offsets approximate a relaxed hand seen by the camera.
    pub fn resting(tip: Point) -> Self {
        Self {
            wrist: Point::new(tip.x - 0.03, tip.y + 0.25),
            thumb_tip: Point::new(tip.x - 0.06, tip.y + 0.15),
            index_mcp: Point::new(tip.x - 0.02, tip.y + 0.10),
            index_tip: tip,
        }
    }

    /// Same pose as [`resting`](Self::resting) but with the thumb raised
    /// above both the index fingertip and its base joint.
    pub fn thumbs_up(tip: Point) -> Self {
        Self {
            thumb_tip: Point::new(tip.x - 0.06, tip.y - 0.05),
            ..Self::resting(tip)
        }
    }
}
