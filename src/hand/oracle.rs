//! Interfaces to the capture and hand-tracking stack.
//!
//! Both are external collaborators: the games only ever see frames through
//! [`FrameSource`] and poses through [`LandmarkOracle`]. The bundled backend
//! is the keyboard-driven rig in `client::sim`; a webcam + tracking-model
//! backend plugs in behind the same two traits.

use super::landmarks::LandmarkSet;

/// A single captured frame.
///
/// Camera backends would carry their pixel buffer here. Backends that decode
/// the pose upstream of the loop (the simulator, or a tracker that runs on
/// its own copy of the image) attach the decoded pose instead and pair the
/// source with [`EmbeddedPoseOracle`].
pub struct Frame {
    pub seq: u64,
    pose: Option<LandmarkSet>,
}

impl Frame {
    pub fn with_pose(seq: u64, pose: Option<LandmarkSet>) -> Self {
        Self { seq, pose }
    }

    pub fn pose(&self) -> Option<LandmarkSet> {
        self.pose
    }
}

/// Produces frames until the capture device dries up or is released.
///
/// `next_frame` may block until a frame is available; it is the frame loop's
/// sole suspension point. Returning `None` is fatal to the session loop and
/// must be followed by `release`.
pub trait FrameSource {
    fn next_frame(&mut self) -> Option<Frame>;

    /// Give the capture handle back. Called exactly once, on every exit
    /// path of the session loop.
    fn release(&mut self);
}

/// The hand-tracking model, treated as a black box: zero or one hand per
/// frame, landmarks in normalized coordinates.
pub trait LandmarkOracle {
    fn detect(&mut self, frame: &Frame) -> Option<LandmarkSet>;
}

/// Oracle for frame sources that already attached the decoded pose.
pub struct EmbeddedPoseOracle;

impl LandmarkOracle for EmbeddedPoseOracle {
    fn detect(&mut self, frame: &Frame) -> Option<LandmarkSet> {
        frame.pose()
    }
}
