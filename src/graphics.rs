//! Graphics Support for EPDs

/// Display rotation, only 90° increments supported
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum DisplayRotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate by 90 degrees clockwise
    Rotate90,
    /// Rotate by 180 degrees clockwise
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}
