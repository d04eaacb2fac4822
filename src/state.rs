//! Display state shared between the reloader and the viewer.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::config::INIT_FAR;
use crate::extrema::{DisplacementExtent, TensorExtent};

/// Orthographic projection bounds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportParameters {
    /// Right clipping plane.
    pub right: f64,
    /// Left clipping plane.
    pub left: f64,
    /// Top clipping plane.
    pub top: f64,
    /// Bottom clipping plane.
    pub bottom: f64,
    /// Near clipping plane.
    pub near: f64,
    /// Far clipping plane, always [`INIT_FAR`] after a reload.
    pub far: f64,
}

impl Default for ViewportParameters {
    fn default() -> Self {
        Self {
            right: 0.0,
            left: 0.0,
            top: 0.0,
            bottom: 0.0,
            near: 0.0,
            far: INIT_FAR,
        }
    }
}

/// Screen space extents of the mesh for perspective rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshDisplayDims {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

/// Cursor and marker step increments along each axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StepSizes {
    /// Step along x.
    pub x: f64,
    /// Step along y.
    pub y: f64,
    /// Step along z.
    pub z: f64,
}

impl StepSizes {
    /// Create [`StepSizes`] with explicit components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Convert the step sizes into an algebraic vector.
    #[must_use]
    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl From<Vector3<f64>> for StepSizes {
    fn from(value: Vector3<f64>) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl From<StepSizes> for Vector3<f64> {
    fn from(value: StepSizes) -> Self {
        value.to_vector()
    }
}

/// Everything a reload publishes to the viewer.
///
/// The viewer session owns one value of this type and lends it to
/// [`ParameterReloader::reload`](crate::ParameterReloader::reload). A successful
/// reload replaces it as a whole; a failed one leaves it untouched. Only one
/// reload may run against a given state at a time, which the `&mut` borrow
/// enforces.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayState {
    /// Nodal displacement extrema, already divided by the rescale factor.
    pub displacement: DisplacementExtent,
    /// Stress extrema per component.
    pub stress: TensorExtent,
    /// Strain extrema per component.
    pub strain: TensorExtent,
    /// Orthographic viewport bounds.
    pub viewport: ViewportParameters,
    /// Perspective mesh extents.
    pub mesh_dims: MeshDisplayDims,
    /// Cursor step sizes.
    pub step_sizes: StepSizes,
    /// Increment used when exaggerating displacements.
    pub amplification_step: f64,
}

impl DisplayState {
    /// Pretty printed JSON snapshot of the state.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if a value cannot be encoded.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
