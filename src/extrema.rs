//! Extrema of the scalar result fields produced by the post-processor.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum and maximum of a scalar field and where each one occurs.
///
/// Locations are node numbers for displacements and element/gauss point
/// numbers for stresses and strains. Nothing guarantees `min_value <= max_value`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtentPair {
    /// Smallest value of the field.
    pub min_value: f64,
    /// Largest value of the field.
    pub max_value: f64,
    /// Index where the minimum occurs.
    pub min_location: i32,
    /// Index where the maximum occurs.
    pub max_location: i32,
}

impl ExtentPair {
    /// Create an [`ExtentPair`] with explicit values and locations.
    #[must_use]
    pub const fn new(min_value: f64, max_value: f64, min_location: i32, max_location: i32) -> Self {
        Self {
            min_value,
            max_value,
            min_location,
            max_location,
        }
    }

    /// Range covered by the field, used by the viewer to build contour bands.
    ///
    /// # Examples
    /// ```
    /// use femview::ExtentPair;
    ///
    /// let pair = ExtentPair::new(-2.0, 6.0, 1, 9);
    /// assert_eq!(pair.span(), 8.0);
    /// ```
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max_value - self.min_value
    }

    /// Return a copy with both values divided by `factor`.
    #[must_use]
    pub fn scaled_down(self, factor: f64) -> Self {
        Self {
            min_value: self.min_value / factor,
            max_value: self.max_value / factor,
            ..self
        }
    }

    /// Whether the minimum is larger than the maximum.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.min_value > self.max_value
    }
}

/// Component of a plane stress or strain tensor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TensorComponent {
    /// Normal component along x.
    Xx,
    /// Normal component along y.
    Yy,
    /// In-plane shear component.
    Xy,
    /// First principal value.
    I,
    /// Second principal value.
    II,
}

impl TensorComponent {
    /// Components in the order they appear in the view data file.
    pub const ALL: [TensorComponent; 5] = [
        TensorComponent::Xx,
        TensorComponent::Yy,
        TensorComponent::Xy,
        TensorComponent::I,
        TensorComponent::II,
    ];

    /// Sub-label used in the file and in the report.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            TensorComponent::Xx => "xx",
            TensorComponent::Yy => "yy",
            TensorComponent::Xy => "xy",
            TensorComponent::I => "I",
            TensorComponent::II => "II",
        }
    }
}

impl fmt::Display for TensorComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Extrema of every component of a stress or strain tensor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TensorExtent {
    /// Extrema of the xx component.
    pub xx: ExtentPair,
    /// Extrema of the yy component.
    pub yy: ExtentPair,
    /// Extrema of the xy component.
    pub xy: ExtentPair,
    /// Extrema of the first principal value.
    pub i: ExtentPair,
    /// Extrema of the second principal value.
    pub ii: ExtentPair,
}

impl TensorExtent {
    /// Extrema for one component.
    #[must_use]
    pub fn get(&self, component: TensorComponent) -> &ExtentPair {
        match component {
            TensorComponent::Xx => &self.xx,
            TensorComponent::Yy => &self.yy,
            TensorComponent::Xy => &self.xy,
            TensorComponent::I => &self.i,
            TensorComponent::II => &self.ii,
        }
    }

    /// Mutable extrema for one component.
    pub fn get_mut(&mut self, component: TensorComponent) -> &mut ExtentPair {
        match component {
            TensorComponent::Xx => &mut self.xx,
            TensorComponent::Yy => &mut self.yy,
            TensorComponent::Xy => &mut self.xy,
            TensorComponent::I => &mut self.i,
            TensorComponent::II => &mut self.ii,
        }
    }

    /// Iterate over the components in file order.
    pub fn iter(&self) -> impl Iterator<Item = (TensorComponent, &ExtentPair)> {
        TensorComponent::ALL
            .into_iter()
            .map(move |component| (component, self.get(component)))
    }
}

/// Displacement axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplacementAxis {
    /// Displacement along x.
    Ux,
    /// Displacement along y.
    Uy,
    /// Displacement along z.
    Uz,
}

impl DisplacementAxis {
    /// Axes in the order they appear in the view data file.
    pub const ALL: [DisplacementAxis; 3] =
        [DisplacementAxis::Ux, DisplacementAxis::Uy, DisplacementAxis::Uz];

    /// Sub-label used in the file and in the report.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            DisplacementAxis::Ux => "Ux",
            DisplacementAxis::Uy => "Uy",
            DisplacementAxis::Uz => "Uz",
        }
    }
}

impl fmt::Display for DisplacementAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Extrema of the nodal displacements along each axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplacementExtent {
    /// Extrema along x.
    pub ux: ExtentPair,
    /// Extrema along y.
    pub uy: ExtentPair,
    /// Extrema along z.
    pub uz: ExtentPair,
}

impl DisplacementExtent {
    /// Extrema for one axis.
    #[must_use]
    pub fn get(&self, axis: DisplacementAxis) -> &ExtentPair {
        match axis {
            DisplacementAxis::Ux => &self.ux,
            DisplacementAxis::Uy => &self.uy,
            DisplacementAxis::Uz => &self.uz,
        }
    }

    /// Mutable extrema for one axis.
    pub fn get_mut(&mut self, axis: DisplacementAxis) -> &mut ExtentPair {
        match axis {
            DisplacementAxis::Ux => &mut self.ux,
            DisplacementAxis::Uy => &mut self.uy,
            DisplacementAxis::Uz => &mut self.uz,
        }
    }

    /// Iterate over the axes in file order.
    pub fn iter(&self) -> impl Iterator<Item = (DisplacementAxis, &ExtentPair)> {
        DisplacementAxis::ALL
            .into_iter()
            .map(move |axis| (axis, self.get(axis)))
    }

    /// Return a copy with every extremum divided by `factor`.
    #[must_use]
    pub fn scaled_down(self, factor: f64) -> Self {
        Self {
            ux: self.ux.scaled_down(factor),
            uy: self.uy.scaled_down(factor),
            uz: self.uz.scaled_down(factor),
        }
    }

    /// Largest absolute displacement extremum over all axes.
    ///
    /// # Examples
    /// ```
    /// use femview::{DisplacementExtent, ExtentPair};
    ///
    /// let extent = DisplacementExtent {
    ///     ux: ExtentPair::new(-4.0, 1.0, 3, 7),
    ///     uy: ExtentPair::new(0.0, 2.5, 1, 2),
    ///     uz: ExtentPair::default(),
    /// };
    /// assert_eq!(extent.absolute_max(), 4.0);
    /// ```
    #[must_use]
    pub fn absolute_max(&self) -> f64 {
        self.iter()
            .flat_map(|(_, pair)| [pair.min_value.abs(), pair.max_value.abs()])
            .fold(0.0, f64::max)
    }
}
