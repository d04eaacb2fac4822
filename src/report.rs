//! Text summary printed after a successful reload.

use std::fmt::Write;

use crate::config::REPORT_FAR;
use crate::extrema::TensorExtent;
use crate::state::DisplayState;

/// Width of the label column in the displacement table.
const DISPLACEMENT_LABEL_WIDTH: usize = 23;
/// Width of the label column in the stress and strain tables.
const TENSOR_LABEL_WIDTH: usize = 21;

/// Format `value` like C's `%{width}.{precision}e`.
///
/// Rust's `{:e}` drops the exponent sign and padding, so the exponent is
/// rebuilt with an explicit sign and at least two digits.
///
/// # Examples
/// ```
/// use femview::report::format_exp;
///
/// assert_eq!(format_exp(10.0, 14, 6), "  1.000000e+01");
/// assert_eq!(format_exp(-2.5e-7, 14, 6), " -2.500000e-07");
/// ```
#[must_use]
pub fn format_exp(value: f64, width: usize, precision: usize) -> String {
    let body = if value.is_nan() {
        "nan".to_owned()
    } else if value.is_infinite() {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        format!("{sign}inf")
    } else {
        let raw = format!("{value:.precision$e}");
        match raw.split_once('e') {
            Some((mantissa, exponent)) => {
                let exponent: i32 = exponent.parse().expect("float exponent is an integer");
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
            }
            None => raw,
        }
    };
    format!("{body:>width$}")
}

/// `%14.6e`, the format used for every real value in the report.
fn sci(value: f64) -> String {
    format_exp(value, 14, 6)
}

/// Render the reload summary.
///
/// Displacements are multiplied back by `coord_rescale` so the table shows
/// the values as they appear in the file.
#[must_use]
pub fn render_report(state: &DisplayState, coord_rescale: f64) -> String {
    let mut output = String::new();

    // Displacement table. Values were divided by the rescale factor on load,
    // so multiply them back to show what the file holds.
    output.push_str("                            node\n");
    output.push_str("                          min  max       min            max\n");
    for (axis, pair) in state.displacement.iter() {
        writeln!(
            &mut output,
            "{:<DISPLACEMENT_LABEL_WIDTH$}{:5} {:5}   {} {}",
            format!("displacement {axis}"),
            pair.min_location,
            pair.max_location,
            sci(pair.min_value * coord_rescale),
            sci(pair.max_value * coord_rescale),
        )
        .expect("writing to string cannot fail");
    }
    output.push('\n');

    // Stress and strain share one header; locations are element/gauss point
    // numbers rather than nodes.
    output.push_str("                        el. gauss pt.\n");
    output.push_str("                        min       max         min           max\n");
    write_tensor(&mut output, "stress", &state.stress);
    output.push('\n');
    write_tensor(&mut output, "strain", &state.strain);
    output.push('\n');

    // The far plane is a fixed display value, not the one held in the state.
    let viewport = &state.viewport;
    output.push_str("Orthographic viewport parameters(right, left, top, bottom, near, far)\n ");
    writeln!(
        &mut output,
        "{} {} {} {} {} {}",
        sci(viewport.right),
        sci(viewport.left),
        sci(viewport.top),
        sci(viewport.bottom),
        sci(viewport.near),
        sci(REPORT_FAR),
    )
    .expect("writing to string cannot fail");

    // Each remaining parameter block is a caption followed by an indented line.
    output.push_str("Perspective viewport parameters( mesh width and height)\n ");
    writeln!(
        &mut output,
        "{:6} {:6}",
        state.mesh_dims.width, state.mesh_dims.height
    )
    .expect("writing to string cannot fail");

    let steps = &state.step_sizes;
    output.push_str("Step sizes in x, y, z\n ");
    writeln!(&mut output, "{} {} {}", sci(steps.x), sci(steps.y), sci(steps.z))
        .expect("writing to string cannot fail");

    output.push_str("Amplification size\n ");
    writeln!(&mut output, "{}", sci(state.amplification_step))
        .expect("writing to string cannot fail");

    output
}

/// Append the five component rows of a stress or strain table.
fn write_tensor(output: &mut String, label: &str, extent: &TensorExtent) {
    for (component, pair) in extent.iter() {
        writeln!(
            output,
            "{:<TENSOR_LABEL_WIDTH$}{:5}     {:5}  {} {}",
            format!("{label} {component}"),
            pair.min_location,
            pair.max_location,
            sci(pair.min_value),
            sci(pair.max_value),
        )
        .expect("writing to string cannot fail");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extrema::{ExtentPair, TensorComponent};
    use crate::state::{MeshDisplayDims, StepSizes, ViewportParameters};

    fn sample_state() -> DisplayState {
        let mut state = DisplayState::default();
        state.displacement.ux = ExtentPair::new(5.0, 10.0, 3, 17);
        state.displacement.uy = ExtentPair::new(-0.015, 0.02, 5, 2);
        state.displacement.uz = ExtentPair::new(0.0, 0.0, 1, 1);
        for (offset, component) in TensorComponent::ALL.into_iter().enumerate() {
            let offset = offset as i32;
            let min_stress = -1500.0 - 100.0 * f64::from(offset);
            *state.stress.get_mut(component) =
                ExtentPair::new(min_stress, 2500.0, 11 + offset, 4 + offset);
            *state.strain.get_mut(component) =
                ExtentPair::new(-1.5e-4, 2.5e-4, 21 + offset, 31 + offset);
        }
        state.viewport = ViewportParameters {
            right: 12.0,
            left: -12.0,
            top: 8.0,
            bottom: -8.0,
            near: 1.0,
            ..ViewportParameters::default()
        };
        state.mesh_dims = MeshDisplayDims {
            width: 640,
            height: 480,
        };
        state.step_sizes = StepSizes::new(0.1, 0.2, 0.3);
        state.amplification_step = 0.5;
        state
    }

    #[test]
    fn exponent_matches_c_printf() {
        assert_eq!(format_exp(0.0, 14, 6), "  0.000000e+00");
        assert_eq!(format_exp(-1.0, 14, 6), " -1.000000e+00");
        assert_eq!(format_exp(1.5e123, 14, 6), " 1.500000e+123");
        assert_eq!(format_exp(9.9999999e-5, 14, 6), "  1.000000e-04");
        assert_eq!(format_exp(2.0e-300, 14, 6), " 2.000000e-300");
        assert_eq!(format_exp(f64::NAN, 14, 6), "           nan");
        assert_eq!(format_exp(f64::NEG_INFINITY, 14, 6), "          -inf");
    }

    #[test]
    fn report_matches_reference_layout() {
        let report = render_report(&sample_state(), 2.0);
        let expected = "                            node
                          min  max       min            max
displacement Ux            3    17     1.000000e+01   2.000000e+01
displacement Uy            5     2    -3.000000e-02   4.000000e-02
displacement Uz            1     1     0.000000e+00   0.000000e+00

                        el. gauss pt.
                        min       max         min           max
stress xx               11         4   -1.500000e+03   2.500000e+03
stress yy               12         5   -1.600000e+03   2.500000e+03
stress xy               13         6   -1.700000e+03   2.500000e+03
stress I                14         7   -1.800000e+03   2.500000e+03
stress II               15         8   -1.900000e+03   2.500000e+03

strain xx               21        31   -1.500000e-04   2.500000e-04
strain yy               22        32   -1.500000e-04   2.500000e-04
strain xy               23        33   -1.500000e-04   2.500000e-04
strain I                24        34   -1.500000e-04   2.500000e-04
strain II               25        35   -1.500000e-04   2.500000e-04

Orthographic viewport parameters(right, left, top, bottom, near, far)
   1.200000e+01  -1.200000e+01   8.000000e+00  -8.000000e+00   1.000000e+00   1.000000e+03
Perspective viewport parameters( mesh width and height)
    640    480
Step sizes in x, y, z
   1.000000e-01   2.000000e-01   3.000000e-01
Amplification size
   5.000000e-01
";
        assert_eq!(report, expected);
    }

    #[test]
    fn far_plane_is_the_report_constant() {
        let mut state = sample_state();
        state.viewport.far = -2.0;
        let report = render_report(&state, 1.0);
        assert!(report.contains("1.000000e+00   1.000000e+03\n"));
    }
}
