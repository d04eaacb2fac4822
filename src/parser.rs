//! Parser for the `qdview.dat` / `trview.dat` view data layout.
//!
//! The file is a fixed sequence of header lines and data records. Data records
//! are numbered from one in file order and every parse failure reports that
//! number:
//!
//! | records | content                                     |
//! |---------|---------------------------------------------|
//! | 1-3     | displacement extrema (Ux, Uy, Uz)           |
//! | 4-8     | stress extrema (xx, yy, xy, I, II)          |
//! | 9-13    | strain extrema (xx, yy, xy, I, II)          |
//! | 14      | right, left, top, bottom, near, unused      |
//! | 15      | mesh width, mesh height                     |
//! | 16      | step x, step y, step z                      |
//! | 17      | amplification step                          |
//!
//! Blank lines between records are skipped, so the blank separators written
//! between sections are optional.

use std::str::{FromStr, Lines};

use tracing::{debug, warn};

use crate::config::INIT_FAR;
use crate::errors::{RecordError, ReloadError};
use crate::extrema::{
    DisplacementAxis, DisplacementExtent, ExtentPair, TensorComponent, TensorExtent,
};
use crate::state::{DisplayState, MeshDisplayDims, StepSizes, ViewportParameters};

/// Number of data records in a complete file.
pub const RECORD_COUNT: usize = 17;

/// Index of the first stress record.
pub const FIRST_STRESS_RECORD: usize = 4;

/// Index of the first strain record.
pub const FIRST_STRAIN_RECORD: usize = 9;

/// Index of the orthographic viewport record.
pub const VIEWPORT_RECORD: usize = 14;

/// Index of the amplification step record, the last one in the file.
pub const AMPLIFICATION_RECORD: usize = RECORD_COUNT;

/// Label opening every displacement extrema record.
const DISPLACEMENT_LABEL: &str = "displacement";
/// Label opening every stress extrema record.
const STRESS_LABEL: &str = "stress";
/// Label opening every strain extrema record.
const STRAIN_LABEL: &str = "strain";

/// Walks the file line by line while counting data records.
struct RecordCursor<'a> {
    /// Remaining lines of the file.
    lines: Lines<'a>,
    /// Index of the last record handed out.
    record: usize,
}

impl<'a> RecordCursor<'a> {
    /// Start before the first line of `text`.
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            record: 0,
        }
    }

    /// Next line that is not blank.
    fn next_line(&mut self) -> Option<&'a str> {
        self.lines.by_ref().find(|line| !line.trim().is_empty())
    }

    /// Discard `count` header lines ahead of the next record.
    fn skip_headers(&mut self, count: usize) -> Result<(), ReloadError> {
        for _ in 0..count {
            if self.next_line().is_none() {
                return Err(ReloadError::MalformedRecord {
                    record: self.record + 1,
                    source: RecordError::Missing,
                });
            }
        }
        Ok(())
    }

    /// Read the next record and check that it has exactly `expected` fields.
    fn fields(&mut self, expected: usize) -> Result<Vec<&'a str>, ReloadError> {
        self.record += 1;
        let line = self.next_line().ok_or_else(|| self.error(RecordError::Missing))?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != expected {
            return Err(self.error(RecordError::FieldCount {
                expected,
                found: fields.len(),
            }));
        }
        Ok(fields)
    }

    /// Parse field `index` of the current record.
    fn parse<T: FromStr>(&self, fields: &[&str], index: usize) -> Result<T, ReloadError> {
        fields[index].parse().map_err(|_| {
            self.error(RecordError::InvalidField {
                field: index,
                token: fields[index].to_owned(),
            })
        })
    }

    /// Read a `label sublabel minLoc maxLoc minVal maxVal` record.
    fn extent(&mut self, label: &str, sublabel: &str) -> Result<ExtentPair, ReloadError> {
        let fields = self.fields(6)?;
        if fields[0] != label || fields[1] != sublabel {
            return Err(self.error(RecordError::LabelMismatch {
                expected: format!("{label} {sublabel}"),
                found: format!("{} {}", fields[0], fields[1]),
            }));
        }

        let pair = ExtentPair {
            min_location: self.parse(&fields, 2)?,
            max_location: self.parse(&fields, 3)?,
            min_value: self.parse(&fields, 4)?,
            max_value: self.parse(&fields, 5)?,
        };
        if pair.is_inverted() {
            warn!(
                record = self.record,
                "{label} {sublabel} minimum {} exceeds maximum {}", pair.min_value, pair.max_value
            );
        }
        Ok(pair)
    }

    /// Read the five component records of a stress or strain table.
    fn tensor(&mut self, label: &str) -> Result<TensorExtent, ReloadError> {
        let mut extent = TensorExtent::default();
        for component in TensorComponent::ALL {
            *extent.get_mut(component) = self.extent(label, component.label())?;
        }
        Ok(extent)
    }

    /// Attach `source` to the current record index.
    fn error(&self, source: RecordError) -> ReloadError {
        ReloadError::MalformedRecord {
            record: self.record,
            source,
        }
    }
}

/// Parse the contents of a view data file.
///
/// Values are returned exactly as written: displacements are still in the
/// rescaled coordinate system and the far plane is [`INIT_FAR`].
///
/// # Errors
///
/// Returns [`ReloadError::MalformedRecord`] for the first record that is
/// missing, has the wrong number of fields, holds a non-numeric value, or
/// carries a label other than the one expected at its position.
pub fn parse_view_data(text: &str) -> Result<DisplayState, ReloadError> {
    let mut cursor = RecordCursor::new(text);

    cursor.skip_headers(2)?;
    let mut displacement = DisplacementExtent::default();
    for axis in DisplacementAxis::ALL {
        *displacement.get_mut(axis) = cursor.extent(DISPLACEMENT_LABEL, axis.label())?;
    }
    debug!("parsed displacement extrema");

    cursor.skip_headers(2)?;
    let stress = cursor.tensor(STRESS_LABEL)?;
    debug!("parsed stress extrema");

    let strain = cursor.tensor(STRAIN_LABEL)?;
    debug!("parsed strain extrema");

    cursor.skip_headers(1)?;
    let fields = cursor.fields(6)?;
    let viewport = ViewportParameters {
        right: cursor.parse(&fields, 0)?,
        left: cursor.parse(&fields, 1)?,
        top: cursor.parse(&fields, 2)?,
        bottom: cursor.parse(&fields, 3)?,
        near: cursor.parse(&fields, 4)?,
        far: INIT_FAR,
    };
    // The written far plane is checked but never used.
    let _: f64 = cursor.parse(&fields, 5)?;

    cursor.skip_headers(1)?;
    let fields = cursor.fields(2)?;
    let mesh_dims = MeshDisplayDims {
        width: cursor.parse(&fields, 0)?,
        height: cursor.parse(&fields, 1)?,
    };

    cursor.skip_headers(1)?;
    let fields = cursor.fields(3)?;
    let step_sizes = StepSizes::new(
        cursor.parse(&fields, 0)?,
        cursor.parse(&fields, 1)?,
        cursor.parse(&fields, 2)?,
    );

    cursor.skip_headers(1)?;
    let fields = cursor.fields(1)?;
    let amplification_step = cursor.parse(&fields, 0)?;
    debug!("parsed viewport and step parameters");

    Ok(DisplayState {
        displacement,
        stress,
        strain,
        viewport,
        mesh_dims,
        step_sizes,
        amplification_step,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const SAMPLE: &str = "                            node
                          min  max       min            max
displacement Ux            3    17   -1.000000e+01  2.000000e+01
displacement Uy            5     2   -3.000000e-02  4.000000e-02
displacement Uz            1     1    0.000000e+00  0.000000e+00

                        el. gauss pt.
                        min       max         min           max
stress xx               11         4  -1.500000e+03  2.500000e+03
stress yy               12         5  -1.600000e+03  2.600000e+03
stress xy               13         6  -1.700000e+03  2.700000e+03
stress I                14         7  -1.800000e+03  2.800000e+03
stress II               15         8  -1.900000e+03  2.900000e+03

strain xx               21        31  -1.500000e-04  2.500000e-04
strain yy               22        32  -1.600000e-04  2.600000e-04
strain xy               23        33  -1.700000e-04  2.700000e-04
strain I                24        34  -1.800000e-04  2.800000e-04
strain II               25        35  -1.900000e-04  2.900000e-04

Orthographic viewport parameters(right, left, top, bottom, near, far)
   1.200000e+01  -1.200000e+01   8.000000e+00  -8.000000e+00   1.000000e+00   1.000000e+03
Perspective viewport parameters( mesh width and height)
    640    480
Step sizes in x, y, z
   1.000000e-01   2.000000e-01   3.000000e-01
Amplification size
   5.000000e-01
";

    fn malformed_index(text: &str) -> usize {
        parse_view_data(text)
            .expect_err("malformed input rejected")
            .record_index()
            .expect("error names a record")
    }

    #[test]
    fn parses_every_section() {
        let state = parse_view_data(SAMPLE).expect("sample parses");

        assert_eq!(state.displacement.ux, ExtentPair::new(-10.0, 20.0, 3, 17));
        assert_relative_eq!(state.displacement.uy.max_value, 0.04);
        assert_eq!(state.stress.yy, ExtentPair::new(-1600.0, 2600.0, 12, 5));
        assert_eq!(state.stress.ii.min_location, 15);
        assert_relative_eq!(state.strain.i.max_value, 2.8e-4);
        assert_eq!(state.strain.xy.max_location, 33);

        assert_relative_eq!(state.viewport.right, 12.0);
        assert_relative_eq!(state.viewport.bottom, -8.0);
        assert_relative_eq!(state.viewport.near, 1.0);
        assert_relative_eq!(state.viewport.far, INIT_FAR);
        assert_eq!(
            state.mesh_dims,
            MeshDisplayDims {
                width: 640,
                height: 480
            }
        );
        assert_eq!(state.step_sizes, StepSizes::new(0.1, 0.2, 0.3));
        assert_relative_eq!(state.amplification_step, 0.5);
    }

    #[test]
    fn separators_between_sections_are_optional() {
        let compact: String = SAMPLE
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| format!("{line}\n"))
            .collect();
        let state = parse_view_data(&compact).expect("compact sample parses");
        assert_eq!(state, parse_view_data(SAMPLE).expect("sample parses"));
    }

    #[test]
    fn swapped_stress_components_are_rejected() {
        let swapped = SAMPLE
            .replace("stress xx ", "stress tmp")
            .replace("stress yy ", "stress xx ")
            .replace("stress tmp", "stress yy ");
        let error = parse_view_data(&swapped).expect_err("swap detected");
        match error {
            ReloadError::MalformedRecord { record, source } => {
                assert_eq!(record, FIRST_STRESS_RECORD);
                assert_eq!(
                    source,
                    RecordError::LabelMismatch {
                        expected: "stress xx".to_owned(),
                        found: "stress yy".to_owned(),
                    }
                );
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn strain_section_must_not_repeat_stress_labels() {
        let relabelled = SAMPLE.replace("strain xx", "stress xx");
        assert_eq!(malformed_index(&relabelled), FIRST_STRAIN_RECORD);
    }

    #[test]
    fn non_numeric_field_names_its_position() {
        let corrupted = SAMPLE.replace("-3.000000e-02", "abc");
        let error = parse_view_data(&corrupted).expect_err("bad number rejected");
        match error {
            ReloadError::MalformedRecord { record, source } => {
                assert_eq!(record, 2);
                assert_eq!(
                    source,
                    RecordError::InvalidField {
                        field: 4,
                        token: "abc".to_owned(),
                    }
                );
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn fractional_mesh_width_is_rejected() {
        let corrupted = SAMPLE.replace("    640    480", "  640.5    480");
        assert_eq!(malformed_index(&corrupted), 15);
    }

    #[test]
    fn short_viewport_record_reports_field_count() {
        let corrupted = SAMPLE.replace("   1.000000e+00   1.000000e+03", "   1.000000e+00");
        let error = parse_view_data(&corrupted).expect_err("short record rejected");
        match error {
            ReloadError::MalformedRecord { record, source } => {
                assert_eq!(record, VIEWPORT_RECORD);
                assert_eq!(
                    source,
                    RecordError::FieldCount {
                        expected: 6,
                        found: 5
                    }
                );
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn truncated_file_reports_last_record() {
        let truncated = SAMPLE
            .trim_end()
            .trim_end_matches("5.000000e-01")
            .to_owned();
        assert_eq!(malformed_index(&truncated), AMPLIFICATION_RECORD);
    }

    #[test]
    fn missing_header_is_charged_to_the_following_record() {
        let truncated: String = SAMPLE.lines().take(6).map(|line| format!("{line}\n")).collect();
        assert_eq!(malformed_index(&truncated), FIRST_STRESS_RECORD);
    }

    #[test]
    fn empty_file_fails_on_first_record() {
        assert_eq!(malformed_index(""), 1);
    }
}
