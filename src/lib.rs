#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod config;
pub mod errors;
pub mod extrema;
pub mod logging;
pub mod parser;
pub mod reload;
pub mod report;
pub mod state;

pub use config::{ElementKind, ReloadConfig, INIT_FAR, REPORT_FAR};
pub use errors::{RecordError, ReloadError};
pub use extrema::{
    DisplacementAxis, DisplacementExtent, ExtentPair, TensorComponent, TensorExtent,
};
pub use parser::parse_view_data;
pub use reload::ParameterReloader;
pub use report::render_report;
pub use state::{DisplayState, MeshDisplayDims, StepSizes, ViewportParameters};
