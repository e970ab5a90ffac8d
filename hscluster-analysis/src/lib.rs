//! Upper-outlier detection over numeric distributions, plus the document
//! and entity model that feeds it.

pub mod documents;
pub mod outliers;

pub use outliers::{
    jump_outliers, mad_based_outlier, mad_based_outlier_rows, outliers, OutlierDetector,
};
