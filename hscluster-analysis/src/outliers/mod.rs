//! Upper-outlier detection: three independent methods over `&[f64]`.
//!
//! - `jump` → first big normalized gap in the sorted values (sorted-order indices)
//! - `quartile` → values above `Q3 + k * IQR` (input-order indices)
//! - `mad` → modified z-score over distances from the median (input-order mask)
//!
//! All functions are pure and deterministic; they never mutate the caller's data.

pub mod jump;
pub mod mad;
pub mod quartile;
pub mod selector;
pub mod types;

mod stats;

pub use jump::{jump_outliers, jump_outliers_indexed};
pub use mad::{
    mad_based_outlier, mad_based_outlier_rows, mad_based_outlier_rows_with_policy,
    mad_based_outlier_with_policy, modified_z_scores, DEFAULT_MAD_THRESHOLD, MAD_SCALE,
};
pub use quartile::{outliers, quartile_fence, QuartileFence, DEFAULT_QUARTILE_THRESHOLD};
pub use selector::OutlierDetector;
pub use types::{OutlierConfig, OutlierMethod, OutlierResult, ZeroSpreadPolicy};
