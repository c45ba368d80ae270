pub mod metrics;
pub mod report;
pub mod result;

pub use metrics::*;
pub use report::*;
pub use result::*;
