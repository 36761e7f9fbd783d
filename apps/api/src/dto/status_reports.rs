mod conversions;
mod types;

pub use types::{
    LatestStatusReportResponse, StatusReportCreatedResponse, SubmitStatusReportRequest,
};
