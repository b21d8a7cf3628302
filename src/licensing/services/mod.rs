mod report_generator;

pub use report_generator::{Bucket, Classification, ClassificationOptions, ReportGenerator};
