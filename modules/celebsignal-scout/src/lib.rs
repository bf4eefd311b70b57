pub mod aggregate;
pub mod extractor;
pub mod pipeline;
pub mod report;
pub mod scoring;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod text;
pub mod traits;
