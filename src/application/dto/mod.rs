/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod diff_request;
mod diff_response;
mod output_format;

pub use crate::dependency_diff::domain::DiffStrategy;
pub use diff_request::DiffRequest;
pub use diff_response::DiffResponse;
pub use output_format::OutputFormat;
