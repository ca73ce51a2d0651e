/// Use cases module containing application business logic orchestration
mod compare_reports;

pub use compare_reports::CompareReportsUseCase;
