pub mod downtime;
pub mod outcome;
pub mod release;

pub use downtime::DowntimeWindow;
pub use outcome::GenerationOutcome;
pub use release::ReleaseForm;
