mod job;
mod job_response;

pub use job::{ApartmentSize, CleaningFrequency, CleaningType, Job, JobStatus, JobWithResponses};
pub use job_response::{JobResponse, JobResponseWithCleaner};
