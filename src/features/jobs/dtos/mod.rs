mod job_dto;

pub use job_dto::{
    CreateJobDto, CreateJobResponseDto, JobDto, JobOptionsDto, JobResponseDto, UpdateJobStatusDto,
};
