mod cleaner_dto;

pub use cleaner_dto::{
    CleanerCardDto, CleanerOptionsDto, CleanerProfileDto, RegisterCleanerDto, UpdateCleanerDto,
};
