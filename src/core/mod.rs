pub mod etl;
pub mod pipeline;

pub use crate::domain::model::{
    AttendeeRecord, LetterContext, NormalizedContact, Official, Officials, RegistrationMoment,
};
pub use crate::domain::ports::{ConfigProvider, LetterRenderer, RepresentativeLookup, Storage};
pub use crate::utils::error::Result;
