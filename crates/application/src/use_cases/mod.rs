pub mod records;

pub use records::{DecodeRecordUseCase, NewRecordFromStructuredUseCase, NewRecordFromTextUseCase};
