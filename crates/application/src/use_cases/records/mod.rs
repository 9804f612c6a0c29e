pub mod decode;
pub mod new_from_structured;
pub mod new_from_text;

pub use decode::DecodeRecordUseCase;
pub use new_from_structured::NewRecordFromStructuredUseCase;
pub use new_from_text::NewRecordFromTextUseCase;
