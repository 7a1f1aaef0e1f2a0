pub mod record;
pub mod submission;
pub mod wire;

pub use record::{merge_ranked, BackendDiagnostics, RecordKind, ResultRecord, SearchOutcome};
pub use submission::{
    Ack, AphorismInput, EntryKind, SubmissionForm, SubmissionPayload, WordInput,
};
pub use wire::{ErrorBody, PhraseHit, PhraseSearchResponse, VersionInfo, WordHit, WordSearchResponse};
