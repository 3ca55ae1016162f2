use thiserror::Error;

#[derive(Error, Debug)]
pub enum WizardError {
    #[error("No selection at position {index} (list has {len})")]
    SelectionOutOfRange { index: usize, len: usize },

    #[error("A private event needs at least one user or group")]
    AudienceRequired,

    #[error("Cannot go back from the first step")]
    AtFirstStep,

    #[error("Cannot go past the last step")]
    AtLastStep,

    #[error("A published event cannot be saved as a draft")]
    DraftNotAllowed,

    #[error("Failed to serialize selections: {0}")]
    Serialize(#[from] serde_json::Error),
}
