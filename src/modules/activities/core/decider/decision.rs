#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Student is already signed up")]
    AlreadyRegistered,

    #[error("Student is not registered for this activity")]
    NotRegistered,

    #[error("Activity is full")]
    CapacityExceeded,
}
