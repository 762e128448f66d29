#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Запрошенный offset за пределами лога.
    #[error("offset not found: {0}")]
    OffsetNotFound(u64),

    #[error("log lock poisoned")]
    Poisoned,
}

impl LogError {
    /// `true` для ожидаемого "not found", в отличие от внутренних сбоев.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LogError::OffsetNotFound(_))
    }
}
