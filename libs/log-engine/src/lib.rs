pub mod error;
mod record;

use std::sync::Mutex;

pub use error::LogError;
pub use record::Record;

// ═══════════════════════════════════════════════════════════════
//  Log
// ═══════════════════════════════════════════════════════════════

/// Append-only лог записей в памяти.
///
/// Offset записи всегда равен её индексу: `records[i].offset == i`.
/// Все операции проходят через один `Mutex`, без разделения на
/// читателей и писателей.
#[derive(Debug, Default)]
pub struct Log {
    records: Mutex<Vec<Record>>,
}

impl Log {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить запись, вернуть назначенный offset.
    ///
    /// Offset из `record` игнорируется. Чтение длины и push выполняются
    /// в одной критической секции.
    pub fn append(&self, mut record: Record) -> Result<u64, LogError> {
        let mut records = self.records.lock().map_err(|_| LogError::Poisoned)?;
        let offset = records.len() as u64;
        record.offset = offset;
        records.push(record);
        tracing::trace!(offset, "appended record");
        Ok(offset)
    }

    /// Прочитать запись по offset'у.
    pub fn read(&self, offset: u64) -> Result<Record, LogError> {
        let records = self.records.lock().map_err(|_| LogError::Poisoned)?;
        usize::try_from(offset)
            .ok()
            .and_then(|idx| records.get(idx))
            .cloned()
            .ok_or(LogError::OffsetNotFound(offset))
    }

    /// Текущее число записей.
    pub fn len(&self) -> usize {
        match self.records.lock() {
            Ok(records) => records.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
