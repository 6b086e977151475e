use tidy_common::ports::Transaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionEvent {
    Begin,
    Commit,
    Rollback,
}

/// Transaction that does nothing but remember what was asked of it.
#[derive(Debug, Default)]
pub struct RecordingTransaction {
    pub events: Vec<TransactionEvent>,
}

impl Transaction for RecordingTransaction {
    fn begin(&mut self) {
        self.events.push(TransactionEvent::Begin);
    }

    fn commit(&mut self) {
        self.events.push(TransactionEvent::Commit);
    }

    fn rollback(&mut self) {
        self.events.push(TransactionEvent::Rollback);
    }
}
