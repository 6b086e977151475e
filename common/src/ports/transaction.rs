/// Unit-of-work boundary around a multi-step operation.
pub trait Transaction {
    fn begin(&mut self);
    fn commit(&mut self);
    fn rollback(&mut self);
}
