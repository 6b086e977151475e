use crate::models::account::Account;

/// Storage for user accounts.
pub trait AccountRepository {
    fn find(&self, user_id: u64) -> Option<&Account>;

    /// Removes the account and hands it back.
    ///
    /// # Returns
    /// * `Some(Account)` - The removed account.
    /// * `None` - If no account with `user_id` exists.
    fn remove(&mut self, user_id: u64) -> Option<Account>;
}
