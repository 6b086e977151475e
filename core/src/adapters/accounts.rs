use std::collections::BTreeMap;

use tidy_common::models::account::Account;
use tidy_common::ports::AccountRepository;

#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: BTreeMap<u64, Account>,
}

impl InMemoryAccountRepository {
    pub fn insert(&mut self, account: Account) {
        self.accounts.insert(account.id, account);
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl From<Vec<Account>> for InMemoryAccountRepository {
    fn from(accounts: Vec<Account>) -> Self {
        let mut repo = Self::default();
        for account in accounts {
            repo.insert(account);
        }
        repo
    }
}

impl AccountRepository for InMemoryAccountRepository {
    fn find(&self, user_id: u64) -> Option<&Account> {
        self.accounts.get(&user_id)
    }

    fn remove(&mut self, user_id: u64) -> Option<Account> {
        self.accounts.remove(&user_id)
    }
}
