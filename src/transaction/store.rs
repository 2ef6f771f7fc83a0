//! The in-memory transaction store.

use std::sync::{Mutex, MutexGuard};

use time::{Date, macros::date};

use crate::{
    Error, Summary,
    transaction::core::{NewTransaction, Transaction, TransactionId, TransactionType},
};

/// Owns the collection of transactions and the counter used to assign IDs.
///
/// Transactions are kept in insertion order. IDs start at 1, increase by one
/// for each added transaction and are never reused, even after the
/// transaction that held them is removed.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store holding the example transactions the server starts with:
    /// a salary payment, a grocery shop and an electricity bill.
    pub fn with_seed_data() -> Self {
        let mut store = Self::new();

        store.add(
            NewTransaction::new("Salary", 5000.0, TransactionType::Income, "Salary"),
            date!(2024 - 01 - 01),
        );
        store.add(
            NewTransaction::new("Grocery Shopping", 150.0, TransactionType::Expense, "Food"),
            date!(2024 - 01 - 02),
        );
        store.add(
            NewTransaction::new("Electric Bill", 80.0, TransactionType::Expense, "Utilities"),
            date!(2024 - 01 - 03),
        );

        store
    }

    /// All transactions in the order they were added.
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The number of transactions in the store.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the store holds no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Add a transaction to the end of the store and return it with its new ID.
    ///
    /// `default_date` is used when `new_transaction` has no date. The values in
    /// `new_transaction` are stored as given.
    pub fn add(&mut self, new_transaction: NewTransaction, default_date: Date) -> Transaction {
        let transaction = Transaction {
            id: self.next_id,
            description: new_transaction.description,
            amount: new_transaction.amount,
            kind: new_transaction.kind,
            category: new_transaction.category,
            date: new_transaction.date.unwrap_or(default_date),
        };

        self.next_id += 1;
        self.transactions.push(transaction.clone());
        tracing::debug!("Added transaction {}", transaction.id);

        transaction
    }

    /// Compute the income and expense totals over every transaction in the store.
    pub fn summarize(&self) -> Summary {
        Summary::from_transactions(&self.transactions)
    }

    /// Remove the transaction with the ID `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no transaction has the ID `id`, in which
    /// case the store is left unchanged.
    pub fn remove(&mut self, id: TransactionId) -> Result<(), Error> {
        let index = self
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)
            .ok_or(Error::NotFound)?;

        self.transactions.remove(index);
        tracing::debug!("Removed transaction {id}");

        Ok(())
    }
}

/// Lock the shared store, mapping a poisoned lock to [Error::StoreLock].
pub(crate) fn lock_store(
    store: &Mutex<TransactionStore>,
) -> Result<MutexGuard<'_, TransactionStore>, Error> {
    store.lock().map_err(|error| {
        tracing::error!("Could not acquire the transaction store lock: {error}");
        Error::StoreLock
    })
}
