use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error, NewTransaction, Transaction, TransactionStore, timezone::today,
    transaction::lock_store,
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
    /// The store the new transaction is added to.
    pub transaction_store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// The response body for a newly created transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedTransaction {
    /// A message to show the user.
    pub message: String,
    /// The transaction with its assigned ID and date.
    pub transaction: Transaction,
}

/// A route handler for creating a new transaction.
///
/// Transactions without a date are given today's date in the server's local timezone.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Json(new_transaction): Json<NewTransaction>,
) -> Result<Json<CreatedTransaction>, Error> {
    let default_date = today(&state.local_timezone)?;
    let transaction = lock_store(&state.transaction_store)?.add(new_transaction, default_date);

    Ok(Json(CreatedTransaction {
        message: "Transaction added successfully".to_owned(),
        transaction,
    }))
}
