use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
};
use serde::{Deserialize, Serialize};

use crate::{AppState, Error, TransactionId, TransactionStore, transaction::lock_store};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The store for managing transactions.
    transaction_store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// The response body for a deleted transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedTransaction {
    /// A message to show the user.
    pub message: String,
}

/// A route handler for deleting a transaction.
///
/// Responds with 404 Not Found if there is no transaction with the given ID.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Json<DeletedTransaction>, Error> {
    lock_store(&state.transaction_store)?
        .remove(transaction_id)
        .inspect_err(|_| {
            tracing::debug!("Could not find transaction {transaction_id} to delete")
        })?;

    Ok(Json(DeletedTransaction {
        message: format!("Transaction {transaction_id} deleted successfully"),
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::{
        Transaction, TransactionStore,
        endpoints::{self, format_endpoint},
        test_utils::get_test_server,
    };

    use super::DeletedTransaction;

    #[tokio::test]
    async fn deletes_transaction() {
        let server = get_test_server(TransactionStore::with_seed_data());

        let response = server
            .delete(&format_endpoint(endpoints::TRANSACTION, 1))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<DeletedTransaction>().message,
            "Transaction 1 deleted successfully"
        );
        let ids: Vec<_> = server
            .get(endpoints::TRANSACTIONS)
            .await
            .json::<Vec<Transaction>>()
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn missing_transaction_is_not_found() {
        let server = get_test_server(TransactionStore::with_seed_data());

        let response = server
            .delete(&format_endpoint(endpoints::TRANSACTION, 99))
            .expect_failure()
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "detail": "Transaction not found" }));
        let count = server
            .get(endpoints::TRANSACTIONS)
            .await
            .json::<Vec<Transaction>>()
            .len();
        assert_eq!(count, 3);
    }

    #[tokio::test]
    async fn deleting_twice_is_not_found() {
        let server = get_test_server(TransactionStore::with_seed_data());
        let path = format_endpoint(endpoints::TRANSACTION, 2);

        server.delete(&path).await.assert_status_ok();
        server
            .delete(&path)
            .expect_failure()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_integer_id_is_rejected() {
        let server = get_test_server(TransactionStore::with_seed_data());

        let response = server
            .delete("/transactions/abc")
            .expect_failure()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
