//! Income and expense totals, and the route handler that serves them.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error, Transaction, TransactionStore, TransactionType, transaction::lock_store,
};

/// The totals of all transactions in a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The sum of the amounts of all income transactions.
    pub total_income: f64,
    /// The sum of the amounts of all expense transactions.
    pub total_expenses: f64,
    /// Total income minus total expenses.
    pub balance: f64,
    /// The number of transactions of any type, including types that are
    /// neither income nor expense.
    pub transaction_count: usize,
}

impl Summary {
    /// Total up `transactions` in a single pass.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let (total_income, total_expenses) = transactions.iter().fold(
            (0.0, 0.0),
            |(income, expenses), transaction| match transaction.kind {
                TransactionType::Income => (income + transaction.amount, expenses),
                TransactionType::Expense => (income, expenses + transaction.amount),
                TransactionType::Other(_) => (income, expenses),
            },
        );

        Self {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
            transaction_count: transactions.len(),
        }
    }
}

/// The state needed to summarize transactions.
#[derive(Debug, Clone)]
pub struct SummaryState {
    transaction_store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for SummaryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// A route handler for getting the totals of all transactions.
pub async fn get_summary_endpoint(
    State(state): State<SummaryState>,
) -> Result<Json<Summary>, Error> {
    let store = lock_store(&state.transaction_store)?;

    Ok(Json(store.summarize()))
}

#[cfg(test)]
mod summary_tests {
    use time::macros::date;

    use crate::{Transaction, TransactionType};

    use super::Summary;

    fn transaction(id: i64, amount: f64, kind: TransactionType) -> Transaction {
        Transaction {
            id,
            description: "Test".to_owned(),
            amount,
            kind,
            category: "Test".to_owned(),
            date: date!(2025 - 01 - 01),
        }
    }

    #[test]
    fn empty_summary_is_zero() {
        let got = Summary::from_transactions(&[]);

        assert_eq!(
            got,
            Summary {
                total_income: 0.0,
                total_expenses: 0.0,
                balance: 0.0,
                transaction_count: 0,
            }
        );
    }

    #[test]
    fn balance_is_income_minus_expenses() {
        let transactions = [
            transaction(1, 100.0, TransactionType::Income),
            transaction(2, 25.5, TransactionType::Expense),
            transaction(3, 200.0, TransactionType::Expense),
            transaction(4, 50.0, TransactionType::Income),
        ];

        let got = Summary::from_transactions(&transactions);

        assert_eq!(got.total_income, 150.0);
        assert_eq!(got.total_expenses, 225.5);
        assert_eq!(got.balance, got.total_income - got.total_expenses);
        assert_eq!(got.balance, -75.5);
    }

    #[test]
    fn other_types_are_counted_but_not_totalled() {
        let transactions = [
            transaction(1, 100.0, TransactionType::Income),
            transaction(2, 40.0, TransactionType::Other("transfer".to_owned())),
        ];

        let got = Summary::from_transactions(&transactions);

        assert_eq!(got.total_income, 100.0);
        assert_eq!(got.total_expenses, 0.0);
        assert_eq!(got.transaction_count, 2);
    }
}

#[cfg(test)]
mod summary_endpoint_tests {
    use axum::http::StatusCode;

    use crate::{
        NewTransaction, TransactionStore, TransactionType, endpoints, test_utils::get_test_server,
    };

    use super::Summary;

    #[tokio::test]
    async fn summarizes_seed_data() {
        let server = get_test_server(TransactionStore::with_seed_data());

        let response = server.get(endpoints::SUMMARY).await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Summary>(),
            Summary {
                total_income: 5000.0,
                total_expenses: 230.0,
                balance: 4770.0,
                transaction_count: 3,
            }
        );
    }

    #[tokio::test]
    async fn summary_includes_new_transactions() {
        let server = get_test_server(TransactionStore::with_seed_data());

        server
            .post(endpoints::TRANSACTIONS)
            .json(&NewTransaction::new(
                "Coffee",
                4.5,
                TransactionType::Expense,
                "Food",
            ))
            .await
            .assert_status_ok();
        let response = server.get(endpoints::SUMMARY).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let summary = response.json::<Summary>();
        assert_eq!(summary.total_expenses, 234.5);
        assert_eq!(summary.balance, 4765.5);
        assert_eq!(summary.transaction_count, 4);
    }
}
