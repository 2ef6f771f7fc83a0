//! Defines the core data models for transactions.

use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use time::{Date, macros::format_description};

// ============================================================================
// MODELS
// ============================================================================

/// Alias for the integer type used for transaction IDs.
pub type TransactionId = i64;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, add a [NewTransaction] to a
/// [TransactionStore](crate::TransactionStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// Whether the money was earned or spent.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// A free-form category, e.g. "Food" or "Utilities".
    pub category: String,
    /// When the transaction happened, formatted as `YYYY-MM-DD` on the wire.
    #[serde(with = "iso_date")]
    pub date: Date,
}

/// Whether a transaction is money earned or money spent.
///
/// Clients may send any string as the type. Strings other than "income" and
/// "expense" are kept as [TransactionType::Other] so they round-trip
/// unchanged, and they count towards neither total in a
/// [Summary](crate::Summary).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionType {
    /// Money earned.
    Income,
    /// Money spent.
    Expense,
    /// Any unrecognised type string.
    Other(String),
}

impl TransactionType {
    /// The string used for this type in JSON.
    pub fn as_str(&self) -> &str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
            TransactionType::Other(other) => other,
        }
    }
}

impl From<String> for TransactionType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "income" => TransactionType::Income,
            "expense" => TransactionType::Expense,
            _ => TransactionType::Other(value),
        }
    }
}

impl From<&str> for TransactionType {
    fn from(value: &str) -> Self {
        value.to_owned().into()
    }
}

impl From<TransactionType> for String {
    fn from(value: TransactionType) -> Self {
        match value {
            TransactionType::Other(other) => other,
            kind => kind.as_str().to_owned(),
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The data needed to create a [Transaction].
///
/// This is also the JSON body accepted when creating a transaction. The ID is
/// assigned by the store, and the date defaults to today when it is missing,
/// `null` or empty.
///
/// # Examples
///
/// ```
/// use finance_tracker::{NewTransaction, TransactionType};
/// use time::macros::date;
///
/// let coffee = NewTransaction::new("Coffee", 4.5, TransactionType::Expense, "Food")
///     .date(date!(2025 - 01 - 15));
/// assert_eq!(coffee.date, Some(date!(2025 - 01 - 15)));
/// ```
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned.
    ///
    /// Accepts either a JSON number or a string holding a number, e.g. `"4.5"`.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub amount: f64,
    /// Whether the money was earned or spent.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// A free-form category.
    pub category: String,
    /// When the transaction happened, if known.
    ///
    /// A missing date, `null` and the empty string all mean "not given".
    #[serde(
        default,
        serialize_with = "iso_date::option::serialize",
        deserialize_with = "deserialize_optional_date"
    )]
    pub date: Option<Date>,
}

fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(text) if text.is_empty() => Ok(None),
        Some(text) => Date::parse(&text, format_description!("[year]-[month]-[day]"))
            .map(Some)
            .map_err(de::Error::custom),
    }
}

impl NewTransaction {
    /// Create a new transaction without a date.
    pub fn new(
        description: &str,
        amount: f64,
        kind: TransactionType,
        category: &str,
    ) -> NewTransaction {
        NewTransaction {
            description: description.to_owned(),
            amount,
            kind,
            category: category.to_owned(),
            date: None,
        }
    }

    /// Set the date for the transaction.
    pub fn date(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }
}
