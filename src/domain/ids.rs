//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for order identifiers and the
//! order number generator. Each type ensures type safety and validates
//! format compliance on construction.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix every order name must start with
pub const ORDER_NUMBER_PREFIX: &str = "#IN";

/// Number of random characters appended to the prefix
pub const ORDER_NUMBER_SUFFIX_LEN: usize = 10;

/// Alphabet the random suffix is drawn from
const ORDER_NUMBER_CHARACTERS: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates an order number
///
/// The result is `prefix` followed by ten characters sampled uniformly, with
/// replacement, from `[a-zA-Z0-9]`. Uniqueness against existing orders is not
/// checked here.
///
/// # Examples
///
/// ```
/// use order_export::domain::ids::generate_order_number;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let number = generate_order_number("#IN", &mut rng);
/// assert_eq!(number.len(), 13);
/// assert!(number.starts_with("#IN"));
/// ```
pub fn generate_order_number<R: Rng + ?Sized>(prefix: &str, rng: &mut R) -> String {
    let mut number = String::with_capacity(prefix.len() + ORDER_NUMBER_SUFFIX_LEN);
    number.push_str(prefix);
    for _ in 0..ORDER_NUMBER_SUFFIX_LEN {
        let idx = rng.gen_range(0..ORDER_NUMBER_CHARACTERS.len());
        number.push(char::from(ORDER_NUMBER_CHARACTERS[idx]));
    }
    number
}

/// Order name newtype wrapper
///
/// The name is shared by every line item of one logical order and must
/// start with [`ORDER_NUMBER_PREFIX`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderName(String);

impl OrderName {
    /// Creates a new OrderName from a string
    ///
    /// # Errors
    ///
    /// Returns `Err` if the name is blank or lacks the `#IN` prefix
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Order name cannot be empty".to_string());
        }
        if !name.starts_with(ORDER_NUMBER_PREFIX) {
            return Err(format!(
                "Order name must start with '{ORDER_NUMBER_PREFIX}', got: {name}"
            ));
        }
        Ok(Self(name))
    }

    /// Generates a fresh order name with the default prefix
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(generate_order_number(ORDER_NUMBER_PREFIX, rng))
    }

    /// Returns the order name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for OrderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for OrderName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OrderName> for String {
    fn from(name: OrderName) -> Self {
        name.0
    }
}

impl AsRef<str> for OrderName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identifier of the influencer an order is shipped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InfluencerId(u64);

impl InfluencerId {
    /// Creates a new InfluencerId
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for InfluencerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Store-assigned identity of one line item record
///
/// Sibling line items share an [`OrderName`]; the record id tells them
/// apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// The id following this one
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
