// src/domain/order/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::shared::{required_text, uuid_identifier};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

uuid_identifier!(OrderId, "order id");

uuid_identifier!(
    /// Opaque code handed to the recipient, distinct from the order id.
    TrackingCode,
    "tracking code"
);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderTitle(String);

impl OrderTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        required_text("title", value).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<OrderTitle> for String {
    fn from(value: OrderTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Waiting,
    PickedUp,
    Done,
}

impl OrderStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "WAITING",
            Self::PickedUp => "PICKED_UP",
            Self::Done => "DONE",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WAITING" => Ok(Self::Waiting),
            "PICKED_UP" => Ok(Self::PickedUp),
            "DONE" => Ok(Self::Done),
            other => Err(DomainError::Validation(format!(
                "unknown order status '{other}'"
            ))),
        }
    }
}
