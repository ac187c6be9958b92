use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregationError {
    #[error("Invalid argument [{argument}]: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String
    },
    #[error("Decimal overflow occurred while computing [{operation}]")]
    Overflow {
        operation: &'static str
    },
    #[error("Result of [{operation}] cannot be represented exactly as a decimal")]
    PrecisionLoss {
        operation: &'static str
    }
}

impl AggregationError {
    pub fn negative_limit(n: i64) -> Self {
        Self::InvalidArgument {
            argument: "n",
            reason: format!("must not be negative, got {n}")
        }
    }

    pub fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }

    pub fn precision_loss(operation: &'static str) -> Self {
        Self::PrecisionLoss { operation }
    }
}
