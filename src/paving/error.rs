use thiserror::Error as ThisError;

use super::common::Money;

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum Error {
    #[error("invalid road {from} - {to}: {reason}")]
    InvalidEdge {
        from: String,
        to: String,
        reason: String,
    },
    #[error("invalid budget {0}: budget must not be negative")]
    InvalidBudget(Money),
    #[error("invalid cost per meter {0}: cost must be positive")]
    InvalidCostPerMeter(Money),
    #[error("total value of paved roads overflows")]
    ValueOverflow,
}

#[test]
fn test_invalid_edge_message_should_name_both_villages() {
    let error = Error::InvalidEdge {
        from: "A".to_string(),
        to: "B".to_string(),
        reason: "distance must be positive, got 0".to_string(),
    };
    assert_eq!(error.to_string(), "invalid road A - B: distance must be positive, got 0");
}

#[test]
fn test_invalid_budget_message_should_contain_budget() {
    assert_eq!(Error::InvalidBudget(-5).to_string(),
               "invalid budget -5: budget must not be negative");
}
