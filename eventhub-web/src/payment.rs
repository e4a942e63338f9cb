//! Simulated payment gateway
//!
//! Stands in for the external payment collaborator: it accepts every
//! charge, moves no money, and fabricates the transaction reference the
//! confirmation flow echoes back. References are presentable tokens
//! only; they are not recorded anywhere and carry no durability.

use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::info;
use uuid::Uuid;

/// Outcome of a simulated charge
#[derive(Debug, Clone)]
pub struct ChargeReceipt {
    /// Internal id of the pretend charge
    pub charge_id: Uuid,
    /// Token handed back to the user
    pub reference: String,
    /// Amount in GHS that would have been charged
    pub amount: f64,
}

/// Gateway that approves every charge
#[derive(Debug, Clone, Copy, Default)]
pub struct MockPaymentGateway;

impl MockPaymentGateway {
    /// "Charge" the amount and fabricate a reference
    pub fn charge(&self, amount: f64, memo: &str) -> ChargeReceipt {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(10)
            .map(char::from)
            .collect::<String>()
            .to_uppercase();

        let receipt = ChargeReceipt {
            charge_id: Uuid::new_v4(),
            reference: format!("TXN-{}", token),
            amount,
        };

        info!(
            "✓ Simulated charge {} for GHS {:.2} ({})",
            receipt.reference, receipt.amount, memo
        );

        receipt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_shape() {
        let receipt = MockPaymentGateway.charge(12.5, "test charge");
        assert!(receipt.reference.starts_with("TXN-"));
        assert_eq!(receipt.reference.len(), "TXN-".len() + 10);
        assert!(receipt
            .reference
            .chars()
            .skip(4)
            .all(|c| c.is_ascii_alphanumeric() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn test_amount_is_echoed() {
        let receipt = MockPaymentGateway.charge(37.5, "3 votes at 12.50");
        assert_eq!(receipt.amount, 37.5);
    }
}
