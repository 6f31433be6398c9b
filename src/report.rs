//! Plain text rendering of a [`WalletSummary`].

use crate::model::WalletSummary;
use std::fmt;

/// Metrics followed by one section per transaction.
pub struct Detailed<'a>(pub &'a WalletSummary);

/// Metrics followed by a tab separated transaction table.
pub struct Compact<'a>(pub &'a WalletSummary);

impl fmt::Display for Detailed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_metrics(f, self.0)?;
        write_heading(f, "Transaction History")?;

        for tx in &self.0.transactions {
            writeln!(f, "Transaction {}... from {}", tx.short_hash(), tx.time)?;
            writeln!(f, "  Hash:          {}", tx.hash)?;
            writeln!(f, "  Amount:        {} ({})", tx.amount, tx.direction)?;
            writeln!(f, "  Date:          {}", tx.time)?;
            writeln!(f, "  Confirmations: {}", tx.confirmations)?;
            writeln!(f, "  Block height:  {}", tx.block_height)?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Compact<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_metrics(f, self.0)?;
        write_heading(f, "Transaction History")?;

        if self.0.transactions.is_empty() {
            return Ok(());
        }

        writeln!(f, "Date\tAmount\tType\tConfirmations")?;
        for tx in &self.0.transactions {
            writeln!(
                f,
                "{}\t{}\t{}\t{}",
                tx.time, tx.amount, tx.direction, tx.confirmations
            )?;
        }

        Ok(())
    }
}

fn write_heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "=".repeat(title.len()))?;
    writeln!(f)
}

fn write_metrics(f: &mut fmt::Formatter<'_>, summary: &WalletSummary) -> fmt::Result {
    write_heading(f, "Wallet Statistics")?;
    writeln!(
        f,
        "Total transactions: {}",
        group_thousands(summary.transaction_count)
    )?;
    writeln!(f, "Current balance:    {}", summary.current_balance)?;
    writeln!(f, "Total received:     {}", summary.total_received)?;
    writeln!(f, "Total sent:         {}", summary.total_sent)?;
    writeln!(f)
}

/// Render an integer with `,` between groups of three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlockHeight, Direction, TransactionRecord};

    fn summary() -> WalletSummary {
        WalletSummary {
            transaction_count: 1234,
            current_balance: "0.50000000 BTC".to_string(),
            total_received: "1.00000000 BTC".to_string(),
            total_sent: "0.50000000 BTC".to_string(),
            transactions: vec![
                TransactionRecord {
                    hash: "abc123def456".to_string(),
                    time: "14.11.2023 22:13:20".to_string(),
                    amount: "1.00000000 BTC".to_string(),
                    direction: Direction::Received,
                    confirmations: 6,
                    block_height: BlockHeight::Mined(800_000),
                },
                TransactionRecord {
                    hash: "def456".to_string(),
                    time: "15.11.2023 12:06:40".to_string(),
                    amount: "0.50000000 BTC".to_string(),
                    direction: Direction::Sent,
                    confirmations: 0,
                    block_height: BlockHeight::Pending,
                },
            ],
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn test_detailed() {
        let expected = "\
Wallet Statistics
=================

Total transactions: 1,234
Current balance:    0.50000000 BTC
Total received:     1.00000000 BTC
Total sent:         0.50000000 BTC

Transaction History
===================

Transaction abc123de... from 14.11.2023 22:13:20
  Hash:          abc123def456
  Amount:        1.00000000 BTC (received)
  Date:          14.11.2023 22:13:20
  Confirmations: 6
  Block height:  800000

Transaction def456... from 15.11.2023 12:06:40
  Hash:          def456
  Amount:        0.50000000 BTC (sent)
  Date:          15.11.2023 12:06:40
  Confirmations: 0
  Block height:  pending

";
        similar_asserts::assert_eq!(Detailed(&summary()).to_string(), expected.to_string());
    }

    #[test]
    fn test_compact() {
        let expected = "\
Wallet Statistics
=================

Total transactions: 1,234
Current balance:    0.50000000 BTC
Total received:     1.00000000 BTC
Total sent:         0.50000000 BTC

Transaction History
===================

Date\tAmount\tType\tConfirmations
14.11.2023 22:13:20\t1.00000000 BTC\treceived\t6
15.11.2023 12:06:40\t0.50000000 BTC\tsent\t0
";
        similar_asserts::assert_eq!(Compact(&summary()).to_string(), expected.to_string());
    }

    #[test]
    fn test_compact_empty() {
        let mut summary = summary();
        summary.transactions.clear();

        assert!(Compact(&summary)
            .to_string()
            .ends_with("Transaction History\n===================\n\n"));
    }
}
