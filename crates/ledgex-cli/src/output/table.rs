use ledgex_core::model::{Statement, OUTPUT_COLUMNS};
use ledgex_core::normalize::parse_amount;
use rust_decimal::Decimal;

/// Render a statement as an aligned text table with withdrawal/deposit
/// totals at the bottom.
pub fn format_statement(statement: &Statement) -> String {
    let mut out = String::new();
    out.push_str(&format!("Bank: {}\n\n", statement.bank));

    if statement.transactions.is_empty() {
        out.push_str("No transactions found.\n");
        return out;
    }

    let widths: Vec<usize> = OUTPUT_COLUMNS
        .iter()
        .map(|col| {
            statement
                .transactions
                .iter()
                .map(|tx| tx.get(col).len())
                .chain(std::iter::once(col.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    push_row(&mut out, &OUTPUT_COLUMNS, &widths);
    let rule_len = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');

    for tx in &statement.transactions {
        let cells: Vec<&str> = OUTPUT_COLUMNS.iter().map(|col| tx.get(col)).collect();
        push_row(&mut out, &cells, &widths);
    }

    let total = |col: &str| -> Decimal {
        statement
            .transactions
            .iter()
            .filter_map(|tx| parse_amount(tx.get(col)))
            .sum()
    };
    out.push_str(&format!(
        "\n{} transaction(s), withdrawals {}, deposits {}\n",
        statement.transactions.len(),
        total("Withdrawal"),
        total("Deposit")
    ));

    out
}

fn push_row(out: &mut String, cells: &[&str], widths: &[usize]) {
    let formatted: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(formatted.join("  ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgex_core::model::Transaction;

    fn tx(date: &str, withdrawal: &str, deposit: &str) -> Transaction {
        let mut tx = Transaction::default();
        tx.set("Date", date.into());
        tx.set("Withdrawal", withdrawal.into());
        tx.set("Deposit", deposit.into());
        tx
    }

    #[test]
    fn test_totals_line() {
        let statement = Statement {
            bank: "ICICI".into(),
            transactions: vec![tx("01/02/2024", "100.50", "0.00"), tx("02/02/2024", "49.50", "200.00")],
        };
        let rendered = format_statement(&statement);
        assert!(rendered.contains("2 transaction(s), withdrawals 150.00, deposits 200.00"));
    }

    #[test]
    fn test_empty_statement() {
        let statement = Statement {
            bank: "HDFC".into(),
            transactions: vec![],
        };
        let rendered = format_statement(&statement);
        assert!(rendered.contains("No transactions found."));
    }
}
