use anyhow::Context;

use crate::core::Account;
use crate::report::AccountReport;

/// Pretty-printed JSON array; balances are strings so no precision is lost.
pub struct JsonReport;

impl AccountReport for JsonReport {
    fn render(&self, accounts: &[&Account]) -> anyhow::Result<String> {
        let mut out = serde_json::to_string_pretty(accounts)
            .with_context(|| "failed to serialise accounts")?;
        out.push('\n');
        return Ok(out);
    }
}


#[cfg(test)]
mod tests {
    use crate::core::Ledger;
    use crate::report::{AccountReport, JsonReport};

    use rstest::{fixture, rstest};
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[fixture]
    fn ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.open_account("Bilbo").unwrap();
        ledger.open_account("Frodo").unwrap();
        ledger.deposit(1000, dec!(32.50)).unwrap();
        ledger
    }

    #[rstest]
    fn accounts_serialize(ledger: Ledger) {
        let rendered = JsonReport.render(&ledger.list_accounts()).unwrap();
        let mut value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        for entry in value.as_array_mut().unwrap() {
            let opened_at = entry.as_object_mut().unwrap().remove("opened_at").unwrap();
            assert!(opened_at.is_string());
        }

        assert_eq!(value, json!([
            {"id": 1000, "holder_name": "Bilbo", "balance": "32.50"},
            {"id": 1001, "holder_name": "Frodo", "balance": "0"}
        ]));
    }

    #[test]
    fn empty_ledger() {
        let ledger = Ledger::new();
        assert_eq!(JsonReport.render(&ledger.list_accounts()).unwrap(), "[]\n");
    }
}
