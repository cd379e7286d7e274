use std::fmt::Write;

use colored::{ColoredString, Colorize};

use crate::core::{Account, Amount};
use crate::core::account::total_balance;
use crate::report::AccountReport;

pub struct TextReport;

impl TextReport {
    fn colour_balance(balance: Amount) -> ColoredString {
        let text = balance.to_string();
        if balance > Amount::ZERO {
            text.green()
        } else {
            text.normal()
        }
    }
}

impl AccountReport for TextReport {
    fn render(&self, accounts: &[&Account]) -> anyhow::Result<String> {
        if accounts.is_empty() {
            return Ok(String::from("No accounts.\n"));
        }

        let mut out = String::new();
        for account in accounts {
            writeln!(out, "{} {}, {} {}, {} {}",
                "Account ID:".bold(), account.id(),
                "Holder:".bold(), account.holder_name(),
                "Balance:".bold(), Self::colour_balance(account.balance()))?;
        }

        match total_balance(accounts.iter().copied()) {
            Some(total) => writeln!(out, "{} {} across {} account(s)", "Total:".bold(), total, accounts.len())?,
            None => writeln!(out, "{} too large to display across {} account(s)", "Total:".bold(), accounts.len())?
        }
        return Ok(out);
    }
}
