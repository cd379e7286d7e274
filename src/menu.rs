//! Interactive text menu driving a [`Ledger`].
//!
//! Reads one answer per line from any `BufRead` and writes prompts and
//! results to any `Write`, so the loop runs the same on a terminal as on
//! an in-memory buffer. Core errors are shown and the loop carries on;
//! only I/O failures end it early.

use std::io::{BufRead, Write};
use std::str::FromStr;

use log::debug;

use crate::core::{AccountId, Amount, Ledger};
use crate::report::AccountReport;

const OPTIONS: &str = "1. Open Account\n2. Deposit\n3. Withdraw\n4. Check Balance\n5. Show All Accounts\n6. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Open,
    Deposit,
    Withdraw,
    Balance,
    List,
    Exit
}

impl FromStr for Choice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Choice::Open),
            "2" => Ok(Choice::Deposit),
            "3" => Ok(Choice::Withdraw),
            "4" => Ok(Choice::Balance),
            "5" => Ok(Choice::List),
            "6" => Ok(Choice::Exit),
            _ => Err(())
        }
    }
}

enum Flow {
    Continue,
    Quit
}

enum Input<T> {
    Value(T),
    Invalid(String),
    Closed
}

pub struct Menu<R, W> {
    ledger: Ledger,
    report: Box<dyn AccountReport>,
    input: R,
    output: W
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(ledger: Ledger, report: Box<dyn AccountReport>, input: R, output: W) -> Self {
        Menu { ledger, report, input, output }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Hands back the ledger and the output once the session is over.
    pub fn into_parts(self) -> (Ledger, W) {
        (self.ledger, self.output)
    }

    /// Runs until the exit option is chosen or input runs out.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            writeln!(self.output, "{}", OPTIONS)?;
            let choice = match self.ask::<Choice>("Select an option: ")? {
                Input::Value(choice) => choice,
                Input::Invalid(_) => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    continue;
                },
                Input::Closed => break
            };
            debug!("menu choice {:?}", choice);

            let flow = match choice {
                Choice::Open => self.open_account()?,
                Choice::Deposit => self.deposit()?,
                Choice::Withdraw => self.withdraw()?,
                Choice::Balance => self.check_balance()?,
                Choice::List => self.list_accounts()?,
                Choice::Exit => Flow::Quit
            };
            if let Flow::Quit = flow {
                break;
            }
        }

        writeln!(self.output, "Exiting application...")?;
        self.output.flush()?;
        Ok(())
    }

    fn open_account(&mut self) -> anyhow::Result<Flow> {
        let name = match self.ask::<String>("Enter the account holder's name: ")? {
            Input::Value(name) if !name.is_empty() => name,
            Input::Value(_) => {
                writeln!(self.output, "Holder name cannot be empty.")?;
                return Ok(Flow::Continue);
            },
            other => return self.skip(other, "name")
        };

        match self.ledger.open_account(&name) {
            Ok(account) => writeln!(self.output, "Account opened for {} with Account ID: {}", account.holder_name(), account.id())?,
            Err(err) => writeln!(self.output, "Error: {}", err)?
        }
        Ok(Flow::Continue)
    }

    fn deposit(&mut self) -> anyhow::Result<Flow> {
        let Some((id, amount)) = self.ask_transfer("deposit")? else {
            return Ok(Flow::Quit);
        };
        if let Some((id, amount)) = id.zip(amount) {
            match self.ledger.deposit(id, amount) {
                Ok(balance) => writeln!(self.output, "Successfully deposited: {}, New Balance: {}", amount, balance)?,
                Err(err) => writeln!(self.output, "Error: {}", err)?
            }
        }
        Ok(Flow::Continue)
    }

    fn withdraw(&mut self) -> anyhow::Result<Flow> {
        let Some((id, amount)) = self.ask_transfer("withdrawal")? else {
            return Ok(Flow::Quit);
        };
        if let Some((id, amount)) = id.zip(amount) {
            match self.ledger.withdraw(id, amount) {
                Ok(balance) => writeln!(self.output, "Successfully withdrew: {}, New Balance: {}", amount, balance)?,
                Err(err) => writeln!(self.output, "Error: {}", err)?
            }
        }
        Ok(Flow::Continue)
    }

    fn check_balance(&mut self) -> anyhow::Result<Flow> {
        let id = match self.ask::<AccountId>("Enter account ID: ")? {
            Input::Value(id) => id,
            other => return self.skip(other, "account ID")
        };

        match self.ledger.find_account(id) {
            Some(account) => writeln!(self.output, "Current Balance: {}", account.balance())?,
            None => writeln!(self.output, "Account not found.")?
        }
        Ok(Flow::Continue)
    }

    fn list_accounts(&mut self) -> anyhow::Result<Flow> {
        let rendered = self.report.render(&self.ledger.list_accounts())?;
        writeln!(self.output, "Listing all Accounts:")?;
        write!(self.output, "{}", rendered)?;
        Ok(Flow::Continue)
    }

    /// Asks for an account id and an amount. `None` when input is closed;
    /// an inner `None` when an answer did not parse (already reported).
    fn ask_transfer(&mut self, kind: &str) -> anyhow::Result<Option<(Option<AccountId>, Option<Amount>)>> {
        let id = match self.ask::<AccountId>("Enter account ID: ")? {
            Input::Value(id) => Some(id),
            Input::Invalid(raw) => {
                writeln!(self.output, "Invalid account ID: {}", raw)?;
                return Ok(Some((None, None)));
            },
            Input::Closed => return Ok(None)
        };
        let amount = match self.ask::<Amount>(&format!("Enter {} amount: ", kind))? {
            Input::Value(amount) => Some(amount),
            Input::Invalid(raw) => {
                writeln!(self.output, "Invalid amount: {}", raw)?;
                None
            },
            Input::Closed => return Ok(None)
        };
        Ok(Some((id, amount)))
    }

    fn skip<T>(&mut self, input: Input<T>, what: &str) -> anyhow::Result<Flow> {
        match input {
            Input::Invalid(raw) => {
                writeln!(self.output, "Invalid {}: {}", what, raw)?;
                Ok(Flow::Continue)
            },
            _ => Ok(Flow::Quit)
        }
    }

    fn ask<T: FromStr>(&mut self, prompt: &str) -> anyhow::Result<Input<T>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Input::Closed);
        }
        let answer = line.trim();
        Ok(match answer.parse::<T>() {
            Ok(value) => Input::Value(value),
            Err(_) => Input::Invalid(answer.to_owned())
        })
    }
}
