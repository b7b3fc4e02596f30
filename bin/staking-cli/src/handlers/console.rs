//! Line-oriented stand-in for the two amount inputs and three buttons.
//!
//! Presses are fire-and-forget: each one runs on its own task and its outcome only shows up in the
//! logs. Quitting drops whatever is still in flight.

use anyhow::Result;
use staking_panel::{Action, ActionHandle, ActionPanel, WalletProvider};
use thiserror::Error;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{error, warn};

use super::action::report;

const USAGE: &str = "\
commands:
  stake-amount [value]     set the stake amount (empty clears it)
  withdraw-amount [value]  set the withdraw amount (empty clears it)
  stake                    deposit the stake amount
  withdraw                 withdraw the withdraw amount
  claim                    claim rewards
  show                     print both amounts
  help                     print this message
  quit                     leave the panel

values are stored exactly as typed after the first space, surrounding whitespace included";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    SetStakeAmount(String),
    SetWithdrawAmount(String),
    Press(Action),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum CommandError {
    #[error("unknown command {0:?}, type `help` for a list")]
    Unknown(String),

    #[error("`{0}` takes no arguments")]
    UnexpectedArgument(Action),
}

/// Parses one console line. Blank lines yield `None`.
///
/// Field values are everything after the separator following the command word, untrimmed.
pub(crate) fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim_start();
    if line.trim_end().is_empty() {
        return Ok(None);
    }

    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    let press = |action| {
        if rest.trim().is_empty() {
            Ok(Some(Command::Press(action)))
        } else {
            Err(CommandError::UnexpectedArgument(action))
        }
    };

    match word {
        "stake-amount" => Ok(Some(Command::SetStakeAmount(rest.to_string()))),
        "withdraw-amount" => Ok(Some(Command::SetWithdrawAmount(rest.to_string()))),
        "stake" => press(Action::Stake),
        "withdraw" => press(Action::Withdraw),
        "claim" => press(Action::Claim),
        "show" => Ok(Some(Command::Show)),
        "help" => Ok(Some(Command::Help)),
        "quit" | "exit" => Ok(Some(Command::Quit)),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// Runs the console on stdin until `quit` or end of input.
pub(crate) async fn run<W: WalletProvider>(panel: &ActionPanel<W>) -> Result<()> {
    println!("{USAGE}");
    drive(panel, BufReader::new(io::stdin())).await
}

async fn drive<W, R>(panel: &ActionPanel<W>, input: R) -> Result<()>
where
    W: WalletProvider,
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!(%e, "ignoring input");
                continue;
            }
        };

        match command {
            Command::SetStakeAmount(value) => panel.set_stake_amount(value),
            Command::SetWithdrawAmount(value) => panel.set_withdraw_amount(value),
            Command::Press(action) => {
                tokio::spawn(watch(action, panel.press(action)));
            }
            Command::Show => println!(
                "stake amount: {:?}\nwithdraw amount: {:?}",
                panel.stake_amount(),
                panel.withdraw_amount()
            ),
            Command::Help => println!("{USAGE}"),
            Command::Quit => break,
        }
    }

    Ok(())
}

async fn watch(action: Action, handle: ActionHandle) {
    match handle.await {
        Ok(Ok(outcome)) => report(action, &outcome),
        Ok(Err(e)) => error!(%action, %e, "action failed"),
        Err(e) => error!(%action, %e, "action task aborted"),
    }
}
