use anyhow::{Context, Result};
use staking_panel::{Action, ActionOutcome, ActionPanel, SkipReason, WalletProvider};
use tracing::{info, warn};

/// Sets the field `action` reads (if any), presses it once and waits for the result.
pub(crate) async fn handle_action<W: WalletProvider>(
    panel: &ActionPanel<W>,
    action: Action,
    amount: Option<String>,
) -> Result<()> {
    match (action, amount) {
        (Action::Stake, Some(amount)) => panel.set_stake_amount(amount),
        (Action::Withdraw, Some(amount)) => panel.set_withdraw_amount(amount),
        _ => {}
    }

    let outcome = panel
        .press(action)
        .await
        .with_context(|| format!("{action} task aborted"))?
        .with_context(|| format!("{action} failed"))?;

    report(action, &outcome);

    Ok(())
}

pub(crate) fn report(action: Action, outcome: &ActionOutcome) {
    match outcome {
        ActionOutcome::Skipped(SkipReason::EmptyAmount) => {
            warn!(%action, "no amount entered, nothing sent")
        }
        ActionOutcome::Skipped(SkipReason::NoWallet) => {
            warn!(%action, "no wallet available, nothing sent")
        }
        ActionOutcome::Confirmed(confirmation) => info!(
            %action,
            tx_hash = %confirmation.tx_hash,
            block_number = ?confirmation.block_number,
            "transaction confirmed"
        ),
    }
}
