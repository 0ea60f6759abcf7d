use crate::domain::errors::TradeError;
use crate::domain::trading::fees::{FeeSchedule, compute_fee, compute_net};
use crate::domain::trading::types::{TradeIntent, TradeSide};
use rust_decimal::Decimal;
use tracing::info;

/// Where the composer currently is. Edits are only possible while a coin
/// is selected; nothing is validated until submission.
#[derive(Debug, Clone, PartialEq)]
pub enum ComposerState {
    Idle,
    Composing {
        coin_id: String,
        side: TradeSide,
        raw_amount: String,
    },
}

/// Fee and net totals for the amount currently typed in, when it parses.
#[derive(Debug, Clone, PartialEq)]
pub struct TradePreview {
    pub fee: Decimal,
    pub net: Decimal,
}

/// Assembles trade intents out of user edits.
///
/// Holds the transient selection state (which coin, which side, the raw
/// amount as typed) and nothing else. A rejected submission leaves the
/// state untouched so the caller can correct and resubmit; a successful
/// one clears the selection. Execution is someone else's job entirely.
pub struct TradeComposer {
    state: ComposerState,
    fees: FeeSchedule,
}

impl TradeComposer {
    pub fn new(fees: FeeSchedule) -> Self {
        Self {
            state: ComposerState::Idle,
            fees,
        }
    }

    pub fn state(&self) -> &ComposerState {
        &self.state
    }

    /// Select a coin to trade. Starts a fresh buy with an empty amount.
    pub fn select(&mut self, coin_id: impl Into<String>) {
        self.state = ComposerState::Composing {
            coin_id: coin_id.into(),
            side: TradeSide::Buy,
            raw_amount: String::new(),
        };
    }

    /// Flip between buy and sell. No-op while idle.
    pub fn set_side(&mut self, new_side: TradeSide) {
        if let ComposerState::Composing { side, .. } = &mut self.state {
            *side = new_side;
        }
    }

    /// Update the typed amount verbatim. No-op while idle.
    pub fn set_amount(&mut self, raw: impl Into<String>) {
        if let ComposerState::Composing { raw_amount, .. } = &mut self.state {
            *raw_amount = raw.into();
        }
    }

    /// Drop the selection without submitting.
    pub fn cancel(&mut self) {
        self.state = ComposerState::Idle;
    }

    /// Fee and net for the current input, or None while it doesn't parse
    /// to a tradeable amount.
    pub fn preview(&self) -> Option<TradePreview> {
        let ComposerState::Composing {
            side, raw_amount, ..
        } = &self.state
        else {
            return None;
        };

        let amount: Decimal = raw_amount.trim().parse().ok()?;
        let fee = compute_fee(amount, self.fees.fee_rate).ok()?;
        let net = compute_net(amount, self.fees.fee_rate, *side).ok()?;
        Some(TradePreview { fee, net })
    }

    /// Validate the current input and produce a trade intent.
    ///
    /// Fails with `InvalidAmount` when the amount doesn't parse or is not
    /// positive; the composer stays in `Composing` so the input can be
    /// corrected. On success the selection is cleared.
    pub fn submit(&mut self) -> Result<TradeIntent, TradeError> {
        let (coin_id, side, raw_amount) = match &self.state {
            ComposerState::Idle => return Err(TradeError::NoSelection),
            ComposerState::Composing {
                coin_id,
                side,
                raw_amount,
            } => (coin_id.clone(), *side, raw_amount.clone()),
        };

        let amount: Decimal =
            raw_amount
                .trim()
                .parse()
                .map_err(|_| TradeError::InvalidAmount {
                    input: raw_amount.clone(),
                })?;

        let intent = TradeIntent::new(coin_id, side, amount, &self.fees)?;
        info!(
            "Trade composed: {} {} of coin {} (fee {})",
            intent.side, intent.amount, intent.coin_id, intent.fee
        );

        self.state = ComposerState::Idle;
        Ok(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn composing(composer: &TradeComposer) -> bool {
        matches!(composer.state(), ComposerState::Composing { .. })
    }

    #[test]
    fn test_starts_idle_and_submit_needs_selection() {
        let mut composer = TradeComposer::new(FeeSchedule::default());
        assert_eq!(*composer.state(), ComposerState::Idle);
        assert_eq!(composer.submit().unwrap_err(), TradeError::NoSelection);
    }

    #[test]
    fn test_successful_submit_clears_selection() {
        let mut composer = TradeComposer::new(FeeSchedule::default());
        composer.select("c1");
        composer.set_side(TradeSide::Buy);
        composer.set_amount("10");

        let intent = composer.submit().unwrap();
        assert_eq!(intent.coin_id, "c1");
        assert_eq!(intent.amount, dec!(10));
        assert_eq!(intent.fee, dec!(0.2));
        assert_eq!(intent.net, dec!(10.2));
        assert_eq!(*composer.state(), ComposerState::Idle);
    }

    #[test]
    fn test_rejected_submit_keeps_composing() {
        let mut composer = TradeComposer::new(FeeSchedule::default());
        composer.select("c1");

        for bad in ["", "abc", "0", "-5"] {
            composer.set_amount(bad);
            let err = composer.submit().unwrap_err();
            assert!(matches!(err, TradeError::InvalidAmount { .. }), "{bad:?}");
            assert!(composing(&composer));
        }

        composer.set_amount("2.5");
        let intent = composer.submit().unwrap();
        assert_eq!(intent.net, dec!(2.55));
    }

    #[test]
    fn test_sell_side_flips_net() {
        let mut composer = TradeComposer::new(FeeSchedule::default());
        composer.select("c1");
        composer.set_side(TradeSide::Sell);
        composer.set_amount("10");

        let intent = composer.submit().unwrap();
        assert_eq!(intent.side, TradeSide::Sell);
        assert_eq!(intent.net, dec!(9.8));
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut composer = TradeComposer::new(FeeSchedule::default());
        composer.select("c1");
        composer.set_amount("10");
        composer.cancel();
        assert_eq!(*composer.state(), ComposerState::Idle);
    }

    #[test]
    fn test_preview_tracks_the_typed_amount() {
        let mut composer = TradeComposer::new(FeeSchedule::default());
        assert_eq!(composer.preview(), None);

        composer.select("c1");
        assert_eq!(composer.preview(), None);

        composer.set_amount("10");
        let preview = composer.preview().unwrap();
        assert_eq!(preview.fee, dec!(0.2));
        assert_eq!(preview.net, dec!(10.2));

        composer.set_amount("garbage");
        assert_eq!(composer.preview(), None);
    }

    #[test]
    fn test_edits_while_idle_are_ignored() {
        let mut composer = TradeComposer::new(FeeSchedule::default());
        composer.set_side(TradeSide::Sell);
        composer.set_amount("10");
        assert_eq!(*composer.state(), ComposerState::Idle);
    }
}
