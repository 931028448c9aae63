//! Staking form: amount, validator choice and the submission outcome.
//!
//! Staking is simulated. A submission only validates the input and
//! produces a message; nothing is sent anywhere.

use super::amount_input::AmountInput;
use super::theme;
use super::traits::Widget;
use crate::actor::{InputEvent, KeyCode};
use crate::buffer::Buffer;
use crate::chain::LEADERS;
use crate::layout::Rect;
use std::fmt;

/// Result of submitting the form.
#[derive(Debug, Clone, PartialEq)]
pub enum StakeOutcome {
    /// No wallet connected; the input is kept.
    WalletDisconnected,
    /// The amount is empty, not a number, not finite, or not positive.
    InvalidAmount,
    /// Accepted; the input is cleared.
    Staked {
        /// Parsed amount of SUNC.
        amount: f64,
        /// Chosen validator.
        validator: &'static str,
    },
}

impl StakeOutcome {
    /// Whether the stake went through.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Staked { .. })
    }
}

impl fmt::Display for StakeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WalletDisconnected => f.write_str("Connect your wallet before staking."),
            Self::InvalidAmount => f.write_str("Enter a valid amount of SUNC."),
            Self::Staked { amount, validator } => write!(f, "Staked {amount} SUNC to {validator}."),
        }
    }
}

/// Parse a stake amount. Rejects empty, unparsable, non-finite and
/// non-positive input.
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}

/// The staking form.
#[derive(Debug)]
pub struct StakeForm {
    amount: AmountInput,
    validator: usize,
    outcome: Option<StakeOutcome>,
    bounds: Rect,
}

impl StakeForm {
    /// Create an empty form with the first validator selected.
    pub fn new(bounds: Rect) -> Self {
        let mut form = Self {
            amount: AmountInput::new(Rect::ZERO, "Amount in SUNC"),
            validator: 0,
            outcome: None,
            bounds: Rect::ZERO,
        };
        form.set_bounds(bounds);
        form
    }

    /// The amount field.
    pub const fn amount(&self) -> &AmountInput {
        &self.amount
    }

    /// Focus or unfocus the amount field. An unfocused field hides its
    /// cursor and ignores typing.
    pub const fn set_focused(&mut self, focused: bool) {
        self.amount.set_focused(focused);
    }

    /// Selected validator.
    pub const fn validator(&self) -> &'static str {
        LEADERS[self.validator]
    }

    /// Select the next validator, wrapping around.
    pub const fn next_validator(&mut self) {
        self.validator = (self.validator + 1) % LEADERS.len();
    }

    /// Select the previous validator, wrapping around.
    pub const fn previous_validator(&mut self) {
        self.validator = (self.validator + LEADERS.len() - 1) % LEADERS.len();
    }

    /// Outcome of the last submission.
    pub const fn outcome(&self) -> Option<&StakeOutcome> {
        self.outcome.as_ref()
    }

    /// Validate and "stake". The wallet check comes before the amount check.
    pub fn submit(&mut self, wallet_connected: bool) -> &StakeOutcome {
        let outcome = if !wallet_connected {
            StakeOutcome::WalletDisconnected
        } else if let Some(amount) = parse_amount(self.amount.content()) {
            self.amount.clear();
            StakeOutcome::Staked {
                amount,
                validator: self.validator(),
            }
        } else {
            StakeOutcome::InvalidAmount
        };
        self.outcome.insert(outcome)
    }
}

impl Widget for StakeForm {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        let field = bounds.row(1);
        self.amount.set_bounds(Rect::new(field.x, field.y, field.width.min(32), field.height));
    }

    fn render(&self, buffer: &mut Buffer) {
        let area = self.bounds;
        if area.is_empty() {
            return;
        }
        buffer.draw_text(area.x, area.y, "Stake SUNC", theme::TITLE, area.width);
        self.amount.render(buffer);

        let row = area.row(3);
        if !row.is_empty() {
            let used = buffer.draw_text(row.x, row.y, "Validator: ", theme::DIM, row.width);
            let choice = format!("◂ {} ▸", self.validator());
            buffer.draw_text(row.x + used, row.y, &choice, theme::TEXT, row.width - used);
        }

        let row = area.row(5);
        if !row.is_empty() {
            buffer.draw_text(row.x, row.y, "[ Stake ] (Enter)", theme::TITLE, row.width);
        }

        let row = area.row(7);
        if let (Some(outcome), false) = (&self.outcome, row.is_empty()) {
            let colour = if outcome.is_success() { theme::GOOD } else { theme::WARN };
            buffer.draw_text(row.x, row.y, &outcome.to_string(), theme::TEXT.fg(colour), row.width);
        }
    }

    /// Up/Down pick the validator; other keys go to the amount field.
    /// Enter is left to the owner, which knows the wallet state.
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        if !self.amount.is_focused() {
            return false;
        }
        match event {
            InputEvent::Key { code: KeyCode::Up, .. } => self.previous_validator(),
            InputEvent::Key {
                code: KeyCode::Down, ..
            } => self.next_validator(),
            _ => return self.amount.handle_input(event),
        }
        true
    }
}
