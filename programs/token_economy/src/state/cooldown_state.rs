use anchor_lang::prelude::*;
use crate::error::*;

/**
 * Per-principal cooldown account
 *
 * Tracks when a principal last earned. Each principal has its own account,
 * so one principal earning never delays another.
 *
 * Derivation: ["cooldown", config_key, principal]
 *
 * Lifecycle:
 * 1. Created on first earn (using init_if_needed), timer absent
 * 2. Timer set to the current time on every successful earn
 */
#[account]
#[derive(Default, Debug)]
pub struct CooldownState {
    /// Unix timestamp of the last successful earn, None if never earned
    pub last_earned_at: Option<i64>,
}

impl CooldownState {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<CooldownState>();

    /// First time this principal may earn again
    pub fn ready_at(&self, period: i64) -> Result<Option<i64>> {
        self.last_earned_at
            .map(|last| {
                last.checked_add(period)
                    .ok_or_else(|| error!(TokenEconomyError::ArithmeticOverflow))
            })
            .transpose()
    }

    /// Checks and restarts the timer in one step.
    pub fn try_consume(&mut self, now: i64, period: i64) -> Result<()> {
        if let Some(ready_at) = self.ready_at(period)? {
            if now < ready_at {
                msg!("Cooldown active, {} seconds remaining", ready_at - now);
                return err!(TokenEconomyError::RateLimited);
            }
        }
        self.last_earned_at = Some(now);
        Ok(())
    }
}
