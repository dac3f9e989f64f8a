//! Network join with unbounded retry.
//!
//! The board is useless until it is on the network, so joining never gives
//! up: each failed attempt waits [`RetryPolicy::retry_delay_ms`] and tries
//! again, and every [`RetryPolicy::announce_every`] failures the link is
//! asked to announce a fallback status so someone watching the board or the
//! log knows it is still alive.

use embedded_hal_async::delay::DelayNs;

/// A network interface that can attempt to join.
#[allow(async_fn_in_trait)]
pub trait NetworkLink {
    /// Error returned by a failed join attempt.
    type Error;

    /// Make one join attempt.
    async fn try_join(&mut self) -> Result<(), Self::Error>;

    /// Called every [`RetryPolicy::announce_every`] failed attempts.
    fn announce(&mut self, _attempts: u32) {}
}

/// Timing for [`join_with_retry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RetryPolicy {
    /// Pause between attempts. Default: 500 ms.
    pub retry_delay_ms: u32,
    /// Failed attempts between fallback announcements. Default: 20
    /// (every 10 s with the default delay). Zero disables announcements.
    pub announce_every: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retry_delay_ms: 500,
            announce_every: 20,
        }
    }
}

/// Retry `link.try_join()` until it succeeds.
///
/// Returns the number of attempts made, including the successful one.
pub async fn join_with_retry<L, D>(link: &mut L, delay: &mut D, policy: RetryPolicy) -> u32
where
    L: NetworkLink,
    D: DelayNs,
{
    let mut attempts: u32 = 0;
    loop {
        attempts = attempts.saturating_add(1);

        if link.try_join().await.is_ok() {
            #[cfg(feature = "defmt")]
            defmt::info!("network joined after {} attempts", attempts);
            return attempts;
        }

        if policy.announce_every != 0 && attempts % policy.announce_every == 0 {
            #[cfg(feature = "defmt")]
            defmt::warn!("still waiting for network ({} attempts)", attempts);
            link.announce(attempts);
        } else {
            #[cfg(feature = "defmt")]
            defmt::debug!("join attempt {} failed", attempts);
        }

        delay.delay_ms(policy.retry_delay_ms).await;
    }
}
