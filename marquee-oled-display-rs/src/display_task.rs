//! Display loop: renders on content changes and animation ticks.
//!
//! The request side writes into the shared [`DisplayStateStore`] and then
//! signals [`ContentSignal`]. The loop below is the only reader that draws;
//! it waits for whichever comes first, the signal or the next animation
//! tick, and renders each frame to completion before waiting again.

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};
use embedded_hal_async::i2c::I2c;
use marquee::animation::AnimationPhase;
use marquee::display_state::DisplayStateStore;

use crate::compositor::{should_render, RenderTrigger};
use crate::driver::OledDriver;
use crate::layout::DisplayConfig;

/// Content store shared between the request side and the display loop.
pub type SharedStore = Mutex<CriticalSectionRawMutex, DisplayStateStore>;

/// Raised by the request side after every successful update.
pub type ContentSignal = Signal<CriticalSectionRawMutex, ()>;

// ── Display loop ─────────────────────────────────────────────────────────

/// Periodic display loop.
///
/// This is a regular `async fn`, **not** an Embassy `#[task]`. Callers
/// create a thin concrete task wrapper, since Embassy tasks cannot be
/// generic:
///
/// ```ignore
/// #[embassy_executor::task]
/// async fn oled_task(
///     driver: OledDriver<MyConcreteI2cType>,
///     store: &'static SharedStore,
///     changed: &'static ContentSignal,
///     config: DisplayConfig,
/// ) {
///     display_loop(driver, store, changed, config).await;
/// }
/// ```
///
/// # Control flow
///
/// 1. Initialise the panel and draw the current content.
/// 2. Wait for a content change or the next animation tick:
///    - **Change**: render with the current phase.
///    - **Tick**: advance the clock; render only if the active content
///      contains `<scroll>` or `<blink>`.
/// 3. Render into the frame buffer while holding the store lock (memory
///    only), release the lock, then flush over I2C.
///
/// # Errors
///
/// * Initialisation failure: logs the error and **returns**; updates keep
///   being accepted into the store, they are just never drawn.
/// * Flush failure: logs the error and continues with the next event.
#[allow(clippy::needless_pass_by_value)] // config is small and consumed
pub async fn display_loop<I2C>(
    mut driver: OledDriver<I2C>,
    store: &'static SharedStore,
    changed: &'static ContentSignal,
    config: DisplayConfig,
) where
    I2C: I2c,
{
    // ── Initialisation ───────────────────────────────────────────────
    if let Err(_e) = driver.init().await {
        #[cfg(feature = "defmt")]
        defmt::error!("OLED init failed: {}", _e);
        return;
    }

    #[cfg(feature = "defmt")]
    defmt::info!("OLED initialised");

    let mut clock = config.animation_clock();
    let mut ticker = Ticker::every(Duration::from_millis(config.animation_period_ms));

    draw(&mut driver, store, clock.phase(), &config, RenderTrigger::ContentChanged).await;

    // ── Main loop ────────────────────────────────────────────────────
    loop {
        match select(changed.wait(), ticker.next()).await {
            Either::First(()) => {
                let phase = clock.phase();
                draw(&mut driver, store, phase, &config, RenderTrigger::ContentChanged).await;
            }
            Either::Second(()) => {
                let phase = clock.tick();
                draw(&mut driver, store, phase, &config, RenderTrigger::AnimationTick).await;
            }
        }
    }
}

/// Render the store's active content and flush it, unless
/// [`should_render`] says `trigger` leaves the frame unchanged.
async fn draw<I2C>(
    driver: &mut OledDriver<I2C>,
    store: &SharedStore,
    phase: AnimationPhase,
    config: &DisplayConfig,
    trigger: RenderTrigger,
) where
    I2C: I2c,
{
    {
        let store = store.lock().await;
        let content = store.active();
        if !should_render(content, trigger) {
            return;
        }
        if let Err(_e) = driver.render(content, phase, config) {
            #[cfg(feature = "defmt")]
            defmt::error!("Render failed: {}", _e);
            return;
        }
    } // ← lock released before any I2C work

    if let Err(_e) = driver.flush().await {
        #[cfg(feature = "defmt")]
        defmt::error!("Flush failed: {}", _e);
    }
}

// Frame content and the redraw decision are tested in compositor.rs; this
// loop only sequences rendering against embassy timers and the I2C bus.
