//! marquee-hw-interface
//!
//! OLED message board firmware for the Raspberry Pi Pico 2. Wires the two
//! library crates into a running display:
//!
//! 1. The request side decodes an update and applies it to the shared
//!    `DisplayStateStore`.
//! 2. It then raises `CONTENT_CHANGED`.
//! 3. The OLED task wakes, renders the active content into the frame buffer
//!    and flushes it to the panel.
//! 4. Every 200 ms the OLED task also advances the animation clock and
//!    re-renders content that scrolls or blinks.
//!
//! The network stack is not part of this crate: anything that can lock
//! `STORE` and signal `CONTENT_CHANGED` can drive the board. On boot the
//! store is seeded with a status message through the same update path.
//!
//! # Adding a network task
//!
//! A Wi-Fi or Ethernet task plugs in next to `oled_task`:
//!
//! 1. Implement `marquee::link::NetworkLink` for the interface and call
//!    `join_with_retry(&mut link, &mut embassy_time::Delay, RetryPolicy::default())`
//!    before serving requests. Override `announce` to push a "still
//!    connecting" message into `STORE` so the panel shows progress.
//! 2. For a file upload, keep one `UploadBuffer` in the task: `begin()` on
//!    the first part, `push()` each chunk, then `finish()` and apply the
//!    bytes with `UpdateRequest::uploaded_bitmap`. On a size mismatch the
//!    returned `UpdateError` is the status to send back.
//! 3. Answer state queries with `store.lock().await.snapshot().to_json()`
//!    and bitmap exports with `store.lock().await.bitmap()`.
//!
//! ```ignore
//! let mut upload = UploadBuffer::new();
//! upload.begin();
//! for chunk in body_chunks {
//!     upload.push(chunk);
//! }
//! let status = match upload.finish() {
//!     Ok(pixels) => STORE_REF.lock().await.apply(&UpdateRequest::uploaded_bitmap(&pixels)),
//!     Err(e) => Err(e),
//! };
//! if status.is_ok() {
//!     CONTENT_CHANGED.signal(());
//! }
//! ```

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use marquee::display_state::{DisplayStateStore, UpdateRequest};
use marquee_oled_display_rs::{display_loop, ContentSignal, DisplayConfig, OledDriver, SharedStore};

// ---------------------------------------------------------------------------
// Boot block and interrupt binding
// ---------------------------------------------------------------------------

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = embassy_rp::block::ImageDef::secure_exe();

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

// ---------------------------------------------------------------------------
// Static storage
// ---------------------------------------------------------------------------

/// Active display content: written by the request side, read by the OLED
/// task.
static STORE: StaticCell<SharedStore> = StaticCell::new();

/// Raised after every successful update.
static CONTENT_CHANGED: ContentSignal = Signal::new();

/// Shown until the first real update arrives.
const BOOT_MESSAGE: &str = "<s2>marquee</s2>\n<s1>waiting for\n<blink>updates...</blink>";

// ---------------------------------------------------------------------------
// Type aliases
// ---------------------------------------------------------------------------

/// Concrete I2C type for the OLED display (sole device on I2C0).
type OledI2c = I2c<'static, I2C0, i2c::Async>;

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Thin wrapper that monomorphises the generic `display_loop` so it can be
/// spawned as a concrete Embassy task.
#[embassy_executor::task]
async fn oled_task(
    driver: OledDriver<OledI2c>,
    store: &'static SharedStore,
    changed: &'static ContentSignal,
    config: DisplayConfig,
) {
    display_loop(driver, store, changed, config).await;
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("marquee-hw-interface starting");

    // Pin assignments:
    //   I2C_SDA → GP4  (p.PIN_4)
    //   I2C_SCL → GP5  (p.PIN_5)

    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = 400_000;
    let i2c = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, i2c_config);

    // OLED display at the standard SSD1306 I2C address.
    let oled_driver = OledDriver::new(i2c, 0x3C);

    let store = STORE.init(Mutex::new(DisplayStateStore::new()));

    // Seed the panel through the normal update path.
    match store.lock().await.apply(&UpdateRequest::text(BOOT_MESSAGE)) {
        Ok(status) => debug!("boot content: {}", status),
        Err(e) => warn!("boot content rejected: {}", e),
    }
    CONTENT_CHANGED.signal(());

    spawner
        .spawn(oled_task(oled_driver, store, &CONTENT_CHANGED, DisplayConfig::default()))
        .unwrap();

    info!("All tasks spawned");
}
