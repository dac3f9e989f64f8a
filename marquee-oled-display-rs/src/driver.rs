//! SSD1306 driver in async buffered-graphics mode.
//!
//! [`OledDriver`] owns the panel and its 1 KiB frame buffer. Frames are
//! composed in memory by [`render()`](OledDriver::render) and sent to the
//! panel by [`flush()`](OledDriver::flush); the two are separate so callers
//! can release shared state between them.

use display_interface_i2c::I2CInterface;
use embedded_hal_async::i2c::I2c;
use marquee::animation::AnimationPhase;
use marquee::display_state::ActiveContent;
use ssd1306::{
    mode::BufferedGraphicsModeAsync, prelude::*, I2CDisplayInterface, Ssd1306Async,
};

use crate::canvas::GraphicsCanvas;
use crate::compositor::render_frame;
use crate::error::OledError;
use crate::layout::DisplayConfig;

/// Concrete display type used internally by [`OledDriver`].
type Display<I2C> = Ssd1306Async<
    I2CInterface<I2C>,
    DisplaySize128x64,
    BufferedGraphicsModeAsync<DisplaySize128x64>,
>;

/// Async driver for a 128×64 SSD1306 OLED over I2C.
///
/// # Lifecycle
///
/// 1. [`OledDriver::new()`]: no I2C traffic.
/// 2. [`OledDriver::init()`]: sends the SSD1306 initialisation sequence.
/// 3. [`OledDriver::render()`]: composes a frame in the buffer.
/// 4. [`OledDriver::flush()`]: transfers the buffer to the panel (~20 ms at
///    400 kHz).
///
/// Until `init()` succeeds, `render()` and `flush()` return
/// [`OledError::NotInitialized`] without touching the bus, so a missing or
/// dead panel never takes the rest of the firmware down with it.
///
/// # Example
///
/// ```no_run
/// use marquee::animation::AnimationPhase;
/// use marquee::display_state::{DisplayStateStore, UpdateRequest};
/// use marquee_oled_display_rs::{DisplayConfig, OledDriver};
///
/// # async fn example(i2c: impl embedded_hal_async::i2c::I2c) {
/// let mut store = DisplayStateStore::new();
/// store.apply(&UpdateRequest::text("<s2>Hello")).unwrap();
///
/// let mut oled = OledDriver::new(i2c, 0x3C);
/// oled.init().await.unwrap();
/// oled.render(store.active(), AnimationPhase::default(), &DisplayConfig::default())
///     .unwrap();
/// oled.flush().await.unwrap();
/// # }
/// ```
pub struct OledDriver<I2C> {
    display: Display<I2C>,
    initialized: bool,
}

impl<I2C> OledDriver<I2C>
where
    I2C: I2c,
{
    /// Construct an uninitialised driver.
    ///
    /// # Arguments
    /// * `i2c`: I2C peripheral or shared-bus device.
    /// * `address`: 7-bit device address (typically `0x3C` or `0x3D`).
    pub fn new(i2c: I2C, address: u8) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let display = Ssd1306Async::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        Self {
            display,
            initialized: false,
        }
    }

    /// Initialise the SSD1306 hardware.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::InitializationFailed`] if the panel does not
    /// respond.
    pub async fn init(&mut self) -> Result<(), OledError> {
        self.display
            .init()
            .await
            .map_err(|_| OledError::InitializationFailed)?;
        self.initialized = true;
        Ok(())
    }

    /// Compose one frame of `content` in the frame buffer. No I2C traffic.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::NotInitialized`] before a successful
    /// [`init()`](Self::init).
    pub fn render(
        &mut self,
        content: ActiveContent<'_>,
        phase: AnimationPhase,
        config: &DisplayConfig,
    ) -> Result<(), OledError> {
        if !self.initialized {
            return Err(OledError::NotInitialized);
        }
        let mut canvas = GraphicsCanvas::new(&mut self.display);
        render_frame(&mut canvas, content, phase, config);
        Ok(())
    }

    /// Transfer the frame buffer to the panel.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::NotInitialized`] before a successful
    /// [`init()`](Self::init), or [`OledError::Display`] on a bus failure.
    pub async fn flush(&mut self) -> Result<(), OledError> {
        if !self.initialized {
            return Err(OledError::NotInitialized);
        }
        self.display.flush().await?;
        Ok(())
    }

    /// Whether [`init()`](Self::init) has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}
