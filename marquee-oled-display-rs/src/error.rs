//! Error types for the OLED display driver.

use core::fmt;

use display_interface::DisplayError;

/// Errors from the SSD1306 driver.
///
/// The `ssd1306` crate wraps all underlying I2C bus errors into
/// [`DisplayError`], so this enum is non-generic. None of these stop the
/// rest of the firmware: the display loop logs them and carries on.
#[derive(Debug)]
pub enum OledError {
    /// Display interface error (I2C and other bus-level failures).
    Display(DisplayError),
    /// The panel did not accept the initialisation sequence.
    InitializationFailed,
    /// Rendering or flushing was attempted before a successful
    /// [`OledDriver::init()`](crate::OledDriver::init).
    NotInitialized,
}

impl From<DisplayError> for OledError {
    fn from(e: DisplayError) -> Self {
        OledError::Display(e)
    }
}

impl fmt::Display for OledError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OledError::Display(e) => write!(f, "display bus error: {:?}", e),
            OledError::InitializationFailed => write!(f, "display did not initialise"),
            OledError::NotInitialized => write!(f, "display not initialised"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for OledError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            OledError::Display(_e) => defmt::write!(f, "Display bus error"),
            OledError::InitializationFailed => defmt::write!(f, "Initialization failed"),
            OledError::NotInitialized => defmt::write!(f, "Not initialized"),
        }
    }
}
