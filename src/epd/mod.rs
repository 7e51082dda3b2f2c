use std::path::PathBuf;

use log::info;

pub mod codec;
pub mod device;
pub mod error;
pub mod image;
pub mod panel;

use device::{Channel, DeviceSession};
use error::EpdError;
use panel::PanelGeometry;
use self::image::DisplayImage;

const CMD_UPDATE: u8 = b'U';
const CMD_CLEAR: u8 = b'C';

pub struct EpdConfig {
    /// Base path of the device files.
    pub path: PathBuf,
    /// Refresh the panel as part of every display write.
    pub auto: bool,
}

impl Default for EpdConfig {
    fn default() -> EpdConfig {
        EpdConfig {
            path: PathBuf::from("/dev/epd"),
            auto: false,
        }
    }
}

/// Handle on one e-paper panel.
///
/// Geometry and driver version are read once at open time and fixed for
/// the life of the handle.
pub struct Epd {
    device: DeviceSession,
    geometry: PanelGeometry,
    version: String,
    auto: bool,
}

impl Epd {
    pub fn open(config: EpdConfig) -> Result<Epd, EpdError> {
        let device = DeviceSession::new(config.path);

        let version = device.read_line(Channel::Version)?;
        let line = device.read_line(Channel::Panel)?;
        let geometry = PanelGeometry::parse(&line)?;
        info!(
            "Found {} panel, {}x{}, driver version {version}",
            geometry.panel(),
            geometry.width(),
            geometry.height()
        );

        Ok(Epd {
            device,
            geometry,
            version,
            auto: config.auto,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        self.geometry.size()
    }

    pub fn width(&self) -> u32 {
        self.geometry.width()
    }

    pub fn height(&self) -> u32 {
        self.geometry.height()
    }

    /// Panel model and revision, e.g. `EPD 2.0`.
    pub fn panel(&self) -> &str {
        self.geometry.panel()
    }

    /// Driver version string, verbatim from the device.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn auto(&self) -> bool {
        self.auto
    }

    pub fn set_auto(&mut self, flag: bool) {
        self.auto = flag;
    }

    /// Transfer a 1-bit image to the panel.
    ///
    /// The image must match the panel dimensions exactly. With `auto` set
    /// the panel is refreshed as part of the same call; a refresh failure
    /// surfaces even though the frame itself was written.
    pub fn display(&self, image: &impl DisplayImage) -> Result<(), EpdError> {
        let depth = image.pixel_depth();
        if depth != 1 {
            return Err(EpdError::UnsupportedFormat { depth });
        }
        if image.size() != self.size() {
            return Err(EpdError::SizeMismatch {
                image: image.size(),
                panel: self.size(),
            });
        }

        let packed = image.to_packed_bits();
        debug_assert_eq!(packed.len(), self.geometry.frame_bytes());

        let frame = codec::reverse_bits(&packed);
        info!("Transmitting frame, {} bytes", frame.len());
        self.device.write_bytes(Channel::Display, &frame)?;

        if self.auto {
            self.update()?;
        }
        Ok(())
    }

    /// Refresh the panel with the last transferred frame.
    pub fn update(&self) -> Result<(), EpdError> {
        self.command(CMD_UPDATE)
    }

    /// Blank the panel.
    pub fn clear(&self) -> Result<(), EpdError> {
        self.command(CMD_CLEAR)
    }

    fn command(&self, c: u8) -> Result<(), EpdError> {
        self.device.write_bytes(Channel::Command, &[c])
    }
}
