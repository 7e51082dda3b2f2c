use std::{fmt::Display, io, process};

#[derive(Debug, derive_more::From)]
pub enum EpdError {
    #[from]
    Io(io::Error),
    InvalidPanel(String),
    InvalidGeometry {
        width: u32,
        height: u32,
    },
    UnsupportedFormat {
        depth: u8,
    },
    SizeMismatch {
        image: (u32, u32),
        panel: (u32, u32),
    },
}

impl Display for EpdError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            EpdError::Io(error) => write!(f, "Device error: {error}"),
            EpdError::InvalidPanel(line) => write!(f, "Invalid panel string: {line:?}"),
            EpdError::InvalidGeometry { width, height } => {
                write!(f, "Invalid panel geometry: {width}x{height}")
            }
            EpdError::UnsupportedFormat { depth } => {
                write!(f, "Only single bit images are supported, got {depth} bits per pixel")
            }
            EpdError::SizeMismatch { image, panel } => write!(
                f,
                "Image size mismatch: image is {}x{}, panel is {}x{}",
                image.0, image.1, panel.0, panel.1
            ),
        }
    }
}

pub fn handle_error<T, E>(error: E) -> T
where
    E: Into<EpdError>,
{
    println!("{}", error.into());
    process::exit(1);
}
