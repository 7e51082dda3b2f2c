use std::{fmt::Display, io, process};

#[derive(Debug, derive_more::From)]
pub enum PrepError {
    Io(io::Error),
    Image(image::ImageError),
    Quantize(imagequant::Error),
}

impl Display for PrepError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PrepError::Io(error) => write!(f, "File error: {error}"),
            PrepError::Image(error) => write!(f, "Image error: {error}"),
            PrepError::Quantize(error) => write!(f, "Quantization error: {error}"),
        }
    }
}

pub fn handle_error<T, E>(error: E) -> T
where
    E: Into<PrepError>,
{
    println!("{}", error.into());
    process::exit(1);
}
