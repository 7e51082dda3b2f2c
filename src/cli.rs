use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version, author, about)]
pub struct Cli {
    /// Directory from which to randomly choose an image to display
    pub dir: PathBuf,
    /// Base path of the e-paper device files
    #[arg(long, default_value = "/dev/epd")]
    pub epd: PathBuf,
    /// Refresh the panel as part of the display write
    #[arg(long)]
    pub auto: bool,
    /// Blank the panel before displaying
    #[arg(long)]
    pub clear: bool,
    /// Letterbox instead of cropping when aspect ratios differ
    #[arg(long)]
    pub no_crop: bool,
}
