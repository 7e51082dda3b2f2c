use std::path::Path;
use std::{fs, io};

use clap::Parser as _;
use cli::Cli;
use epd::error::EpdError;
use epd::{Epd, EpdConfig};
use log::info;

mod cli; // Cli options
mod epd; // Driver for the file-backed e-paper panel
mod prep; // Image preparation for the panel

/// List the image directory, failing on an unreadable or empty one so the
/// random pick below always has something to draw from.
fn list_images(dir: &Path) -> Result<Vec<fs::DirEntry>, EpdError> {
    let entries: Vec<fs::DirEntry> = fs::read_dir(dir)?.collect::<Result<_, _>>()?;
    if entries.is_empty() {
        return Err(EpdError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("no images in {}", dir.display()),
        )));
    }
    Ok(entries)
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let mut epd = Epd::open(EpdConfig {
        path: cli.epd,
        ..EpdConfig::default()
    })
    .unwrap_or_else(epd::error::handle_error);
    epd.set_auto(cli.auto);
    info!("{} panel, driver version {}", epd.panel(), epd.version());

    if cli.clear {
        epd.clear().unwrap_or_else(epd::error::handle_error);
    }

    let dir = list_images(&cli.dir).unwrap_or_else(epd::error::handle_error);
    let infile = &dir[rand::random_range(0..dir.len())];
    info!("Displaying {:?}", infile.path());

    let image = prep::load_mono(
        infile.path().as_path(),
        epd.width(),
        epd.height(),
        cli.no_crop,
    )
    .unwrap_or_else(prep::error::handle_error);

    epd.display(&image).unwrap_or_else(epd::error::handle_error);

    if !epd.auto() {
        epd.update().unwrap_or_else(epd::error::handle_error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("epd-fuse-main-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn list_images_returns_every_entry() {
        let dir = scratch_dir("list");
        fs::write(dir.join("a.png"), "").unwrap();
        fs::write(dir.join("b.png"), "").unwrap();
        assert_eq!(list_images(&dir).unwrap().len(), 2);
    }

    #[test]
    fn list_images_rejects_an_empty_directory() {
        let dir = scratch_dir("empty");
        assert!(matches!(list_images(&dir), Err(EpdError::Io(_))));
    }

    #[test]
    fn list_images_rejects_a_missing_directory() {
        assert!(matches!(
            list_images(Path::new("/nonexistent/images")),
            Err(EpdError::Io(_))
        ));
    }
}
