use crate::epd::error::EpdError;

/// Panel model and pixel dimensions, as reported by the device.
///
/// Built once from the `panel` channel and never mutated afterwards;
/// width and height are always at least 1.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelGeometry {
    panel: String,
    width: u32,
    height: u32,
}

impl PanelGeometry {
    /// Parse a panel descriptor line, e.g. `EPD 2.0 200x96`.
    ///
    /// The grammar is `<letters> <revision> <width>x<height>` with a
    /// `digits.digits` revision and any amount of whitespace between the
    /// three fields.
    pub fn parse(line: &str) -> Result<PanelGeometry, EpdError> {
        let invalid = || EpdError::InvalidPanel(line.to_string());

        let fields: Vec<&str> = line.split_whitespace().collect();
        let &[name, revision, dimensions] = fields.as_slice() else {
            return Err(invalid());
        };

        if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let (major, minor) = revision.split_once('.').ok_or_else(invalid)?;
        if !all_digits(major) || !all_digits(minor) {
            return Err(invalid());
        }

        let (w, h) = dimensions.split_once('x').ok_or_else(invalid)?;
        if !all_digits(w) || !all_digits(h) {
            return Err(invalid());
        }
        let width: u32 = w.parse().map_err(|_| invalid())?;
        let height: u32 = h.parse().map_err(|_| invalid())?;

        // The grammar already rules out empty digit runs; this guards
        // against an explicit zero.
        if width < 1 || height < 1 {
            return Err(EpdError::InvalidGeometry { width, height });
        }

        Ok(PanelGeometry {
            panel: format!("{name} {revision}"),
            width,
            height,
        })
    }

    /// Model and revision joined with a space, e.g. `EPD 2.0`.
    pub fn panel(&self) -> &str {
        &self.panel
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Bytes in one packed 1-bit frame for this panel.
    pub fn frame_bytes(&self) -> usize {
        (self.width as usize * self.height as usize + 7) / 8
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_descriptor_line() {
        let geometry = PanelGeometry::parse("EPD 2.0 200x96").unwrap();
        assert_eq!(geometry.panel(), "EPD 2.0");
        assert_eq!(geometry.width(), 200);
        assert_eq!(geometry.height(), 96);
        assert_eq!(geometry.size(), (200, 96));
        assert_eq!(geometry.frame_bytes(), 2400);
    }

    #[test]
    fn tolerates_extra_whitespace() {
        let geometry = PanelGeometry::parse("  EPD   2.7    264x176  ").unwrap();
        assert_eq!(geometry.panel(), "EPD 2.7");
        assert_eq!(geometry.size(), (264, 176));
    }

    #[test]
    fn rejects_lines_off_the_grammar() {
        for line in [
            "not a valid line",
            "",
            "EPD 2.0",
            "EPD 2.0 200x96 extra",
            "EPD3 2.0 200x96",
            "EPD 2 200x96",
            "EPD 2.0.1 200x96",
            "EPD 2.0 200x",
            "EPD 2.0 x96",
            "EPD 2.0 200-96",
            "EPD 2.0 20ax96",
            "EPD 2.0 99999999999x96",
        ] {
            assert!(
                matches!(PanelGeometry::parse(line), Err(EpdError::InvalidPanel(_))),
                "accepted {line:?}"
            );
        }
    }

    #[test]
    fn rejects_zero_geometry() {
        assert!(matches!(
            PanelGeometry::parse("EPD 2.0 0x96"),
            Err(EpdError::InvalidGeometry { width: 0, height: 96 })
        ));
        assert!(matches!(
            PanelGeometry::parse("EPD 2.0 200x0"),
            Err(EpdError::InvalidGeometry { width: 200, height: 0 })
        ));
    }

    #[test]
    fn frame_bytes_rounds_up() {
        let geometry = PanelGeometry::parse("EPD 1.0 5x3").unwrap();
        assert_eq!(geometry.frame_bytes(), 2);
    }
}
