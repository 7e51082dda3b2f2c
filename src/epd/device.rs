use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::epd::error::EpdError;

/// One of the files the driver exposes under the device base path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Channel {
    Version,
    Panel,
    Command,
    Display,
}

impl Channel {
    fn file_name(self) -> &'static str {
        match self {
            Channel::Version => "version",
            Channel::Panel => "panel",
            Channel::Command => "command",
            Channel::Display => "display",
        }
    }
}

/// All file traffic to the device goes through here.
///
/// No handle outlives a single call: every read or write opens the channel,
/// does its one operation and drops the file again, so a failed transfer
/// never leaves the device file held open.
pub struct DeviceSession {
    base: PathBuf,
}

impl DeviceSession {
    pub fn new(base: impl Into<PathBuf>) -> DeviceSession {
        DeviceSession { base: base.into() }
    }

    pub fn path(&self, channel: Channel) -> PathBuf {
        self.base.join(channel.file_name())
    }

    /// Read one line from a channel, without the trailing newline.
    pub fn read_line(&self, channel: Channel) -> Result<String, EpdError> {
        let file = File::open(self.path(channel))?;
        let mut line = String::new();
        BufReader::new(file).read_line(&mut line)?;
        if line.ends_with('\n') {
            line.pop();
        }
        return Ok(line);
    }

    /// Overwrite a channel with the given bytes.
    pub fn write_bytes(&self, channel: Channel, bytes: &[u8]) -> Result<(), EpdError> {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.path(channel))?;
        file.write_all(bytes)?;
        file.flush()?;
        return Ok(());
    }
}
