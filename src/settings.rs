use std::{collections::BTreeMap, error::Error, fs::*, io::Write, path::Path};

use serde::*;
use strum_macros::EnumIter;
use tracing::{debug, info, warn};

/// Default profile location, relative to the working directory. See `Config::profile_path`.
pub const SETTINGS_FILE_NAME: &'static str = "coords_manual.json";

/// Largest coordinate accepted on either axis.
pub const MAX_COORDINATE: i32 = 32_767;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, Serialize, Deserialize,
)]
pub enum Mode {
    #[serde(rename = "chip_click")]
    Chip,
    #[serde(rename = "full_click")]
    Full,
}

impl Mode {
    /// Name shown on the button and in the mode status line.
    pub fn label(&self) -> &'static str {
        match *self {
            Mode::Chip => "Chip",
            Mode::Full => "Full",
        }
    }

    /// Lowercase name used in status messages.
    pub fn name(&self) -> &'static str {
        match *self {
            Mode::Chip => "chip",
            Mode::Full => "full",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns `None` when either axis falls outside `0..=MAX_COORDINATE`.
    pub fn checked(x: i32, y: i32) -> Option<Self> {
        let position = Self { x, y };
        position.is_valid().then_some(position)
    }

    pub fn is_valid(&self) -> bool {
        (0..=MAX_COORDINATE).contains(&self.x) && (0..=MAX_COORDINATE).contains(&self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Position> for (i32, i32) {
    fn from(position: Position) -> Self {
        (position.x, position.y)
    }
}

/// Click targets per mode, persisted as `{"chip_click":[x,y],"full_click":[x,y]}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile {
    coordinates: BTreeMap<Mode, Position>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            coordinates: BTreeMap::from([
                (Mode::Chip, Position::new(1683, 40)),
                (Mode::Full, Position::new(1511, 40)),
            ]),
        }
    }
}

impl Profile {
    pub fn get(&self, mode: Mode) -> Option<Position> {
        self.coordinates.get(&mode).copied()
    }

    pub fn set(&mut self, mode: Mode, position: Position) {
        self.coordinates.insert(mode, position);
    }

    /// Never fails: a missing, unreadable or invalid file yields the defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!(path = %path.display(), "no saved coordinates, using defaults");
            return Self::default();
        }

        match read_profile(path) {
            Ok(profile) => {
                debug!(path = %path.display(), ?profile, "loaded coordinates");
                profile
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "could not read coordinates, using defaults");
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        let mut file = File::create(path)?;

        let profile = serde_json::to_string(self)?;

        file.write_all(profile.as_bytes())?;

        Ok(())
    }
}

fn read_profile(path: &Path) -> Result<Profile, Box<dyn Error>> {
    let profile = read_to_string(path)?;
    let profile: Profile = serde_json::from_str(&profile)?;

    if let Some((mode, position)) = profile
        .coordinates
        .iter()
        .find(|(_, position)| !position.is_valid())
    {
        return Err(format!(
            "{} coordinate {},{} is off screen",
            mode.name(),
            position.x,
            position.y
        )
        .into());
    }

    Ok(profile)
}
