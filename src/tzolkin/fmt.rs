//! Dreamspell names of kin numbers.

use std::fmt;

use super::Kin;

/// Seal names, `1..=20` at index `0..=19`.
pub const SEALS: [&str; 20] = [
    "Dragon",
    "Wind",
    "Night",
    "Seed",
    "Serpent",
    "World-Bridger",
    "Hand",
    "Star",
    "Moon",
    "Dog",
    "Monkey",
    "Human",
    "Skywalker",
    "Wizard",
    "Eagle",
    "Warrior",
    "Earth",
    "Mirror",
    "Storm",
    "Sun",
];

/// Tone names, `1..=13` at index `0..=12`.
pub const TONES: [&str; 13] = [
    "Magnetic",
    "Lunar",
    "Electric",
    "Self-Existing",
    "Overtone",
    "Rhythmic",
    "Resonant",
    "Galactic",
    "Solar",
    "Planetary",
    "Spectral",
    "Crystal",
    "Cosmic",
];

/// Colours cycle through the seals: red, white, blue, yellow.
const COLOURS: [&str; 4] = ["Red", "White", "Blue", "Yellow"];

/// Name of the seal of `kin`.
///
/// ```
/// use julian_tzolkin::tzolkin::{Kin, fmt};
///
/// assert_eq!("Wizard", fmt::seal(Kin::new(34).unwrap()));
/// ```
pub fn seal(kin: Kin) -> &'static str {
    SEALS[(kin.seal() - 1) as usize]
}

/// Name of the tone of `kin`.
pub fn tone(kin: Kin) -> &'static str {
    TONES[(kin.tone() - 1) as usize]
}

/// Colour of the seal of `kin`.
pub fn colour(kin: Kin) -> &'static str {
    COLOURS[((kin.seal() - 1) % 4) as usize]
}

/// Full name, colour first, e.g. `Red Magnetic Dragon`.
///
/// ```
/// use julian_tzolkin::tzolkin::{Kin, fmt};
///
/// assert_eq!("Red Magnetic Dragon", fmt::name(Kin::new(1).unwrap()));
/// assert_eq!("Yellow Cosmic Sun", fmt::name(Kin::new(260).unwrap()));
/// ```
pub fn name(kin: Kin) -> String {
    format!("{} {} {}", colour(kin), tone(kin), seal(kin))
}

impl fmt::Display for Kin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Kin {}: {}", self.number(), name(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        for (num, std) in [
            (1, "Red Magnetic Dragon"),
            (2, "White Lunar Wind"),
            (13, "Red Cosmic Skywalker"),
            (14, "White Magnetic Wizard"),
            (20, "Yellow Resonant Sun"),
            (34, "White Galactic Wizard"),
            (258, "White Spectral Mirror"),
        ] {
            assert_eq!(std, name(Kin::new(num).unwrap()), "kin {num}");
        }
    }

    #[test]
    fn display() {
        assert_eq!(
            "Kin 207: Blue Crystal Hand",
            Kin::new(207).unwrap().to_string()
        );
    }
}
