//! Frozen design constants of the sketch. The two ribbon faces were
//! generated with <https://hihayk.github.io/scale>.

use crate::canvas::Color;

/// Background wash painted once at the start of a run. `#B6D59E`
pub const BACKGROUND: Color = Color::rgb(0xB6, 0xD5, 0x9E);

/// Face shown while the twist winds up, `#3E477D..#5967B4`.
pub const FRONT: [Color; 10] = [
  Color::rgb(0x3E, 0x47, 0x7D),
  Color::rgb(0x41, 0x4B, 0x83),
  Color::rgb(0x44, 0x4E, 0x89),
  Color::rgb(0x47, 0x52, 0x8F),
  Color::rgb(0x4A, 0x55, 0x95),
  Color::rgb(0x4D, 0x59, 0x9B),
  Color::rgb(0x50, 0x5C, 0xA1),
  Color::rgb(0x53, 0x60, 0xA8),
  Color::rgb(0x56, 0x63, 0xAE),
  Color::rgb(0x59, 0x67, 0xB4)
];

/// Face shown while the twist unwinds, `#5C6ABA..#798BC9`.
pub const BACK: [Color; 11] = [
  Color::rgb(0x5C, 0x6A, 0xBA),
  Color::rgb(0x5F, 0x6D, 0xBC),
  Color::rgb(0x62, 0x71, 0xBD),
  Color::rgb(0x65, 0x74, 0xBF),
  Color::rgb(0x68, 0x77, 0xC0),
  Color::rgb(0x6B, 0x7B, 0xC1),
  Color::rgb(0x6E, 0x7E, 0xC3),
  Color::rgb(0x71, 0x81, 0xC4),
  Color::rgb(0x74, 0x84, 0xC6),
  Color::rgb(0x77, 0x87, 0xC7),
  Color::rgb(0x79, 0x8B, 0xC9)
];
