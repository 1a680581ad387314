//! Confetti palette.
//! The palette index rides along in the vertex stream; the JS renderer maps
//! it to an actual CSS color.

use crate::rng::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ConfettiColor {
    Red = 0,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Pink,
}

impl ConfettiColor {
    pub const ALL: [ConfettiColor; 8] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Cyan,
        Self::Blue,
        Self::Purple,
        Self::Pink,
    ];

    pub fn random(rng: &mut Rng) -> Self {
        Self::ALL[rng.next_int(Self::ALL.len() as u32) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_eight_colors() {
        assert_eq!(ConfettiColor::ALL.len(), 8);
    }

    #[test]
    fn random_color_is_from_palette() {
        let mut rng = Rng::new(42);
        for _ in 0..100 {
            assert!(ConfettiColor::ALL.contains(&ConfettiColor::random(&mut rng)));
        }
    }
}
