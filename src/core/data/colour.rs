#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// The same level on all three channels.
    #[must_use]
    pub fn grey(level: u8) -> Self {
        Self {
            r: level,
            g: level,
            b: level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grey_sets_every_channel() {
        assert_eq!(
            Colour::grey(128),
            Colour {
                r: 128,
                g: 128,
                b: 128
            }
        );
    }

    #[test]
    fn test_default_is_black() {
        assert_eq!(Colour::default(), Colour::BLACK);
        assert_eq!(Colour::grey(0), Colour::BLACK);
    }
}
