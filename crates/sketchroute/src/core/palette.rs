//! Fixed color palettes shared by the builders

use super::Color;

/// Seven-color palette (architecture, simple)
pub const FULL_PALETTE: [Color; 7] = [
    Color::Blue,
    Color::Green,
    Color::Orange,
    Color::Red,
    Color::Purple,
    Color::Cyan,
    Color::Yellow,
];

/// Five-color palette (sequence, timeline, ER)
pub const SHORT_PALETTE: [Color; 5] = [
    Color::Blue,
    Color::Green,
    Color::Orange,
    Color::Red,
    Color::Purple,
];

/// Mind map branch palette; blue is reserved for the central node
pub const BRANCH_PALETTE: [Color; 6] = [
    Color::Green,
    Color::Orange,
    Color::Red,
    Color::Purple,
    Color::Cyan,
    Color::Yellow,
];

/// Pick the color at `index`, wrapping around the palette
pub fn cycle(palette: &[Color], index: usize) -> Color {
    if palette.is_empty() {
        return Color::default();
    }
    palette[index % palette.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(cycle(&FULL_PALETTE, 0), Color::Blue);
        assert_eq!(cycle(&FULL_PALETTE, 7), Color::Blue);
        assert_eq!(cycle(&SHORT_PALETTE, 6), Color::Green);
        assert_eq!(cycle(&[], 3), Color::Blue);
    }

    #[test]
    fn test_branch_palette_skips_central_color() {
        assert!(!BRANCH_PALETTE.contains(&Color::Blue));
    }
}
