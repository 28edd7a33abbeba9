//! Color themes: the style tokens each template's primary color expands to.
//!
//! Tokens are opaque class strings. Screen and print variants are kept separate
//! so a print stylesheet can swap gradients for flat fills.

use serde::{Deserialize, Serialize};

/// Identifier of a primary color. Every template names exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryColor {
    Blue,
    Purple,
    Emerald,
    Orange,
    Gray,
}

impl PrimaryColor {
    #[cfg(test)]
    pub const ALL: [PrimaryColor; 5] = [
        PrimaryColor::Blue,
        PrimaryColor::Purple,
        PrimaryColor::Emerald,
        PrimaryColor::Orange,
        PrimaryColor::Gray,
    ];

    /// Total lookup: anything unrecognised is blue.
    pub fn from_id(id: &str) -> Self {
        match id {
            "purple" => PrimaryColor::Purple,
            "emerald" => PrimaryColor::Emerald,
            "orange" => PrimaryColor::Orange,
            "gray" => PrimaryColor::Gray,
            _ => PrimaryColor::Blue,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            PrimaryColor::Blue => "blue",
            PrimaryColor::Purple => "purple",
            PrimaryColor::Emerald => "emerald",
            PrimaryColor::Orange => "orange",
            PrimaryColor::Gray => "gray",
        }
    }

    pub fn theme(self) -> &'static ColorTheme {
        match self {
            PrimaryColor::Blue => &BLUE,
            PrimaryColor::Purple => &PURPLE,
            PrimaryColor::Emerald => &EMERALD,
            PrimaryColor::Orange => &ORANGE,
            PrimaryColor::Gray => &GRAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorTheme {
    pub header_bg: &'static str,
    pub print_header_bg: &'static str,
    pub border_color: &'static str,
    pub text_color: &'static str,
    pub print_text_color: &'static str,
    pub tag_bg: &'static str,
    pub print_tag_bg: &'static str,
    pub tag_text: &'static str,
    pub print_tag_text: &'static str,
}

impl ColorTheme {
    /// Accent text: screen and print color together.
    pub fn accent_text(&self) -> String {
        format!("{} {}", self.text_color, self.print_text_color)
    }

    /// Background and text tokens for a tag chip, screen and print.
    pub fn tag_tokens(&self) -> String {
        format!(
            "{} {} {} {}",
            self.tag_bg, self.print_tag_bg, self.tag_text, self.print_tag_text
        )
    }
}

static BLUE: ColorTheme = ColorTheme {
    header_bg: "bg-gradient-to-r from-blue-600 to-blue-800",
    print_header_bg: "print:bg-blue-700",
    border_color: "border-blue-600",
    text_color: "text-blue-600",
    print_text_color: "print:text-blue-700",
    tag_bg: "bg-blue-100",
    print_tag_bg: "print:bg-blue-50",
    tag_text: "text-blue-800",
    print_tag_text: "print:text-blue-900",
};

static PURPLE: ColorTheme = ColorTheme {
    header_bg: "bg-gradient-to-r from-purple-600 to-purple-800",
    print_header_bg: "print:bg-purple-700",
    border_color: "border-purple-600",
    text_color: "text-purple-600",
    print_text_color: "print:text-purple-700",
    tag_bg: "bg-purple-100",
    print_tag_bg: "print:bg-purple-50",
    tag_text: "text-purple-800",
    print_tag_text: "print:text-purple-900",
};

static EMERALD: ColorTheme = ColorTheme {
    header_bg: "bg-gradient-to-r from-emerald-600 to-emerald-800",
    print_header_bg: "print:bg-emerald-700",
    border_color: "border-emerald-600",
    text_color: "text-emerald-600",
    print_text_color: "print:text-emerald-700",
    tag_bg: "bg-emerald-100",
    print_tag_bg: "print:bg-emerald-50",
    tag_text: "text-emerald-800",
    print_tag_text: "print:text-emerald-900",
};

static ORANGE: ColorTheme = ColorTheme {
    header_bg: "bg-gradient-to-r from-orange-600 to-orange-800",
    print_header_bg: "print:bg-orange-700",
    border_color: "border-orange-600",
    text_color: "text-orange-600",
    print_text_color: "print:text-orange-700",
    tag_bg: "bg-orange-100",
    print_tag_bg: "print:bg-orange-50",
    tag_text: "text-orange-800",
    print_tag_text: "print:text-orange-900",
};

// Gray runs one step darker than the others so the header keeps contrast.
static GRAY: ColorTheme = ColorTheme {
    header_bg: "bg-gradient-to-r from-gray-700 to-gray-900",
    print_header_bg: "print:bg-gray-800",
    border_color: "border-gray-600",
    text_color: "text-gray-600",
    print_text_color: "print:text-gray-700",
    tag_bg: "bg-gray-100",
    print_tag_bg: "print:bg-gray-50",
    tag_text: "text-gray-800",
    print_tag_text: "print:text-gray-900",
};

/// Resolves a primary-color identifier to its theme. Never fails.
pub fn get_color_theme(primary_color: &str) -> &'static ColorTheme {
    PrimaryColor::from_id(primary_color).theme()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_colors_resolve_to_their_own_theme() {
        for color in PrimaryColor::ALL {
            let theme = get_color_theme(color.id());
            assert!(
                theme.border_color.contains(color.id()),
                "{} theme should carry its own border token",
                color.id()
            );
        }
    }

    #[test]
    fn test_unknown_color_falls_back_to_blue() {
        assert_eq!(get_color_theme("teal"), &BLUE);
        assert_eq!(get_color_theme(""), &BLUE);
    }

    #[test]
    fn test_tag_tokens_include_print_variants() {
        let tokens = get_color_theme("orange").tag_tokens();
        assert_eq!(
            tokens,
            "bg-orange-100 print:bg-orange-50 text-orange-800 print:text-orange-900"
        );
    }
}
