//! Theme and Site Constants
//!
//! Brand colors, navigation, contact details and the small formatting
//! helpers shared by the pages.

use leptos::*;

/// A brand color with its light and dark variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub main: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
}

pub const PRIMARY: Palette = Palette {
    main: "#1e3a8a",
    light: "#3b82f6",
    dark: "#1e40af",
};

pub const SECONDARY: Palette = Palette {
    main: "#dc2626",
    light: "#ef4444",
    dark: "#b91c1c",
};

pub const SUCCESS: Palette = Palette {
    main: "#16a34a",
    light: "#22c55e",
    dark: "#15803d",
};

pub const WARNING: &str = "#ed6c02";
pub const ERROR: &str = "#d32f2f";

/// Accent color per pillar id
pub const PILLAR_COLORS: [(&str, &str); 4] = [
    ("education", "#1e3a8a"),
    ("career", "#dc2626"),
    ("social", "#16a34a"),
    ("research", "#3b82f6"),
];

pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { label: "Home", path: "/" },
    NavItem { label: "Framework", path: "/framework" },
    NavItem { label: "AI Career Demo", path: "/ai-career" },
    NavItem { label: "Research", path: "/research" },
    NavItem { label: "Partners", path: "/partners" },
    NavItem { label: "Get Involved", path: "/get-involved" },
];

pub struct ContactInfo {
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
}

pub const CONTACT_INFO: ContactInfo = ContactInfo {
    email: "info@tfdn.org",
    phone: "+254 700 000 000",
    address: "Nairobi, Kenya",
};

pub const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("Facebook", "https://facebook.com/tfdn"),
    ("Twitter", "https://twitter.com/tfdn"),
    ("LinkedIn", "https://linkedin.com/company/tfdn"),
    ("Instagram", "https://instagram.com/tfdn"),
];

/// Count-up animation length for stat cards
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// Delay between successive stat cards starting to count
pub const COUNTER_STAGGER_MS: u32 = 200;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Theme provided to the component tree
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub primary: Palette,
    pub secondary: Palette,
    pub success: Palette,
    pub warning: &'static str,
    pub error: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: PRIMARY,
            secondary: SECONDARY,
            success: SUCCESS,
            warning: WARNING,
            error: ERROR,
        }
    }
}

impl Theme {
    /// Color band for a match score: strong, fair, weak
    pub fn score_color(&self, score: u8) -> &'static str {
        if score >= 80 {
            self.success.main
        } else if score >= 60 {
            self.secondary.main
        } else {
            self.warning
        }
    }
}

pub fn provide_theme() {
    provide_context(Theme::default());
}

pub fn use_theme() -> Theme {
    use_context::<Theme>().unwrap_or_default()
}

/// Accent color for a pillar, falling back to primary
pub fn pillar_color(id: &str) -> &'static str {
    PILLAR_COLORS
        .iter()
        .find(|(pillar, _)| *pillar == id)
        .map(|(_, color)| *color)
        .unwrap_or(PRIMARY.main)
}

/// "2024-01-15" -> "January 15, 2024". Unparseable dates are shown as-is.
pub fn format_report_date(date: &str) -> String {
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// Thousands separators, as numbers are shown on the stat cards
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_color_bands() {
        let theme = Theme::default();
        assert_eq!(theme.score_color(100), SUCCESS.main);
        assert_eq!(theme.score_color(80), SUCCESS.main);
        assert_eq!(theme.score_color(79), SECONDARY.main);
        assert_eq!(theme.score_color(60), SECONDARY.main);
        assert_eq!(theme.score_color(59), WARNING);
        assert_eq!(theme.score_color(0), WARNING);
    }

    #[test]
    fn test_format_report_date() {
        assert_eq!(format_report_date("2024-01-15"), "January 15, 2024");
        assert_eq!(format_report_date("2023-11-02"), "November 2, 2023");
        assert_eq!(format_report_date("soon"), "soon");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(5000), "5,000");
        assert_eq!(format_thousands(25000), "25,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_pillar_color() {
        assert_eq!(pillar_color("career"), "#dc2626");
        assert_eq!(pillar_color("unknown"), PRIMARY.main);
    }

    #[test]
    fn test_nav_items() {
        let paths: Vec<&str> = NAV_ITEMS.iter().map(|i| i.path).collect();
        assert_eq!(
            paths,
            vec!["/", "/framework", "/ai-career", "/research", "/partners", "/get-involved"]
        );
    }
}
