//! ANSI color helpers for terminal output.

/// Wraps text in ANSI escapes when enabled, passes it through otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub const fn new(enabled: bool) -> Self {
        Palette { enabled }
    }

    pub const fn plain() -> Self {
        Palette::new(false)
    }

    pub fn is_enabled(self) -> bool {
        self.enabled
    }

    fn paint(self, code: &str, s: &str) -> String {
        if self.enabled {
            format!("\x1b[{}m{}\x1b[0m", code, s)
        } else {
            s.to_string()
        }
    }

    /// Format text in green.
    pub fn green(self, s: &str) -> String {
        self.paint("32", s)
    }

    /// Format text in red.
    pub fn red(self, s: &str) -> String {
        self.paint("31", s)
    }

    /// Format text in gray.
    pub fn gray(self, s: &str) -> String {
        self.paint("90", s)
    }

    /// Format text in bold.
    pub fn bold(self, s: &str) -> String {
        self.paint("1", s)
    }

    /// Format a status label (right-aligned, green, bold).
    pub fn status_label(self, label: &str) -> String {
        self.paint("1;32", &format!("{:>12}", label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_palette_wraps_in_escapes() {
        let palette = Palette::new(true);
        assert_eq!(palette.red("x"), "\x1b[31mx\x1b[0m");
        assert_eq!(palette.status_label("Done"), "\x1b[1;32m        Done\x1b[0m");
    }

    #[test]
    fn plain_palette_passes_text_through() {
        let palette = Palette::plain();
        assert!(!palette.is_enabled());
        assert_eq!(palette.green("ok"), "ok");
        assert_eq!(palette.status_label("Created"), "     Created");
    }
}
