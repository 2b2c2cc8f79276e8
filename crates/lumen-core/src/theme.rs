//! Color themes and the cyclic palette.
//!
//! A theme is a named triple of CSS colors. Applying a theme means writing
//! its colors into the three page-global custom properties below; nothing
//! else in the page writes them.

use serde::{Deserialize, Serialize};

use crate::error::{PageError, PageResult};

/// Custom property holding the primary color.
pub const PRIMARY_VAR: &str = "--primary-color";
/// Custom property holding the secondary color.
pub const SECONDARY_VAR: &str = "--secondary-color";
/// Custom property holding the accent color.
pub const ACCENT_VAR: &str = "--accent-color";

/// A named (primary, secondary, accent) color triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Theme {
    pub fn new(
        name: impl Into<String>,
        primary: impl Into<String>,
        secondary: impl Into<String>,
        accent: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            primary: primary.into(),
            secondary: secondary.into(),
            accent: accent.into(),
        }
    }

    /// Check that every color is a single CSS value.
    ///
    /// Keywords, hex literals and color functions are all accepted; a value
    /// may not end the declaration or the surrounding rule.
    pub fn validate(&self) -> PageResult<()> {
        for (slot, value) in [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
        ] {
            if !is_css_color(value) {
                return Err(PageError::InvalidTheme(format!(
                    "{} color '{}' of theme '{}' is not a single CSS value",
                    slot, value, self.name
                )));
            }
        }
        Ok(())
    }

    /// The three custom-property declarations for this theme.
    pub fn css_variables(&self) -> [(&'static str, &str); 3] {
        [
            (PRIMARY_VAR, self.primary.as_str()),
            (SECONDARY_VAR, self.secondary.as_str()),
            (ACCENT_VAR, self.accent.as_str()),
        ]
    }

    /// Render a `:root` rule declaring this theme's custom properties.
    pub fn to_root_css(&self) -> String {
        let decls: String = self
            .css_variables()
            .iter()
            .map(|(name, value)| format!("  {}: {};\n", name, value))
            .collect();
        format!(":root {{\n{}}}\n", decls)
    }
}

fn is_css_color(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }

    let mut depth = 0usize;
    for c in value.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            ';' | '{' | '}' | '<' | '>' | '!' | '\\' | '"' | '\'' => return false,
            c if c.is_control() => return false,
            _ => {}
        }
    }
    depth == 0
}

/// Ordered, non-empty, cyclic sequence of themes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Theme>", into = "Vec<Theme>")]
pub struct ThemePalette {
    themes: Vec<Theme>,
}

impl ThemePalette {
    pub fn new(themes: Vec<Theme>) -> PageResult<Self> {
        if themes.is_empty() {
            return Err(PageError::EmptyPalette);
        }
        for theme in &themes {
            theme.validate()?;
        }
        Ok(Self { themes })
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// A constructed palette is never empty.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Theme at `index`, wrapping around the palette.
    pub fn get(&self, index: usize) -> &Theme {
        &self.themes[index % self.themes.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter()
    }
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self {
            themes: vec![
                Theme::new("aurora", "#667eea", "#764ba2", "#f093fb"),
                Theme::new("sunset", "#f093fb", "#f5576c", "#ffd26f"),
                Theme::new("ocean", "#4facfe", "#00f2fe", "#43e97b"),
                Theme::new("meadow", "#43e97b", "#38f9d7", "#fa709a"),
                Theme::new("ember", "#fa709a", "#fee140", "#667eea"),
            ],
        }
    }
}

impl TryFrom<Vec<Theme>> for ThemePalette {
    type Error = PageError;

    fn try_from(themes: Vec<Theme>) -> PageResult<Self> {
        Self::new(themes)
    }
}

impl From<ThemePalette> for Vec<Theme> {
    fn from(palette: ThemePalette) -> Self {
        palette.themes
    }
}

/// Current position in a palette.
///
/// The index is always in `[0, palette.len())`.
#[derive(Debug, Clone)]
pub struct ThemeCycler {
    palette: ThemePalette,
    index: usize,
}

impl ThemeCycler {
    pub fn new(palette: ThemePalette) -> Self {
        Self { palette, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &Theme {
        self.palette.get(self.index)
    }

    pub fn palette(&self) -> &ThemePalette {
        &self.palette
    }

    /// Step to the next theme, wrapping after the last.
    pub fn advance(&mut self) -> &Theme {
        self.index = (self.index + 1) % self.palette.len();
        self.current()
    }

    /// Jump back to the first theme.
    pub fn reset(&mut self) -> &Theme {
        self.index = 0;
        self.current()
    }
}

impl Default for ThemeCycler {
    fn default() -> Self {
        Self::new(ThemePalette::default())
    }
}
