//! Font libraries: listing fonts and rendering text with them.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use figlet_rs::FIGfont;

use super::FigletError;

/// Name of the font compiled into the binary.
pub const STANDARD_FONT: &str = "standard";

/// File extension of FIGlet font files.
pub const FONT_EXTENSION: &str = "flf";

/// Text rendered when probing whether a font can be used.
const PROBE_TEXT: &str = "test";

/// System directories searched for `.flf` fonts after any configured ones.
const SYSTEM_FONT_DIRS: &[&str] = &["/usr/share/figlet", "/usr/local/share/figlet"];

/// Something that can enumerate fonts and render text with them.
pub trait FontLibrary {
    /// Names of every usable font, sorted.
    fn available_fonts(&self) -> Vec<String>;

    /// Render `text` with `font`, or with the library's default font if `None`.
    fn render(&self, text: &str, font: Option<&str>) -> Result<String, FigletError>;

    /// Whether `name` can actually be rendered with.
    fn has_font(&self, name: &str) -> bool {
        self.render(PROBE_TEXT, Some(name)).is_ok()
    }
}

/// FIGlet fonts: the built-in `standard` font plus `.flf` files on disk.
#[derive(Debug, Clone)]
pub struct FigletFonts {
    search_dirs: Vec<PathBuf>,
}

impl FigletFonts {
    /// Search only the given directories (in order) for font files.
    pub fn new(search_dirs: Vec<PathBuf>) -> Self {
        Self { search_dirs }
    }

    /// Search `extra` first, then the user data directory and the
    /// conventional system font directories.
    pub fn with_default_dirs(extra: Vec<PathBuf>) -> Self {
        let mut search_dirs = extra;
        if let Some(data_dir) = dirs::data_dir() {
            search_dirs.push(data_dir.join("pset-tools").join("fonts"));
        }
        search_dirs.extend(SYSTEM_FONT_DIRS.iter().map(PathBuf::from));
        Self::new(search_dirs)
    }

    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    /// First `<name>.flf` found in the search directories.
    fn find_font_file(&self, name: &str) -> Option<PathBuf> {
        // Names are plain file stems; anything path-like is never looked up.
        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
            return None;
        }
        let file_name = format!("{}.{}", name, FONT_EXTENSION);
        self.search_dirs
            .iter()
            .map(|dir| dir.join(&file_name))
            .find(|path| path.is_file())
    }

    fn load(&self, font: Option<&str>) -> Result<FIGfont, FigletError> {
        let name = font.unwrap_or(STANDARD_FONT);

        if let Some(path) = self.find_font_file(name) {
            log::debug!("Loading font '{}' from {}", name, path.display());
            return load_font_file(name, &path);
        }
        if name == STANDARD_FONT {
            return FIGfont::standard().map_err(|reason| FigletError::InvalidFont {
                name: name.to_string(),
                reason,
            });
        }
        Err(FigletError::FontNotFound(name.to_string()))
    }
}

fn load_font_file(name: &str, path: &Path) -> Result<FIGfont, FigletError> {
    let path_str = path.to_str().ok_or_else(|| FigletError::InvalidFont {
        name: name.to_string(),
        reason: format!("non UTF-8 path {}", path.display()),
    })?;
    FIGfont::from_file(path_str).map_err(|reason| FigletError::InvalidFont {
        name: name.to_string(),
        reason,
    })
}

/// Font names (file stems) of every `.flf` file directly inside `dir`.
fn fonts_in_dir(dir: &Path) -> Vec<String> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("Skipping font directory {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some(FONT_EXTENSION)
        })
        .filter_map(|path| {
            path.file_stem()
                .and_then(|stem| stem.to_str())
                .map(str::to_string)
        })
        .collect()
}

impl FontLibrary for FigletFonts {
    fn available_fonts(&self) -> Vec<String> {
        let mut fonts = BTreeSet::new();
        fonts.insert(STANDARD_FONT.to_string());
        for dir in &self.search_dirs {
            fonts.extend(fonts_in_dir(dir));
        }
        fonts.into_iter().collect()
    }

    fn render(&self, text: &str, font: Option<&str>) -> Result<String, FigletError> {
        let figfont = self.load(font)?;
        // No figure means nothing in `text` has a glyph in this font: blank art.
        Ok(figfont
            .convert(text)
            .map(|figure| figure.to_string())
            .unwrap_or_default())
    }
}
