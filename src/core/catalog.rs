// src/core/catalog.rs
use crate::core::types::{Capability, SignSystem};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const VIDEOS_DIR: &str = "mp4videos";
pub const ASL_IMAGES_DIR: &str = "alphabetimages";
pub const ISL_IMAGES_DIR: &str = "indianalphabetsandnumbers";

const ASL_SUFFIX: &str = "_test.jpg";
const ASL_SPACE_STEM: &str = "space";
const ASL_NOTHING_STEM: &str = "nothing";
const FALLBACK_STEM: &str = "not_understand";

/// Locations of the three asset roots the catalog is built from.
#[derive(Debug, Clone)]
pub struct CatalogPaths {
    pub videos: PathBuf,
    pub asl_images: PathBuf,
    pub isl_images: PathBuf,
}

impl CatalogPaths {
    /// Derives the conventional directory layout under one asset root.
    pub fn from_root(root: &Path) -> Self {
        Self {
            videos: root.join(VIDEOS_DIR),
            asl_images: root.join(ASL_IMAGES_DIR),
            isl_images: root.join(ISL_IMAGES_DIR),
        }
    }
}

/// Per-category scan outcome, fixed at construction.
#[derive(Debug, Clone)]
pub struct CatalogStatus {
    pub videos: Capability,
    pub asl_images: Capability,
    pub isl_images: Capability,
}

/// Read-only index over the sign media on disk, built by a single scan at
/// startup. Word keys are lowercase file stems, letter keys uppercase
/// letters/digits. A category whose directory is missing stays empty and
/// answers every lookup with `None` for the life of the process.
pub struct MediaCatalog {
    videos: HashMap<String, String>,
    asl_images: HashMap<char, String>,
    isl_images: HashMap<char, String>,
    asl_space: Option<String>,
    asl_nothing: Option<String>,
    status: CatalogStatus,
}

impl MediaCatalog {
    pub fn scan(paths: &CatalogPaths) -> Self {
        let mut videos = HashMap::new();
        let mut asl_images = HashMap::new();
        let mut isl_images = HashMap::new();
        let mut asl_space = None;
        let mut asl_nothing = None;

        let videos_status = scan_dir(&paths.videos, |name| {
            if let Some(stem) = name.strip_suffix(".mp4") {
                videos.insert(stem.to_lowercase(), name.to_string());
            }
        });

        let asl_status = scan_dir(&paths.asl_images, |name| {
            let stem = match name.strip_suffix(ASL_SUFFIX) {
                Some(stem) => stem,
                None => return,
            };
            if stem.eq_ignore_ascii_case(ASL_SPACE_STEM) {
                asl_space = Some(name.to_string());
            } else if stem.eq_ignore_ascii_case(ASL_NOTHING_STEM) {
                asl_nothing = Some(name.to_string());
            } else if let Some(key) = letter_key(stem) {
                asl_images.insert(key, name.to_string());
            }
        });

        let isl_status = scan_dir(&paths.isl_images, |name| {
            if let Some(stem) = name.strip_suffix(".jpg") {
                if let Some(key) = letter_key(stem) {
                    isl_images.insert(key, name.to_string());
                }
            }
        });

        let status = CatalogStatus {
            videos: videos_status.counted(videos.len()),
            asl_images: asl_status.counted(asl_images.len()),
            isl_images: isl_status.counted(isl_images.len()),
        };

        Self { videos, asl_images, isl_images, asl_space, asl_nothing, status }
    }

    /// Direct whole-word clip lookup. The key is lowercased before lookup.
    pub fn video(&self, word: &str) -> Option<String> {
        self.videos
            .get(&word.to_lowercase())
            .map(|file| format!("{}/{}", VIDEOS_DIR, file))
    }

    /// Letter/digit image lookup in the given sign system. The key is
    /// uppercased before lookup.
    pub fn letter(&self, system: SignSystem, c: char) -> Option<String> {
        let key = c.to_ascii_uppercase();
        match system {
            SignSystem::Asl => self
                .asl_images
                .get(&key)
                .map(|file| format!("{}/{}", ASL_IMAGES_DIR, file)),
            SignSystem::Isl => self
                .isl_images
                .get(&key)
                .map(|file| format!("{}/{}", ISL_IMAGES_DIR, file)),
        }
    }

    /// Reserved word-separator image, if the system defines one. Only ASL
    /// ships a space image; ISL spells words back to back.
    pub fn space(&self, system: SignSystem) -> Option<String> {
        match system {
            SignSystem::Asl => self
                .asl_space
                .as_ref()
                .map(|file| format!("{}/{}", ASL_IMAGES_DIR, file)),
            SignSystem::Isl => None,
        }
    }

    /// Reserved "unrecognized" image from the ASL set, if present.
    pub fn unrecognized_image(&self) -> Option<String> {
        self.asl_nothing
            .as_ref()
            .map(|file| format!("{}/{}", ASL_IMAGES_DIR, file))
    }

    /// The `not_understand` clip, shown when a request resolves to nothing.
    pub fn fallback_video(&self) -> Option<String> {
        self.video(FALLBACK_STEM)
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }
}

/// Single uppercase letter or digit key for an image file stem; anything
/// longer (or non-alphanumeric) is not a letter asset.
fn letter_key(stem: &str) -> Option<char> {
    let mut chars = stem.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if c.is_ascii_alphanumeric() {
        Some(c.to_ascii_uppercase())
    } else {
        None
    }
}

enum ScanOutcome {
    Scanned,
    Failed(String),
}

impl ScanOutcome {
    fn counted(self, entries: usize) -> Capability {
        match self {
            ScanOutcome::Scanned => Capability::Available { entries },
            ScanOutcome::Failed(reason) => Capability::Unavailable { reason },
        }
    }
}

// A missing or unreadable directory degrades to an empty category; the
// engine keeps running against whatever assets did index.
fn scan_dir(dir: &Path, mut index: impl FnMut(&str)) -> ScanOutcome {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => return ScanOutcome::Failed(format!("{}: {}", dir.display(), e)),
    };
    for entry in entries.flatten() {
        if let Some(name) = entry.file_name().to_str() {
            index(name);
        }
    }
    ScanOutcome::Scanned
}
