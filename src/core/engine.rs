// src/core/engine.rs
use crate::core::catalog::MediaCatalog;
use crate::core::script::ScriptMapper;
use crate::core::types::{CharMapping, SignAsset, TargetSystem};
use thiserror::Error;

/// The only hard failures in the translation path. Unresolvable words and
/// characters are never errors; they are silently omitted from the output.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslateError {
    #[error("no text provided")]
    EmptyInput,
    #[error("no signs found for the given text")]
    NoSignsFound,
    #[error("unsupported target system: {0}")]
    UnknownTarget(String),
}

/// Converts free text into an ordered sequence of sign assets.
///
/// Resolution is a single left-to-right pass per word: try a whole-word
/// video clip first; on a miss spell the word out of letter images,
/// normalizing regional-script glyphs through the character tables. There
/// is no backtracking and no segmentation search. The engine holds only
/// the read-only catalog and tables built at startup, so `translate` is a
/// pure function of its arguments and safe to call from concurrent
/// request handlers through a shared reference.
pub struct TranslationEngine {
    catalog: MediaCatalog,
    mapper: ScriptMapper,
}

impl TranslationEngine {
    pub fn new(catalog: MediaCatalog) -> Self {
        Self { catalog, mapper: ScriptMapper::new() }
    }

    pub fn catalog(&self) -> &MediaCatalog {
        &self.catalog
    }

    pub fn translate(
        &self,
        text: &str,
        target: TargetSystem,
    ) -> Result<Vec<SignAsset>, TranslateError> {
        if text.trim().is_empty() {
            return Err(TranslateError::EmptyInput);
        }

        let system = target.sign_system();
        let script = target.script();
        let mut assets: Vec<SignAsset> = Vec::new();
        // Set after a spelled word; flushed before the next word's assets
        // so the separator lands between words, never trailing.
        let mut pending_space = false;

        for word in text.split_whitespace() {
            // 1. Whole-word clip match wins outright; no decomposition.
            if let Some(path) = self.catalog.video(&word.to_lowercase()) {
                if pending_space {
                    if let Some(space) = self.catalog.space(system) {
                        assets.push(SignAsset::image(space));
                    }
                    pending_space = false;
                }
                assets.push(SignAsset::video(path));
                continue;
            }

            // 2. Spell the word character by character, in original order.
            let mut letters: Vec<SignAsset> = Vec::new();
            for c in word.chars() {
                let resolved = match script.and_then(|s| self.mapper.map_char(s, c)) {
                    // Virama-type glyphs carry no sound; emit nothing.
                    Some(CharMapping::Silent) => continue,
                    Some(CharMapping::Letter(l)) => self.catalog.letter(system, l),
                    // No table entry: try the glyph as a plain letter/digit.
                    None => {
                        if c.is_ascii_alphanumeric() {
                            self.catalog.letter(system, c)
                        } else {
                            None
                        }
                    }
                };
                // Missing images drop silently; asset packs may be partial.
                if let Some(path) = resolved {
                    letters.push(SignAsset::image(path));
                }
            }

            if !letters.is_empty() {
                if pending_space {
                    if let Some(space) = self.catalog.space(system) {
                        assets.push(SignAsset::image(space));
                    }
                }
                assets.extend(letters);
                pending_space = true;
            }
        }

        if assets.is_empty() {
            // Valid request, nothing resolvable: show the dedicated clip
            // when the catalog has one, otherwise tell the caller.
            return match self.catalog.fallback_video() {
                Some(path) => Ok(vec![SignAsset::video(path)]),
                None => Err(TranslateError::NoSignsFound),
            };
        }
        Ok(assets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::CatalogPaths;
    use crate::core::types::AssetKind;
    use std::fs::{self, File};
    use std::path::Path;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    fn engine_with(
        videos: &[&str],
        asl: &[&str],
        isl: &[&str],
    ) -> (tempfile::TempDir, TranslationEngine) {
        let root = tempdir().unwrap();
        let paths = CatalogPaths::from_root(root.path());
        fs::create_dir_all(&paths.videos).unwrap();
        fs::create_dir_all(&paths.asl_images).unwrap();
        fs::create_dir_all(&paths.isl_images).unwrap();
        for name in videos {
            touch(&paths.videos, name);
        }
        for name in asl {
            touch(&paths.asl_images, name);
        }
        for name in isl {
            touch(&paths.isl_images, name);
        }
        let engine = TranslationEngine::new(MediaCatalog::scan(&paths));
        (root, engine)
    }

    fn full_asl() -> Vec<String> {
        let mut files: Vec<String> = ('A'..='Z').map(|c| format!("{}_test.jpg", c)).collect();
        files.extend(('0'..='9').map(|c| format!("{}_test.jpg", c)));
        files.push("space_test.jpg".to_string());
        files
    }

    fn paths(assets: &[SignAsset]) -> Vec<&str> {
        assets.iter().map(|a| a.path.as_str()).collect()
    }

    #[test]
    fn empty_input_is_a_request_error() {
        let (_root, engine) = engine_with(&[], &[], &[]);
        for target in [
            TargetSystem::Asl,
            TargetSystem::Isl,
            TargetSystem::Hindi,
            TargetSystem::Telugu,
            TargetSystem::Gujarati,
        ] {
            assert_eq!(engine.translate("", target), Err(TranslateError::EmptyInput));
            assert_eq!(engine.translate("   \t ", target), Err(TranslateError::EmptyInput));
        }
    }

    #[test]
    fn unknown_target_fails_parsing() {
        assert_eq!(
            "klingon".parse::<TargetSystem>(),
            Err(TranslateError::UnknownTarget("klingon".to_string()))
        );
        assert_eq!("ASL".parse::<TargetSystem>(), Ok(TargetSystem::Asl));
    }

    #[test]
    fn single_word_spells_without_separator() {
        let files = full_asl();
        let asl: Vec<&str> = files.iter().map(String::as_str).collect();
        let (_root, engine) = engine_with(&[], &asl, &[]);

        let assets = engine.translate("hello", TargetSystem::Asl).unwrap();
        assert_eq!(
            paths(&assets),
            vec![
                "alphabetimages/H_test.jpg",
                "alphabetimages/E_test.jpg",
                "alphabetimages/L_test.jpg",
                "alphabetimages/L_test.jpg",
                "alphabetimages/O_test.jpg",
            ]
        );
        assert!(assets.iter().all(|a| a.kind == AssetKind::Image));
    }

    #[test]
    fn space_lands_between_spelled_words_never_trailing() {
        let files = full_asl();
        let asl: Vec<&str> = files.iter().map(String::as_str).collect();
        let (_root, engine) = engine_with(&[], &asl, &[]);

        let assets = engine.translate("hi there", TargetSystem::Asl).unwrap();
        assert_eq!(assets.len(), 8);
        assert_eq!(assets[2].path, "alphabetimages/space_test.jpg");
        assert_ne!(assets.last().unwrap().path, "alphabetimages/space_test.jpg");
    }

    #[test]
    fn isl_emits_no_separator_for_the_same_input() {
        let isl: Vec<String> = ('A'..='Z').map(|c| format!("{}.jpg", c)).collect();
        let isl: Vec<&str> = isl.iter().map(String::as_str).collect();
        let (_root, engine) = engine_with(&[], &[], &isl);

        let assets = engine.translate("hi there", TargetSystem::Isl).unwrap();
        assert_eq!(assets.len(), 7);
        assert!(assets.iter().all(|a| a.kind == AssetKind::Image));
    }

    #[test]
    fn direct_video_short_circuits_spelling() {
        let files = full_asl();
        let asl: Vec<&str> = files.iter().map(String::as_str).collect();
        let (_root, engine) = engine_with(&["hello.mp4"], &asl, &[]);

        let assets = engine.translate("hello", TargetSystem::Asl).unwrap();
        assert_eq!(paths(&assets), vec!["mp4videos/hello.mp4"]);
        assert_eq!(assets[0].kind, AssetKind::Video);
    }

    #[test]
    fn video_order_matches_word_order() {
        let (_root, engine) =
            engine_with(&["good.mp4", "morning.mp4", "friend.mp4"], &[], &[]);

        let assets = engine.translate("good morning friend", TargetSystem::Asl).unwrap();
        assert_eq!(
            paths(&assets),
            vec!["mp4videos/good.mp4", "mp4videos/morning.mp4", "mp4videos/friend.mp4"]
        );
    }

    #[test]
    fn hindi_consonant_matra_virama_consonant_yields_two_assets() {
        // Catalog has only K and T, so the matra's mapped letter (I) drops
        // and the virama is skipped outright.
        let (_root, engine) = engine_with(&[], &[], &["K.jpg", "T.jpg"]);

        let word = "क\u{093f}\u{094d}त"; // ka + i-matra + virama + ta
        let assets = engine.translate(word, TargetSystem::Hindi).unwrap();
        assert_eq!(
            paths(&assets),
            vec!["indianalphabetsandnumbers/K.jpg", "indianalphabetsandnumbers/T.jpg"]
        );
    }

    #[test]
    fn regional_target_passes_latin_text_through_isl() {
        let isl: Vec<String> = ('A'..='Z').map(|c| format!("{}.jpg", c)).collect();
        let isl: Vec<&str> = isl.iter().map(String::as_str).collect();
        let (_root, engine) = engine_with(&[], &[], &isl);

        let assets = engine.translate("ok", TargetSystem::Telugu).unwrap();
        assert_eq!(
            paths(&assets),
            vec!["indianalphabetsandnumbers/O.jpg", "indianalphabetsandnumbers/K.jpg"]
        );
    }

    #[test]
    fn punctuation_and_unmapped_symbols_drop_silently() {
        let files = full_asl();
        let asl: Vec<&str> = files.iter().map(String::as_str).collect();
        let (_root, engine) = engine_with(&[], &asl, &[]);

        let assets = engine.translate("a+b!", TargetSystem::Asl).unwrap();
        assert_eq!(
            paths(&assets),
            vec!["alphabetimages/A_test.jpg", "alphabetimages/B_test.jpg"]
        );
    }

    #[test]
    fn digits_resolve_like_letters() {
        let files = full_asl();
        let asl: Vec<&str> = files.iter().map(String::as_str).collect();
        let (_root, engine) = engine_with(&[], &asl, &[]);

        let assets = engine.translate("a1", TargetSystem::Asl).unwrap();
        assert_eq!(
            paths(&assets),
            vec!["alphabetimages/A_test.jpg", "alphabetimages/1_test.jpg"]
        );
    }

    #[test]
    fn untranslatable_text_reports_no_signs_found() {
        let (_root, engine) = engine_with(&[], &[], &[]);
        assert_eq!(
            engine.translate("hello", TargetSystem::Asl),
            Err(TranslateError::NoSignsFound)
        );
    }

    #[test]
    fn untranslatable_text_substitutes_the_fallback_clip() {
        let (_root, engine) = engine_with(&["not_understand.mp4"], &[], &[]);
        let assets = engine.translate("???", TargetSystem::Asl).unwrap();
        assert_eq!(paths(&assets), vec!["mp4videos/not_understand.mp4"]);
    }

    #[test]
    fn translate_is_idempotent() {
        let files = full_asl();
        let asl: Vec<&str> = files.iter().map(String::as_str).collect();
        let (_root, engine) = engine_with(&["water.mp4"], &asl, &[]);

        let first = engine.translate("water please", TargetSystem::Asl).unwrap();
        let second = engine.translate("water please", TargetSystem::Asl).unwrap();
        assert_eq!(first, second);
    }
}
