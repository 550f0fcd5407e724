// src/core/script.rs
use crate::core::types::{CharMapping, Script};

/// Stateless glyph-to-Latin normalizer for the supported regional scripts.
///
/// Indic scripts are alphasyllabic: a sound may be spelled as a base
/// consonant plus a dependent vowel sign (matra) plus a modifier, and the
/// virama suppresses a consonant's inherent vowel. No syllable
/// reconstruction is attempted here; every significant glyph maps
/// independently to its nearest Latin letter and the virama maps to an
/// explicit skip. The result is a letter-by-letter approximation of the
/// word's sound, not an exact transliteration, and aspirated/unaspirated
/// consonant pairs collapse to the same letter.
pub struct ScriptMapper;

impl ScriptMapper {
    pub fn new() -> Self {
        Self
    }

    /// Looks up one glyph in the selected script's table. `None` means the
    /// glyph has no entry at all and the caller should try it as a plain
    /// letter or digit instead.
    pub fn map_char(&self, script: Script, c: char) -> Option<CharMapping> {
        match script {
            Script::Devanagari => devanagari(c),
            Script::Telugu => telugu(c),
            Script::Gujarati => gujarati(c),
        }
    }
}

impl Default for ScriptMapper {
    fn default() -> Self {
        Self::new()
    }
}

fn devanagari(c: char) -> Option<CharMapping> {
    use CharMapping::{Letter, Silent};
    Some(match c {
        // Vowels and their matras
        'अ' | 'आ' | 'ऐ' | 'ा' | 'ै' => Letter('A'),
        'इ' | 'ई' | 'ि' | 'ी' => Letter('I'),
        'उ' | 'ऊ' | 'ु' | 'ू' => Letter('U'),
        'ए' | 'े' => Letter('E'),
        'ओ' | 'औ' | 'ो' | 'ौ' => Letter('O'),

        // Consonants
        'क' | 'ख' => Letter('K'),
        'ग' | 'घ' => Letter('G'),
        'ङ' | 'ञ' | 'ण' | 'न' => Letter('N'),
        'च' | 'छ' => Letter('C'),
        'ज' | 'झ' => Letter('J'),
        'ट' | 'ठ' | 'त' | 'थ' => Letter('T'),
        'ड' | 'ढ' | 'द' | 'ध' => Letter('D'),
        'प' | 'फ' => Letter('P'),
        'ब' | 'भ' => Letter('B'),
        'म' => Letter('M'),
        'य' => Letter('Y'),
        'र' => Letter('R'),
        'ल' => Letter('L'),
        'व' => Letter('V'),
        'श' | 'ष' | 'स' => Letter('S'),
        'ह' => Letter('H'),

        // Modifiers: anusvara and visarga
        'ं' => Letter('M'),
        'ः' => Letter('H'),

        // Virama suppresses the inherent vowel; emit nothing for it
        '्' => Silent,

        _ => return None,
    })
}

fn telugu(c: char) -> Option<CharMapping> {
    use CharMapping::{Letter, Silent};
    Some(match c {
        // Vowels and their matras
        'అ' | 'ఆ' | 'ఐ' | 'ా' | 'ై' => Letter('A'),
        'ఇ' | 'ఈ' | 'ి' | 'ీ' => Letter('I'),
        'ఉ' | 'ఊ' | 'ు' | 'ూ' => Letter('U'),
        'ఎ' | 'ఏ' | 'ె' | 'ే' => Letter('E'),
        'ఒ' | 'ఓ' | 'ఔ' | 'ొ' | 'ో' | 'ౌ' => Letter('O'),

        // Consonants
        'క' | 'ఖ' => Letter('K'),
        'గ' | 'ఘ' => Letter('G'),
        'ఙ' | 'ఞ' | 'ణ' | 'న' => Letter('N'),
        'చ' | 'ఛ' => Letter('C'),
        'జ' | 'ఝ' => Letter('J'),
        'ట' | 'ఠ' | 'త' | 'థ' => Letter('T'),
        'డ' | 'ఢ' | 'ద' | 'ధ' => Letter('D'),
        'ప' | 'ఫ' => Letter('P'),
        'బ' | 'భ' => Letter('B'),
        'మ' => Letter('M'),
        'య' => Letter('Y'),
        'ర' => Letter('R'),
        'ల' => Letter('L'),
        'వ' => Letter('V'),
        'శ' | 'ష' | 'స' => Letter('S'),
        'హ' => Letter('H'),

        // Anusvara and visarga
        'ం' => Letter('M'),
        'ః' => Letter('H'),

        '్' => Silent,

        _ => return None,
    })
}

// The Gujarati table carries base vowels and consonants only; matras and
// the virama have no entries and fall through to the plain-character path.
fn gujarati(c: char) -> Option<CharMapping> {
    use CharMapping::Letter;
    Some(match c {
        'અ' | 'આ' | 'ઐ' => Letter('A'),
        'ઇ' | 'ઈ' => Letter('I'),
        'ઉ' | 'ઊ' => Letter('U'),
        'એ' => Letter('E'),
        'ઓ' | 'ઔ' => Letter('O'),

        'ક' | 'ખ' => Letter('K'),
        'ગ' | 'ઘ' => Letter('G'),
        'ઙ' | 'ઞ' | 'ણ' | 'ન' => Letter('N'),
        'ચ' | 'છ' => Letter('C'),
        'જ' | 'ઝ' => Letter('J'),
        'ટ' | 'ઠ' | 'ત' | 'થ' => Letter('T'),
        'ડ' | 'ઢ' | 'દ' | 'ધ' => Letter('D'),
        'પ' | 'ફ' => Letter('P'),
        'બ' | 'ભ' => Letter('B'),
        'મ' => Letter('M'),
        'ય' => Letter('Y'),
        'ર' => Letter('R'),
        'લ' => Letter('L'),
        'વ' => Letter('V'),
        'શ' | 'ષ' | 'સ' => Letter('S'),
        'હ' => Letter('H'),

        _ => return None,
    })
}
