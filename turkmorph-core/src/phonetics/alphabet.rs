//! Turkish letter classification and consonant alternation tables

/// Phonological classification of one letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurkicLetter {
    /// Lowercase form of the letter
    pub ch: char,
    /// Vowel or consonant
    pub vowel: bool,
    /// Front vowel
    pub frontal: bool,
    /// Rounded vowel
    pub rounded: bool,
    /// Voiceless consonant
    pub voiceless: bool,
    /// Continuant consonant (not a stop)
    pub continuant: bool,
}

impl TurkicLetter {
    const fn vowel(ch: char, frontal: bool, rounded: bool) -> Self {
        Self {
            ch,
            vowel: true,
            frontal,
            rounded,
            voiceless: false,
            continuant: false,
        }
    }

    const fn consonant(ch: char, voiceless: bool, continuant: bool) -> Self {
        Self {
            ch,
            vowel: false,
            frontal: false,
            rounded: false,
            voiceless,
            continuant,
        }
    }

    /// A voiceless consonant that is not a continuant
    pub fn is_voiceless_stop(&self) -> bool {
        !self.vowel && self.voiceless && !self.continuant
    }
}

/// Lowercase a character with the dotted/dotless I distinction
pub fn to_lower(c: char) -> char {
    match c {
        'I' => 'ı',
        'İ' => 'i',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

/// Uppercase a character with the dotted/dotless I distinction
pub fn to_upper(c: char) -> char {
    match c {
        'i' => 'İ',
        'ı' => 'I',
        _ => c.to_uppercase().next().unwrap_or(c),
    }
}

/// Lowercase a whole string the Turkish way
pub fn lowercase(s: &str) -> String {
    s.chars().map(to_lower).collect()
}

/// Classify a character; characters outside the alphabet carry no flags
pub fn letter(c: char) -> TurkicLetter {
    let ch = to_lower(c);
    match ch {
        'a' => TurkicLetter::vowel(ch, false, false),
        'e' => TurkicLetter::vowel(ch, true, false),
        'ı' => TurkicLetter::vowel(ch, false, false),
        'i' => TurkicLetter::vowel(ch, true, false),
        'o' => TurkicLetter::vowel(ch, false, true),
        'ö' => TurkicLetter::vowel(ch, true, true),
        'u' => TurkicLetter::vowel(ch, false, true),
        'ü' => TurkicLetter::vowel(ch, true, true),
        'â' => TurkicLetter::vowel(ch, false, false),
        'î' => TurkicLetter::vowel(ch, true, false),
        'û' => TurkicLetter::vowel(ch, false, true),

        'ç' | 'k' | 'p' | 't' => TurkicLetter::consonant(ch, true, false),
        'f' | 'h' | 's' | 'ş' => TurkicLetter::consonant(ch, true, true),
        'ğ' | 'j' | 'l' | 'm' | 'n' | 'r' | 'v' | 'y' | 'z' => {
            TurkicLetter::consonant(ch, false, true)
        }
        'b' | 'c' | 'd' | 'g' => TurkicLetter::consonant(ch, false, false),
        'q' | 'w' | 'x' => TurkicLetter::consonant(ch, false, false),

        _ => TurkicLetter {
            ch,
            vowel: false,
            frontal: false,
            rounded: false,
            voiceless: false,
            continuant: false,
        },
    }
}

/// Whether the character is a Turkish vowel
pub fn is_vowel(c: char) -> bool {
    letter(c).vowel
}

/// Voiced counterpart used when a vowel-initial suffix follows (kitap → kitab)
pub fn voice(c: char) -> Option<char> {
    match to_lower(c) {
        'p' => Some('b'),
        'ç' => Some('c'),
        't' => Some('d'),
        'g' => Some('ğ'),
        'k' => Some('ğ'),
        _ => None,
    }
}

/// Voiceless counterpart used after a voiceless letter (dA → tA)
pub fn devoice(c: char) -> Option<char> {
    match to_lower(c) {
        'b' => Some('p'),
        'c' => Some('ç'),
        'd' => Some('t'),
        'g' => Some('k'),
        _ => None,
    }
}

/// Letters whose voicing could have produced `c`
pub fn inverse_voice(c: char) -> &'static [char] {
    match to_lower(c) {
        'b' => &['p'],
        'c' => &['ç'],
        'd' => &['t'],
        'g' => &['k'],
        'ğ' => &['g', 'k'],
        _ => &[],
    }
}

/// Whether `voice` has an entry for the character
pub fn is_voicable(c: char) -> bool {
    voice(c).is_some()
}

/// Whether `devoice` has an entry for the character
pub fn is_devoicable(c: char) -> bool {
    devoice(c).is_some()
}
