//! Locale-aware string collation for Russian and English text.
//!
//! Three comparison levels, in order:
//! 1. base letters, case and accents folded (Cyrillic before Latin, digits
//!    and punctuation before both)
//! 2. accents (`е` < `ё`, `e` < `é`)
//! 3. case, uppercase first (`A` < `a`)

use std::cmp::Ordering;

/// Script/character class, in collation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Group {
    Space,
    Punctuation,
    Digit,
    Cyrillic,
    Latin,
    Other,
}

/// Precomputed sort key for one string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollationKey {
    primary: Vec<(Group, char)>,
    secondary: Vec<u8>,
    tertiary: Vec<u8>,
}

impl CollationKey {
    pub fn new(s: &str) -> Self {
        let mut primary = Vec::with_capacity(s.len());
        let mut secondary = Vec::with_capacity(s.len());
        let mut tertiary = Vec::with_capacity(s.len());

        for c in s.chars() {
            let lower = c.to_lowercase().next().unwrap_or(c);
            let (base, accented) = fold_accent(lower);
            primary.push((group_of(base), base));
            secondary.push(u8::from(accented));
            tertiary.push(if c.is_uppercase() { 0 } else { 1 });
        }

        Self {
            primary,
            secondary,
            tertiary,
        }
    }
}

impl Ord for CollationKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.primary
            .cmp(&other.primary)
            .then_with(|| self.secondary.cmp(&other.secondary))
            .then_with(|| self.tertiary.cmp(&other.tertiary))
    }
}

impl PartialOrd for CollationKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two strings under the collation.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

fn group_of(c: char) -> Group {
    match c {
        c if c.is_whitespace() => Group::Space,
        c if c.is_numeric() => Group::Digit,
        '\u{0400}'..='\u{04FF}' => Group::Cyrillic,
        c if c.is_ascii_alphabetic() => Group::Latin,
        '\u{00C0}'..='\u{024F}' if c.is_alphabetic() => Group::Latin,
        c if c.is_alphanumeric() => Group::Other,
        _ => Group::Punctuation,
    }
}

/// Map a lowercase letter to its base letter, flagging whether it carried
/// an accent.
fn fold_accent(c: char) -> (char, bool) {
    let base = match c {
        'ё' => 'е',
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' => 'i',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' => 'u',
        'ý' | 'ÿ' => 'y',
        'š' | 'ś' => 's',
        'ž' | 'ź' | 'ż' => 'z',
        _ => return (c, false),
    };
    (base, true)
}
