//! Rule-based English lemmatization
//!
//! Lemmas are lowercase. A table of irregular forms is consulted first,
//! then inflectional suffixes (`-ies`, `-es`, `-s`, `-ing`, `-ed`) are
//! stripped with consonant undoubling and silent-e restoration.

use rustc_hash::FxHashMap;

use crate::errors::Result;
use crate::pipeline::traits::{Component, Stage};
use crate::types::Document;

const IRREGULAR: &[(&str, &str)] = &[
    // be / have / do
    ("am", "be"),
    ("are", "be"),
    ("is", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("'m", "be"),
    ("'re", "be"),
    ("has", "have"),
    ("had", "have"),
    ("'ve", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("doing", "do"),
    ("n't", "not"),
    ("'ll", "will"),
    ("'d", "would"),
    ("ca", "can"),
    ("wo", "will"),
    // strong verbs
    ("ran", "run"),
    ("went", "go"),
    ("gone", "go"),
    ("goes", "go"),
    ("going", "go"),
    ("saw", "see"),
    ("seen", "see"),
    ("took", "take"),
    ("taken", "take"),
    ("made", "make"),
    ("came", "come"),
    ("became", "become"),
    ("becoming", "become"),
    ("got", "get"),
    ("gave", "give"),
    ("given", "give"),
    ("knew", "know"),
    ("known", "know"),
    ("thought", "think"),
    ("brought", "bring"),
    ("bought", "buy"),
    ("found", "find"),
    ("told", "tell"),
    ("said", "say"),
    ("wrote", "write"),
    ("written", "write"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("began", "begin"),
    ("begun", "begin"),
    ("felt", "feel"),
    ("left", "leave"),
    ("kept", "keep"),
    ("slept", "sleep"),
    ("stood", "stand"),
    ("sat", "sit"),
    ("sang", "sing"),
    ("sung", "sing"),
    ("rang", "ring"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("flew", "fly"),
    ("flown", "fly"),
    ("drove", "drive"),
    ("driven", "drive"),
    // short or -ee stems the suffix rules cannot see
    ("used", "use"),
    ("using", "use"),
    ("died", "die"),
    ("dying", "die"),
    ("lied", "lie"),
    ("lying", "lie"),
    ("tied", "tie"),
    ("tying", "tie"),
    ("agreed", "agree"),
    ("freed", "free"),
    ("guaranteed", "guarantee"),
    // irregular plurals
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("people", "person"),
    ("data", "datum"),
    ("shoes", "shoe"),
    ("toes", "toe"),
    ("buses", "bus"),
    ("movies", "movie"),
    ("cookies", "cookie"),
    // comparatives
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
    // look inflected but are not
    ("morning", "morning"),
    ("evening", "evening"),
    ("nothing", "nothing"),
    ("something", "something"),
    ("anything", "anything"),
    ("everything", "everything"),
    ("during", "during"),
    ("ceiling", "ceiling"),
    ("hundred", "hundred"),
    ("sacred", "sacred"),
    ("naked", "naked"),
    ("wicked", "wicked"),
    ("news", "news"),
    ("series", "series"),
    ("species", "species"),
    ("physics", "physics"),
    ("mathematics", "mathematics"),
    ("economics", "economics"),
    ("politics", "politics"),
    ("always", "always"),
    ("perhaps", "perhaps"),
    ("whereas", "whereas"),
    ("lens", "lens"),
    ("bias", "bias"),
    ("atlas", "atlas"),
    ("canvas", "canvas"),
    ("christmas", "christmas"),
];

/// Stripped stems the silent-e rules get wrong
const STEM_FIXES: &[(&str, &str)] = &[
    ("creat", "create"),
    ("recreat", "recreate"),
    ("rang", "range"),
    ("guid", "guide"),
    ("persuad", "persuade"),
    ("ignor", "ignore"),
    ("explor", "explore"),
    ("restor", "restore"),
    ("ador", "adore"),
    ("complet", "complete"),
    ("delet", "delete"),
    ("compet", "compete"),
    ("promot", "promote"),
    ("devot", "devote"),
    ("postpon", "postpone"),
    ("welcom", "welcome"),
    ("elop", "elope"),
    ("interfer", "interfere"),
    ("becom", "become"),
];

/// Final vowel-consonant pairs of longer stems that drop a silent `e`
/// (`decid-`, `combin-`, `measur-`, `comput-`, `assum-`, `escap-`, ...)
const SILENT_E_ENDINGS: &[&str] = &[
    "ad", "ed", "id", "od", "ud", "in", "ar", "ir", "ur", "ut", "am", "um", "il", "ol", "ul", "ib",
    "ub", "ap", "ak", "ek", "ik", "ok", "uk",
];

/// Rule-based English lemmatizer
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    exceptions: FxHashMap<&'static str, &'static str>,
    stem_fixes: FxHashMap<&'static str, &'static str>,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer {
    pub fn new() -> Self {
        Self {
            exceptions: IRREGULAR.iter().copied().collect(),
            stem_fixes: STEM_FIXES.iter().copied().collect(),
        }
    }

    /// Lemmatize a single surface form
    pub fn lemmatize(&self, word: &str) -> String {
        let lower = word.to_lowercase().replace('\u{2019}', "'");

        if let Some(lemma) = self.exceptions.get(lower.as_str()) {
            return (*lemma).to_string();
        }

        // Numbers, clitics, and mixed tokens are left alone
        if !lower.chars().all(char::is_alphabetic) || lower.chars().count() <= 3 {
            return lower;
        }

        let len = lower.len();

        if lower.ends_with("ies") && len > 4 {
            return format!("{}y", &lower[..len - 3]);
        }
        if lower.ends_with("es") {
            let stem = &lower[..len - 2];
            if stem.ends_with("ss")
                || stem.ends_with("sh")
                || stem.ends_with("ch")
                || stem.ends_with('x')
                || stem.ends_with('z')
                || stem.ends_with('o')
            {
                return stem.to_string();
            }
        }
        if lower.ends_with('s')
            && !lower.ends_with("ss")
            && !lower.ends_with("us")
            && !lower.ends_with("is")
        {
            return lower[..len - 1].to_string();
        }
        if lower.ends_with("ing") && len > 5 {
            let stem = &lower[..len - 3];
            if has_vowel(stem) {
                return self.restore_stem(stem);
            }
        }
        if lower.ends_with("ied") && len > 4 {
            return format!("{}y", &lower[..len - 3]);
        }
        // need, proceed, speed
        if lower.ends_with("ed") && !lower.ends_with("eed") && len > 4 {
            let stem = &lower[..len - 2];
            if has_vowel(stem) {
                return self.restore_stem(stem);
            }
        }

        lower
    }

    /// Repair a stem left behind by stripping `-ing` / `-ed`
    fn restore_stem(&self, stem: &str) -> String {
        if let Some(base) = self.stem_fixes.get(stem) {
            return (*base).to_string();
        }

        let chars: Vec<char> = stem.chars().collect();
        let n = chars.len();
        if n < 2 {
            return stem.to_string();
        }

        // running -> run, but falling -> fall
        if chars[n - 1] == chars[n - 2]
            && !is_vowel(chars[n - 1])
            && !matches!(chars[n - 1], 'l' | 's' | 'z')
        {
            return chars[..n - 1].iter().collect();
        }

        if needs_silent_e(stem, &chars) {
            format!("{}e", stem)
        } else {
            stem.to_string()
        }
    }
}

impl Component for Lemmatizer {
    fn stage(&self) -> Stage {
        Stage::Lemmatizer
    }

    fn process(&self, doc: &mut Document) -> Result<()> {
        for token in &mut doc.tokens {
            token.lemma = self.lemmatize(&token.text);
        }
        Ok(())
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn has_vowel(stem: &str) -> bool {
    stem.chars().any(|c| is_vowel(c) || c == 'y')
}

/// Vowel test in context: `u` after `q` is a consonant, `y` after a
/// consonant is a vowel.
fn vowel_at(chars: &[char], i: usize) -> bool {
    match chars[i] {
        'u' => i == 0 || chars[i - 1] != 'q',
        'y' => i > 0 && !vowel_at(chars, i - 1),
        c => is_vowel(c),
    }
}

fn vowel_groups(chars: &[char]) -> usize {
    (0..chars.len())
        .filter(|&i| vowel_at(chars, i) && (i == 0 || !vowel_at(chars, i - 1)))
        .count()
}

/// Stem ends consonant, single vowel, consonant (not `w`, `x`, `y`)
fn ends_cvc(chars: &[char]) -> bool {
    let n = chars.len();
    n >= 3
        && !vowel_at(chars, n - 1)
        && vowel_at(chars, n - 2)
        && !vowel_at(chars, n - 3)
        && !matches!(chars[n - 1], 'w' | 'x' | 'y')
}

fn needs_silent_e(stem: &str, chars: &[char]) -> bool {
    let n = chars.len();
    let last = chars[n - 1];
    let prev = chars[n - 2];

    match last {
        // arrived, produced, amazed, continued
        'v' | 'c' | 'z' | 'u' => return last != prev,
        // caused, closed, nursed; not focused or biased
        's' => return prev != 's' && !stem.ends_with("ocus") && !stem.ends_with("ias"),
        'g' if prev == 'n' => {
            // changed, challenged, plunged; not sang, hanged, longed
            return n >= 3
                && match chars[n - 3] {
                    'e' | 'u' => true,
                    'a' => n >= 5,
                    _ => false,
                };
        }
        // charged, judged, managed
        'g' => return true,
        // handled, struggled; not curled or howled
        'l' if !vowel_at(chars, n - 2) => return !matches!(prev, 'l' | 'r' | 'w'),
        _ => {}
    }

    // related, located; not treated or heated
    if stem.ends_with("at") {
        return n >= 3 && !vowel_at(chars, n - 3);
    }

    if !ends_cvc(chars) {
        return false;
    }
    // Single-syllable stems would have doubled their final consonant
    if vowel_groups(chars) == 1 {
        return true;
    }

    let tail: String = chars[n - 2..].iter().collect();
    if tail == "it" {
        // invited, united, excited; not visited or limited
        return matches!(chars[n - 3], 'c' | 'n' | 'v');
    }
    SILENT_E_ENDINGS.contains(&tail.as_str())
}
