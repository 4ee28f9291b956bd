//! Feature tag translation
//!
//! SynTagRus annotates words with Russian morphological tags (`ЕД`, `РОД`, ...)
//! and Russian relation names (`предик`, `1-компл`, ...). This module maps
//! both onto short canonical tags. Unmapped tags pass through unchanged.

use rustc_hash::FxHashSet;

/// Set of canonical morphological tags attached to a word
pub type Features = FxHashSet<String>;

/// Part of speech used when a word carries no `FEAT` attribute
pub const UNKNOWN: &str = "UNK";

pub const PARTICIPLE: &str = "adjp";
pub const ADVERBIAL_PARTICIPLE: &str = "advp";
pub const INFINITIVE: &str = "inf";

pub const VERBAL_ADJECTIVE: &str = "VADJ";
pub const VERBAL_ADVERB: &str = "VADV";
pub const VERBAL_INFINITIVE: &str = "VINF";

/// Verbal forms that replace the part of speech, checked in this order
const POS_OVERRIDES: [(&str, &str); 3] = [
    (PARTICIPLE, VERBAL_ADJECTIVE),
    (ADVERBIAL_PARTICIPLE, VERBAL_ADVERB),
    (INFINITIVE, VERBAL_INFINITIVE),
];

/// Canonical form of a morphological tag
pub fn translate_feature(tag: &str) -> &str {
    match tag {
        // number
        "ЕД" => "sg",
        "МН" => "pl",
        // gender
        "ЖЕН" => "f",
        "МУЖ" => "m",
        "СРЕД" => "n",
        // case
        "ИМ" => "nom",
        "РОД" => "gen",
        "ДАТ" => "dat",
        "ВИН" => "acc",
        "ТВОР" => "ins",
        "ПР" => "prep",
        "ПАРТ" => "gen2",
        "МЕСТН" => "loc",
        // animacy
        "ОД" => "anim",
        "НЕОД" => "inan",
        // verb form
        "ИНФ" => INFINITIVE,
        "ПРИЧ" => PARTICIPLE,
        "ДЕЕПР" => ADVERBIAL_PARTICIPLE,
        // tense
        "ПРОШ" => "pst",
        "НЕПРОШ" => "npst",
        "НАСТ" => "prs",
        // person
        "1-Л" => "1p",
        "2-Л" => "2p",
        "3-Л" => "3p",
        // mood
        "ИЗЪЯВ" => "real",
        "ПОВ" => "imp",
        "КР" => "shrt",
        // aspect and voice
        "НЕСОВ" => "imperf",
        "СОВ" => "perf",
        "СТРАД" => "pass",
        // misc
        "СЛ" => "compl",
        "СМЯГ" => "soft",
        // degree
        "СРАВ" => "comp",
        "ПРЕВ" => "supl",
        _ => tag,
    }
}

/// Canonical form of a dependency relation
pub fn translate_link(tag: &str) -> &str {
    match tag {
        "предик" => "subj",
        "1-компл" | "2-компл" | "3-компл" | "4-компл" | "5-компл" => "obj",
        "опред" => "amod",
        "предл" => "prep",
        "обст" => "pobj",
        _ => tag,
    }
}

/// Split a raw tag list into a part of speech and a feature set.
///
/// Every tag is translated first. The first tag becomes the part of speech
/// and the rest become features, except that a participle, adverbial
/// participle or infinitive marker replaces the part of speech with the
/// matching verbal tag and is dropped from the features. When several
/// markers are present the last override in that order wins.
pub fn refine_pos<'a, I>(tags: I) -> (String, Features)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tags = tags.into_iter().map(translate_feature);
    let mut pos = tags.next().unwrap_or(UNKNOWN).to_string();
    let mut features: Features = tags.map(str::to_string).collect();

    for (marker, verbal) in POS_OVERRIDES {
        if features.remove(marker) {
            pos = verbal.to_string();
        }
    }

    (pos, features)
}
