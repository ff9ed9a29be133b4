//! Part-of-speech and parsing codes

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::GntError;

/// Two-character part-of-speech code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Adjective,
    Conjunction,
    Adverb,
    Interjection,
    Noun,
    Preposition,
    DefiniteArticle,
    DemonstrativePronoun,
    InterrogativeIndefinitePronoun,
    PersonalPronoun,
    RelativePronoun,
    Verb,
    Particle,
}

impl PartOfSpeech {
    pub fn code(&self) -> &'static str {
        match self {
            PartOfSpeech::Adjective => "A-",
            PartOfSpeech::Conjunction => "C-",
            PartOfSpeech::Adverb => "D-",
            PartOfSpeech::Interjection => "I-",
            PartOfSpeech::Noun => "N-",
            PartOfSpeech::Preposition => "P-",
            PartOfSpeech::DefiniteArticle => "RA",
            PartOfSpeech::DemonstrativePronoun => "RD",
            PartOfSpeech::InterrogativeIndefinitePronoun => "RI",
            PartOfSpeech::PersonalPronoun => "RP",
            PartOfSpeech::RelativePronoun => "RR",
            PartOfSpeech::Verb => "V-",
            PartOfSpeech::Particle => "X-",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Interjection => "interjection",
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::DefiniteArticle => "article",
            PartOfSpeech::DemonstrativePronoun => "demonstrative pronoun",
            PartOfSpeech::InterrogativeIndefinitePronoun => "interrogative/indefinite pronoun",
            PartOfSpeech::PersonalPronoun => "personal pronoun",
            PartOfSpeech::RelativePronoun => "relative pronoun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Particle => "particle",
        }
    }
}

impl FromStr for PartOfSpeech {
    type Err = GntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A-" => Ok(PartOfSpeech::Adjective),
            "C-" => Ok(PartOfSpeech::Conjunction),
            "D-" => Ok(PartOfSpeech::Adverb),
            "I-" => Ok(PartOfSpeech::Interjection),
            "N-" => Ok(PartOfSpeech::Noun),
            "P-" => Ok(PartOfSpeech::Preposition),
            "RA" => Ok(PartOfSpeech::DefiniteArticle),
            "RD" => Ok(PartOfSpeech::DemonstrativePronoun),
            "RI" => Ok(PartOfSpeech::InterrogativeIndefinitePronoun),
            "RP" => Ok(PartOfSpeech::PersonalPronoun),
            "RR" => Ok(PartOfSpeech::RelativePronoun),
            "V-" => Ok(PartOfSpeech::Verb),
            "X-" => Ok(PartOfSpeech::Particle),
            _ => Err(GntError::MalformedText(format!("unknown part of speech: {}", s))),
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for PartOfSpeech {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// Placeholder for a slot that does not apply to the word
const NOT_APPLICABLE: char = '-';

/// Eight-slot parsing code.
///
/// Slots hold the raw code characters; `-` marks a slot that does not apply
/// (e.g. case for a finite verb).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parsing {
    pub person: char,
    pub tense: char,
    pub voice: char,
    pub mood: char,
    pub case: char,
    pub number: char,
    pub gender: char,
    pub degree: char,
}

impl Parsing {
    fn slots(&self) -> [char; 8] {
        [
            self.person,
            self.tense,
            self.voice,
            self.mood,
            self.case,
            self.number,
            self.gender,
            self.degree,
        ]
    }

    /// True when every slot is `-` (particles, conjunctions, ...)
    pub fn is_empty(&self) -> bool {
        self.slots().iter().all(|&c| c == NOT_APPLICABLE)
    }

    /// Human description of the applicable slots, e.g. "3rd imperfect active indicative singular"
    pub fn describe(&self) -> String {
        let labels = [
            match self.person {
                '1' => "1st",
                '2' => "2nd",
                '3' => "3rd",
                _ => "",
            },
            match self.tense {
                'P' => "present",
                'I' => "imperfect",
                'F' => "future",
                'A' => "aorist",
                'X' => "perfect",
                'Y' => "pluperfect",
                _ => "",
            },
            match self.voice {
                'A' => "active",
                'M' => "middle",
                'P' => "passive",
                _ => "",
            },
            match self.mood {
                'I' => "indicative",
                'D' => "imperative",
                'S' => "subjunctive",
                'O' => "optative",
                'N' => "infinitive",
                'P' => "participle",
                _ => "",
            },
            match self.case {
                'N' => "nominative",
                'G' => "genitive",
                'D' => "dative",
                'A' => "accusative",
                'V' => "vocative",
                _ => "",
            },
            match self.number {
                'S' => "singular",
                'P' => "plural",
                _ => "",
            },
            match self.gender {
                'M' => "masculine",
                'F' => "feminine",
                'N' => "neuter",
                _ => "",
            },
            match self.degree {
                'C' => "comparative",
                'S' => "superlative",
                _ => "",
            },
        ];

        labels
            .iter()
            .filter(|l| !l.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl FromStr for Parsing {
    type Err = GntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        match chars.as_slice() {
            &[person, tense, voice, mood, case, number, gender, degree] => Ok(Parsing {
                person,
                tense,
                voice,
                mood,
                case,
                number,
                gender,
                degree,
            }),
            _ => Err(GntError::MalformedText(format!("parsing code must have 8 slots: {}", s))),
        }
    }
}

impl fmt::Display for Parsing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.slots().iter().try_for_each(|c| write!(f, "{}", c))
    }
}

impl Serialize for Parsing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
