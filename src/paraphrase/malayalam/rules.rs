//! Closed word-groups whose members can replace each other grammatically but
//! change the meaning of the sentence.

use crate::error::{ParagenError, Result};

/// Object forms of personal pronouns: you, me, him, her, them, everyone, us.
pub const PRONOUN_OBJECT_FORMS: &[&str] = &[
    "നിങ്ങളെ",
    "എന്നെ",
    "അവനെ",
    "അവളെ",
    "അവരെ",
    "എല്ലാവരെയും",
    "ഞങ്ങളെ",
];

/// Subject forms of personal pronouns: I, he, she, they, he (formal), we,
/// we (inclusive).
pub const PRONOUN_SUBJECT_FORMS: &[&str] = &[
    "ഞാൻ",
    "അവൻ",
    "അവൾ",
    "അവർ",
    "അയാൾ",
    "ഞങ്ങൾ",
    "നമ്മൾ",
];

/// Day after tomorrow, tomorrow, morning, night, next week, next month,
/// next year.
pub const FUTURE_TIME_ADVERBS: &[&str] = &[
    "മറ്റന്നാൾ",
    "നാളെ",
    "രാവിലെ",
    "രാത്രി",
    "അടുത്ത ആഴ്ച",
    "അടുത്ത മാസം",
    "അടുത്ത വര്ഷം",
];

/// Yesterday, day before yesterday, last week, last month, last year.
pub const PAST_TIME_ADVERBS: &[&str] = &[
    "ഇന്നലെ",
    "മിനിയാന്ന്",
    "കഴിഞ്ഞ ആഴ്ച",
    "കഴിഞ്ഞ മാസം",
    "കഴിഞ്ഞ വര്ഷം",
];

/// A named closed word-group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSet {
    name: String,
    members: Vec<String>,
}

impl RuleSet {
    /// Create a rule set. Duplicate members are dropped, order is kept.
    pub fn new<N, I, S>(name: N, members: I) -> Result<Self>
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let mut unique: Vec<String> = Vec::new();
        for member in members {
            let member = member.into();
            if !unique.contains(&member) {
                unique.push(member);
            }
        }
        if unique.len() < 2 {
            return Err(ParagenError::config(format!(
                "rule set '{name}' needs at least two distinct members"
            )));
        }
        Ok(Self {
            name,
            members: unique,
        })
    }

    fn from_static(name: &str, members: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn contains(&self, word: &str) -> bool {
        self.members.iter().any(|m| m == word)
    }

    /// Every member except `word`.
    pub fn alternatives<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.members
            .iter()
            .map(String::as_str)
            .filter(move |m| *m != word)
    }
}

/// The full table of rule sets consulted by
/// [`super::MalayalamNegativeGenerator`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NonSynonymRules {
    sets: Vec<RuleSet>,
}

impl Default for NonSynonymRules {
    fn default() -> Self {
        Self {
            sets: vec![
                RuleSet::from_static("pronoun_object", PRONOUN_OBJECT_FORMS),
                RuleSet::from_static("pronoun_subject", PRONOUN_SUBJECT_FORMS),
                RuleSet::from_static("future_time", FUTURE_TIME_ADVERBS),
                RuleSet::from_static("past_time", PAST_TIME_ADVERBS),
            ],
        }
    }
}

impl NonSynonymRules {
    /// Append an extra rule set after the built-in ones.
    pub fn with_rule_set(mut self, set: RuleSet) -> Self {
        self.sets.push(set);
        self
    }

    pub fn sets(&self) -> &[RuleSet] {
        &self.sets
    }

    /// All rule sets containing `word`. Every match contributes variants.
    pub fn matching<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'a RuleSet> + 'a {
        self.sets.iter().filter(move |set| set.contains(word))
    }
}
