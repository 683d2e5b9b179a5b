//! Frequency-based correction of Dutch `-d`/`-t` participle endings.
//!
//! Every distinct value ending in `d` or `t` is compared against its
//! counterpart with the other ending. When the counterpart occurs more often
//! in the same column it is taken to be the conventional spelling and the
//! value is rewritten to it. The [`CorrectionLists`] override that evidence:
//! ignored words are never rewritten, and a counterpart on the correct list
//! always wins.
//!
//! Planning and substitution are separate pure steps. [`plan_replacements`]
//! decides, [`apply_replacements`] rewrites a column in one pass.

use std::collections::BTreeMap;

use log::info;
use serde::Serialize;

use crate::{frequency::FrequencyTable, lists::CorrectionLists};

/// Original form mapped to the form it should be rewritten to.
pub type Replacements = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Reason {
    /// The counterpart occurs strictly more often than the word.
    Frequency,
    /// The counterpart is on the correct list.
    CorrectList,
}

impl Reason {
    pub fn as_str(self) -> &'static str {
        match self {
            Reason::Frequency => "frequency",
            Reason::CorrectList => "correct-list",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub word: String,
    pub replacement: String,
    pub word_count: usize,
    pub replacement_count: usize,
    pub reason: Reason,
}

/// Returns `word` with a final `d` swapped for `t` or vice versa.
///
/// Words ending in anything else, and words too short to leave a stem, have
/// no counterpart.
pub fn alternative_form(word: &str) -> Option<String> {
    let mut chars = word.chars();
    let swapped = match chars.next_back()? {
        'd' => 't',
        't' => 'd',
        _ => return None,
    };
    let stem = chars.as_str();
    if stem.is_empty() {
        return None;
    }
    let mut alternative = String::with_capacity(word.len());
    alternative.push_str(stem);
    alternative.push(swapped);
    Some(alternative)
}

/// Decides whether a single distinct value should be rewritten.
pub fn decide(word: &str, table: &FrequencyTable, lists: &CorrectionLists) -> Option<Decision> {
    if lists.is_ignored(word) || lists.is_correct(word) {
        return None;
    }
    let alternative = alternative_form(word)?;
    let word_count = table.count(word);
    let replacement_count = table.count(&alternative);
    let certified = lists.is_correct(&alternative);

    if replacement_count == 0 && !certified {
        return None;
    }

    let reason = if certified {
        Reason::CorrectList
    } else if replacement_count > word_count {
        Reason::Frequency
    } else {
        return None;
    };

    Some(Decision {
        word: word.to_string(),
        replacement: alternative,
        word_count,
        replacement_count,
        reason,
    })
}

/// Decides every distinct value of `table`, in first-seen order.
pub fn plan_decisions(table: &FrequencyTable, lists: &CorrectionLists) -> Vec<Decision> {
    let mut decisions = Vec::new();
    for word in table.distinct() {
        if let Some(decision) = decide(word, table, lists) {
            info!(
                "Will replace '{}' with '{}'",
                decision.word, decision.replacement
            );
            decisions.push(decision);
        }
    }
    decisions
}

/// Computes the replacement mapping for a column of values.
pub fn plan_replacements<I, S>(values: I, lists: &CorrectionLists) -> Replacements
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let table = FrequencyTable::from_values(values);
    into_replacements(plan_decisions(&table, lists))
}

pub fn into_replacements(decisions: Vec<Decision>) -> Replacements {
    decisions
        .into_iter()
        .map(|decision| (decision.word, decision.replacement))
        .collect()
}

/// Looks up a single value, returning it unchanged when no replacement applies.
pub fn replace_value<'a>(value: &'a str, replacements: &'a Replacements) -> &'a str {
    replacements
        .get(value)
        .map(String::as_str)
        .unwrap_or(value)
}

/// Rewrites every value that is a key of `replacements`.
///
/// Each value is looked up once against the original mapping, so a
/// replacement that happens to equal another key is not rewritten again.
pub fn apply_replacements<S: AsRef<str>>(values: &[S], replacements: &Replacements) -> Vec<String> {
    values
        .iter()
        .map(|value| replace_value(value.as_ref(), replacements).to_string())
        .collect()
}
