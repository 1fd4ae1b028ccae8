// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::Deserialize;
use serde::Serialize;

/// The letters a choice may be labelled with.
pub const OPTION_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// A single multiple-choice question.
///
/// Once built, a question is read-only: the fields are private and only
/// exposed through accessors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Question {
    /// The item number as written in the source document.
    id: String,
    /// The prompt. Multiple source lines are joined with `\n`.
    content: String,
    /// Choices in document order, each formatted as `"A. text"`.
    options: Vec<String>,
    /// One or more letters naming the correct choice(s), e.g. `"B"` or `"AC"`.
    answer: String,
    /// Free-text rationale, possibly empty.
    explanation: String,
}

impl Question {
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            options,
            answer: answer.into(),
            explanation: explanation.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Whether picking `letter` counts as correct.
    ///
    /// This is a containment test against the answer string, ignoring
    /// case: for a multi-letter answer like `"AC"`, picking either `A` or
    /// `C` alone is accepted.
    pub fn accepts(&self, letter: char) -> bool {
        let letter = letter.to_ascii_uppercase();
        self.answer
            .chars()
            .any(|c| c.to_ascii_uppercase() == letter)
    }

    /// The leading letter of each option, in order.
    pub fn option_letters(&self) -> Vec<char> {
        self.options
            .iter()
            .filter_map(|opt| opt.chars().next())
            .collect()
    }

    /// Answer letters (uppercased) that name no option of this question.
    pub fn unmatched_answer_letters(&self) -> Vec<char> {
        let letters = self.option_letters();
        let mut unmatched = Vec::new();
        for c in self.answer.chars().map(|c| c.to_ascii_uppercase()) {
            if !letters.contains(&c) && !unmatched.contains(&c) {
                unmatched.push(c);
            }
        }
        unmatched
    }
}
