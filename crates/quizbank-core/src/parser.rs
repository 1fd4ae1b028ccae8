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

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Fallible;
use crate::labels::Labels;
use crate::types::question::Question;

/// A leading item number, then an ASCII or full-width period.
static QUESTION_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(\d+)[.．]\s*(.*)").unwrap());

/// A choice letter followed by a period, an ideographic comma, or a space.
static CHOICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^([ABCD])(?:[.、]|\s)\s*(.*)").unwrap());

/// Optional run of dashes allowed before a label.
const DASH_PREFIX: &str = r"(?:[-—]{2,}\s*)?";

/// A colon, ASCII or full-width.
const COLON: &str = r"[:：]";

static DEFAULT_EXTRACTOR: LazyLock<Extractor> =
    LazyLock::new(|| Extractor::new(&Labels::default()).expect("default labels are valid"));

/// Extract questions using the default labels.
pub fn extract_questions<I, S>(lines: I) -> Vec<Question>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DEFAULT_EXTRACTOR.extract(lines)
}

/// Turns a sequence of paragraphs into questions.
///
/// Extraction never fails: lines that match nothing are folded into the
/// question being read, or dropped if no question has started yet.
pub struct Extractor {
    answer: Regex,
    explanation: Regex,
}

/// The in-progress question.
struct Draft {
    id: String,
    content: String,
    options: Vec<String>,
    answer: String,
    explanation: String,
}

impl Draft {
    fn new(id: String, content: String) -> Self {
        Self {
            id,
            content,
            options: Vec::new(),
            answer: String::new(),
            explanation: String::new(),
        }
    }

    /// Identifies the draft in log messages.
    fn summary(&self) -> String {
        format!(
            "question {} ({} options, answer {:?})",
            self.id,
            self.options.len(),
            self.answer
        )
    }

    fn finish(self) -> Option<Question> {
        if self.content.is_empty() {
            log::warn!("Dropping {}: it has no prompt text.", self.summary());
            return None;
        }
        Some(Question::new(
            self.id,
            self.content,
            self.options,
            self.answer,
            self.explanation,
        ))
    }
}

enum State {
    /// No question has started yet.
    Start,
    /// Reading a question.
    Reading(Draft),
}

enum Line {
    /// Empty after trimming.
    Blank,
    /// A line like `12. <text>`.
    StartQuestion { id: String, text: String },
    /// A line like `B、<text>`.
    Choice { letter: char, text: String },
    /// A line like `正确答案：AC`.
    Answer(String),
    /// A line like `答案解析：<text>`.
    Explanation(String),
    /// Any other line.
    Text(String),
}

impl Extractor {
    pub fn new(labels: &Labels) -> Fallible<Self> {
        labels.validate()?;
        let answer = Regex::new(&format!(
            r"^{DASH_PREFIX}(?:{}){COLON}\s*([A-D]+)",
            alternation(&labels.answer)
        ))?;
        let explanation = Regex::new(&format!(
            r"(?s)^{DASH_PREFIX}(?:{}){COLON}\s*(.*)",
            alternation(&labels.explanation)
        ))?;
        Ok(Self {
            answer,
            explanation,
        })
    }

    /// Extract every question from the given lines, in document order.
    pub fn extract<I, S>(&self, lines: I) -> Vec<Question>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut questions = Vec::new();
        let mut state = State::Start;
        for line in lines {
            let line = self.read(line.as_ref());
            state = parse_line(state, line, &mut questions);
        }
        finalize(state, &mut questions);
        log::debug!("Extracted {} questions.", questions.len());
        questions
    }

    /// Extract from a block of text, one paragraph per line.
    pub fn extract_text(&self, text: &str) -> Vec<Question> {
        self.extract(text.lines())
    }

    fn read(&self, line: &str) -> Line {
        let line = line.trim();
        if line.is_empty() {
            return Line::Blank;
        }
        if let Some(caps) = QUESTION_START.captures(line) {
            return Line::StartQuestion {
                id: caps[1].to_string(),
                text: caps[2].trim().to_string(),
            };
        }
        if let Some(caps) = CHOICE.captures(line) {
            let letter = caps[1].chars().next().unwrap_or('A');
            return Line::Choice {
                letter,
                text: caps[2].trim().to_string(),
            };
        }
        if let Some(caps) = self.answer.captures(line) {
            return Line::Answer(caps[1].trim().to_string());
        }
        if let Some(caps) = self.explanation.captures(line) {
            return Line::Explanation(caps[1].trim().to_string());
        }
        Line::Text(line.to_string())
    }
}

fn parse_line(state: State, line: Line, questions: &mut Vec<Question>) -> State {
    match (state, line) {
        (state, Line::Blank) => state,
        (state, Line::StartQuestion { id, text }) => {
            finalize(state, questions);
            State::Reading(Draft::new(id, text))
        }
        (State::Start, _) => State::Start,
        (State::Reading(mut draft), line) => {
            match line {
                Line::Choice { letter, text } => {
                    draft.options.push(format!("{letter}. {text}"));
                }
                Line::Answer(letters) => {
                    draft.answer = letters;
                }
                Line::Explanation(text) => {
                    append_line(&mut draft.explanation, &text);
                }
                Line::Text(text) => {
                    // Once the answer is known, loose lines belong to the
                    // explanation, even if they look like list items.
                    if draft.answer.is_empty() {
                        append_line(&mut draft.content, &text);
                    } else {
                        append_line(&mut draft.explanation, &text);
                    }
                }
                Line::Blank | Line::StartQuestion { .. } => {}
            }
            State::Reading(draft)
        }
    }
}

fn finalize(state: State, questions: &mut Vec<Question>) {
    match state {
        State::Start => {}
        State::Reading(draft) => {
            if let Some(question) = draft.finish() {
                questions.push(question);
            }
        }
    }
}

fn append_line(buf: &mut String, text: &str) {
    if text.is_empty() {
        return;
    }
    if !buf.is_empty() {
        buf.push('\n');
    }
    buf.push_str(text);
}

fn alternation(labels: &[String]) -> String {
    labels
        .iter()
        .map(|l| regex::escape(l.trim()))
        .collect::<Vec<_>>()
        .join("|")
}
