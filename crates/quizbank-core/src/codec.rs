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

//! Reading and writing question lists as JSON.
//!
//! The file is a JSON array of objects with exactly the fields `id`,
//! `content`, `options`, `answer`, and `explanation`. A missing or extra
//! field is an error.

use std::fs::read_to_string;
use std::fs::write;
use std::path::Path;

use crate::error::Fallible;
use crate::types::question::Question;

pub fn to_json(questions: &[Question]) -> Fallible<String> {
    Ok(serde_json::to_string_pretty(questions)?)
}

pub fn from_json(text: &str) -> Fallible<Vec<Question>> {
    Ok(serde_json::from_str(text)?)
}

/// Write the questions to `path`, replacing any existing file.
pub fn save_questions(path: &Path, questions: &[Question]) -> Fallible<()> {
    let json = to_json(questions)?;
    write(path, json)?;
    log::debug!("Saved {} questions to {}", questions.len(), path.display());
    Ok(())
}

pub fn load_questions(path: &Path) -> Fallible<Vec<Question>> {
    let text = read_to_string(path)?;
    let questions = from_json(&text)?;
    log::debug!(
        "Loaded {} questions from {}",
        questions.len(),
        path.display()
    );
    Ok(questions)
}
