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

use std::path::Path;

use quizbank_core::Fallible;
use quizbank_core::Question;
use quizbank_core::load_questions;

pub fn check_file(path: String) -> Fallible<()> {
    let questions = load_questions(Path::new(&path))?;
    let mut count = 0;
    for question in &questions {
        for problem in problems(question) {
            println!("{}: {problem}", question.id());
            count += 1;
        }
    }
    println!("Checked {} questions, {count} problems.", questions.len());
    Ok(())
}

/// Things about a question that make it impossible to answer correctly.
fn problems(question: &Question) -> Vec<String> {
    let mut problems = Vec::new();
    if question.answer().is_empty() {
        problems.push("no answer".to_string());
    } else {
        let unmatched = question.unmatched_answer_letters();
        if !unmatched.is_empty() {
            let letters: String = unmatched.into_iter().collect();
            problems.push(format!("answer names missing options: {letters}"));
        }
    }
    problems
}
