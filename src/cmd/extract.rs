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

use quizbank_core::ErrorKind;
use quizbank_core::Extractor;
use quizbank_core::Fallible;
use quizbank_core::Labels;
use quizbank_core::fail;
use quizbank_core::save_questions;
use quizbank_core::to_json;

use crate::reader::load_bank;

pub fn extract_documents(
    path: String,
    labels: Option<String>,
    bank: Option<String>,
    output: Option<String>,
) -> Fallible<()> {
    let labels = match labels {
        Some(file) => Labels::load(Path::new(&file))?,
        None => Labels::default(),
    };
    let extractor = Extractor::new(&labels)?;
    let banks = load_bank(Path::new(&path), &extractor)?;
    let questions = match bank {
        Some(name) => {
            if !banks.names().any(|n| n == name) {
                return fail(ErrorKind::Config, format!("No bank named '{name}'."));
            }
            banks.get(&name).to_vec()
        }
        None => banks.all(),
    };
    match output {
        Some(output) => save_questions(Path::new(&output), &questions)?,
        None => println!("{}", to_json(&questions)?),
    }
    Ok(())
}
