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

use std::fs::read_to_string;
use std::path::Path;

use quizbank_core::Extractor;
use quizbank_core::Fallible;
use quizbank_core::QuestionBank;
use walkdir::WalkDir;

/// Read a plain-text document as a list of paragraphs, one per line.
pub fn read_paragraphs(path: &Path) -> Fallible<Vec<String>> {
    let text = read_to_string(path)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    Ok(text.lines().map(str::to_string).collect())
}

/// Load a single text file, or every `.txt` file under a directory, into a
/// bank per file. Banks are named after the file stem.
pub fn load_bank(path: &Path, extractor: &Extractor) -> Fallible<QuestionBank> {
    let mut bank = QuestionBank::new();
    if path.is_file() {
        add_file(&mut bank, path, extractor)?;
        return Ok(bank);
    }
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            add_file(&mut bank, path, extractor)?;
        }
    }
    Ok(bank)
}

fn add_file(bank: &mut QuestionBank, path: &Path, extractor: &Extractor) -> Fallible<()> {
    let name = bank_name(path);
    let questions = extractor.extract(read_paragraphs(path)?);
    log::info!("Loaded bank {name}: {} questions", questions.len());
    bank.add(name, questions);
    Ok(())
}

/// The file stem, with invalid UTF-8 replaced rather than discarded.
fn bank_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
