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

//! quizbank-core: extract multiple-choice questions from plain text.
//!
//! This library provides:
//! - A tolerant line classifier that turns paragraphs into questions
//! - Configurable answer/explanation labels
//! - A JSON format for saving and reloading question lists
//! - Named question banks

pub mod bank;
pub mod codec;
pub mod error;
pub mod labels;
pub mod parser;
pub mod types;

// Re-exports for convenience
pub use bank::QuestionBank;
pub use codec::{from_json, load_questions, save_questions, to_json};
pub use error::{ErrorKind, ErrorReport, Fallible, fail};
pub use labels::Labels;
pub use parser::{Extractor, extract_questions};
pub use types::question::Question;
