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

use clap::Parser;
use quizbank_core::Fallible;

use crate::cmd::check::check_file;
use crate::cmd::extract::extract_documents;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Extract questions from plain-text documents into JSON.
    Extract {
        /// A text file with one paragraph per line, or a directory of `.txt` files.
        path: String,
        /// TOML file listing the answer and explanation labels.
        #[arg(long)]
        labels: Option<String>,
        /// Only output the questions from this file (named by its stem).
        #[arg(long)]
        bank: Option<String>,
        /// Optional path to the output file. By default, the output is printed to stdout.
        #[arg(long)]
        output: Option<String>,
    },
    /// Check a saved question file for unanswerable questions.
    Check {
        /// Path to the JSON file.
        file: String,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Extract {
            path,
            labels,
            bank,
            output,
        } => extract_documents(path, labels, bank, output),
        Command::Check { file } => check_file(file),
    }
}
