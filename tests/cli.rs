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

use std::fs::write;
use std::path::Path;
use std::process::Command;
use std::process::Output;

use quizbank_core::Fallible;
use quizbank_core::load_questions;
use quizbank_core::save_questions;
use tempfile::tempdir;

const DOCUMENT: &str = "\
Unit 3 review

1. Which planet is largest?
A. Mars
B、Jupiter
C Venus
正确答案：B
答案解析：Jupiter is a gas giant.
2. Pick the even numbers.
A. 2
B. 3
C. 4
——正确答案：AC
1、2 is even
2、4 is even
";

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_quizbank"))
        .args(args)
        .output()
        .expect("failed to run quizbank")
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("utf-8 path")
}

#[test]
fn test_extract_to_file() -> Fallible<()> {
    let dir = tempdir()?;
    let doc = dir.path().join("unit3.txt");
    let out = dir.path().join("out.json");
    write(&doc, DOCUMENT)?;

    let output = run(&["extract", path_str(&doc), "--output", path_str(&out)]);
    assert!(output.status.success());

    let questions = load_questions(&out)?;
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].id(), "1");
    assert_eq!(
        questions[0].options(),
        ["A. Mars", "B. Jupiter", "C. Venus"]
    );
    assert_eq!(questions[0].answer(), "B");
    assert_eq!(questions[0].explanation(), "Jupiter is a gas giant.");
    assert_eq!(questions[1].answer(), "AC");
    assert_eq!(questions[1].explanation(), "1、2 is even\n2、4 is even");
    Ok(())
}

#[test]
fn test_extract_to_stdout_with_labels() -> Fallible<()> {
    let dir = tempdir()?;
    let doc = dir.path().join("english.txt");
    let labels = dir.path().join("labels.toml");
    write(&doc, "1. Two plus two?\nA. 3\nB. 4\nAnswer: B\n")?;
    write(&labels, "answer = [\"Answer\"]\n")?;

    let output = run(&["extract", path_str(&doc), "--labels", path_str(&labels)]);
    assert!(output.status.success());
    let questions = quizbank_core::from_json(&String::from_utf8_lossy(&output.stdout))?;
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].answer(), "B");
    Ok(())
}

#[test]
fn test_extract_single_bank_from_directory() -> Fallible<()> {
    let dir = tempdir()?;
    write(dir.path().join("first.txt"), "1. F\n正确答案：A\n")?;
    write(dir.path().join("second.txt"), "1. S\n正确答案：B\n2. T\n")?;

    let output = run(&["extract", path_str(dir.path()), "--bank", "second"]);
    assert!(output.status.success());
    let questions = quizbank_core::from_json(&String::from_utf8_lossy(&output.stdout))?;
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].content(), "S");

    let output = run(&["extract", path_str(dir.path()), "--bank", "third"]);
    assert!(!output.status.success());
    Ok(())
}

#[test]
fn test_check_reports_problems() -> Fallible<()> {
    let dir = tempdir()?;
    let file = dir.path().join("wrong.json");
    let questions = quizbank_core::extract_questions(["1. Q", "A. x", "正确答案：D", "2. R"]);
    save_questions(&file, &questions)?;

    let output = run(&["check", path_str(&file)]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1: answer names missing options: D"));
    assert!(stdout.contains("2: no answer"));
    assert!(stdout.contains("Checked 2 questions, 2 problems."));
    Ok(())
}

#[test]
fn test_check_rejects_malformed_file() -> Fallible<()> {
    let dir = tempdir()?;
    let file = dir.path().join("bad.json");
    write(&file, r#"[{"id": "1", "content": "Q"}]"#)?;

    let output = run(&["check", path_str(&file)]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing field"));
    Ok(())
}
