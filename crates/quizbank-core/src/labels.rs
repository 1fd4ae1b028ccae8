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

//! The localized markers that introduce answer and explanation lines.

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

use crate::error::ErrorKind;
use crate::error::Fallible;
use crate::error::fail;

pub const DEFAULT_ANSWER_LABEL: &str = "正确答案";
pub const DEFAULT_EXPLANATION_LABEL: &str = "答案解析";

/// Which phrases mark an answer line and an explanation line.
///
/// Loaded from TOML like:
///
/// ```toml
/// answer = ["正确答案", "Answer"]
/// explanation = ["答案解析", "Explanation"]
/// ```
///
/// A missing key falls back to the default phrase for that key.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Labels {
    #[serde(default = "default_answer")]
    pub answer: Vec<String>,
    #[serde(default = "default_explanation")]
    pub explanation: Vec<String>,
}

fn default_answer() -> Vec<String> {
    vec![DEFAULT_ANSWER_LABEL.to_string()]
}

fn default_explanation() -> Vec<String> {
    vec![DEFAULT_EXPLANATION_LABEL.to_string()]
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            answer: default_answer(),
            explanation: default_explanation(),
        }
    }
}

impl Labels {
    pub fn from_toml(text: &str) -> Fallible<Self> {
        let labels: Labels = toml::from_str(text)?;
        labels.validate()?;
        Ok(labels)
    }

    pub fn load(path: &Path) -> Fallible<Self> {
        let text = read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn validate(&self) -> Fallible<()> {
        check_list("answer", &self.answer)?;
        check_list("explanation", &self.explanation)
    }
}

fn check_list(key: &str, labels: &[String]) -> Fallible<()> {
    if labels.is_empty() {
        return fail(ErrorKind::Config, format!("No {key} labels configured."));
    }
    if labels.iter().any(|l| l.trim().is_empty()) {
        return fail(ErrorKind::Config, format!("Blank {key} label."));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() -> Fallible<()> {
        let labels = Labels::from_toml(r#"answer = ["Answer", "Key"]"#)?;
        assert_eq!(labels.answer, vec!["Answer", "Key"]);
        assert_eq!(labels.explanation, vec![DEFAULT_EXPLANATION_LABEL]);
        Ok(())
    }

    #[test]
    fn test_empty_config_is_default() -> Fallible<()> {
        assert_eq!(Labels::from_toml("")?, Labels::default());
        Ok(())
    }

    #[test]
    fn test_empty_list_rejected() {
        let err = Labels::from_toml("explanation = []").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_blank_label_rejected() {
        assert!(Labels::from_toml(r#"answer = ["  "]"#).is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Labels::from_toml(r#"answers = ["x"]"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}
