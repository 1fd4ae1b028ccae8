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

use crate::types::question::Question;

/// Questions grouped by the document they came from, in the order the
/// documents were added.
#[derive(Debug, Default)]
pub struct QuestionBank {
    banks: Vec<(String, Vec<Question>)>,
}

impl QuestionBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named bank. Re-adding a name replaces its questions but keeps
    /// its position.
    pub fn add(&mut self, name: impl Into<String>, questions: Vec<Question>) {
        let name = name.into();
        match self.banks.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = questions,
            None => self.banks.push((name, questions)),
        }
    }

    /// Every question of every bank.
    pub fn all(&self) -> Vec<Question> {
        self.banks
            .iter()
            .flat_map(|(_, qs)| qs.iter().cloned())
            .collect()
    }

    /// The questions of one bank; empty if there is no such bank.
    pub fn get(&self, name: &str) -> &[Question] {
        self.banks
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, qs)| qs.as_slice())
            .unwrap_or(&[])
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.banks.iter().map(|(n, _)| n.as_str())
    }

    /// Number of banks.
    pub fn len(&self) -> usize {
        self.banks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(id: &str) -> Question {
        Question::new(id, format!("Question {id}"), Vec::new(), "A", "")
    }

    #[test]
    fn test_all_in_insertion_order() {
        let mut bank = QuestionBank::new();
        bank.add("zoology", vec![q("1"), q("2")]);
        bank.add("algebra", vec![q("1")]);
        let contents: Vec<String> = bank.all().iter().map(|q| q.content().to_string()).collect();
        assert_eq!(contents, vec!["Question 1", "Question 2", "Question 1"]);
        assert_eq!(bank.names().collect::<Vec<_>>(), vec!["zoology", "algebra"]);
    }

    #[test]
    fn test_get_by_name() {
        let mut bank = QuestionBank::new();
        bank.add("a", vec![q("1")]);
        assert_eq!(bank.get("a").len(), 1);
        assert!(bank.get("missing").is_empty());
    }

    #[test]
    fn test_readd_replaces_in_place() {
        let mut bank = QuestionBank::new();
        bank.add("a", vec![q("1")]);
        bank.add("b", vec![q("2")]);
        bank.add("a", vec![q("3"), q("4")]);
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(bank.get("a")[0].id(), "3");
        assert_eq!(bank.all().len(), 3);
    }

    #[test]
    fn test_empty() {
        let bank = QuestionBank::new();
        assert!(bank.is_empty());
        assert!(bank.all().is_empty());
    }
}
