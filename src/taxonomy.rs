// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Static subject → subfield reference taxonomy.
//!
//! Steps use it to turn free text (a learner description, a list of
//! materials, a suggestion from an external service) into an ordered list of
//! recognized topic labels.

use serde::{Deserialize, Serialize};

/// A top-level subject and its subfields, in presentation order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    pub subfields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    subjects: Vec<Subject>,
}

const BUILTIN: &[(&str, &[&str])] = &[
    (
        "Algebra",
        &[
            "Linear Algebra",
            "Matrix Algebra",
            "Abstract Algebra",
            "Commutative Algebra",
            "Algebraic Number Theory",
            "Algebraic Geometry",
            "Differential Algebra",
            "Homological Algebra",
            "Boolean Algebra",
        ],
    ),
    (
        "Calculus",
        &[
            "Differential Calculus",
            "Integral Calculus",
            "Multivariable Calculus",
            "Limits",
            "Derivatives",
            "Integrals",
        ],
    ),
    (
        "Statistics",
        &[
            "Descriptive Statistics",
            "Inferential Statistics",
            "Probability Theory",
            "Hypothesis Testing",
            "Regression Analysis",
        ],
    ),
    (
        "Computer Science",
        &[
            "Data Structures",
            "Algorithms",
            "Databases",
            "Machine Learning",
            "Networks",
            "Operating Systems",
        ],
    ),
    (
        "Deep Learning",
        &[
            "Neural Networks",
            "Convolutional Networks",
            "Recurrent Networks",
            "Transformers",
            "Generative Models",
        ],
    ),
];

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Taxonomy {
    pub fn new(subjects: Vec<Subject>) -> Self {
        Self { subjects }
    }

    /// The five-subject mathematics and computing taxonomy
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN
                .iter()
                .map(|(name, subfields)| Subject {
                    name: name.to_string(),
                    subfields: subfields.iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
        )
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Every subfield, subject by subject
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.subjects
            .iter()
            .flat_map(|s| s.subfields.iter().map(String::as_str))
    }

    /// Subfields mentioned verbatim in `text`, in taxonomy order.
    ///
    /// Matching is plain substring containment, so "Neural Networks" also
    /// matches "Networks".
    pub fn match_topics(&self, text: &str) -> Vec<String> {
        self.topics()
            .filter(|topic| text.contains(topic))
            .map(str::to_string)
            .collect()
    }

    /// Subfields mentioned in `text`, ordered by where they first appear
    pub fn mentioned_topics(&self, text: &str) -> Vec<String> {
        let mut found: Vec<(usize, &str)> = self
            .topics()
            .filter_map(|topic| text.find(topic).map(|pos| (pos, topic)))
            .collect();
        found.sort_by_key(|(pos, _)| *pos);
        found.into_iter().map(|(_, topic)| topic.to_string()).collect()
    }

    /// Subject that owns `topic`, if it is a known subfield
    pub fn subject_of(&self, topic: &str) -> Option<&str> {
        self.subjects
            .iter()
            .find(|s| s.subfields.iter().any(|f| f == topic))
            .map(|s| s.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_five_subjects() {
        let taxonomy = Taxonomy::builtin();
        let names: Vec<_> = taxonomy.subjects().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Algebra", "Calculus", "Statistics", "Computer Science", "Deep Learning"]
        );
        assert_eq!(taxonomy.topics().count(), 31);
    }

    #[test]
    fn match_topics_uses_taxonomy_order() {
        let taxonomy = Taxonomy::builtin();
        let text = "Weak in Abstract Algebra, strong in Limits and Linear Algebra";
        assert_eq!(
            taxonomy.match_topics(text),
            vec!["Linear Algebra", "Abstract Algebra", "Limits"]
        );
    }

    #[test]
    fn match_topics_is_substring_based() {
        let taxonomy = Taxonomy::builtin();
        assert_eq!(
            taxonomy.match_topics("Start with Neural Networks"),
            vec!["Networks", "Neural Networks"]
        );
        assert!(taxonomy.match_topics("nothing relevant").is_empty());
    }

    #[test]
    fn mentioned_topics_follow_text_order() {
        let taxonomy = Taxonomy::builtin();
        let text = "Begin with Limits, then Linear Algebra, then Transformers";
        assert_eq!(
            taxonomy.mentioned_topics(text),
            vec!["Limits", "Linear Algebra", "Transformers"]
        );
    }

    #[test]
    fn subject_lookup() {
        let taxonomy = Taxonomy::builtin();
        assert_eq!(taxonomy.subject_of("Transformers"), Some("Deep Learning"));
        assert_eq!(taxonomy.subject_of("Algebra"), None);
    }
}
