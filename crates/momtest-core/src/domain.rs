use serde::{Deserialize, Serialize};

/// One of the five free-text inputs collected by the validation wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    IdeaName,
    ProblemStatement,
    TargetAudience,
    Solution,
    ValueProposition,
}

impl FieldKey {
    pub const ALL: [FieldKey; 5] = [
        FieldKey::IdeaName,
        FieldKey::ProblemStatement,
        FieldKey::TargetAudience,
        FieldKey::Solution,
        FieldKey::ValueProposition,
    ];

    /// Stable form id, the same string the field serializes as.
    pub fn id(self) -> &'static str {
        match self {
            FieldKey::IdeaName => "ideaName",
            FieldKey::ProblemStatement => "problemStatement",
            FieldKey::TargetAudience => "targetAudience",
            FieldKey::Solution => "solution",
            FieldKey::ValueProposition => "valueProposition",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldKey::IdeaName => "Idea Name",
            FieldKey::ProblemStatement => "Problem Statement",
            FieldKey::TargetAudience => "Target Audience",
            FieldKey::Solution => "Solution Description",
            FieldKey::ValueProposition => "Value Proposition",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldKey::IdeaName => "Name your idea",
            FieldKey::ProblemStatement => "Describe the problem your idea solves",
            FieldKey::TargetAudience => "Describe your target audience",
            FieldKey::Solution => "Describe your solution",
            FieldKey::ValueProposition => "What unique value does your solution provide?",
        }
    }

    /// The idea name is a one-line input; everything else is a text area.
    pub fn is_multiline(self) -> bool {
        !matches!(self, FieldKey::IdeaName)
    }
}

/// The flat record of wizard inputs. Serializes with the form's camelCase ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaFields {
    pub idea_name: String,
    pub problem_statement: String,
    pub target_audience: String,
    pub solution: String,
    pub value_proposition: String,
}

impl IdeaFields {
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::IdeaName => &self.idea_name,
            FieldKey::ProblemStatement => &self.problem_statement,
            FieldKey::TargetAudience => &self.target_audience,
            FieldKey::Solution => &self.solution,
            FieldKey::ValueProposition => &self.value_proposition,
        }
    }

    pub fn get_mut(&mut self, key: FieldKey) -> &mut String {
        match key {
            FieldKey::IdeaName => &mut self.idea_name,
            FieldKey::ProblemStatement => &mut self.problem_statement,
            FieldKey::TargetAudience => &mut self.target_audience,
            FieldKey::Solution => &mut self.solution,
            FieldKey::ValueProposition => &mut self.value_proposition,
        }
    }

    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
        *self.get_mut(key) = value.into();
    }

    /// Required-ness matches a browser `required` input: any non-empty value
    /// passes, including whitespace.
    pub fn is_filled(&self, key: FieldKey) -> bool {
        !self.get(key).is_empty()
    }

    /// Keys from `keys` that are still empty, in the order given.
    pub fn missing(&self, keys: &[FieldKey]) -> Vec<FieldKey> {
        keys.iter()
            .copied()
            .filter(|key| !self.is_filled(*key))
            .collect()
    }
}
