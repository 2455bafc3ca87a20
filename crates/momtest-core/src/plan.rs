//! Fixed validation plan shown once the wizard reaches its results step.
//!
//! The plan is the same for every idea; nothing here reads the wizard fields.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    pub explanation: String,
    pub category: String,
}

impl InterviewQuestion {
    fn new(question: &str, explanation: &str, category: &str) -> Self {
        Self {
            question: question.to_owned(),
            explanation: explanation.to_owned(),
            category: category.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPlan {
    pub interview_intro: String,
    pub interview_questions: Vec<InterviewQuestion>,
    pub reminder: String,
    pub market_research_intro: String,
    pub market_research_platforms: Vec<String>,
    pub next_steps: Vec<String>,
}

impl ValidationPlan {
    pub fn standard() -> Self {
        Self {
            interview_intro:
                "Based on your idea, here are some questions you should ask potential customers:"
                    .to_owned(),
            interview_questions: vec![
                InterviewQuestion::new(
                    "What's the hardest part about [problem area] in your day-to-day work?",
                    "Asks about their specific problems without mentioning your solution",
                    "problem validation",
                ),
                InterviewQuestion::new(
                    "Can you walk me through the last time you encountered this problem?",
                    "Gets specific examples rather than hypotheticals",
                    "problem validation",
                ),
                InterviewQuestion::new(
                    "What solutions have you tried before? What worked and what didn't?",
                    "Uncovers existing alternatives and their shortcomings",
                    "solution validation",
                ),
                InterviewQuestion::new(
                    "How much time/money do you currently spend dealing with this issue?",
                    "Quantifies the problem to understand its importance",
                    "problem validation",
                ),
                InterviewQuestion::new(
                    "How are you currently solving this problem?",
                    "Reveals if they're actively seeking solutions or if it's not a priority",
                    "solution validation",
                ),
            ],
            reminder: "Don't ask leading questions or pitch your idea. Focus on their problems, not your solution."
                .to_owned(),
            market_research_intro:
                "To validate your idea further, we recommend researching these platforms:"
                    .to_owned(),
            market_research_platforms: [
                "Reddit communities related to your industry",
                "Twitter: Follow industry experts and potential customers",
                "Product Hunt: Check similar products and their reviews",
                "Industry forums and communities",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            next_steps: [
                "Conduct customer interviews using the questions above",
                "Record and analyze the responses",
                "Identify patterns and pain points",
                "Return to this platform to analyze your findings",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
        }
    }

    /// Plain-text rendering used when the plan is exported off-screen.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Your Validation Plan");
        let _ = writeln!(out);
        let _ = writeln!(out, "Interview Questions");
        let _ = writeln!(out, "{}", self.interview_intro);
        for question in &self.interview_questions {
            let _ = writeln!(out, "  - {}", question.question);
            let _ = writeln!(out, "    ({}) {}", question.category, question.explanation);
        }
        let _ = writeln!(out, "Remember: {}", self.reminder);
        let _ = writeln!(out);
        let _ = writeln!(out, "Market Research Insights");
        let _ = writeln!(out, "{}", self.market_research_intro);
        for platform in &self.market_research_platforms {
            let _ = writeln!(out, "  - {platform}");
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Next Steps");
        for (i, step) in self.next_steps.iter().enumerate() {
            let _ = writeln!(out, "  {}. {step}", i + 1);
        }
        out
    }
}

impl Default for ValidationPlan {
    fn default() -> Self {
        Self::standard()
    }
}
