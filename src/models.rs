use serde::{Deserialize, Serialize};

/// One multiple-choice prompt, embedded in a quiz. Questions have no identity
/// of their own and are replaced wholesale on update.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuiz {
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    #[serde(default)]
    pub is_paid: bool,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub published: bool,
}

/// Partial update payload. Omitted fields leave the record unchanged; the
/// quiz id and creation timestamp can never be altered.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub is_paid: Option<bool>,
    pub questions: Option<Vec<Question>>,
    pub published: Option<bool>,
}

fn check_question(idx: usize, question: &Question, problems: &mut Vec<String>) {
    if question.text.trim().is_empty() {
        problems.push(format!("questions[{idx}].text must not be empty"));
    }
    if question.options.len() < 2 {
        problems.push(format!("questions[{idx}].options needs at least 2 entries"));
    }
    if question.correct_index >= question.options.len() {
        problems.push(format!(
            "questions[{idx}].correctIndex {} is out of range for {} options",
            question.correct_index,
            question.options.len()
        ));
    }
}

impl NewQuiz {
    /// The single schema-validation stage at the repository boundary. The
    /// store itself stays permissive; everything that reaches it went
    /// through here first.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();

        if self.user_id.trim().is_empty() {
            problems.push("userId must not be empty".to_owned());
        }
        if self.title.trim().is_empty() {
            problems.push("title must not be empty".to_owned());
        }
        if self.category.trim().is_empty() {
            problems.push("category must not be empty".to_owned());
        }
        for (idx, question) in self.questions.iter().enumerate() {
            check_question(idx, question, &mut problems);
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}

impl QuizPatch {
    /// Same checks as `NewQuiz::validate`, applied only to fields present in
    /// the patch.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();

        if self.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            problems.push("title must not be empty".to_owned());
        }
        if self
            .category
            .as_deref()
            .is_some_and(|c| c.trim().is_empty())
        {
            problems.push("category must not be empty".to_owned());
        }
        if let Some(questions) = &self.questions {
            for (idx, question) in questions.iter().enumerate() {
                check_question(idx, question, &mut problems);
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}
