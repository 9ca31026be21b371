//! A generated quiz: user selections, grading and locking.

use thiserror::Error;
use uuid::Uuid;

use crate::models::{Question, NUM_OPTIONS};

/// Labels used when a question's options cannot be shown.
pub const PLACEHOLDER_OPTIONS: [&str; NUM_OPTIONS] = ["Option A", "Option B", "Option C", "Option D"];

/// Rejected selection changes.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Quiz already graded. Generate a new quiz to try again.")]
    Locked,
    #[error("There is no question {0}.")]
    NoSuchQuestion(usize),
    #[error("There is no option {0}.")]
    NoSuchOption(usize),
}

/// Outcome for one question after grading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionMark {
    pub selected: Option<usize>,
    pub correct_index: usize,
}

impl QuestionMark {
    pub fn is_correct(&self) -> bool {
        self.selected == Some(self.correct_index)
    }

    /// The user's pick when it was wrong.
    pub fn wrong_pick(&self) -> Option<usize> {
        self.selected.filter(|selected| *selected != self.correct_index)
    }
}

/// Score of a graded quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeReport {
    pub correct: usize,
    pub total: usize,
    /// `round(100 * correct / total)`, for display only.
    pub percent: u32,
    pub marks: Vec<QuestionMark>,
}

impl GradeReport {
    fn from_marks(marks: Vec<QuestionMark>) -> Self {
        let total = marks.len();
        let correct = marks.iter().filter(|mark| mark.is_correct()).count();
        Self {
            correct,
            total,
            percent: percentage(correct, total),
            marks,
        }
    }

    pub fn summary(&self) -> String {
        format!("Score: {}/{} ({}%)", self.correct, self.total, self.percent)
    }
}

fn percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (correct as f64 * 100.0 / total as f64).round() as u32
}

/// The questions of one generation together with the user's answers.
#[derive(Debug, Clone)]
pub struct QuizInstance {
    id: Uuid,
    questions: Vec<Question>,
    selections: Vec<Option<usize>>,
    report: Option<GradeReport>,
}

impl QuizInstance {
    pub fn new(questions: Vec<Question>) -> Self {
        let selections = vec![None; questions.len()];
        Self {
            id: Uuid::new_v4(),
            questions,
            selections,
            report: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn selection(&self, question: usize) -> Option<usize> {
        self.selections.get(question).copied().flatten()
    }

    pub fn selections(&self) -> &[Option<usize>] {
        &self.selections
    }

    pub fn answered_count(&self) -> usize {
        self.selections.iter().filter(|s| s.is_some()).count()
    }

    /// Chooses an option for a question. Refused once graded.
    pub fn select(&mut self, question: usize, option: usize) -> Result<(), SelectionError> {
        if self.is_graded() {
            return Err(SelectionError::Locked);
        }
        if option >= NUM_OPTIONS {
            return Err(SelectionError::NoSuchOption(option));
        }
        let slot = self
            .selections
            .get_mut(question)
            .ok_or(SelectionError::NoSuchQuestion(question))?;
        *slot = Some(option);
        Ok(())
    }

    pub fn clear_selection(&mut self, question: usize) -> Result<(), SelectionError> {
        if self.is_graded() {
            return Err(SelectionError::Locked);
        }
        let slot = self
            .selections
            .get_mut(question)
            .ok_or(SelectionError::NoSuchQuestion(question))?;
        *slot = None;
        Ok(())
    }

    /// Grades the current selections and locks the quiz.
    ///
    /// Grading again returns the first report unchanged.
    pub fn grade(&mut self) -> &GradeReport {
        let questions = &self.questions;
        let selections = &self.selections;
        self.report.get_or_insert_with(|| {
            let marks = questions
                .iter()
                .zip(selections)
                .map(|(question, selected)| QuestionMark {
                    selected: *selected,
                    correct_index: question.correct_index,
                })
                .collect();
            GradeReport::from_marks(marks)
        })
    }

    pub fn is_graded(&self) -> bool {
        self.report.is_some()
    }

    pub fn report(&self) -> Option<&GradeReport> {
        self.report.as_ref()
    }
}

/// Options to draw for a question, with placeholders if any are blank.
pub fn display_options(question: &Question) -> [String; NUM_OPTIONS] {
    if question.options.iter().any(|option| option.trim().is_empty()) {
        PLACEHOLDER_OPTIONS.map(String::from)
    } else {
        question.options.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str, correct_index: usize) -> Question {
        Question {
            text: text.to_string(),
            options: ["A", "B", "C", "D"].map(String::from),
            correct_index,
        }
    }

    fn sample_quiz() -> QuizInstance {
        QuizInstance::new(vec![question("Q1", 0), question("Q2", 2), question("Q3", 3)])
    }

    #[test]
    fn test_grade_counts_exact_matches() {
        let mut quiz = sample_quiz();
        quiz.select(0, 0).unwrap();
        quiz.select(1, 1).unwrap();

        let report = quiz.grade().clone();
        assert_eq!(report.correct, 1);
        assert_eq!(report.total, 3);
        assert_eq!(report.percent, 33);
        assert_eq!(report.summary(), "Score: 1/3 (33%)");
        assert!(report.marks[0].is_correct());
        assert_eq!(report.marks[1].wrong_pick(), Some(1));
        assert_eq!(report.marks[2].selected, None);
        assert_eq!(report.marks[2].wrong_pick(), None);
    }

    #[test]
    fn test_grading_twice_does_not_double_count() {
        let mut quiz = sample_quiz();
        quiz.select(0, 0).unwrap();
        quiz.select(1, 2).unwrap();

        let first = quiz.grade().clone();
        let second = quiz.grade().clone();
        assert_eq!(first, second);
        assert_eq!(second.correct, 2);
        assert_eq!(second.percent, 67);
    }

    #[test]
    fn test_selections_lock_after_grading() {
        let mut quiz = sample_quiz();
        quiz.select(0, 1).unwrap();
        quiz.grade();

        assert_eq!(quiz.select(0, 0), Err(SelectionError::Locked));
        assert_eq!(quiz.clear_selection(0), Err(SelectionError::Locked));
        assert_eq!(quiz.selection(0), Some(1));
        assert_eq!(quiz.grade().correct, 0);
    }

    #[test]
    fn test_selection_bounds() {
        let mut quiz = sample_quiz();
        assert_eq!(quiz.select(5, 0), Err(SelectionError::NoSuchQuestion(5)));
        assert_eq!(quiz.select(0, 4), Err(SelectionError::NoSuchOption(4)));
        quiz.select(0, 3).unwrap();
        quiz.select(0, 2).unwrap();
        assert_eq!(quiz.selection(0), Some(2));
        quiz.clear_selection(0).unwrap();
        assert_eq!(quiz.answered_count(), 0);
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(1, 2), 50);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(5, 5), 100);
    }

    #[test]
    fn test_display_options_fallback() {
        let mut broken = question("Q", 0);
        assert_eq!(display_options(&broken), ["A", "B", "C", "D"].map(String::from));

        broken.options[2] = "   ".to_string();
        assert_eq!(display_options(&broken), PLACEHOLDER_OPTIONS.map(String::from));
    }
}
