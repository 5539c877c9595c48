use eframe::egui;
use question_bank::check_answer;
use shared::domain::{Language, Question, Section};
use tutor_core::{BackHandle, Page, PageLoadError};

use super::PageHost;

const CORRECT_COLOR: egui::Color32 = egui::Color32::from_rgb(46, 160, 67);
const INCORRECT_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 60, 60);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect { expected: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub attempted: usize,
}

/// One question at a time from the section's share of the question bank.
pub struct PracticePage {
    section: Section,
    intro: &'static str,
    language: Language,
    questions: Vec<Question>,
    current: usize,
    answer: String,
    feedback: Option<Feedback>,
    score: Score,
    on_back: BackHandle,
    focus_answer: bool,
}

impl PracticePage {
    pub fn new(
        section: Section,
        intro: &'static str,
        language: Language,
        questions: Vec<Question>,
        on_back: BackHandle,
    ) -> Self {
        Self {
            section,
            intro,
            language,
            questions,
            current: 0,
            answer: String::new(),
            feedback: None,
            score: Score::default(),
            on_back,
            focus_answer: true,
        }
    }

    pub fn open(
        section: Section,
        intro: &'static str,
        on_back: BackHandle,
        host: &PageHost,
    ) -> Result<Box<dyn Page>, PageLoadError> {
        let questions = host
            .bank
            .questions_for(section)
            .map_err(|err| PageLoadError::new(section, err.to_string()))?;
        tracing::debug!(section = %section, questions = questions.len(), "practice page ready");
        Ok(Box::new(Self::new(
            section,
            intro,
            host.language,
            questions,
            on_back,
        )))
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn is_finished(&self) -> bool {
        !self.questions.is_empty() && self.current >= self.questions.len()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn set_answer(&mut self, answer: impl Into<String>) {
        self.answer = answer.into();
    }

    /// Checks the typed answer once per question; blank answers are ignored.
    pub fn submit(&mut self) {
        if self.feedback.is_some() || self.answer.trim().is_empty() {
            return;
        }
        let Some(question) = self.current_question() else {
            return;
        };

        let feedback = if check_answer(&question.output, &self.answer) {
            self.score.correct += 1;
            Feedback::Correct
        } else {
            Feedback::Incorrect {
                expected: question.output.clone(),
            }
        };
        self.score.attempted += 1;
        self.feedback = Some(feedback);
    }

    pub fn advance(&mut self) {
        if self.feedback.take().is_some() {
            self.current += 1;
            self.answer.clear();
            self.focus_answer = true;
        }
    }

    pub fn restart(&mut self) {
        self.current = 0;
        self.answer.clear();
        self.feedback = None;
        self.score = Score::default();
        self.focus_answer = true;
    }

    fn show_question(&mut self, ui: &mut egui::Ui, question: &Question) {
        ui.label(
            egui::RichText::new(format!(
                "Question {} of {}",
                self.current + 1,
                self.questions.len()
            ))
            .small(),
        );
        ui.add_space(6.0);
        ui.label(egui::RichText::new(&question.input).size(22.0).strong());
        ui.add_space(10.0);

        let answering = self.feedback.is_none();
        let edit = ui.add_enabled(
            answering,
            egui::TextEdit::singleline(&mut self.answer)
                .hint_text("Your answer")
                .desired_width(240.0),
        );
        if answering && self.focus_answer {
            edit.request_focus();
            self.focus_answer = false;
        }
        let entered = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        ui.add_space(8.0);

        match self.feedback.clone() {
            None => {
                if ui.button("Check").clicked() || entered {
                    self.submit();
                }
            }
            Some(feedback) => {
                match feedback {
                    Feedback::Correct => {
                        ui.colored_label(CORRECT_COLOR, "Correct!");
                    }
                    Feedback::Incorrect { expected } => {
                        ui.colored_label(
                            INCORRECT_COLOR,
                            format!("Not quite. The answer is {expected}."),
                        );
                    }
                }
                if ui.button("Next question").clicked()
                    || ui.input(|i| i.key_pressed(egui::Key::Enter))
                {
                    self.advance();
                }
            }
        }
    }

    fn show_summary(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("All done!").size(22.0).strong());
        ui.label(format!(
            "You got {} out of {} right.",
            self.score.correct, self.score.attempted
        ));
        ui.add_space(8.0);
        if ui.button("Start again").clicked() {
            self.restart();
        }
    }
}

impl Page for PracticePage {
    fn section(&self) -> Section {
        self.section
    }

    fn show(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("⬅ Back to menu").clicked() {
                self.on_back.go_back();
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!(
                    "Score: {}/{}",
                    self.score.correct, self.score.attempted
                ));
            });
        });
        ui.separator();

        ui.vertical_centered(|ui| {
            ui.heading(self.section.name());
            ui.label(self.intro);
            ui.small(format!("Learning in {}", self.language));
            ui.add_space(16.0);

            if self.questions.is_empty() {
                ui.label(format!(
                    "No {} questions yet. Ask your teacher to upload a question bank.",
                    self.section
                ));
                return;
            }

            match self.current_question().cloned() {
                Some(question) => self.show_question(ui, &question),
                None => self.show_summary(ui),
            }
        });
    }

    fn on_release(&mut self) {
        tracing::debug!(
            section = %self.section,
            correct = self.score.correct,
            attempted = self.score.attempted,
            "leaving practice page"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tutor_core::{nav_channel, NavCommand};

    fn page(questions: Vec<Question>) -> (PracticePage, crossbeam_channel::Receiver<NavCommand>) {
        let (tx, rx) = nav_channel();
        let page = PracticePage::new(
            Section::Operations,
            "intro",
            Language::English,
            questions,
            BackHandle::new(tx),
        );
        (page, rx)
    }

    fn two_questions() -> Vec<Question> {
        vec![
            Question::new("Operations", "6 x 2", "12"),
            Question::new("Operations", "9 - 4", "5"),
        ]
    }

    #[test]
    fn correct_then_incorrect_answer() {
        let (mut page, _rx) = page(two_questions());

        page.set_answer(" 12 ");
        page.submit();
        assert_eq!(page.feedback(), Some(&Feedback::Correct));

        page.advance();
        page.set_answer("13");
        page.submit();
        assert_eq!(
            page.feedback(),
            Some(&Feedback::Incorrect {
                expected: "5".into()
            })
        );
        assert_eq!(
            page.score(),
            Score {
                correct: 1,
                attempted: 2
            }
        );

        page.advance();
        assert!(page.is_finished());
        assert!(page.current_question().is_none());
    }

    #[test]
    fn answers_are_checked_once_per_question() {
        let (mut page, _rx) = page(two_questions());
        page.set_answer("12");
        page.submit();
        page.submit();
        assert_eq!(page.score().attempted, 1);
    }

    #[test]
    fn blank_answer_is_not_submitted() {
        let (mut page, _rx) = page(two_questions());
        page.set_answer("   ");
        page.submit();
        assert!(page.feedback().is_none());
        page.advance();
        assert_eq!(page.current_question().map(|q| q.input.as_str()), Some("6 x 2"));
    }

    #[test]
    fn restart_resets_progress() {
        let (mut page, _rx) = page(two_questions());
        page.set_answer("12");
        page.submit();
        page.advance();
        page.restart();
        assert_eq!(page.score(), Score::default());
        assert_eq!(page.current_question().map(|q| q.output.as_str()), Some("12"));
    }

    #[test]
    fn empty_section_is_never_finished() {
        let (page, _rx) = page(Vec::new());
        assert!(!page.is_finished());
        assert!(page.current_question().is_none());
    }
}
