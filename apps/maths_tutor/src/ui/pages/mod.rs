//! Section page registry: each [`Section`] maps to exactly one page constructor.

mod practice;

use question_bank::QuestionBank;
use shared::domain::{Language, Section};
use tutor_core::{BackHandle, Page, PageFactory, PageLoadError};

use practice::PracticePage;

/// What a page may read from the window that hosts it.
#[derive(Debug, Clone)]
pub struct PageHost {
    pub language: Language,
    pub bank: QuestionBank,
}

type PageConstructor = fn(BackHandle, &PageHost) -> Result<Box<dyn Page>, PageLoadError>;

pub fn constructor_for(section: Section) -> PageConstructor {
    match section {
        Section::Story => story_page,
        Section::Time => time_page,
        Section::Currency => currency_page,
        Section::Distance => distance_page,
        Section::Bellring => bellring_page,
        Section::Operations => operations_page,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PracticePages;

impl PageFactory for PracticePages {
    type Host = PageHost;

    fn load(
        &self,
        section: Section,
        on_back: BackHandle,
        host: &PageHost,
    ) -> Result<Box<dyn Page>, PageLoadError> {
        constructor_for(section)(on_back, host)
    }
}

fn story_page(on_back: BackHandle, host: &PageHost) -> Result<Box<dyn Page>, PageLoadError> {
    PracticePage::open(
        Section::Story,
        "Read the little story, then work out the answer.",
        on_back,
        host,
    )
}

fn time_page(on_back: BackHandle, host: &PageHost) -> Result<Box<dyn Page>, PageLoadError> {
    PracticePage::open(
        Section::Time,
        "Read clocks and work with hours and minutes.",
        on_back,
        host,
    )
}

fn currency_page(on_back: BackHandle, host: &PageHost) -> Result<Box<dyn Page>, PageLoadError> {
    PracticePage::open(
        Section::Currency,
        "Count coins and notes, and make change.",
        on_back,
        host,
    )
}

fn distance_page(on_back: BackHandle, host: &PageHost) -> Result<Box<dyn Page>, PageLoadError> {
    PracticePage::open(
        Section::Distance,
        "Measure and compare lengths.",
        on_back,
        host,
    )
}

fn bellring_page(on_back: BackHandle, host: &PageHost) -> Result<Box<dyn Page>, PageLoadError> {
    PracticePage::open(
        Section::Bellring,
        "Count the bell rings and answer quickly.",
        on_back,
        host,
    )
}

fn operations_page(on_back: BackHandle, host: &PageHost) -> Result<Box<dyn Page>, PageLoadError> {
    PracticePage::open(
        Section::Operations,
        "Add, subtract, multiply and divide.",
        on_back,
        host,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;
    use tutor_core::nav_channel;

    #[test]
    fn every_section_builds_its_own_page() {
        let dir = TempDir::new().expect("tempdir");
        let host = PageHost {
            language: Language::English,
            bank: QuestionBank::new(dir.path().join("question.xlsx")),
        };
        let (tx, _rx) = nav_channel();

        for section in Section::ALL {
            let page = PracticePages
                .load(section, BackHandle::new(tx.clone()), &host)
                .expect("page");
            assert_eq!(page.section(), section);
        }
    }

    #[test]
    fn corrupt_bank_fails_the_load() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("question.xlsx");
        std::fs::write(&path, b"garbage").expect("write");
        let host = PageHost {
            language: Language::English,
            bank: QuestionBank::new(path),
        };
        let (tx, _rx) = nav_channel();

        let err = PracticePages
            .load(Section::Time, BackHandle::new(tx), &host)
            .err()
            .expect("load should fail");
        assert_eq!(err.section, Section::Time);
    }
}
