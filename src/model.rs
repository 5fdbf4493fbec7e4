/// Exam number meaning "no selection" (the first `—` option of a selector).
pub const NO_SELECTION: i32 = 0;

/// Task numbers in the bank run 1..=27 (ЕГЭ по информатике).
pub const MAX_EXAM_NUMBER: i32 = 27;

/// One pre-rendered problem fragment as the backend returns it.
pub type Problem = String;

/// Which of the two selectors a selection came from. Outdated problem sets
/// are keyed with negative exam numbers in the bank, current ones positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExamKind {
    Current,
    Outdated,
}

impl ExamKind {
    pub fn sibling(self) -> ExamKind {
        match self {
            ExamKind::Current => ExamKind::Outdated,
            ExamKind::Outdated => ExamKind::Current,
        }
    }

    /// Genitive label used inside the result headings.
    pub fn label(self) -> &'static str {
        match self {
            ExamKind::Current => "актуальных",
            ExamKind::Outdated => "устаревших",
        }
    }

    pub fn selector_title(self) -> &'static str {
        match self {
            ExamKind::Current => "Актуальные задания",
            ExamKind::Outdated => "Устаревшие задания",
        }
    }

    /// Selectable exam numbers for this kind, sentinel excluded.
    pub fn options(self) -> impl Iterator<Item = i32> {
        let sign = match self {
            ExamKind::Current => 1,
            ExamKind::Outdated => -1,
        };
        (1..=MAX_EXAM_NUMBER).map(move |n| n * sign)
    }
}

/// Render state of the problems area. Request-scoped: every applied fetch
/// replaces it wholesale.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ProblemsView {
    #[default]
    Idle,
    Loading {
        kind: ExamKind,
        exam_number: i32,
    },
    Loaded {
        kind: ExamKind,
        exam_number: i32,
        problems: Vec<Problem>,
    },
}

pub fn count_heading(kind: ExamKind, exam_number: i32, count: usize) -> String {
    format!(
        "Количество {} заданий {} типа: {}",
        kind.label(),
        exam_number.abs(),
        count
    )
}

pub fn empty_heading(kind: ExamKind, exam_number: i32) -> String {
    format!(
        "Нет заданий выбранного типа ({}, {} тип).",
        kind.label(),
        exam_number.abs()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_heading_contains_label_number_and_count() {
        let heading = count_heading(ExamKind::Current, 5, 3);
        assert!(heading.contains("актуальных"));
        assert!(heading.contains("5 типа"));
        assert!(heading.ends_with(": 3"));
    }

    #[test]
    fn headings_use_absolute_exam_numbers() {
        assert!(count_heading(ExamKind::Outdated, -12, 1).contains("12 типа"));
        assert!(empty_heading(ExamKind::Outdated, -12).contains("12 тип"));
        assert!(empty_heading(ExamKind::Outdated, -12).contains("устаревших"));
    }

    #[test]
    fn view_starts_idle() {
        assert_eq!(ProblemsView::default(), ProblemsView::Idle);
    }

    #[test]
    fn sibling_is_an_involution() {
        assert_eq!(ExamKind::Current.sibling(), ExamKind::Outdated);
        assert_eq!(ExamKind::Outdated.sibling(), ExamKind::Current);
        assert_eq!(ExamKind::Current.sibling().sibling(), ExamKind::Current);
    }

    #[test]
    fn outdated_options_mirror_current_ones_negated() {
        assert!(ExamKind::Current.options().all(|n| n > 0));
        assert!(ExamKind::Outdated.options().all(|n| n < 0));
        let mirrored: Vec<i32> = ExamKind::Current.options().map(|n| -n).collect();
        let outdated: Vec<i32> = ExamKind::Outdated.options().collect();
        assert_eq!(mirrored, outdated);
    }
}
