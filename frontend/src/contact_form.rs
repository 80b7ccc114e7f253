//! State of the multi-step contact form. Nothing is sent anywhere; a
//! completed form is logged and thanked.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Experience {
    Text,
    Speech,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum YesNo {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Name,
    Contact,
    EventDate,
    Experience,
    Concept,
    Lora,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::Name,
        Step::Contact,
        Step::EventDate,
        Step::Experience,
        Step::Concept,
        Step::Lora,
    ];

    pub fn number(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0) + 1
    }

    pub fn question_key(self) -> &'static str {
        match self {
            Self::Name => "contact.name",
            Self::Contact => "contact.howToReach",
            Self::EventDate => "contact.eventDate",
            Self::Experience => "contact.whatKind",
            Self::Concept => "contact.tellUs",
            Self::Lora => "contact.loraQuestion",
        }
    }
}

pub const TOTAL_STEPS: usize = Step::ALL.len();

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub contact: String,
    pub event_date: String,
    pub experience: Option<Experience>,
    pub concept: String,
    pub lora: Option<YesNo>,
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

impl ContactForm {
    pub fn can_proceed(&self, step: Step) -> bool {
        match step {
            Step::Name => filled(&self.name),
            Step::Contact => filled(&self.contact) && self.contact.contains('@'),
            Step::EventDate => filled(&self.event_date),
            Step::Experience => self.experience.is_some(),
            Step::Concept => filled(&self.concept),
            Step::Lora => self.lora.is_some(),
        }
    }

    pub fn is_complete(&self) -> bool {
        Step::ALL.iter().all(|step| self.can_proceed(*step))
    }

    /// Selecting the current choice again clears it.
    pub fn toggle_experience(&mut self, choice: Experience) {
        self.experience = toggled(self.experience, choice);
    }

    pub fn toggle_lora(&mut self, choice: YesNo) {
        self.lora = toggled(self.lora, choice);
    }
}

fn toggled<T: PartialEq>(current: Option<T>, choice: T) -> Option<T> {
    match current {
        Some(value) if value == choice => None,
        _ => Some(choice),
    }
}

/// Where the visitor is in the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Intro,
    Asking(Step),
    Submitted,
}

impl Stage {
    pub fn next(self) -> Self {
        match self {
            Self::Intro => Self::Asking(Step::ALL[0]),
            Self::Asking(step) => match Step::ALL.get(step.number()) {
                Some(next) => Self::Asking(*next),
                None => Self::Asking(step),
            },
            Self::Submitted => Self::Submitted,
        }
    }

    pub fn back(self) -> Self {
        match self {
            Self::Asking(step) if step.number() > 1 => Self::Asking(Step::ALL[step.number() - 2]),
            Self::Asking(_) => Self::Intro,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_step_requires_an_at_sign() {
        let mut form = ContactForm {
            contact: "someone.example.com".to_string(),
            ..ContactForm::default()
        };
        assert!(!form.can_proceed(Step::Contact));
        form.contact = "someone@example.com".to_string();
        assert!(form.can_proceed(Step::Contact));
    }

    #[test]
    fn blank_text_does_not_count() {
        let form = ContactForm {
            name: "   ".to_string(),
            ..ContactForm::default()
        };
        assert!(!form.can_proceed(Step::Name));
        assert!(!form.is_complete());
    }

    #[test]
    fn choices_toggle_off() {
        let mut form = ContactForm::default();
        form.toggle_experience(Experience::Speech);
        assert_eq!(form.experience, Some(Experience::Speech));
        form.toggle_experience(Experience::Text);
        assert_eq!(form.experience, Some(Experience::Text));
        form.toggle_experience(Experience::Text);
        assert_eq!(form.experience, None);
    }

    #[test]
    fn stages_walk_forward_and_back() {
        let mut stage = Stage::Intro;
        for _ in 0..TOTAL_STEPS {
            stage = stage.next();
        }
        assert_eq!(stage, Stage::Asking(Step::Lora));
        assert_eq!(stage.next(), Stage::Asking(Step::Lora));
        assert_eq!(Stage::Asking(Step::Contact).back(), Stage::Asking(Step::Name));
        assert_eq!(Stage::Asking(Step::Name).back(), Stage::Intro);
        assert_eq!(Step::Concept.number(), 5);
    }

    #[test]
    fn complete_form() {
        let mut form = ContactForm {
            name: "Ada".to_string(),
            contact: "ada@example.com".to_string(),
            event_date: "June 2026".to_string(),
            concept: "Speech-driven visuals for a gala".to_string(),
            ..ContactForm::default()
        };
        form.toggle_experience(Experience::Speech);
        assert!(!form.is_complete());
        form.toggle_lora(YesNo::No);
        assert!(form.is_complete());
    }
}
