// SPDX-License-Identifier: MPL-2.0
//! Contact form: name, email and message with inline validation.
//!
//! There is no transport. A valid submission clears the form and tells the
//! parent, which shows a success toast.

use crate::i18n::fluent::I18n;
use crate::ui::animation::{posed, Reveal, Transition};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, text_editor, text_input, Column, Text};
use iced::{Element, Length, Vector};
use std::time::{Duration, Instant};

/// Form fields in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    fn label_key(self) -> &'static str {
        match self {
            Field::Name => "contact-name-label",
            Field::Email => "contact-email-label",
            Field::Message => "contact-message-label",
        }
    }

    fn placeholder_key(self) -> &'static str {
        match self {
            Field::Name => "contact-name-placeholder",
            Field::Email => "contact-email-placeholder",
            Field::Message => "contact-message-placeholder",
        }
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Empty,
    InvalidEmail,
}

impl FieldError {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            FieldError::Empty => "contact-error-required",
            FieldError::InvalidEmail => "contact-error-email",
        }
    }
}

/// A validated message, trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// `local@domain.tld` with no whitespace, one `@`, and a dot inside the
/// domain that has text on both sides.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .rsplit_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Checks all three fields. Errors come back in field order.
pub fn validate(
    name: &str,
    email: &str,
    message: &str,
) -> Result<Submission, Vec<(Field, FieldError)>> {
    let (name, email, message) = (name.trim(), email.trim(), message.trim());
    let mut errors = Vec::new();

    if name.is_empty() {
        errors.push((Field::Name, FieldError::Empty));
    }
    if email.is_empty() {
        errors.push((Field::Email, FieldError::Empty));
    } else if !is_valid_email(email) {
        errors.push((Field::Email, FieldError::InvalidEmail));
    }
    if message.is_empty() {
        errors.push((Field::Message, FieldError::Empty));
    }

    if errors.is_empty() {
        Ok(Submission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    } else {
        Err(errors)
    }
}

#[derive(Debug, Default)]
pub struct State {
    name: String,
    email: String,
    message: text_editor::Content,
    errors: Vec<(Field, FieldError)>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn message(&self) -> String {
        self.message.text()
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, error)| *error)
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn clear_error(&mut self, field: Field) {
        self.errors.retain(|(f, _)| *f != field);
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub reveal: Reveal,
    pub reduce_motion: bool,
    pub now: Instant,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageEdited(text_editor::Action),
    Submit,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    Submitted(Submission),
    Rejected,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::NameChanged(value) => {
            state.name = value;
            state.clear_error(Field::Name);
            Event::None
        }
        Message::EmailChanged(value) => {
            state.email = value;
            state.clear_error(Field::Email);
            Event::None
        }
        Message::MessageEdited(action) => {
            if action.is_edit() {
                state.clear_error(Field::Message);
            }
            state.message.perform(action);
            Event::None
        }
        Message::Submit => match validate(&state.name, &state.email, &state.message.text()) {
            Ok(submission) => {
                *state = State::default();
                tracing::info!(name = %submission.name, "contact form submitted");
                Event::Submitted(submission)
            }
            Err(errors) => {
                tracing::debug!(?errors, "contact form rejected");
                state.errors = errors;
                Event::Rejected
            }
        },
    }
}

/// Vertical room each field reserves for its slide-in.
pub const FIELD_RESERVE: f32 = 20.0;

/// Height of the rendered form, used by the page layout.
#[must_use]
pub fn height() -> f32 {
    let label = typography::BODY * 1.5;
    let error_line = typography::CAPTION * 1.5;
    let field_block = |control: f32| label + spacing::XS + control + spacing::XXS + error_line;
    field_block(sizing::INPUT_HEIGHT) * 2.0
        + field_block(sizing::TEXT_AREA_HEIGHT)
        + sizing::BUTTON_HEIGHT
        + FIELD_RESERVE * 2.0 * 4.0
        + spacing::MD * 3.0
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;
    let mut form = Column::new().spacing(spacing::MD).width(Length::Fill);

    for (index, field) in Field::ALL.into_iter().enumerate() {
        let transition = field_transition(ctx.reduce_motion, index);
        let pose = ctx.reveal.pose(&transition, ctx.now);
        let alpha = pose.opacity;
        let invalid = state.error(field).is_some();

        let control: Element<'a, Message> = match field {
            Field::Name => text_input(&ctx.i18n.tr(field.placeholder_key()), &state.name)
                .on_input(Message::NameChanged)
                .on_submit(Message::Submit)
                .padding(spacing::XS)
                .size(typography::BODY)
                .style(styles::text_input::field(invalid, alpha))
                .into(),
            Field::Email => text_input(&ctx.i18n.tr(field.placeholder_key()), &state.email)
                .on_input(Message::EmailChanged)
                .on_submit(Message::Submit)
                .padding(spacing::XS)
                .size(typography::BODY)
                .style(styles::text_input::field(invalid, alpha))
                .into(),
            Field::Message => text_editor(&state.message)
                .placeholder(ctx.i18n.tr(field.placeholder_key()))
                .on_action(Message::MessageEdited)
                .padding(spacing::XS)
                .size(typography::BODY)
                .height(Length::Fixed(sizing::TEXT_AREA_HEIGHT))
                .into(),
        };

        let error_text = state
            .error(field)
            .map(|error| ctx.i18n.tr(error.i18n_key()))
            .unwrap_or_default();

        let block = Column::new()
            .spacing(spacing::XS)
            .push(
                Text::new(ctx.i18n.tr(field.label_key()))
                    .size(typography::BODY)
                    .style(styles::text::primary(alpha)),
            )
            .push(control)
            .push(
                text(error_text)
                    .size(typography::CAPTION)
                    .style(styles::text::error(alpha)),
            );

        form = form.push(posed(block, pose, Vector::new(0.0, FIELD_RESERVE)));
    }

    let submit_pose = ctx
        .reveal
        .pose(&field_transition(ctx.reduce_motion, Field::ALL.len()), ctx.now);
    let submit = button(
        Text::new(ctx.i18n.tr("contact-submit"))
            .size(typography::BODY)
            .width(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center),
    )
    .on_press(Message::Submit)
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .style(styles::button::primary(submit_pose.opacity));

    form.push(posed(submit, submit_pose, Vector::new(0.0, FIELD_RESERVE)))
        .into()
}

/// Field `index` slides up after the contact links.
fn field_transition(reduce_motion: bool, index: usize) -> Transition {
    Transition::text(
        reduce_motion,
        Duration::from_millis(300 + 100 * index as u64),
    )
}

/// Longest running field transition, for the animation tick.
#[must_use]
pub fn transition_span(reduce_motion: bool) -> Duration {
    field_transition(reduce_motion, Field::ALL.len()).total()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_rules() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("  first.last@mail.example.org "));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada@.com"));
        assert!(!is_valid_email("ada@example."));
        assert!(!is_valid_email("ada@@example.com"));
        assert!(!is_valid_email("ada lovelace@example.com"));
        assert!(!is_valid_email("ada.example.com"));
    }

    #[test]
    fn validate_reports_every_field_in_order() {
        let errors = validate("  ", "nope", "\n").unwrap_err();
        assert_eq!(
            errors,
            vec![
                (Field::Name, FieldError::Empty),
                (Field::Email, FieldError::InvalidEmail),
                (Field::Message, FieldError::Empty),
            ]
        );
        let errors = validate("Ada", "", "hi").unwrap_err();
        assert_eq!(errors, vec![(Field::Email, FieldError::Empty)]);
    }

    #[test]
    fn validate_trims_values() {
        let submission = validate(" Ada ", " ada@example.com ", " Hello\n").unwrap();
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.message, "Hello");
    }

    #[test]
    fn invalid_submit_keeps_input_and_flags_fields() {
        let mut state = State::new();
        update(&mut state, Message::NameChanged("Ada".into()));
        update(&mut state, Message::EmailChanged("ada@".into()));

        assert!(matches!(update(&mut state, Message::Submit), Event::Rejected));
        assert_eq!(state.name(), "Ada");
        assert_eq!(state.error(Field::Name), None);
        assert_eq!(state.error(Field::Email), Some(FieldError::InvalidEmail));
        assert_eq!(state.error(Field::Message), Some(FieldError::Empty));

        // Editing a field clears its error only
        update(&mut state, Message::EmailChanged("ada@example.com".into()));
        assert_eq!(state.error(Field::Email), None);
        assert_eq!(state.error(Field::Message), Some(FieldError::Empty));
    }

    #[test]
    fn valid_submit_clears_form() {
        let mut state = State::new();
        update(&mut state, Message::NameChanged("Ada".into()));
        update(&mut state, Message::EmailChanged("ada@example.com".into()));
        update(
            &mut state,
            Message::MessageEdited(text_editor::Action::Edit(text_editor::Edit::Paste(
                std::sync::Arc::new("Hello there".to_string()),
            ))),
        );
        assert_eq!(state.message().trim(), "Hello there");

        match update(&mut state, Message::Submit) {
            Event::Submitted(submission) => {
                assert_eq!(submission.message, "Hello there");
            }
            other => panic!("expected submission, got {other:?}"),
        }
        assert!(state.name().is_empty());
        assert!(state.email().is_empty());
        assert!(state.message().trim().is_empty());
        assert!(!state.has_errors());
    }

    #[test]
    fn fields_stagger_after_links() {
        assert_eq!(field_transition(false, 0).delay, Duration::from_millis(300));
        assert_eq!(field_transition(false, 3).delay, Duration::from_millis(600));
        assert!(transition_span(true) < transition_span(false));
    }
}
