//! Sign up screen

use app_core::RegisterForm;
use std::sync::Arc;

use super::login::{field_icon, password_toggle_icon};
use super::{ids, Alert, ElementView, Node, Screen, ScreenAction, ScreenView, UiEvent};
use crate::components::{
    BackButton, Button, Input, Link, ScreenContainer, Spacing, StyleProps, Text, UiContext,
};
use crate::navigation::{NavEvent, Route};
use crate::theme::Theme;
use crate::tokens::{font_weight, sizing, spacing_y};
use crate::typography::font_size;

#[derive(Debug, Clone, PartialEq)]
enum RegisterAction {
    Back,
    NameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    TogglePassword,
    Submit,
}

/// Mounted sign up screen
#[derive(Debug)]
pub struct RegisterScreen {
    theme: Arc<Theme>,
    form: RegisterForm,
    show_password: bool,
    alert: Option<Alert>,
    back: BackButton<RegisterAction>,
    name: Input<RegisterAction>,
    email: Input<RegisterAction>,
    password: Input<RegisterAction>,
    submit: Button<RegisterAction>,
    login: Link<RegisterAction>,
}

impl RegisterScreen {
    /// Mount with empty fields
    pub fn mount(theme: Arc<Theme>) -> Self {
        tracing::debug!("Register mounted");
        Self {
            name: Input::new()
                .with_placeholder("Enter your name")
                .with_leading_icon(field_icon(&theme, "user"))
                .on_change_text(RegisterAction::NameChanged),
            email: Input::new()
                .with_placeholder("Enter your Email")
                .with_leading_icon(field_icon(&theme, "at"))
                .on_change_text(RegisterAction::EmailChanged),
            password: Input::new()
                .with_placeholder("Enter your password")
                .secure(true)
                .with_leading_icon(field_icon(&theme, "password"))
                .with_trailing_icon(password_toggle_icon(&theme, false))
                .on_change_text(RegisterAction::PasswordChanged)
                .on_trailing_icon_press(RegisterAction::TogglePassword),
            theme,
            form: RegisterForm::default(),
            show_password: false,
            alert: None,
            back: BackButton::new(RegisterAction::Back).with_icon_size(sizing::icon::BACK),
            submit: Button::new()
                .with_label(
                    Text::new("Sign Up")
                        .size(font_size::BUTTON)
                        .weight(font_weight::BOLD),
                )
                .on_press(RegisterAction::Submit),
            // Pops to whichever screen opened sign up: Login or Welcome
            login: Link::new(
                Text::new("Login")
                    .size(font_size::FOOTER)
                    .weight(font_weight::BOLD),
                RegisterAction::Back,
            ),
        }
    }

    /// Values typed so far
    pub fn form(&self) -> &RegisterForm {
        &self.form
    }

    /// Whether a submission is in flight
    pub fn is_loading(&self) -> bool {
        self.submit.loading
    }

    /// Alert currently shown
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    fn field_mut(&mut self, id: &str) -> Option<&mut Input<RegisterAction>> {
        match id {
            ids::NAME => Some(&mut self.name),
            ids::EMAIL => Some(&mut self.email),
            ids::PASSWORD => Some(&mut self.password),
            _ => None,
        }
    }

    fn apply(&mut self, action: RegisterAction) -> Option<ScreenAction> {
        match action {
            RegisterAction::Back => Some(ScreenAction::Navigate(NavEvent::BackTapped)),
            RegisterAction::Submit => match self.form.submission() {
                Ok(submission) => {
                    self.submit.loading = true;
                    Some(ScreenAction::Submit(submission))
                }
                Err(e) => {
                    self.alert = Some(Alert::from(&e));
                    None
                }
            },
            RegisterAction::NameChanged(value) => {
                self.form.name = value;
                None
            }
            RegisterAction::EmailChanged(value) => {
                self.form.email = value;
                None
            }
            RegisterAction::PasswordChanged(value) => {
                self.form.password = value;
                None
            }
            RegisterAction::TogglePassword => {
                self.show_password = !self.show_password;
                self.password.secure_text_entry = !self.show_password;
                self.password.trailing_icon =
                    Some(password_toggle_icon(&self.theme, self.show_password));
                None
            }
        }
    }
}

impl Screen for RegisterScreen {
    fn route(&self) -> Route {
        Route::Register
    }

    fn render(&self, ctx: &UiContext) -> ScreenView {
        let colors = &ctx.theme.colors;
        let container = ScreenContainer::new()
            .with_style(StyleProps {
                gap: Some(ctx.space_y(spacing_y::S30)),
                padding: Some(Spacing::horizontal(ctx.space_y(spacing_y::S20))),
                ..Default::default()
            })
            .render(ctx);

        let mut elements = vec![ElementView::new(
            ids::BACK,
            Node::BackButton(self.back.render(ctx)),
        )];

        for line in ["Let's", "Get Started"] {
            let text = Text::new(line)
                .size(font_size::DISPLAY)
                .weight(font_weight::HEAVY)
                .render(ctx);
            elements.push(ElementView::new(ids::HEADING, Node::Text(text)));
        }

        let caption = Text::new("Create an account to track your expenses")
            .size(font_size::CAPTION)
            .color(colors.text_light.clone())
            .render(ctx);
        elements.push(ElementView::new(ids::CAPTION, Node::Text(caption)));

        for (id, input) in [
            (ids::NAME, &self.name),
            (ids::EMAIL, &self.email),
            (ids::PASSWORD, &self.password),
        ] {
            elements.push(ElementView::new(id, Node::Input(input.render(ctx))));
        }

        let mut submit = self.submit.render(ctx);
        if let Some(label) = submit.label.as_mut() {
            label.style.color = Some(colors.black.clone());
        }
        elements.push(ElementView::new(ids::SUBMIT, Node::Button(submit)));

        let footer = Text::new("Already have an account?")
            .size(font_size::FOOTER)
            .render(ctx);
        elements.push(ElementView::new(ids::FOOTER, Node::Text(footer)));

        let mut login = self.login.render(ctx);
        login.style.color = Some(colors.primary.clone());
        elements.push(ElementView::new(ids::LOGIN, Node::Text(login)));

        ScreenView {
            route: Route::Register,
            container,
            elements,
            alert: self.alert.clone(),
        }
    }

    fn handle(&mut self, event: &UiEvent) -> Option<ScreenAction> {
        let action = match event {
            UiEvent::Tap(ids::BACK) => self.back.tap(),
            UiEvent::Tap(ids::LOGIN) => self.login.tap(),
            UiEvent::Tap(ids::SUBMIT) => self.submit.tap(),
            UiEvent::Tap(ids::PASSWORD_TOGGLE) => self.password.press_trailing_icon(),
            UiEvent::ChangeText { field, text } => self
                .field_mut(field)
                .and_then(|input| input.change_text(text.clone())),
            UiEvent::Focus(field) => {
                if let Some(input) = self.field_mut(field) {
                    input.focus();
                }
                None
            }
            UiEvent::Blur(field) => {
                if let Some(input) = self.field_mut(field) {
                    input.blur();
                }
                None
            }
            UiEvent::DismissAlert => {
                self.alert = None;
                None
            }
            UiEvent::SubmitFinished { .. } => {
                self.submit.loading = false;
                None
            }
            _ => None,
        }?;
        self.apply(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::test_support::ctx;
    use app_core::{Registration, Submission};

    fn mounted() -> RegisterScreen {
        RegisterScreen::mount(Arc::new(Theme::standard()))
    }

    fn fill(screen: &mut RegisterScreen, name: &str, email: &str, password: &str) {
        for (field, text) in [(ids::NAME, name), (ids::EMAIL, email), (ids::PASSWORD, password)] {
            screen.handle(&UiEvent::ChangeText {
                field,
                text: text.to_string(),
            });
        }
    }

    #[test]
    fn test_back_and_login_link_pop() {
        let mut screen = mounted();
        let back = Some(ScreenAction::Navigate(NavEvent::BackTapped));
        assert_eq!(screen.handle(&UiEvent::Tap(ids::BACK)), back);
        assert_eq!(screen.handle(&UiEvent::Tap(ids::LOGIN)), back);
    }

    #[test]
    fn test_password_toggle() {
        let mut screen = mounted();
        screen.handle(&UiEvent::Tap(ids::PASSWORD_TOGGLE));
        let view = screen.render(&ctx());
        let Node::Input(password) = &view.element(ids::PASSWORD).unwrap().node else {
            panic!("password should be an input");
        };
        assert!(!password.secure_text_entry);
        assert_eq!(password.trailing_icon.as_ref().unwrap().name, "eye-slash");
    }

    #[test]
    fn test_missing_name_blocks_submit() {
        let mut screen = mounted();
        fill(&mut screen, "", "sam@example.com", "hunter2");
        assert_eq!(screen.handle(&UiEvent::Tap(ids::SUBMIT)), None);
        assert!(!screen.is_loading());

        let alert = screen.alert().unwrap();
        assert_eq!(alert.title, "Sign up");
        assert_eq!(alert.message, "Please fill all the fields");
    }

    #[test]
    fn test_complete_form_submits_registration() {
        let mut screen = mounted();
        fill(&mut screen, "Sam", "sam@example.com", "hunter2");
        assert_eq!(screen.form().name, "Sam");

        let action = screen.handle(&UiEvent::Tap(ids::SUBMIT));
        let Some(ScreenAction::Submit(submission)) = action else {
            panic!("complete form should submit");
        };
        assert_eq!(
            submission,
            Submission::Register(Registration {
                name: "Sam".to_string(),
                email: "sam@example.com".to_string(),
                password: "hunter2".to_string(),
            })
        );
        assert!(screen.is_loading());
        assert!(screen.alert().is_none());
        assert_eq!(screen.handle(&UiEvent::Tap(ids::SUBMIT)), None);

        screen.handle(&UiEvent::SubmitFinished { mount_id: 3 });
        assert!(!screen.is_loading());
    }

    #[test]
    fn test_render() {
        let view = mounted().render(&ctx());
        assert_eq!(view.route, Route::Register);
        for id in [ids::NAME, ids::EMAIL, ids::PASSWORD] {
            assert!(matches!(view.element(id).unwrap().node, Node::Input(_)));
        }
        assert!(view.alert.is_none());
    }
}
