//! Sign in screen

use app_core::LoginForm;
use std::sync::Arc;

use super::{ids, Alert, ElementView, Node, Screen, ScreenAction, ScreenView, UiEvent};
use crate::components::{
    Alignment, BackButton, Button, Icon, Input, Link, ScreenContainer, Spacing, StyleProps, Text,
    UiContext,
};
use crate::navigation::{NavEvent, Route};
use crate::theme::Theme;
use crate::tokens::{font_weight, sizing, spacing_y};
use crate::typography::font_size;

#[derive(Debug, Clone, PartialEq)]
enum LoginAction {
    Back,
    EmailChanged(String),
    PasswordChanged(String),
    TogglePassword,
    Submit,
    SignUp,
}

/// Leading field icon
pub(crate) fn field_icon(theme: &Theme, name: &str) -> Icon {
    Icon::new(name, sizing::icon::LEADING, theme.colors.neutral.n400.clone())
}

/// Visibility toggle icon for a password field
pub(crate) fn password_toggle_icon(theme: &Theme, show_password: bool) -> Icon {
    let name = if show_password { "eye-slash" } else { "eye" };
    Icon::new(name, sizing::icon::TRAILING, theme.colors.neutral.n300.clone())
}

/// Mounted sign in screen
#[derive(Debug)]
pub struct LoginScreen {
    theme: Arc<Theme>,
    form: LoginForm,
    show_password: bool,
    alert: Option<Alert>,
    back: BackButton<LoginAction>,
    email: Input<LoginAction>,
    password: Input<LoginAction>,
    submit: Button<LoginAction>,
    sign_up: Link<LoginAction>,
}

impl LoginScreen {
    /// Mount with empty fields
    pub fn mount(theme: Arc<Theme>) -> Self {
        tracing::debug!("Login mounted");
        Self {
            email: Input::new()
                .with_placeholder("Enter your Email")
                .with_leading_icon(field_icon(&theme, "at"))
                .on_change_text(LoginAction::EmailChanged),
            password: Input::new()
                .with_placeholder("Enter your password")
                .secure(true)
                .with_leading_icon(field_icon(&theme, "password"))
                .with_trailing_icon(password_toggle_icon(&theme, false))
                .on_change_text(LoginAction::PasswordChanged)
                .on_trailing_icon_press(LoginAction::TogglePassword),
            theme,
            form: LoginForm::default(),
            show_password: false,
            alert: None,
            back: BackButton::new(LoginAction::Back).with_icon_size(sizing::icon::BACK),
            submit: Button::new()
                .with_label(
                    Text::new("Login")
                        .size(font_size::BUTTON)
                        .weight(font_weight::BOLD),
                )
                .on_press(LoginAction::Submit),
            sign_up: Link::new(
                Text::new("Sign up")
                    .size(font_size::FOOTER)
                    .weight(font_weight::BOLD),
                LoginAction::SignUp,
            ),
        }
    }

    /// Values typed so far
    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    /// Whether a submission is in flight
    pub fn is_loading(&self) -> bool {
        self.submit.loading
    }

    /// Whether the password is shown in clear text
    pub fn shows_password(&self) -> bool {
        self.show_password
    }

    /// Alert currently shown
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    fn field_mut(&mut self, id: &str) -> Option<&mut Input<LoginAction>> {
        match id {
            ids::EMAIL => Some(&mut self.email),
            ids::PASSWORD => Some(&mut self.password),
            _ => None,
        }
    }

    fn apply(&mut self, action: LoginAction) -> Option<ScreenAction> {
        match action {
            LoginAction::Back => Some(ScreenAction::Navigate(NavEvent::BackTapped)),
            LoginAction::SignUp => Some(ScreenAction::Navigate(NavEvent::SignUpTapped)),
            LoginAction::Submit => match self.form.submission() {
                Ok(submission) => {
                    self.submit.loading = true;
                    Some(ScreenAction::Submit(submission))
                }
                Err(e) => {
                    self.alert = Some(Alert::from(&e));
                    None
                }
            },
            LoginAction::EmailChanged(value) => {
                self.form.email = value;
                None
            }
            LoginAction::PasswordChanged(value) => {
                self.form.password = value;
                None
            }
            LoginAction::TogglePassword => {
                self.show_password = !self.show_password;
                self.password.secure_text_entry = !self.show_password;
                self.password.trailing_icon =
                    Some(password_toggle_icon(&self.theme, self.show_password));
                None
            }
        }
    }
}

impl Screen for LoginScreen {
    fn route(&self) -> Route {
        Route::Login
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

        for line in ["Hey,", "Welcome Back"] {
            let text = Text::new(line)
                .size(font_size::DISPLAY)
                .weight(font_weight::HEAVY)
                .render(ctx);
            elements.push(ElementView::new(ids::HEADING, Node::Text(text)));
        }

        let caption = Text::new("Login now to track your expenses")
            .size(font_size::CAPTION)
            .color(colors.text_light.clone())
            .render(ctx);
        elements.push(ElementView::new(ids::CAPTION, Node::Text(caption)));

        elements.push(ElementView::new(ids::EMAIL, Node::Input(self.email.render(ctx))));
        elements.push(ElementView::new(
            ids::PASSWORD,
            Node::Input(self.password.render(ctx)),
        ));

        let forgot = Text::new("Forgot Password?")
            .size(font_size::SM)
            .with_style(StyleProps {
                align_self: Some(Alignment::FlexEnd),
                ..Default::default()
            })
            .render(ctx);
        elements.push(ElementView::new(ids::FORGOT_PASSWORD, Node::Text(forgot)));

        let mut submit = self.submit.render(ctx);
        if let Some(label) = submit.label.as_mut() {
            label.style.color = Some(colors.black.clone());
        }
        elements.push(ElementView::new(ids::SUBMIT, Node::Button(submit)));

        let footer = Text::new("Don't have an account?")
            .size(font_size::FOOTER)
            .render(ctx);
        elements.push(ElementView::new(ids::FOOTER, Node::Text(footer)));

        let mut sign_up = self.sign_up.render(ctx);
        sign_up.style.color = Some(colors.primary.clone());
        elements.push(ElementView::new(ids::SIGN_UP, Node::Text(sign_up)));

        ScreenView {
            route: Route::Login,
            container,
            elements,
            alert: self.alert.clone(),
        }
    }

    fn handle(&mut self, event: &UiEvent) -> Option<ScreenAction> {
        let action = match event {
            UiEvent::Tap(ids::BACK) => self.back.tap(),
            UiEvent::Tap(ids::SIGN_UP) => self.sign_up.tap(),
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
