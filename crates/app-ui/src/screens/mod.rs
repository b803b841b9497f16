//! Screens of the onboarding flow
//!
//! A screen is mounted when its route reaches the top of the stack and
//! dropped when it leaves. It turns raw [`UiEvent`]s into at most one
//! [`ScreenAction`] and renders a [`ScreenView`] for the host.

use app_core::{Submission, ValidationError};
use serde::{Deserialize, Serialize};

use crate::animation::EntranceAnimation;
use crate::components::{
    BackButtonView, ButtonView, Image, InputView, ScreenContainerView, SpinnerView, TextView,
    UiContext,
};
use crate::navigation::{NavEvent, Route};

pub mod login;
pub mod register;
pub mod splash;
pub mod welcome;

pub use login::LoginScreen;
pub use register::RegisterScreen;
pub use splash::SplashScreen;
pub use welcome::WelcomeScreen;

// =============================================================================
// Events and Actions
// =============================================================================

/// Identifier of an interactive element on a screen
pub type ElementId = &'static str;

/// Element identifiers shared with the host
pub mod ids {
    /// Back button
    pub const BACK: &str = "back";
    /// "Sign In" on Welcome
    pub const SIGN_IN: &str = "sign_in";
    /// "Get Started" on Welcome
    pub const GET_STARTED: &str = "get_started";
    /// Welcome hero image
    pub const HERO: &str = "hero";
    /// Welcome headline block
    pub const HEADLINE: &str = "headline";
    /// Welcome subtitle block
    pub const SUBTITLE: &str = "subtitle";
    /// Splash logo
    pub const LOGO: &str = "logo";
    /// Form heading
    pub const HEADING: &str = "heading";
    /// Form caption
    pub const CAPTION: &str = "caption";
    /// Name field
    pub const NAME: &str = "name";
    /// Email field
    pub const EMAIL: &str = "email";
    /// Password field
    pub const PASSWORD: &str = "password";
    /// Password visibility toggle
    pub const PASSWORD_TOGGLE: &str = "password_toggle";
    /// "Forgot Password?"
    pub const FORGOT_PASSWORD: &str = "forgot_password";
    /// Form submit button
    pub const SUBMIT: &str = "submit";
    /// Footer prompt text
    pub const FOOTER: &str = "footer";
    /// "Sign up" link on Login
    pub const SIGN_UP: &str = "sign_up";
    /// "Login" link on Register
    pub const LOGIN: &str = "login";
}

/// Raw input delivered to the mounted screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Completed press on an element
    Tap(ElementId),
    /// Text typed into a field
    ChangeText {
        /// Field
        field: ElementId,
        /// Full new value
        text: String,
    },
    /// Field gained focus
    Focus(ElementId),
    /// Field lost focus
    Blur(ElementId),
    /// The on-screen alert was dismissed
    DismissAlert,
    /// The splash hold elapsed for the splash mounted as `mount_id`
    SplashElapsed {
        /// Mount that scheduled the timer
        mount_id: u64,
    },
    /// The submit handler returned for the form mounted as `mount_id`
    SubmitFinished {
        /// Mount that started the submission
        mount_id: u64,
    },
}

/// What a screen asks its owner to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    /// Feed an event to the navigation orchestrator
    Navigate(NavEvent),
    /// Run the submit handler with a validated form
    ///
    /// The screen stays loading until it sees [`UiEvent::SubmitFinished`].
    Submit(Submission),
}

// =============================================================================
// Rendered Output
// =============================================================================

/// Blocking prompt shown over a screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Title
    pub title: String,
    /// Message
    pub message: String,
}

impl From<&ValidationError> for Alert {
    fn from(error: &ValidationError) -> Self {
        Self {
            title: error.title().to_string(),
            message: error.user_message().to_string(),
        }
    }
}

/// Rendered primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// Text
    Text(TextView),
    /// Button
    Button(ButtonView),
    /// Text input
    Input(InputView),
    /// Back button
    BackButton(BackButtonView),
    /// Image
    Image(Image),
    /// Spinner
    Spinner(SpinnerView),
}

/// One element in a screen's render tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementView {
    /// Element identifier
    pub id: ElementId,
    /// Rendered primitive
    pub node: Node,
    /// Entrance animation, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrance: Option<EntranceAnimation>,
}

impl ElementView {
    /// Element without entrance animation
    pub fn new(id: ElementId, node: Node) -> Self {
        Self {
            id,
            node,
            entrance: None,
        }
    }

    /// Attach an entrance animation
    pub fn entering(mut self, animation: EntranceAnimation) -> Self {
        self.entrance = Some(animation);
        self
    }
}

/// Complete render of a mounted screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenView {
    /// Route of the screen
    pub route: Route,
    /// Root container
    pub container: ScreenContainerView,
    /// Elements, top to bottom
    pub elements: Vec<ElementView>,
    /// Alert currently shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<Alert>,
}

impl ScreenView {
    /// Find an element by id (first match)
    pub fn element(&self, id: &str) -> Option<&ElementView> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// All elements with the given id
    pub fn elements_with_id<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a ElementView> {
        self.elements.iter().filter(move |e| e.id == id)
    }

    /// Serialize for the host
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

// =============================================================================
// Screen Trait
// =============================================================================

/// A mounted screen
pub trait Screen: Send {
    /// Route this screen renders
    fn route(&self) -> Route;

    /// Render against a context
    fn render(&self, ctx: &UiContext) -> ScreenView;

    /// Handle an input event
    fn handle(&mut self, event: &UiEvent) -> Option<ScreenAction>;
}

/// Whichever screen is on top
#[derive(Debug)]
pub enum MountedScreen {
    /// Splash
    Splash(SplashScreen),
    /// Welcome
    Welcome(WelcomeScreen),
    /// Login
    Login(LoginScreen),
    /// Register
    Register(RegisterScreen),
}

impl MountedScreen {
    fn as_screen(&self) -> &dyn Screen {
        match self {
            MountedScreen::Splash(s) => s,
            MountedScreen::Welcome(s) => s,
            MountedScreen::Login(s) => s,
            MountedScreen::Register(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            MountedScreen::Splash(s) => s,
            MountedScreen::Welcome(s) => s,
            MountedScreen::Login(s) => s,
            MountedScreen::Register(s) => s,
        }
    }
}

impl Screen for MountedScreen {
    fn route(&self) -> Route {
        self.as_screen().route()
    }

    fn render(&self, ctx: &UiContext) -> ScreenView {
        self.as_screen().render(ctx)
    }

    fn handle(&mut self, event: &UiEvent) -> Option<ScreenAction> {
        self.as_screen_mut().handle(event)
    }
}
