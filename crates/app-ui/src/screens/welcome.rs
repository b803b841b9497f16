//! Onboarding landing screen

use app_state::AnimationGuard;

use super::{ids, ElementView, Node, Screen, ScreenAction, ScreenView, UiEvent};
use crate::animation::EntranceAnimation;
use crate::components::{
    Alignment, Button, Dimension, Image, JustifyContent, Link, ScreenContainer, Spacing,
    StyleProps, Text, UiContext,
};
use crate::navigation::{NavEvent, Route};
use crate::tokens::{duration, font_weight, sizing, spacing_x, spacing_y, spring};
use crate::typography::font_size;

/// Hero image asset
pub const HERO_ASSET: &str = "assets/images/welcome.png";

/// Mounted welcome screen
#[derive(Debug)]
pub struct WelcomeScreen {
    animate: bool,
    sign_in: Link<NavEvent>,
    get_started: Button<NavEvent>,
}

impl WelcomeScreen {
    /// Mount, consulting the guard once for the entrance animations
    pub fn mount(guard: &AnimationGuard) -> Self {
        let animate = guard.should_animate(Route::Welcome.key());
        tracing::debug!(animate, "Welcome mounted");

        Self {
            animate,
            sign_in: Link::new(
                Text::new("Sign In").weight(font_weight::MEDIUM),
                NavEvent::SignInTapped,
            ),
            get_started: Button::new()
                .with_label(
                    Text::new("Get Started")
                        .size(font_size::CTA)
                        .weight(font_weight::SEMI_BOLD),
                )
                .on_press(NavEvent::GetStartedTapped),
        }
    }

    /// Whether this mount plays its entrance animations
    pub fn animates(&self) -> bool {
        self.animate
    }

    fn footer_entrance(&self, delay_ms: u32) -> EntranceAnimation {
        EntranceAnimation::fade_in_down(duration::ENTRANCE)
            .with_delay(delay_ms)
            .springify(spring::DAMPING)
            .gated(self.animate)
    }
}

impl Screen for WelcomeScreen {
    fn route(&self) -> Route {
        Route::Welcome
    }

    fn render(&self, ctx: &UiContext) -> ScreenView {
        let container = ScreenContainer::new()
            .with_style(StyleProps {
                justify_content: Some(JustifyContent::SpaceBetween),
                ..Default::default()
            })
            .render(ctx);
        let mut elements = Vec::new();

        let mut sign_in = self.sign_in.render(ctx);
        sign_in.style = sign_in.style.merge(&StyleProps {
            align_self: Some(Alignment::FlexEnd),
            margin: Some(Spacing::Individual {
                top: ctx.space_y(spacing_y::S7),
                right: ctx.space_y(spacing_y::S20),
                bottom: 0.0,
                left: 0.0,
            }),
            ..Default::default()
        });
        elements.push(ElementView::new(ids::SIGN_IN, Node::Text(sign_in)));

        let hero = Image::new(HERO_ASSET).with_style(StyleProps {
            width: Some(Dimension::percent(100.0)),
            height: Some(Dimension::px(ctx.vs(sizing::HERO_HEIGHT))),
            align_self: Some(Alignment::Center),
            margin: Some(Spacing::Individual {
                top: ctx.vs(sizing::HERO_MARGIN_TOP),
                right: 0.0,
                bottom: 0.0,
                left: 0.0,
            }),
            ..Default::default()
        });
        elements.push(
            ElementView::new(ids::HERO, Node::Image(hero)).entering(
                EntranceAnimation::fade_in(duration::ENTRANCE).gated(self.animate),
            ),
        );

        let headline = self.footer_entrance(duration::INSTANT);
        for line in ["Always take control", "of your money"] {
            let text = Text::new(line)
                .size(font_size::DISPLAY)
                .weight(font_weight::HEAVY)
                .render(ctx);
            elements.push(ElementView::new(ids::HEADLINE, Node::Text(text)).entering(headline));
        }

        let subtitle = self.footer_entrance(duration::STAGGER);
        for line in ["Money must be arranged to set a better", "lifestyle in future"] {
            let text = Text::new(line).size(font_size::SUBTITLE).render(ctx);
            elements.push(ElementView::new(ids::SUBTITLE, Node::Text(text)).entering(subtitle));
        }

        let mut button = self.get_started.render(ctx);
        if let Some(label) = button.label.as_mut() {
            label.style.color = Some(ctx.theme.colors.neutral.n900.clone());
        }
        button.style = button.style.merge(&StyleProps {
            margin: Some(Spacing::Individual {
                top: 0.0,
                right: ctx.space_x(spacing_x::S25),
                bottom: 15.0,
                left: ctx.space_x(spacing_x::S25),
            }),
            ..Default::default()
        });
        elements.push(
            ElementView::new(ids::GET_STARTED, Node::Button(button))
                .entering(self.footer_entrance(2 * duration::STAGGER)),
        );

        ScreenView {
            route: Route::Welcome,
            container,
            elements,
            alert: None,
        }
    }

    fn handle(&mut self, event: &UiEvent) -> Option<ScreenAction> {
        let UiEvent::Tap(id) = event else {
            return None;
        };
        let nav = match *id {
            ids::SIGN_IN => self.sign_in.tap(),
            ids::GET_STARTED => self.get_started.tap(),
            _ => None,
        }?;
        Some(ScreenAction::Navigate(nav))
    }
}
