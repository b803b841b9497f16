//! Launch screen
//!
//! Shows the logo, then asks to move on to Welcome once the hold elapses.
//! The hold timer belongs to the mounted screen and dies with it.

use app_state::{schedule, TimerHandle};
use std::time::Duration;

use super::{ids, ElementView, Node, Screen, ScreenAction, ScreenView, UiEvent};
use crate::components::{Dimension, Image, ScreenContainer, StyleProps, UiContext};
use crate::navigation::{NavEvent, Route};
use crate::tokens::sizing;

/// Logo asset
pub const LOGO_ASSET: &str = "assets/images/splashImage.png";

/// Mounted splash screen
#[derive(Debug)]
pub struct SplashScreen {
    mount_id: u64,
    timer: TimerHandle,
}

impl SplashScreen {
    /// Mount and start the hold timer
    ///
    /// `on_elapsed` runs once after `delay` unless the screen is dropped
    /// first. It receives the mount id, which the screen expects back in
    /// [`UiEvent::SplashElapsed`]. Must be called inside a tokio runtime.
    pub fn mount<F>(mount_id: u64, delay: Duration, on_elapsed: F) -> Self
    where
        F: FnOnce(u64) + Send + 'static,
    {
        tracing::debug!(mount_id, delay_ms = delay.as_millis() as u64, "Splash mounted");
        let timer = schedule(delay, move || on_elapsed(mount_id));
        Self { mount_id, timer }
    }

    /// Identifier of this mount
    pub fn mount_id(&self) -> u64 {
        self.mount_id
    }

    /// Whether the hold is still running
    pub fn is_waiting(&self) -> bool {
        self.timer.is_pending()
    }
}

impl Drop for SplashScreen {
    fn drop(&mut self) {
        tracing::debug!(mount_id = self.mount_id, "Splash unmounted");
    }
}

impl Screen for SplashScreen {
    fn route(&self) -> Route {
        Route::Splash
    }

    fn render(&self, ctx: &UiContext) -> ScreenView {
        let container = ScreenContainer::new()
            .with_style(StyleProps {
                padding_top: Some(0.0),
                ..StyleProps::centered()
            })
            .render(ctx);

        let logo = Image::new(LOGO_ASSET).with_style(StyleProps {
            height: Some(Dimension::percent(sizing::SPLASH_LOGO_PERCENT)),
            aspect_ratio: Some(1.0),
            ..Default::default()
        });

        ScreenView {
            route: Route::Splash,
            container,
            elements: vec![ElementView::new(ids::LOGO, Node::Image(logo))],
            alert: None,
        }
    }

    fn handle(&mut self, event: &UiEvent) -> Option<ScreenAction> {
        match event {
            UiEvent::SplashElapsed { mount_id } if *mount_id == self.mount_id => {
                Some(ScreenAction::Navigate(NavEvent::SplashTimerElapsed))
            }
            UiEvent::SplashElapsed { mount_id } => {
                tracing::debug!(
                    stale = mount_id,
                    current = self.mount_id,
                    "Dropping splash event from an earlier mount"
                );
                None
            }
            _ => None,
        }
    }
}
