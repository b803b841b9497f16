//! App shell
//!
//! Owns the single UI loop: one mounted screen, the navigation stack and the
//! event queue. Events are handled one at a time; a navigation transition
//! drops the old screen (canceling anything it scheduled) and mounts the new
//! top route.
//!
//! Handling never blocks on the auth layer. A submit runs on its own task
//! and reports back through the queue as [`UiEvent::SubmitFinished`], so the
//! screen renders its loading state and ignores presses until then.

use app_core::{SubmitHandler, Submission};
use app_platform::{ScaleEngine, Viewport};
use app_state::AnimationGuard;
use app_ui::screens::{LoginScreen, RegisterScreen, SplashScreen, WelcomeScreen};
use app_ui::{
    MountedScreen, NavigationOrchestrator, NavigationStack, Route, Screen, ScreenAction,
    ScreenView, Theme, Transition, UiContext, UiEvent,
};
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::error::Result;

/// The running application
pub struct App {
    config: AppConfig,
    ctx: UiContext,
    handler: Arc<dyn SubmitHandler>,
    orchestrator: NavigationOrchestrator<NavigationStack>,
    screen: MountedScreen,
    mount_seq: u64,
    events_tx: mpsc::UnboundedSender<UiEvent>,
    events_rx: mpsc::UnboundedReceiver<UiEvent>,
}

impl App {
    /// Capture the viewport and mount the splash screen
    ///
    /// Fails before anything renders when the viewport is unusable. Must be
    /// called inside a tokio runtime.
    pub fn start(
        config: AppConfig,
        viewport: Viewport,
        guard: Arc<AnimationGuard>,
        handler: Arc<dyn SubmitHandler>,
    ) -> Result<Self> {
        let scale = ScaleEngine::new(viewport, config.scale_config())?;
        let ctx = UiContext::new(scale, Theme::global(), guard);
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        tracing::info!(
            width = viewport.width,
            height = viewport.height,
            platform = %viewport.platform,
            factor = scale.factor(),
            "App started"
        );

        let orchestrator = NavigationOrchestrator::new(NavigationStack::new(Route::Splash));
        let screen = mount(Route::Splash, 0, &ctx, &config, &events_tx);

        Ok(Self {
            config,
            ctx,
            handler,
            orchestrator,
            screen,
            mount_seq: 0,
            events_tx,
            events_rx,
        })
    }

    /// Sender for host input
    pub fn events(&self) -> mpsc::UnboundedSender<UiEvent> {
        self.events_tx.clone()
    }

    /// Route on top of the stack
    pub fn current_route(&self) -> Route {
        self.screen.route()
    }

    /// Identifier of the current mount
    pub fn mount_id(&self) -> u64 {
        self.mount_seq
    }

    /// The navigation stack
    pub fn navigation(&self) -> &NavigationStack {
        self.orchestrator.navigator()
    }

    /// The render context
    pub fn context(&self) -> &UiContext {
        &self.ctx
    }

    /// Render the mounted screen
    pub fn render(&self) -> ScreenView {
        self.screen.render(&self.ctx)
    }

    /// Handle one event
    ///
    /// Returns the transition when the event moved the flow.
    pub fn handle(&mut self, event: UiEvent) -> Option<Transition> {
        if let UiEvent::SubmitFinished { mount_id } = event {
            if mount_id != self.mount_seq {
                tracing::debug!(
                    stale = mount_id,
                    current = self.mount_seq,
                    "Dropping submit result from an earlier mount"
                );
                return None;
            }
        }

        match self.screen.handle(&event)? {
            ScreenAction::Navigate(nav) => {
                let transition = self.orchestrator.dispatch(nav)?;
                self.remount();
                Some(transition)
            }
            ScreenAction::Submit(submission) => {
                self.spawn_submit(submission);
                None
            }
        }
    }

    /// Wait for the next queued event and handle it
    ///
    /// Returns `None` when the event did not cause a transition.
    pub async fn next_event(&mut self) -> Option<Transition> {
        let event = self.events_rx.recv().await?;
        self.handle(event)
    }

    /// Handle every event already queued, without waiting
    pub fn pump(&mut self) -> Vec<Transition> {
        let mut transitions = Vec::new();
        while let Ok(event) = self.events_rx.try_recv() {
            if let Some(transition) = self.handle(event) {
                transitions.push(transition);
            }
        }
        transitions
    }

    /// Run until a transition lands on `route`
    pub async fn run_until(&mut self, route: Route) {
        while self.current_route() != route {
            self.next_event().await;
        }
    }

    fn spawn_submit(&self, submission: Submission) {
        let handler = Arc::clone(&self.handler);
        let events = self.events_tx.clone();
        let mount_id = self.mount_seq;
        tracing::debug!(form = ?submission.kind(), mount_id, "Submit started");

        tokio::spawn(async move {
            submission.send(handler.as_ref()).await;
            // Receiver gone means the app shut down
            let _ = events.send(UiEvent::SubmitFinished { mount_id });
        });
    }

    fn remount(&mut self) {
        let route = self.orchestrator.current();
        self.mount_seq += 1;
        tracing::debug!(
            from = %self.screen.route(),
            to = %route,
            mount_id = self.mount_seq,
            "Remounting"
        );
        self.screen = mount(route, self.mount_seq, &self.ctx, &self.config, &self.events_tx);
    }
}

fn mount(
    route: Route,
    mount_id: u64,
    ctx: &UiContext,
    config: &AppConfig,
    events: &mpsc::UnboundedSender<UiEvent>,
) -> MountedScreen {
    match route {
        Route::Splash => {
            let events = events.clone();
            MountedScreen::Splash(SplashScreen::mount(
                mount_id,
                config.splash_delay(),
                move |mount_id| {
                    // Receiver gone means the app shut down
                    let _ = events.send(UiEvent::SplashElapsed { mount_id });
                },
            ))
        }
        Route::Welcome => MountedScreen::Welcome(WelcomeScreen::mount(&ctx.guard)),
        Route::Login => MountedScreen::Login(LoginScreen::mount(Arc::clone(&ctx.theme))),
        Route::Register => MountedScreen::Register(RegisterScreen::mount(Arc::clone(&ctx.theme))),
    }
}
