//! Page runtime: applies controller decisions to the rendered page.
//!
//! [`PageHandle`] is a bundle of signals shared through context. The
//! controller decides; the handle owns the timers, the element cache and the
//! render state, and turns each [`Command`] into signal writes, scheduled
//! tasks or body-level script calls.
//!
//! Every task the page starts goes through [`PageHandle::track`], so
//! [`PageHandle::teardown`] can cancel whatever is still pending.

use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use tokio::time::sleep;

use lumen_core::{
    Command, DebounceSlot, DebounceTicket, ElementCache, ElementRole, EntranceAction,
    EntranceScript, NotificationCenter, NotificationSchedule, PageConfig, PageController,
    PageEvent, PageResult, ParticleField, Point, RippleSet, Size, Theme, TimerHandle, TimerId,
    TimerRegistry, Timings, Typewriter, Viewport,
};

use crate::bridge::{HostEvent, BRIDGE_JS};
use crate::view::PageView;

/// Dioxus task registered with the timer registry.
pub struct ScopedTask(Task);

impl TimerHandle for ScopedTask {
    fn cancel(self) {
        self.0.cancel();
    }
}

/// A located page element.
#[derive(Clone)]
pub enum PageElement {
    Mounted(Rc<MountedData>),
    /// The document body, reachable only through script
    Document,
}

/// Shared handle to the running page.
///
/// Copy, so event handlers and tasks take it by value.
#[derive(Clone, Copy)]
pub struct PageHandle {
    config: Signal<PageConfig>,
    controller: Signal<PageController>,
    elements: Signal<ElementCache<PageElement>>,
    timers: Signal<TimerRegistry<ScopedTask>>,
    pointer: Signal<DebounceSlot<Point, TimerId>>,
    resize: Signal<DebounceSlot<Viewport, TimerId>>,
    viewport: Signal<Viewport>,
    pub theme: Signal<Theme>,
    pub view: Signal<PageView>,
    pub particles: Signal<ParticleField>,
    pub ripples: Signal<RippleSet>,
    pub notifications: Signal<NotificationCenter>,
}

/// Create the page handle once for the calling component.
pub fn use_page_handle(config: impl FnOnce() -> PageConfig) -> PageHandle {
    use_hook(|| PageHandle::new(config()))
}

impl PageHandle {
    fn new(config: PageConfig) -> Self {
        let config = config.validated_or_default();
        let controller = PageController::new(&config).unwrap_or_default();
        let timings = config.timings.clone();

        Self {
            theme: Signal::new(controller.current_theme().clone()),
            controller: Signal::new(controller),
            elements: Signal::new(ElementCache::new()),
            timers: Signal::new(TimerRegistry::new()),
            pointer: Signal::new(DebounceSlot::new(timings.pointer_debounce())),
            resize: Signal::new(DebounceSlot::new(timings.resize_debounce())),
            viewport: Signal::new(Viewport::default()),
            view: Signal::new(PageView::default()),
            particles: Signal::new(ParticleField::default()),
            ripples: Signal::new(RippleSet::new()),
            notifications: Signal::new(NotificationCenter::new()),
            config: Signal::new(config),
        }
    }

    pub fn config(&self) -> PageConfig {
        self.config.peek().clone()
    }

    fn timings(&self) -> Timings {
        self.config.peek().timings.clone()
    }

    fn has(&self, role: ElementRole) -> bool {
        self.elements.peek().contains(role)
    }

    // ========================================================================
    // Element registration and startup
    // ========================================================================

    /// Record a rendered element under its role.
    pub fn register(mut self, role: ElementRole, event: MountedEvent) {
        let accepted = self
            .elements
            .write()
            .register(role, PageElement::Mounted(event.data()));
        if accepted {
            tracing::debug!(%role, "Element registered");
        } else {
            tracing::warn!(%role, "Element mounted after initialization, ignored");
        }
    }

    /// Install the document bridge and run the page until it is torn down.
    ///
    /// Initialization happens when the bridge reports ready, by which time
    /// every element of the first render has mounted.
    pub fn start(self) {
        self.track(async move {
            let mut bridge = document::eval(BRIDGE_JS);
            loop {
                match bridge.recv::<HostEvent>().await {
                    Ok(event) => self.on_host_event(event),
                    Err(e) => {
                        tracing::error!(error = ?e, "Document bridge closed");
                        break;
                    }
                }
            }
        });
    }

    fn on_host_event(mut self, event: HostEvent) {
        if let HostEvent::Ready { body, .. } = event {
            let viewport = event.viewport().unwrap_or_default();
            self.initialize(body, viewport);
            return;
        }
        if let HostEvent::Error {
            message,
            source,
            line,
        } = &event
        {
            tracing::error!(
                error = %message,
                source = source.as_deref().unwrap_or("unknown"),
                line = line.unwrap_or(0),
                "Uncaught script error"
            );
            return;
        }

        // Listeners only count once the page is initialized.
        if !self.elements.peek().is_sealed() {
            return;
        }

        if let HostEvent::Resize { .. } = event {
            if let Some(viewport) = event.viewport() {
                self.viewport.set(viewport);
                self.resized(viewport);
            }
        } else if let Some(page_event) = event.to_page_event() {
            self.dispatch(page_event);
        }
    }

    fn initialize(mut self, body: bool, viewport: Viewport) {
        if self.elements.peek().is_sealed() {
            return;
        }
        if body {
            self.elements
                .write()
                .register(ElementRole::Body, PageElement::Document);
        }
        let sealed = self.elements.write().seal();
        if let Err(e) = sealed {
            tracing::error!(error = %e, "Page initialization failed");
            return;
        }
        let roles = self.elements.peek().roles().count();
        self.viewport.set(viewport);

        let start = self.controller.peek().start();
        self.apply(start);
        self.spawn_particles();
        self.measure_action();
        self.play_entrance();
        self.start_theme_cycle();

        tracing::info!(
            roles,
            themes = self.controller.peek().palette().len(),
            width = viewport.width,
            height = viewport.height,
            "Page initialized"
        );
    }

    fn spawn_particles(mut self) {
        let config = self.config.peek().particles.clone();
        if config.count == 0 {
            return;
        }
        if !self.has(ElementRole::ParticleHost) {
            tracing::debug!("No particle host, skipping particles");
            return;
        }
        self.particles
            .set(ParticleField::spawn(&config, &mut rand::rng()));
        tracing::debug!(count = config.count, "Particles spawned");
    }

    /// Seed the ripple geometry before the first resize notification.
    fn measure_action(self) {
        let action = match self.elements.peek().require(ElementRole::Action) {
            Ok(PageElement::Mounted(action)) => action.clone(),
            Ok(PageElement::Document) => return,
            Err(e) => {
                tracing::debug!(error = %e, "Skipping action measurement");
                return;
            }
        };
        self.track(async move {
            match action.get_client_rect().await {
                Ok(rect) => self.action_resized(Size::new(rect.width(), rect.height())),
                Err(e) => tracing::debug!(error = ?e, "Could not measure action element"),
            }
        });
    }

    fn play_entrance(self) {
        let script = EntranceScript::from_timings(&self.timings());
        tracing::debug!(
            steps = script.steps().len(),
            duration_ms = script.duration().as_millis() as u64,
            "Entrance started"
        );
        for step in script.steps().iter().copied() {
            self.after(step.at, move || self.entrance_step(step.action));
        }
    }

    fn entrance_step(mut self, action: EntranceAction) {
        match action {
            EntranceAction::RevealContainer => self.view.write().entered = true,
            EntranceAction::StartTypewriter => self.type_title(),
            EntranceAction::FadeInUp(role) => {
                if !self.has(role) {
                    tracing::debug!(%role, "Element absent, skipping fade-in");
                    return;
                }
                let mut view = self.view.write();
                match role {
                    ElementRole::Subtitle => view.subtitle_revealed = true,
                    ElementRole::Action => view.action_revealed = true,
                    _ => {}
                }
            }
        }
    }

    fn type_title(self) {
        let interval = self.timings().typewriter_interval();
        let mut writer = Typewriter::new(self.config.peek().copy.title.clone());
        let mut view = self.view;
        self.track(async move {
            loop {
                sleep(interval).await;
                let Some(frame) = writer.tick() else { break };
                let mut state = view.write();
                state.title = frame.revealed;
                if frame.complete {
                    state.title_complete = true;
                    break;
                }
            }
        });
    }

    fn start_theme_cycle(self) {
        let period = self.timings().theme_cycle();
        self.track(async move {
            let mut ticker = tokio::time::interval(period);
            // The first tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                self.dispatch(PageEvent::ThemeTick);
            }
        });
    }

    // ========================================================================
    // Events and commands
    // ========================================================================

    /// Feed one event through the controller and apply the outcome.
    pub fn dispatch(self, event: PageEvent) {
        let mut controller = self.controller;
        let commands = controller.write().handle(event);
        self.apply(commands);
    }

    fn apply(mut self, commands: Vec<Command>) {
        for command in commands {
            if let Some((delay, event)) = command.deferred_event() {
                self.after(delay, move || self.dispatch(event));
                continue;
            }
            match command {
                Command::ApplyTheme(theme) => self.theme.set(theme),
                Command::Pulse => {
                    if !self.has(ElementRole::Action) {
                        continue;
                    }
                    self.view.write().pressed = true;
                    let mut view = self.view;
                    self.after(self.timings().pulse(), move || {
                        view.write().pressed = false;
                    });
                }
                Command::Ripple { origin, element } => {
                    if !self.has(ElementRole::Action) {
                        continue;
                    }
                    let ripple = self.ripples.write().spawn(origin, element);
                    let mut ripples = self.ripples;
                    self.after(self.timings().ripple(), move || {
                        ripples.write().remove(ripple.id);
                    });
                }
                Command::Notify(message) => self.show_notification(message),
                // Deferred, dispatched above.
                Command::ScheduleCooldownRelease(_) => {}
                Command::SetParallax(offset) => self.view.write().parallax = offset,
                Command::SetAnimationsPaused(paused) => {
                    let state = if paused { "paused" } else { "running" };
                    self.body_script(&format!(
                        "document.body.style.animationPlayState = '{state}';"
                    ));
                }
                Command::SetKeyboardNavigation(on) => {
                    self.body_script(&format!(
                        "document.body.classList.toggle('keyboard-navigation', {on});"
                    ));
                }
                Command::RepositionParticles => {
                    if !self.particles.peek().is_empty() {
                        self.particles.write().reposition(&mut rand::rng());
                    }
                }
            }
        }
    }

    fn body_script(&self, script: &str) {
        if !self.has(ElementRole::Body) {
            tracing::debug!("No document body, skipping body update");
            return;
        }
        let _ = document::eval(script);
    }

    /// Debounced pointer movement; the settled position drives parallax.
    pub fn pointer_moved(self, pointer: Point) {
        if !self.elements.peek().is_sealed() {
            return;
        }
        let slot = self.pointer;
        self.debounce(slot, pointer, move |ticket| self.settle_pointer(ticket));
    }

    fn settle_pointer(mut self, ticket: DebounceTicket) {
        let settled = self.pointer.write().settle(ticket);
        if let Some(pointer) = settled {
            let viewport = *self.viewport.peek();
            self.dispatch(PageEvent::PointerMoved { pointer, viewport });
        }
    }

    fn resized(self, viewport: Viewport) {
        let slot = self.resize;
        self.debounce(slot, viewport, move |ticket| self.settle_resize(ticket));
    }

    fn settle_resize(mut self, ticket: DebounceTicket) {
        let settled = self.resize.write().settle(ticket);
        if let Some(viewport) = settled {
            self.dispatch(PageEvent::Resized(viewport));
        }
    }

    /// Push `value` and schedule `settle` for its ticket, cancelling the
    /// call it supersedes.
    fn debounce<T: 'static>(
        self,
        mut slot: Signal<DebounceSlot<T, TimerId>>,
        value: T,
        settle: impl FnOnce(DebounceTicket) + 'static,
    ) {
        let (ticket, delay, superseded) = {
            let mut slot = slot.write();
            let (ticket, superseded) = slot.push(value);
            (ticket, slot.delay(), superseded)
        };
        self.cancel(superseded);
        let waiting = self.after(delay, move || settle(ticket));
        let stale = slot.write().wait(ticket, waiting);
        self.cancel(stale);
    }

    /// Rendered size of the action element changed.
    pub fn action_resized(self, size: Size) {
        self.dispatch(PageEvent::ActionResized(size));
    }

    // ========================================================================
    // Public operations
    // ========================================================================

    /// Advance to the next theme, ignoring visibility and cooldown.
    pub fn cycle_theme(self) {
        let mut controller = self.controller;
        let commands = controller.write().cycle_theme();
        self.apply(commands);
    }

    /// Show a transient notification.
    ///
    /// Each call lives independently: shown on the next frame, hidden after
    /// the visible duration, removed once the fade-out has played.
    pub fn show_notification(self, message: impl Into<String>) {
        let message = message.into();
        let schedule = NotificationSchedule::from_timings(&self.timings());
        let mut notifications = self.notifications;
        let id = notifications.write().push(message.as_str());
        tracing::debug!(id = id.0, %message, "Notification shown");

        self.track(schedule.run(move |stage| notifications.write().advance(id, stage)));
    }

    /// Apply an arbitrary theme without moving the palette position.
    pub fn apply_theme(self, theme: Theme) -> PageResult<()> {
        let commands = self.controller.peek().apply_theme(theme)?;
        self.apply(commands);
        Ok(())
    }

    /// Cancel every pending timer. Later schedules are dropped.
    pub fn teardown(self) {
        let mut timers = self.timers;
        let Ok(mut timers) = timers.try_write() else {
            return;
        };
        let cancelled = timers.teardown();
        drop(timers);

        let mut unsettled = 0;
        let (mut pointer, mut resize) = (self.pointer, self.resize);
        if let Ok(mut slot) = pointer.try_write() {
            unsettled += usize::from(slot.has_pending());
            slot.cancel();
        }
        if let Ok(mut slot) = resize.try_write() {
            unsettled += usize::from(slot.has_pending());
            slot.cancel();
        }
        tracing::info!(cancelled, unsettled, "Page torn down");
    }

    // ========================================================================
    // Timers
    // ========================================================================

    /// Spawn a task registered for teardown.
    fn track(self, future: impl Future<Output = ()> + 'static) -> TimerId {
        let mut timers = self.timers;
        let id = timers.write().track(|id| {
            ScopedTask(spawn(async move {
                future.await;
                let mut timers = self.timers;
                if let Ok(mut timers) = timers.try_write() {
                    timers.complete(id);
                };
            }))
        });
        id
    }

    /// Run `f` once after `delay`.
    fn after(self, delay: Duration, f: impl FnOnce() + 'static) -> TimerId {
        self.track(async move {
            sleep(delay).await;
            f();
        })
    }

    fn cancel(self, id: Option<TimerId>) {
        if let Some(id) = id {
            let mut timers = self.timers;
            timers.write().cancel(id);
        }
    }
}
