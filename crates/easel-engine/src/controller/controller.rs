use std::fmt;
use std::sync::Arc;

use crate::assets::{FileImageLoader, ImageLoader};
use crate::config::{Config, Layout};
use crate::coords::{Rect, Viewport};
use crate::core::{Entity, FrameCtx};
use crate::error::EngineError;
use crate::id::{EntityId, IdSource};
use crate::pipeline::{self, PassReport};
use crate::registry::Registry;
use crate::schedule::{FrameScheduler, TickHandle, TimerScheduler};
use crate::surface::{Surface, SurfaceProvider};
use crate::time::{FrameClock, FrameTime};

use super::commands::Command;
use super::hooks::NoHooks;
use super::{Commands, ControllerHooks, ControllerState, FrameReport, TickOutcome};

/// Collects the optional parts of a [`Controller`] before the surface is
/// acquired.
pub struct ControllerBuilder {
    config: Config,
    ids: Option<Arc<IdSource>>,
    images: Option<Box<dyn ImageLoader>>,
    scheduler: Option<Box<dyn FrameScheduler>>,
    hooks: Option<Box<dyn ControllerHooks>>,
}

impl ControllerBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ids: None,
            images: None,
            scheduler: None,
            hooks: None,
        }
    }

    /// Shares an id source with code that builds entities outside the controller.
    pub fn ids(mut self, ids: Arc<IdSource>) -> Self {
        self.ids = Some(ids);
        self
    }

    pub fn images(mut self, images: impl ImageLoader + 'static) -> Self {
        self.images = Some(Box::new(images));
        self
    }

    pub fn scheduler(mut self, scheduler: impl FrameScheduler + 'static) -> Self {
        self.scheduler = Some(Box::new(scheduler));
        self
    }

    pub fn hooks(mut self, hooks: impl ControllerHooks) -> Self {
        self.hooks = Some(Box::new(hooks));
        self
    }

    /// Validates the config and acquires the surface.
    ///
    /// The surface label is `surface-{id}` with an id drawn from the shared
    /// source. The config scale is applied to the surface once, here.
    pub fn build(self, provider: &mut dyn SurfaceProvider) -> Result<Controller, EngineError> {
        self.config.validate()?;

        let ids = self.ids.unwrap_or_default();
        let label = format!("surface-{}", ids.next().get());
        let layout = self.config.layout;
        let mut surface = provider.acquire(&label, layout.width, layout.height)?;
        surface.scale(self.config.scale, self.config.scale);

        let (width, height) = surface.size();
        log::debug!(
            "controller on '{label}': {width}x{height} at {} fps, scale {}, {:?}",
            self.config.fps,
            self.config.scale,
            self.config.render_mode
        );

        Ok(Controller {
            config: self.config,
            state: ControllerState::Preparing,
            label,
            ids,
            registry: Registry::new(),
            surface,
            images: self.images.unwrap_or_else(|| Box::new(FileImageLoader::new("."))),
            scheduler: self.scheduler.unwrap_or_else(|| Box::new(TimerScheduler::new())),
            hooks: self.hooks.unwrap_or_else(|| Box::new(NoHooks)),
            clock: FrameClock::new(),
            commands: Commands::default(),
            pending_tick: None,
            frames: 0,
            last_pass: PassReport::default(),
        })
    }
}

/// Owns the registry and the surface and drives the frame loop.
///
/// Ticks come from the injected [`FrameScheduler`]; call [`run`](Self::run)
/// or [`step`](Self::step) to pull and process them.
pub struct Controller {
    config: Config,
    state: ControllerState,
    label: String,
    ids: Arc<IdSource>,
    registry: Registry,
    surface: Box<dyn Surface>,
    images: Box<dyn ImageLoader>,
    scheduler: Box<dyn FrameScheduler>,
    hooks: Box<dyn ControllerHooks>,
    clock: FrameClock,
    commands: Commands,
    pending_tick: Option<TickHandle>,
    frames: u64,
    last_pass: PassReport,
}

impl Controller {
    /// Builds a controller with the default image loader, scheduler and no hooks.
    pub fn new(config: Config, provider: &mut dyn SurfaceProvider) -> Result<Self, EngineError> {
        ControllerBuilder::new(config).build(provider)
    }

    // ---- registry -------------------------------------------------------

    /// Initializes `service` and stores it, replacing any service with the
    /// same id. Services are never updated by the pipeline.
    pub fn add_service(&mut self, service: impl Entity) -> Option<Box<dyn Entity>> {
        self.add_service_boxed(Box::new(service))
    }

    pub fn add_service_boxed(&mut self, service: Box<dyn Entity>) -> Option<Box<dyn Entity>> {
        let displaced = self.bind_service(service);
        self.apply_commands();
        displaced
    }

    /// Initializes `component` (and its behaviors) and stores it, replacing
    /// any component with the same id.
    pub fn add_component(&mut self, component: impl Entity) -> Option<Box<dyn Entity>> {
        self.add_component_boxed(Box::new(component))
    }

    pub fn add_component_boxed(&mut self, component: Box<dyn Entity>) -> Option<Box<dyn Entity>> {
        let displaced = self.bind_component(component);
        self.apply_commands();
        displaced
    }

    pub fn get_component_by_id(&self, id: EntityId) -> Option<&dyn Entity> {
        self.registry.component(id)
    }

    pub fn get_component_by_id_mut(&mut self, id: EntityId) -> Option<&mut (dyn Entity + 'static)> {
        self.registry.component_mut(id)
    }

    pub fn get_service_by_id(&self, id: EntityId) -> Option<&dyn Entity> {
        self.registry.service(id)
    }

    pub fn get_service_by_id_mut(&mut self, id: EntityId) -> Option<&mut (dyn Entity + 'static)> {
        self.registry.service_mut(id)
    }

    /// Removes a component immediately, running its `on_destroy`. Unknown ids
    /// are a no-op.
    pub fn remove_component_by_id(&mut self, id: EntityId) -> Option<Box<dyn Entity>> {
        self.registry.remove_component(id)
    }

    pub fn remove_service_by_id(&mut self, id: EntityId) -> Option<Box<dyn Entity>> {
        self.registry.remove_service(id)
    }

    // ---- lifecycle ------------------------------------------------------

    /// Runs `on_start`, renders the first frame and schedules the first tick.
    pub fn start(&mut self) {
        self.set_state(ControllerState::Starting);
        self.hooks.on_start(&mut self.commands);
        self.apply_commands();
        self.clock.reset();
        self.frame();
    }

    /// Stops rendering. A tick already scheduled still fires once and is
    /// answered with [`TickOutcome::Idle`].
    pub fn pause(&mut self) {
        self.set_state(ControllerState::Paused);
    }

    /// Renders a frame right away and restarts the tick chain.
    pub fn resume(&mut self) {
        self.set_state(ControllerState::Standby);
        self.clock.reset();
        self.frame();
    }

    /// Processes one fired tick.
    pub fn handle_tick(&mut self, handle: TickHandle) -> TickOutcome {
        if self.pending_tick != Some(handle) {
            log::trace!("{}: ignoring unknown {handle}", self.label);
            return TickOutcome::Idle;
        }
        self.pending_tick = None;

        match self.state {
            ControllerState::Starting | ControllerState::Standby => {
                self.set_state(ControllerState::Ticking);
                self.frame();
                if self.state == ControllerState::Ticking {
                    self.set_state(ControllerState::Standby);
                }
                TickOutcome::Rendered
            }
            ControllerState::Ticking => {
                self.schedule_next();
                TickOutcome::Deferred
            }
            ControllerState::Preparing | ControllerState::Paused | ControllerState::Ended => TickOutcome::Idle,
        }
    }

    /// Pulls the next tick from the scheduler and processes it. `None` once
    /// nothing is scheduled.
    pub fn step(&mut self) -> Option<TickOutcome> {
        let handle = self.scheduler.next_tick()?;
        Some(self.handle_tick(handle))
    }

    /// Processes ticks until the chain stops. Returns the number of ticks
    /// handled. Does not return while the controller keeps rendering.
    pub fn run(&mut self) -> usize {
        let mut ticks = 0;
        while self.step().is_some() {
            ticks += 1;
        }
        log::debug!("{}: tick chain ended after {ticks} ticks ({} frames)", self.label, self.frames);
        ticks
    }

    // ---- settings -------------------------------------------------------

    /// Takes effect from the next scheduled tick.
    pub fn set_fps(&mut self, fps: f32) -> Result<(), EngineError> {
        let config = Config { fps, ..self.config.clone() };
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Changes the scale entities draw with. The surface keeps the transform
    /// applied at construction.
    pub fn set_scale(&mut self, scale: f32) -> Result<(), EngineError> {
        let config = Config { scale, ..self.config.clone() };
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Width and height only change the area cleared each frame; the surface
    /// keeps the size it was acquired with.
    pub fn set_layout(&mut self, layout: Layout) -> Result<(), EngineError> {
        let config = Config { layout, ..self.config.clone() };
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.config.viewport = viewport;
    }

    // ---- accessors ------------------------------------------------------

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Application code may end the controller; ticks are then ignored.
    pub fn end(&mut self) {
        self.set_state(ControllerState::Ended);
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn ids(&self) -> &Arc<IdSource> {
        &self.ids
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn scheduler(&self) -> &dyn FrameScheduler {
        self.scheduler.as_ref()
    }

    pub fn pending_tick(&self) -> Option<TickHandle> {
        self.pending_tick
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    pub fn last_pass(&self) -> &PassReport {
        &self.last_pass
    }

    // ---- internals ------------------------------------------------------

    fn set_state(&mut self, state: ControllerState) {
        if self.state != state {
            log::debug!("{}: {:?} -> {:?}", self.label, self.state, state);
            self.state = state;
        }
    }

    fn frame(&mut self) {
        let layout = self.config.layout;
        self.surface.clear_rect(Rect::new(0.0, 0.0, layout.width as f32, layout.height as f32));
        self.surface.set_opacity(f32::from(layout.opacity) / 100.0);

        let settled = self.images.poll();
        if settled > 0 {
            log::trace!("{}: {settled} images settled", self.label);
        }

        let time = self.clock.tick();
        let mode = self.config.render_mode;
        let pass = {
            let mut ctx = FrameCtx::new(
                self.surface.as_mut(),
                self.images.as_mut(),
                &self.ids,
                &mut self.commands,
                time,
                self.config.scale,
                self.config.viewport,
                self.config.layout,
            );
            pipeline::run_pass(&mut self.registry, &mut ctx, mode)
        };
        self.frames += 1;
        self.apply_commands();

        self.schedule_next();

        let report = FrameReport { time, pass, frames: self.frames };
        self.hooks.on_update(&report, &mut self.commands);
        self.apply_commands();
        self.last_pass = report.pass;
    }

    fn schedule_next(&mut self) {
        if let Some(stale) = self.pending_tick.take() {
            self.scheduler.cancel(stale);
        }
        self.pending_tick = Some(self.scheduler.schedule(self.config.frame_budget()));
    }

    fn frame_ctx(&mut self, time: FrameTime) -> FrameCtx<'_> {
        FrameCtx::new(
            self.surface.as_mut(),
            self.images.as_mut(),
            &self.ids,
            &mut self.commands,
            time,
            self.config.scale,
            self.config.viewport,
            self.config.layout,
        )
    }

    fn bind_component(&mut self, mut component: Box<dyn Entity>) -> Option<Box<dyn Entity>> {
        self.init_entity(component.as_mut());

        let attrs = component.attributes();
        let id = attrs.id;
        if attrs.kind.is_drawable() && !attrs.in_drawn_layer() {
            log::warn!(
                "{}: {} {id} is on layer {} and will never be drawn",
                self.label,
                attrs.kind.name(),
                attrs.layer
            );
        }
        if self.registry.contains_id(id) && self.registry.component(id).is_none() {
            log::warn!("{}: component {id} shares its id with a service", self.label);
        }

        let displaced = self.registry.insert_component(component);
        if displaced.is_some() {
            log::warn!("{}: component {id} replaced an existing component", self.label);
        }
        displaced
    }

    fn bind_service(&mut self, mut service: Box<dyn Entity>) -> Option<Box<dyn Entity>> {
        self.init_entity(service.as_mut());

        let id = service.id();
        if self.registry.contains_id(id) && self.registry.service(id).is_none() {
            log::warn!("{}: service {id} shares its id with a component", self.label);
        }

        let displaced = self.registry.insert_service(service);
        if displaced.is_some() {
            log::warn!("{}: service {id} replaced an existing service", self.label);
        }
        displaced
    }

    fn init_entity(&mut self, entity: &mut dyn Entity) {
        {
            let time = self.clock.peek();
            let mut ctx = self.frame_ctx(time);
            entity.init(&mut ctx);
        }
        let base = entity.base_mut();
        base.traits.init_all(&mut base.attributes);
    }

    /// Applies buffered commands in order; commands queued while applying
    /// (from `init`) run in the same call.
    fn apply_commands(&mut self) {
        loop {
            let batch = self.commands.take();
            if batch.is_empty() {
                break;
            }
            for command in batch {
                match command {
                    Command::AddComponent(component) => {
                        self.bind_component(component);
                    }
                    Command::AddService(service) => {
                        self.bind_service(service);
                    }
                    Command::RemoveComponent(id) => {
                        self.registry.remove_component(id);
                    }
                    Command::Pause => self.pause(),
                }
            }
        }
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("label", &self.label)
            .field("state", &self.state)
            .field("components", &self.registry.component_count())
            .field("services", &self.registry.service_count())
            .field("frames", &self.frames)
            .field("pending_tick", &self.pending_tick)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::assets::MemoryImageLoader;
    use crate::behavior::{FrameAnimation, TraitKind};
    use crate::core::{AttributePatch, EntityState};
    use crate::schedule::ManualScheduler;
    use crate::surface::{CommandLog, RecordingProvider, SurfaceCmd};
    use crate::testing::{Journal, Probe};

    #[derive(Default, Clone)]
    struct Counters {
        starts: Rc<Cell<u32>>,
        updates: Rc<Cell<u64>>,
        pause_after: Option<u64>,
    }

    impl ControllerHooks for Counters {
        fn on_start(&mut self, _commands: &mut Commands) {
            self.starts.set(self.starts.get() + 1);
        }

        fn on_update(&mut self, frame: &FrameReport, commands: &mut Commands) {
            self.updates.set(frame.frames);
            if self.pause_after == Some(frame.frames) {
                commands.pause();
            }
        }
    }

    fn config() -> Config {
        Config {
            layout: Layout { width: 100, height: 80, opacity: 50 },
            ..Config::default()
        }
    }

    fn build(hooks: Counters) -> (Controller, CommandLog) {
        let mut provider = RecordingProvider::new();
        let controller = ControllerBuilder::new(config())
            .images(MemoryImageLoader::new())
            .scheduler(ManualScheduler::new())
            .hooks(hooks)
            .build(&mut provider)
            .unwrap();
        (controller, provider.log())
    }

    fn controller() -> (Controller, CommandLog) {
        build(Counters::default())
    }

    #[test]
    fn construction_acquires_scaled_surface() {
        let mut provider = RecordingProvider::new();
        let c = ControllerBuilder::new(Config { scale: 2.0, ..config() })
            .scheduler(ManualScheduler::new())
            .build(&mut provider)
            .unwrap();

        assert_eq!(c.state(), ControllerState::Preparing);
        assert_eq!(c.label(), "surface-0");
        assert_eq!(c.surface.size(), (100, 80));
        assert_eq!(c.ids().peek(), EntityId(1));
        assert_eq!(provider.log().snapshot(), vec![SurfaceCmd::Scale { sx: 2.0, sy: 2.0 }]);
        assert_eq!(c.scheduler().pending(), 0);
    }

    #[test]
    fn surface_failure_is_fatal() {
        let mut provider = RecordingProvider::refusing("no canvas");
        let err = Controller::new(config(), &mut provider).unwrap_err();
        assert!(matches!(err, EngineError::SurfaceAcquisition(_)));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut provider = RecordingProvider::new();
        let err = Controller::new(Config { fps: 0.0, ..config() }, &mut provider).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
        let err = Controller::new(Config { fps: 1e-30, ..config() }, &mut provider).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    fn add_component_inits_entity_and_traits() {
        let (mut c, _) = controller();
        let journal = Journal::new();
        let mut probe = Probe::drawable(c.ids(), AttributePatch::new().frame(7), &journal);
        probe.base_mut().traits.insert(TraitKind::Animation, Box::new(FrameAnimation::new(3, 1)));
        let id = probe.id();

        assert!(c.add_component(probe).is_none());
        assert_eq!(journal.inits(id), 1);

        let stored = c.get_component_by_id(id).unwrap();
        assert_eq!(stored.attributes().frame, 1);
        assert_eq!(stored.base().traits.host_of(TraitKind::Animation), Some(id));
    }

    #[test]
    fn registry_round_trip() {
        let (mut c, _) = controller();
        let (probe, journal) = Probe::generic(c.ids());
        let id = probe.id();
        c.add_component(probe);

        assert_eq!(c.get_component_by_id(id).map(|e| e.id()), Some(id));
        assert!(c.remove_component_by_id(id).is_some());
        assert!(c.get_component_by_id(id).is_none());
        assert!(c.remove_component_by_id(id).is_none());
        assert_eq!(journal.destroyed(id), 1);
    }

    #[test]
    fn service_with_same_id_replaces_previous() {
        let (mut c, _) = controller();
        let journal = Journal::new();
        let patch = || AttributePatch::new().id(EntityId(7));
        let first = Probe::new(c.ids(), crate::core::EntityKind::Base, patch(), journal.clone());
        let second = Probe::new(c.ids(), crate::core::EntityKind::Base, patch(), journal.clone());

        assert!(c.add_service(first).is_none());
        assert!(c.add_service(second).is_some());
        assert_eq!(c.registry().service_count(), 1);
        assert!(c.get_service_by_id(EntityId(7)).is_some());
    }

    #[test]
    fn service_and_component_may_share_an_id() {
        let (mut c, _) = controller();
        let journal = Journal::new();
        let shared = EntityId(9);
        let kind = crate::core::EntityKind::Base;
        let service = Probe::new(c.ids(), kind, AttributePatch::new().id(shared), journal.clone());
        let component = Probe::new(c.ids(), kind, AttributePatch::new().id(shared), journal.clone());

        assert!(c.add_service(service).is_none());
        assert!(c.add_component(component).is_none());
        assert!(c.registry().contains_id(shared));
        assert!(c.get_service_by_id(shared).is_some());
        assert!(c.get_component_by_id(shared).is_some());

        // Either order keeps both entries.
        c.remove_service_by_id(shared);
        let service = Probe::new(c.ids(), kind, AttributePatch::new().id(shared), journal);
        assert!(c.add_service(service).is_none());
        assert_eq!((c.registry().service_count(), c.registry().component_count()), (1, 1));
    }

    #[test]
    fn destroyed_component_is_gone_after_one_pass() {
        let (mut c, _) = controller();
        let journal = Journal::new();
        let probe = Probe::drawable(c.ids(), AttributePatch::new().layer(0).state(EntityState::Active), &journal);
        let id = probe.id();
        c.add_component(probe);

        c.get_component_by_id_mut(id).unwrap().destroy();
        c.start();

        assert!(c.get_component_by_id(id).is_none());
        assert_eq!(journal.destroyed(id), 1);
        assert_eq!(c.last_pass().reaped, vec![id]);
    }

    #[test]
    fn start_renders_and_schedules_one_tick() {
        let hooks = Counters::default();
        let (mut c, log) = build(hooks.clone());

        c.start();
        assert_eq!(hooks.starts.get(), 1);
        assert_eq!(c.state(), ControllerState::Starting);
        assert_eq!(c.frames_rendered(), 1);
        assert_eq!(c.scheduler().pending(), 1);

        let cmds = log.snapshot();
        assert_eq!(cmds[1], SurfaceCmd::Clear(Rect::new(0.0, 0.0, 100.0, 80.0)));
        assert_eq!(cmds[2], SurfaceCmd::SetOpacity(0.5));

        assert_eq!(c.step(), Some(TickOutcome::Rendered));
        assert_eq!(c.state(), ControllerState::Standby);
        assert_eq!(c.frames_rendered(), 2);
        assert_eq!(c.scheduler().pending(), 1);
        assert_eq!(hooks.updates.get(), 2);
    }

    #[test]
    fn pause_lets_pending_tick_fire_once() {
        let (mut c, _) = controller();
        c.start();
        c.step();
        c.pause();

        assert_eq!(c.step(), Some(TickOutcome::Idle));
        assert_eq!(c.step(), None);
        assert_eq!(c.frames_rendered(), 2);
        assert_eq!(c.state(), ControllerState::Paused);
    }

    #[test]
    fn resume_does_not_double_the_chain() {
        let (mut c, _) = controller();
        c.start();
        c.pause();
        c.resume();

        assert_eq!(c.frames_rendered(), 2);
        assert_eq!(c.state(), ControllerState::Standby);
        assert_eq!(c.scheduler().pending(), 1);

        assert_eq!(c.step(), Some(TickOutcome::Rendered));
        assert_eq!(c.scheduler().pending(), 1);
    }

    #[test]
    fn pause_requested_during_pass_sticks() {
        let (mut c, _) = controller();
        let (probe, _journal) = Probe::generic(c.ids());
        c.add_component(probe.on_update(|_, ctx| {
            if ctx.time.frame_index == 1 {
                ctx.commands.pause();
            }
        }));

        c.start();
        assert_eq!(c.step(), Some(TickOutcome::Rendered));
        assert_eq!(c.state(), ControllerState::Paused);
        assert_eq!(c.step(), Some(TickOutcome::Idle));
        assert_eq!(c.step(), None);
    }

    #[test]
    fn tick_during_frame_is_deferred() {
        let (mut c, _) = controller();
        c.start();
        let handle = c.scheduler.next_tick().unwrap();
        assert_eq!(c.pending_tick(), Some(handle));
        c.state = ControllerState::Ticking;

        assert_eq!(c.handle_tick(handle), TickOutcome::Deferred);
        assert_eq!(c.state(), ControllerState::Ticking);
        assert_eq!(c.frames_rendered(), 1);
        assert_eq!(c.scheduler().pending(), 1);
    }

    #[test]
    fn unknown_and_idle_states_ignore_ticks() {
        let (mut c, _) = controller();
        assert_eq!(c.handle_tick(TickHandle(42)), TickOutcome::Idle);

        c.start();
        c.end();
        assert_eq!(c.step(), Some(TickOutcome::Idle));
        assert_eq!(c.state(), ControllerState::Ended);
        assert_eq!(c.step(), None);
    }

    #[test]
    fn components_added_during_pass_join_next_frame() {
        let (mut c, _) = controller();
        let journal = Journal::new();
        let spawned = Rc::new(Cell::new(None));

        let spawner = Probe::drawable(c.ids(), AttributePatch::new().layer(1), &journal);
        let spawner = {
            let journal = journal.clone();
            let spawned = spawned.clone();
            spawner.on_update(move |_, ctx| {
                if spawned.get().is_none() {
                    let child = Probe::drawable(ctx.ids, AttributePatch::new().layer(0), &journal);
                    spawned.set(Some(child.id()));
                    ctx.commands.add_component(child);
                }
            })
        };
        c.add_component(spawner);
        c.start();

        let child = spawned.get().unwrap();
        assert_eq!(journal.inits(child), 1);
        assert!(!journal.updates().contains(&child));
        assert!(c.get_component_by_id(child).is_some());

        journal.clear();
        c.step();
        assert_eq!(journal.updates().first(), Some(&child));
    }

    #[test]
    fn run_stops_when_hook_pauses() {
        let hooks = Counters { pause_after: Some(5), ..Counters::default() };
        let (mut c, _) = build(hooks.clone());

        c.start();
        let ticks = c.run();

        assert_eq!(c.frames_rendered(), 5);
        assert_eq!(hooks.updates.get(), 5);
        // Four rendering ticks, then the one already scheduled when the pause landed.
        assert_eq!(ticks, 5);
        assert_eq!(c.state(), ControllerState::Paused);
    }

    #[test]
    fn settings_are_validated() {
        let (mut c, _) = controller();
        assert!(c.set_fps(-1.0).is_err());
        assert!(c.set_fps(1e-30).is_err());
        assert_eq!(c.config().fps, 60.0);
        assert!(c.set_layout(Layout { opacity: 101, ..Layout::default() }).is_err());
        assert!(c.set_scale(3.0).is_ok());
        c.set_viewport(Viewport::new(4.0, -2.0));
        assert_eq!(c.config().scale, 3.0);
        assert_eq!(c.config().viewport, Viewport::new(4.0, -2.0));
        assert!(c.set_fps(30.0).is_ok());
        assert_eq!(c.config().frame_budget(), std::time::Duration::from_secs_f64(1.0 / 30.0));
    }
}
