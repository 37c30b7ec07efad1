use std::path::PathBuf;
use std::time::Duration;

use crossterm::event;
use rand::rngs::StdRng;
use ratatui::{
    DefaultTerminal, Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};
use terra_anim::{Clock, Scheduler, SystemClock, TimerId};
use terra_background::{Starfield, disc_contains, parallax_offsets};
use terra_config::Config;
use terra_core::Easing;

use crate::haptics::{EARTH_PULSE, Haptics, SUN_PULSE};
use crate::input::{self, Input};
use crate::notify::{ANNOUNCE_MESSAGE, Banners, EARTH_MESSAGE, SUN_MESSAGE};
use crate::placement::{Placement, is_visible, to_page};
use crate::scene::{FACT_TARGET, RenderHint, Scene};
use crate::ui;

/// Delay before the load fade-in starts.
const FADE_IN_DELAY: Duration = Duration::from_millis(100);
const FADE_IN: Duration = Duration::from_millis(1000);
const EARTH_ZOOM_TIME: Duration = Duration::from_millis(800);
const SUN_PULSE_TIME: Duration = Duration::from_millis(300);
const SUN_PULSE_SCALE: f64 = 1.3;
/// Pointer tracking gains over normalized pointer coordinates.
const EARTH_TILT_DEG: f64 = 5.0;
const SUN_GROWTH: f64 = 0.1;

/// Timer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timed {
    FadeIn,
    RotateFact,
    RevealFact,
    Jitter,
    EarthUnzoom,
    SunRelease,
    Optimize,
}

/// The main application which holds the state and logic of the application.
pub struct App<C: Clock = SystemClock> {
    /// Is the application running?
    running: bool,
    config: Config,
    /// Where color theme changes are saved, if anywhere.
    config_path: Option<PathBuf>,
    clock: C,
    scheduler: Scheduler<Timed>,
    scene: Scene,
    banners: Banners,
    rng: StdRng,
    haptics: Box<dyn Haptics>,
    /// Screen area the page is shown in, below it is the help line.
    viewport: Rect,
    last_frame: Duration,
    earth_unzoom: Option<TimerId>,
    sun_release: Option<TimerId>,
}

impl<C: Clock> App<C> {
    /// Bind the scene described by `config`. Fails if a display target is
    /// missing or the fact list is unusable.
    pub fn new(
        config: Config,
        clock: C,
        haptics: Box<dyn Haptics>,
        rng: StdRng,
    ) -> color_eyre::Result<Self> {
        let facts = config.fact_list()?;
        let scene = Scene::bind(&config.layout, facts)?;
        let last_frame = clock.now();
        Ok(Self {
            running: false,
            config,
            config_path: None,
            clock,
            scheduler: Scheduler::new(),
            scene,
            banners: Banners::default(),
            rng,
            haptics,
            viewport: Rect::default(),
            last_frame,
            earth_unzoom: None,
            sun_release: None,
        })
    }

    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let size = terminal.size()?;
        self.resize(size.width, size.height);
        self.start()?;
        while self.running {
            self.update()?;
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Kick off the intro counters and the periodic effects.
    fn start(&mut self) -> color_eyre::Result<()> {
        let now = self.clock.now();
        let timings = &self.config.timings;

        for counter in &mut self.scene.counters {
            let metric = counter.kind.metric();
            counter
                .value
                .animate_to(metric.base, metric.intro, Easing::OutQuart, now)?;
        }

        self.scheduler.after(now, FADE_IN_DELAY, Timed::FadeIn);
        self.scheduler
            .every(now, timings.fact_interval(), Timed::RotateFact)?;
        self.scheduler
            .every(now, timings.jitter_interval(), Timed::Jitter)?;
        self.scheduler
            .every(now, timings.optimize_interval(), Timed::Optimize)?;
        log::info!(target: "startup", "scene bound with {} cards", self.scene.cards.len());
        Ok(())
    }

    /// Advance every animation to the current time, then fire due timers so
    /// new animations start from the freshest values.
    fn update(&mut self) -> color_eyre::Result<()> {
        let now = self.clock.now();
        for counter in &mut self.scene.counters {
            counter.value.tick(now);
        }
        self.scene.fact.opacity.tick(now);
        self.scene.opacity.tick(now);

        for timed in self.scheduler.due(now) {
            self.on_timer(timed, now)?;
        }

        let step = now.saturating_sub(self.last_frame).as_millis() as u64;
        self.last_frame = now;
        if self.scene.earth.hint == RenderHint::Animated {
            self.scene.earth.spin_ms += step;
        }
        if self.scene.sun.hint == RenderHint::Animated {
            self.scene.sun.flicker_ms += step;
        }

        self.banners.prune(now, self.config.timings.banner());
        Ok(())
    }

    fn on_timer(&mut self, timed: Timed, now: Duration) -> color_eyre::Result<()> {
        let timings = &self.config.timings;
        match timed {
            Timed::FadeIn => {
                self.scene
                    .opacity
                    .animate_to(1.0, FADE_IN, Easing::Linear, now)?;
            }
            Timed::RotateFact => {
                self.scene
                    .fact
                    .opacity
                    .animate_to(0.0, timings.fact_fade(), Easing::Linear, now)?;
                self.scheduler
                    .after(now, timings.fact_fade(), Timed::RevealFact);
            }
            Timed::RevealFact => {
                self.scene.fact.advance();
                self.scene
                    .fact
                    .opacity
                    .animate_to(1.0, timings.fact_fade(), Easing::Linear, now)?;
                log::debug!(target: "effects", "{FACT_TARGET} -> fact {}", self.scene.fact.index());
            }
            Timed::Jitter => {
                for counter in &mut self.scene.counters {
                    let end = counter.kind.metric().jitter(&mut self.rng);
                    counter
                        .value
                        .animate_to(end, timings.jitter_duration(), Easing::OutCubic, now)?;
                    log::trace!(
                        target: "effects",
                        "{} {:.2} -> {end:.2}",
                        counter.kind.target_id(),
                        counter.value.current()
                    );
                }
            }
            Timed::EarthUnzoom => {
                self.scene.earth.zoomed = false;
                self.earth_unzoom = None;
            }
            Timed::SunRelease => {
                self.scene.sun.scale = 1.0;
                self.sun_release = None;
            }
            Timed::Optimize => self.optimize(),
        }
        Ok(())
    }

    /// Mark each card, the earth and the sun by whether it is on screen. Runs
    /// on its timer and whenever the scroll position or viewport changes.
    fn optimize(&mut self) {
        let placement = self.placement();
        let (scroll, height) = (self.scene.scroll, self.viewport.height);
        let hint = |rect: Rect| {
            if is_visible(rect, scroll, height) {
                RenderHint::Animated
            } else {
                RenderHint::Static
            }
        };

        for (card, rect) in self.scene.cards.iter_mut().zip(&placement.cards) {
            let next = hint(*rect);
            if card.hint != next {
                log::debug!(target: "optimize", "{} -> {next:?}", card.kind.target_id());
                card.hint = next;
            }
        }
        let (earth, sun) = (hint(placement.earth), hint(placement.sun));
        if self.scene.earth.hint != earth || self.scene.sun.hint != sun {
            log::debug!(target: "optimize", "earth -> {earth:?}, sun -> {sun:?}");
        }
        self.scene.earth.hint = earth;
        self.scene.sun.hint = sun;
    }

    /// Targets laid out over a page one viewport in size.
    fn placement(&self) -> Placement {
        let page = Rect::new(0, 0, self.viewport.width, self.viewport.height);
        Placement::compute(page, self.scene.cards.len())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let [content, help] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());
        if self.viewport != content {
            self.viewport = content;
            self.clamp_scroll();
            self.optimize();
        }

        let now = self.clock.now();
        let scroll = self.scene.scroll;
        let window = Rect::new(0, scroll, content.width, content.height);
        let mut page = Buffer::empty(Rect::new(0, 0, content.width, content.height + scroll));

        if self.config.background {
            Starfield {
                offsets: parallax_offsets(scroll),
                elapsed_ms: now.as_millis() as u64,
                opacity: self.scene.opacity.current() as f32,
            }
            .render(window, &mut page);
        }
        ui::draw_page(
            &self.scene,
            &self.placement(),
            self.config.color_theme,
            &mut page,
        );
        ui::blit(&page, scroll, content, frame.buffer_mut());

        ui::draw_banners(
            frame,
            &self.banners,
            content,
            now,
            self.config.timings.banner(),
        );
        ui::draw_help(frame, help, self.config.color_theme);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits at most one frame, or less when a timer is due sooner.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.poll_timeout())? {
            if let Some(input) = input::translate(&event::read()?) {
                self.handle(input);
            }
        }
        Ok(())
    }

    /// Wait at most one frame, and no longer than the next timer.
    fn poll_timeout(&self) -> Duration {
        let frame = self.config.timings.frame();
        let now = self.clock.now();
        self.scheduler
            .next_deadline()
            .map_or(frame, |deadline| deadline.saturating_sub(now).min(frame))
    }

    fn handle(&mut self, input: Input) {
        match input {
            Input::Quit => self.quit(),
            Input::CycleTheme => self.cycle_color_theme(),
            Input::ClickEarth => self.click_earth(),
            Input::ClickSun => self.click_sun(),
            Input::Announce => self.banners.push(ANNOUNCE_MESSAGE, self.clock.now()),
            Input::PointerMoved { column, row } => self.track_pointer(column, row),
            Input::PointerPressed { column, row } => self.tap(column, row),
            Input::Scroll(delta) => self.scroll_by(delta),
            Input::Resized { width, height } => self.resize(width, height),
        }
    }

    /// Zoom the earth for a moment. Clicking again restarts the zoom.
    fn click_earth(&mut self) {
        let now = self.clock.now();
        self.scene.earth.zoomed = true;
        if let Some(id) = self.earth_unzoom.take() {
            self.scheduler.cancel(id);
        }
        self.earth_unzoom = Some(self.scheduler.after(now, EARTH_ZOOM_TIME, Timed::EarthUnzoom));
        self.banners.push(EARTH_MESSAGE, now);
    }

    /// Swell the sun for a moment.
    fn click_sun(&mut self) {
        let now = self.clock.now();
        self.scene.sun.scale = SUN_PULSE_SCALE;
        if let Some(id) = self.sun_release.take() {
            self.scheduler.cancel(id);
        }
        self.sun_release = Some(self.scheduler.after(now, SUN_PULSE_TIME, Timed::SunRelease));
        self.banners.push(SUN_MESSAGE, now);
    }

    /// Tilt the earth and grow the sun with the pointer, and hover cards.
    fn track_pointer(&mut self, column: u16, row: u16) {
        let Some((x, y)) = self.to_viewport(column, row) else {
            return;
        };
        let nx = x as f64 / self.viewport.width as f64;
        let ny = y as f64 / self.viewport.height as f64;

        if !self.scene.earth.zoomed {
            self.scene.earth.rotation_deg = nx * EARTH_TILT_DEG;
        }
        self.scene.sun.scale = 1.0 + ny * SUN_GROWTH;

        let hovered = self
            .placement()
            .card_at(to_page(x, y, self.scene.scroll));
        for (i, card) in self.scene.cards.iter_mut().enumerate() {
            card.hovered = hovered == Some(i);
        }
    }

    /// A press on the earth or the sun clicks it and asks for a haptic pulse.
    fn tap(&mut self, column: u16, row: u16) {
        let Some((x, y)) = self.to_viewport(column, row) else {
            return;
        };
        let pos = to_page(x, y, self.scene.scroll);
        let placement = self.placement();

        let pulse = if disc_contains(placement.earth, self.scene.earth.scale(), pos.x, pos.y) {
            self.click_earth();
            EARTH_PULSE
        } else if disc_contains(placement.sun, self.scene.sun.scale, pos.x, pos.y) {
            self.click_sun();
            SUN_PULSE
        } else {
            return;
        };

        if self.config.haptics {
            if let Err(e) = self.haptics.pulse(pulse) {
                log::warn!(target: "haptics", "pulse failed: {e}");
            }
        }
    }

    fn scroll_by(&mut self, delta: i16) {
        let scrolled = (self.scene.scroll as i32 + delta as i32).max(0);
        self.scene.scroll = scrolled.min(u16::MAX as i32) as u16;
        self.clamp_scroll();
        self.optimize();
        log::debug!(target: "effects", "scroll {}", self.scene.scroll);
    }

    /// The page can scroll until it has left the viewport.
    fn clamp_scroll(&mut self) {
        self.scene.scroll = self.scene.scroll.min(self.viewport.height);
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Rect::new(0, 0, width, height.saturating_sub(1));
        self.clamp_scroll();
        self.optimize();
    }

    /// Screen cell relative to the viewport, if it lies inside it.
    fn to_viewport(&self, column: u16, row: u16) -> Option<(u16, u16)> {
        let area = self.viewport;
        if area.is_empty() || !area.contains((column, row).into()) {
            return None;
        }
        Some((column - area.x, row - area.y))
    }

    /// Cycle through available color themes and remember the choice.
    fn cycle_color_theme(&mut self) {
        self.config.color_theme = self.config.color_theme.next();
        if let Some(path) = &self.config_path {
            if let Err(e) = self.config.save_to(path) {
                log::warn!(target: "config", "could not save color theme: {e}");
            }
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
