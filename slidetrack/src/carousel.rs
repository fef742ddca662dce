use crate::{
    Activation, AutoAdvance, AutoAdvanceStatus, Behavior, CarouselOptions, CarouselState,
    Debounce, Direction, Finished, FocusTarget, Geometry, Host, Indicator, Input, Motion,
    MotionPhase, MountError, Navigation, Response, Swipe,
};

/// Which input produced a navigation request. Only used for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Source {
    Mount,
    Api,
    Control,
    Indicator,
    Swipe,
    Keyboard,
    AutoAdvance,
    Resize,
}

/// A headless looping carousel.
///
/// This type does not hold any UI objects. Every method that can produce a side effect takes
/// the [`Host`] by `&mut` and the current time in milliseconds; the host is expected to:
/// - forward input events through [`Carousel::handle`]
/// - call [`Carousel::tick`] when [`Carousel::next_deadline`] is reached (or every frame)
///
/// Navigation requests are serialized: while a motion is in flight, every request from any
/// source is dropped.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    nav: Navigation,
    geometry: Geometry,
    motion: Motion,
    auto: AutoAdvance,
    swipe: Option<Swipe>,
    resize: Debounce,
}

impl Carousel {
    /// Measures the host, aligns the initial slide and starts auto-advance.
    ///
    /// The initial alignment is an instant motion; it completes on the first `tick`.
    ///
    /// Fails without touching the host when the options are invalid or there are no slides.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn mount(
        options: CarouselOptions,
        host: &mut impl Host,
        now_ms: u64,
    ) -> Result<Self, MountError> {
        if let Err(err) = options.validate() {
            cwarn!(error = ?err, "Carousel::mount: invalid options");
            return Err(err);
        }
        let count = host.slide_count();
        let Some(nav) = Navigation::new(count, 0) else {
            cdebug!("Carousel::mount: no slides");
            return Err(MountError::NoSlides);
        };

        let mut geometry = Geometry::default();
        geometry.measure(host.first_card());
        geometry.set_gap(host.card_gap(), options.card_gap);
        cdebug!(
            count,
            card_width = geometry.card_width,
            gap = geometry.gap,
            "Carousel::mount"
        );

        let mut carousel = Self {
            nav,
            geometry,
            motion: Motion::new(),
            auto: AutoAdvance::new(options.auto_advance, options.auto_advance_ms, now_ms),
            swipe: None,
            resize: Debounce::new(options.resize_debounce_ms),
            options,
        };
        host.sync_indicators(carousel.nav.current(), count);
        carousel.try_transition(
            host,
            options.initial_index,
            Behavior::Instant,
            now_ms,
            Source::Mount,
        );
        Ok(carousel)
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn current_index(&self) -> usize {
        self.nav.current()
    }

    pub fn slide_count(&self) -> usize {
        self.nav.count()
    }

    pub fn is_animating(&self) -> bool {
        self.motion.is_animating()
    }

    pub fn motion_phase(&self) -> MotionPhase {
        self.motion.phase()
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn auto_advance(&self) -> AutoAdvanceStatus {
        self.auto.status()
    }

    /// Scroll offset that aligns the slide at `index` (wrapped).
    pub fn offset_for(&self, index: i64) -> u64 {
        self.geometry.offset_for(self.nav.resolve(index))
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            index: self.nav.current(),
            count: self.nav.count(),
            offset: self.geometry.offset_for(self.nav.current()),
            is_animating: self.motion.is_animating(),
            auto_advance: self.auto.status(),
            geometry: self.geometry,
        }
    }

    /// Indicator dots, in slide order.
    pub fn indicators(&self) -> impl Iterator<Item = Indicator> + '_ {
        let current = self.nav.current();
        (0..self.nav.count()).map(move |index| Indicator {
            index,
            active: index == current,
        })
    }

    /// The earliest time at which [`Carousel::tick`] has work to do.
    pub fn next_deadline(&self) -> Option<u64> {
        [
            self.motion.deadline(),
            self.auto.next_due(),
            self.resize.deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Navigates to `target` (wrapped into range).
    ///
    /// Returns `false` when the request was dropped because a motion is in flight.
    pub fn go_to(
        &mut self,
        host: &mut impl Host,
        target: i64,
        animate: bool,
        now_ms: u64,
    ) -> bool {
        self.try_transition(
            host,
            target,
            Behavior::from_animate(animate),
            now_ms,
            Source::Api,
        )
    }

    pub fn next(&mut self, host: &mut impl Host, now_ms: u64) -> bool {
        self.step(host, Direction::Next, now_ms, Source::Api)
    }

    pub fn prev(&mut self, host: &mut impl Host, now_ms: u64) -> bool {
        self.step(host, Direction::Previous, now_ms, Source::Api)
    }

    /// Routes an input event.
    pub fn handle(&mut self, host: &mut impl Host, input: Input, now_ms: u64) -> Response {
        match input {
            Input::Control {
                direction,
                activation,
            } => {
                if let Activation::Key(key) = activation {
                    if !key.activates() {
                        return Response::default();
                    }
                }
                Response::prevented(self.step(host, direction, now_ms, Source::Control))
            }
            Input::Indicator(index) => {
                let target = i64::try_from(index).unwrap_or(i64::MAX);
                Response::navigated(self.try_transition(
                    host,
                    target,
                    Behavior::Smooth,
                    now_ms,
                    Source::Indicator,
                ))
            }
            Input::TouchStart { x } => {
                self.swipe = Some(Swipe::new(x));
                self.auto.pause();
                Response::default()
            }
            Input::TouchMove { x } => {
                let Some(swipe) = self.swipe.as_mut() else {
                    return Response::default();
                };
                swipe.update(x);
                if swipe.shows_intent(self.options.swipe_intent_threshold) {
                    Response::prevented(false)
                } else {
                    Response::default()
                }
            }
            Input::TouchEnd => {
                let direction = self
                    .swipe
                    .take()
                    .and_then(|s| s.direction(self.options.swipe_threshold));
                let navigated = match direction {
                    Some(direction) => self.step(host, direction, now_ms, Source::Swipe),
                    None => false,
                };
                self.auto.start(now_ms);
                Response::navigated(navigated)
            }
            Input::TouchCancel => {
                self.swipe = None;
                self.auto.start(now_ms);
                Response::default()
            }
            Input::KeyDown { key, focus } => {
                if focus == FocusTarget::TextEntry {
                    return Response::default();
                }
                match key.arrow_direction() {
                    Some(direction) => {
                        Response::prevented(self.step(host, direction, now_ms, Source::Keyboard))
                    }
                    None => Response::default(),
                }
            }
            Input::PointerEnter(_) | Input::FocusIn => {
                self.auto.pause();
                Response::default()
            }
            Input::PointerLeave(_) | Input::FocusOut => {
                self.auto.start(now_ms);
                Response::default()
            }
            Input::Resize => {
                self.resize.schedule(now_ms);
                Response::default()
            }
            Input::Scroll => {
                self.motion.on_scroll_event(now_ms, self.options.settle_ms());
                Response::default()
            }
            Input::ScrollEnd => {
                if self.options.use_scrollend_event {
                    if let Some(finished) = self.motion.on_scroll_end() {
                        self.on_finished(host, finished, now_ms);
                    }
                }
                Response::default()
            }
        }
    }

    /// Runs everything that is due at `now_ms`: resize realignment, motion completion and
    /// auto-advance.
    ///
    /// Returns `true` if a navigation was started.
    pub fn tick(&mut self, host: &mut impl Host, now_ms: u64) -> bool {
        let mut navigated = false;

        if self.resize.poll(now_ms) {
            navigated |= self.realign(host, now_ms);
        }

        if let Some(finished) = self.motion.poll(now_ms) {
            self.on_finished(host, finished, now_ms);
        }

        if self.auto.poll(now_ms) {
            if self.motion.is_animating() {
                ctrace!(now_ms, "auto-advance tick skipped: motion in flight");
            } else {
                navigated |= self.step(host, Direction::Next, now_ms, Source::AutoAdvance);
            }
        }

        navigated
    }

    fn step(
        &mut self,
        host: &mut impl Host,
        direction: Direction,
        now_ms: u64,
        source: Source,
    ) -> bool {
        let target = self.nav.relative(direction.step());
        self.try_transition(host, target, Behavior::Smooth, now_ms, source)
    }

    /// The single guarded entry point for every navigation source.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn try_transition(
        &mut self,
        host: &mut impl Host,
        target: i64,
        behavior: Behavior,
        now_ms: u64,
        source: Source,
    ) -> bool {
        if self.motion.is_animating() {
            ctrace!(requested = target, ?source, "navigation dropped: motion in flight");
            return false;
        }

        let index = self.nav.set(target);
        let offset = self.geometry.offset_for(index);
        let command = self
            .motion
            .begin(offset, behavior, now_ms, self.options.settle_ms());
        ctrace!(
            requested = target,
            index,
            offset,
            ?behavior,
            ?source,
            "navigation accepted"
        );

        host.scroll_to(command);
        host.sync_indicators(index, self.nav.count());
        true
    }

    fn on_finished(&mut self, host: &mut impl Host, finished: Finished, now_ms: u64) {
        match finished {
            Finished::Motion { target, started_ms } => {
                host.set_scroll_offset(target);
                // Anchor the next auto-advance to when the navigation was requested, unless
                // the motion ran so long that the anchor is already a full period behind.
                let anchor = if now_ms.saturating_sub(started_ms) >= self.auto.period_ms() {
                    now_ms
                } else {
                    started_ms
                };
                self.auto.start(anchor);
                ctrace!(offset = target, started_ms, now_ms, "motion finished");
            }
            Finished::Settle => {
                self.auto.start(now_ms);
                ctrace!(now_ms, "scroll settled");
            }
        }
        host.sync_indicators(self.nav.current(), self.nav.count());
    }

    fn realign(&mut self, host: &mut impl Host, now_ms: u64) -> bool {
        if self.motion.is_animating() {
            // The in-flight target was computed with the old width; try again afterwards.
            self.resize.schedule(now_ms);
            return false;
        }
        self.geometry.measure(host.first_card());
        self.geometry.set_gap(host.card_gap(), self.options.card_gap);
        cdebug!(
            card_width = self.geometry.card_width,
            gap = self.geometry.gap,
            index = self.nav.current(),
            "realigning after resize"
        );
        let current = self.nav.current() as i64;
        self.try_transition(host, current, Behavior::Instant, now_ms, Source::Resize)
    }
}
