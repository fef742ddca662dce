use slidetrack::{
    Behavior, CardBox, Carousel, CarouselOptions, Host, Input, MountError, Response,
    ScrollCommand,
};

use crate::{Easing, ScrollTween};

/// How smooth scroll commands reach the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Smoothing {
    /// The host animates smooth commands itself (e.g. `scrollTo({ behavior: "smooth" })`).
    #[default]
    Native,
    /// The driver animates smooth commands with a tween and writes each frame's offset
    /// through `Host::set_scroll_offset`.
    Emulated { duration_ms: u64, easing: Easing },
}

/// Frame interval used while a tween is running.
pub const DEFAULT_FRAME_MS: u64 = 16;

/// A framework-neutral driver that owns a [`Carousel`] together with its host.
///
/// Adapters drive it by calling:
/// - `dispatch(input, now_ms)` for every UI event
/// - `tick(now_ms)` when `next_wakeup()` is reached (one timer is enough)
///
/// With [`Smoothing::Emulated`], smooth scroll commands never reach the host as such: the
/// driver tweens the offset and reports every frame to the carousel as a scroll event, so the
/// motion stays in flight until the tween has finished. A scroll-end follows the last frame.
#[derive(Debug)]
pub struct Driver<H> {
    carousel: Carousel,
    host: H,
    smoothing: Smoothing,
    tween: Option<ScrollTween>,
    offset: u64,
    frame_ms: u64,
}

impl<H: Host> Driver<H> {
    pub fn mount(
        options: CarouselOptions,
        mut host: H,
        smoothing: Smoothing,
        now_ms: u64,
    ) -> Result<Self, MountError> {
        let mut tween = None;
        let mut offset = 0;
        let carousel = {
            let mut surface = Surface {
                host: &mut host,
                smoothing,
                tween: &mut tween,
                offset: &mut offset,
                now_ms,
            };
            Carousel::mount(options, &mut surface, now_ms)?
        };
        Ok(Self {
            carousel,
            host,
            smoothing,
            tween,
            offset,
            frame_ms: DEFAULT_FRAME_MS,
        })
    }

    pub fn with_frame_ms(mut self, frame_ms: u64) -> Self {
        self.frame_ms = frame_ms.max(1);
        self
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_parts(self) -> (Carousel, H) {
        (self.carousel, self.host)
    }

    pub fn smoothing(&self) -> Smoothing {
        self.smoothing
    }

    /// Last offset the driver wrote (or asked the host to scroll to).
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn is_tweening(&self) -> bool {
        self.tween.is_some()
    }

    pub fn dispatch(&mut self, input: Input, now_ms: u64) -> Response {
        let mut surface = Surface {
            host: &mut self.host,
            smoothing: self.smoothing,
            tween: &mut self.tween,
            offset: &mut self.offset,
            now_ms,
        };
        self.carousel.handle(&mut surface, input, now_ms)
    }

    pub fn go_to(&mut self, target: i64, animate: bool, now_ms: u64) -> bool {
        let mut surface = Surface {
            host: &mut self.host,
            smoothing: self.smoothing,
            tween: &mut self.tween,
            offset: &mut self.offset,
            now_ms,
        };
        self.carousel.go_to(&mut surface, target, animate, now_ms)
    }

    /// Advances the tween (if any) and the carousel's timers.
    ///
    /// Returns the offset written this frame when a tween is running.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        let mut frame = None;
        if let Some(tween) = self.tween {
            let off = tween.sample(now_ms);
            self.offset = off;
            self.host.set_scroll_offset(off);
            frame = Some(off);
            self.dispatch(Input::Scroll, now_ms);
            if tween.is_done(now_ms) {
                self.tween = None;
                atrace!(to = tween.to, now_ms, "tween finished");
                self.dispatch(Input::ScrollEnd, now_ms);
            }
        }

        let mut surface = Surface {
            host: &mut self.host,
            smoothing: self.smoothing,
            tween: &mut self.tween,
            offset: &mut self.offset,
            now_ms,
        };
        self.carousel.tick(&mut surface, now_ms);
        frame
    }

    /// When the driver next needs a `tick`.
    pub fn next_wakeup(&self, now_ms: u64) -> Option<u64> {
        let frame = self
            .tween
            .map(|t| now_ms.saturating_add(self.frame_ms).min(t.end_ms()));
        match (frame, self.carousel.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

/// The host as seen by the carousel: smooth commands are intercepted when emulating.
struct Surface<'a, H> {
    host: &'a mut H,
    smoothing: Smoothing,
    tween: &'a mut Option<ScrollTween>,
    offset: &'a mut u64,
    now_ms: u64,
}

impl<H: Host> Host for Surface<'_, H> {
    fn slide_count(&self) -> usize {
        self.host.slide_count()
    }

    fn first_card(&self) -> Option<CardBox> {
        self.host.first_card()
    }

    fn card_gap(&self) -> Option<f32> {
        self.host.card_gap()
    }

    fn scroll_to(&mut self, command: ScrollCommand) {
        match (command.behavior, self.smoothing) {
            (
                Behavior::Smooth,
                Smoothing::Emulated {
                    duration_ms,
                    easing,
                },
            ) => {
                atrace!(from = *self.offset, to = command.offset, duration_ms, "tween started");
                *self.tween = Some(ScrollTween::new(
                    *self.offset,
                    command.offset,
                    self.now_ms,
                    duration_ms,
                    easing,
                ));
            }
            _ => {
                *self.tween = None;
                *self.offset = command.offset;
                self.host.scroll_to(command);
            }
        }
    }

    fn set_scroll_offset(&mut self, offset: u64) {
        *self.tween = None;
        *self.offset = offset;
        self.host.set_scroll_offset(offset);
    }

    fn sync_indicators(&mut self, active: usize, count: usize) {
        self.host.sync_indicators(active, count);
    }
}
