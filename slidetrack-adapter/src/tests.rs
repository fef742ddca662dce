use crate::*;

use slidetrack::{
    Activation, Behavior, CardBox, CarouselOptions, Direction, Host, Input, ScrollCommand,
};
use std::vec::Vec;

#[derive(Debug, Default)]
struct RecordingHost {
    commands: Vec<ScrollCommand>,
    offsets: Vec<u64>,
    active: Option<usize>,
}

impl Host for RecordingHost {
    fn slide_count(&self) -> usize {
        4
    }

    fn first_card(&self) -> Option<CardBox> {
        Some(CardBox::new(100.0))
    }

    fn card_gap(&self) -> Option<f32> {
        Some(0.0)
    }

    fn scroll_to(&mut self, command: ScrollCommand) {
        self.commands.push(command);
    }

    fn set_scroll_offset(&mut self, offset: u64) {
        self.offsets.push(offset);
    }

    fn sync_indicators(&mut self, active: usize, _count: usize) {
        self.active = Some(active);
    }
}

fn mount(options: CarouselOptions, smoothing: Smoothing) -> Driver<RecordingHost> {
    let mut d = Driver::mount(options, RecordingHost::default(), smoothing, 0).unwrap();
    // Complete the instant initial alignment.
    d.tick(0);
    d
}

fn click_next() -> Input {
    Input::Control {
        direction: Direction::Next,
        activation: Activation::Pointer,
    }
}

#[test]
fn tween_hits_endpoints_and_is_monotonic() {
    for easing in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
        Easing::EaseOutCubic,
    ] {
        let t = ScrollTween::new(100, 500, 1_000, 300, easing);
        assert_eq!(t.sample(900), 100);
        assert_eq!(t.sample(1_000), 100);
        assert_eq!(t.sample(1_300), 500);
        assert!(t.is_done(1_300));

        let mut last = 0;
        for now in (1_000..=1_300).step_by(10) {
            let off = t.sample(now);
            assert!(off >= last, "{easing:?} at {now}");
            last = off;
        }
    }

    let back = ScrollTween::new(500, 0, 0, 100, Easing::Linear);
    assert_eq!(back.sample(50), 250);
    assert_eq!(back.sample(100), 0);
    assert_eq!(ScrollTween::new(0, 10, 0, 0, Easing::Linear).duration_ms, 1);
}

#[test]
fn easing_curves_pin_their_shape() {
    assert_eq!(Easing::default(), Easing::EaseInOutCubic);
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.5), 0.5, "{easing:?}");
    }
    assert_eq!(Easing::EaseOutCubic.sample(0.5), 0.875);
    assert!(Easing::EaseInOutCubic.sample(0.25) < Easing::Linear.sample(0.25));
}

#[test]
fn native_smoothing_passes_commands_through() {
    let mut d = mount(CarouselOptions::default(), Smoothing::Native);
    let r = d.dispatch(click_next(), 10);
    assert!(r.navigated);
    assert_eq!(
        d.host().commands.last().copied(),
        Some(ScrollCommand {
            offset: 100,
            behavior: Behavior::Smooth,
        })
    );
    assert!(!d.is_tweening());
    assert_eq!(d.offset(), 100);
}

#[test]
fn emulated_smoothing_tweens_and_completes_on_scroll_end() {
    let options = CarouselOptions::new().with_use_scrollend_event(true);
    let smoothing = Smoothing::Emulated {
        duration_ms: 200,
        easing: Easing::Linear,
    };
    let mut d = mount(options, smoothing);
    let instant_commands = d.host().commands.len();

    assert!(d.dispatch(click_next(), 1_000).navigated);
    assert!(d.is_tweening());
    assert_eq!(d.host().commands.len(), instant_commands);
    assert_eq!(d.host().active, Some(1));
    assert_eq!(d.next_wakeup(1_000), Some(1_016));

    assert_eq!(d.tick(1_100), Some(50));
    assert!(d.carousel().is_animating());

    assert_eq!(d.tick(1_200), Some(100));
    assert!(!d.is_tweening());
    assert!(!d.carousel().is_animating());
    assert_eq!(d.host().offsets.last().copied(), Some(100));
    assert_eq!(d.tick(1_300), None);
}

#[test]
fn emulated_without_scrollend_waits_for_the_timer() {
    let smoothing = Smoothing::Emulated {
        duration_ms: 200,
        easing: Easing::SmoothStep,
    };
    let mut d = mount(CarouselOptions::default(), smoothing);
    assert!(d.go_to(2, true, 500));

    d.tick(700);
    assert!(!d.is_tweening());
    assert!(d.carousel().is_animating());
    // The last frame counts as a scroll event and pushes completion out.
    assert_eq!(d.next_wakeup(700), Some(1_050));

    d.tick(1_049);
    assert!(d.carousel().is_animating());
    d.tick(1_050);
    assert!(!d.carousel().is_animating());
    assert_eq!(d.offset(), 200);
}

#[test]
fn instant_commands_bypass_the_tween() {
    let smoothing = Smoothing::Emulated {
        duration_ms: 200,
        easing: Easing::Linear,
    };
    let mut d = mount(CarouselOptions::default(), smoothing);
    assert!(d.go_to(3, false, 10));
    assert!(!d.is_tweening());
    assert_eq!(
        d.host().commands.last().copied(),
        Some(ScrollCommand {
            offset: 300,
            behavior: Behavior::Instant,
        })
    );
}

#[test]
fn next_wakeup_follows_auto_advance_when_idle() {
    let mut d = mount(CarouselOptions::default(), Smoothing::Native).with_frame_ms(8);
    assert_eq!(d.next_wakeup(0), Some(5_000));
    d.tick(5_000);
    assert_eq!(d.carousel().current_index(), 1);
    assert_eq!(d.next_wakeup(5_000), Some(5_350));
}

#[test]
fn long_tween_is_not_cut_short_by_the_completion_timer() {
    let smoothing = Smoothing::Emulated {
        duration_ms: 600,
        easing: Easing::Linear,
    };
    let mut d = mount(CarouselOptions::default(), smoothing);
    assert!(d.go_to(2, true, 1_000));

    let mut last = 0;
    for now in (1_050..1_600).step_by(50) {
        let off = d.tick(now).unwrap();
        assert!(off >= last && off < 200, "t={now} off={off}");
        last = off;
        assert!(d.is_tweening());
        assert!(d.carousel().is_animating());
    }
    // Nothing jumped ahead of the tween.
    assert!(!d.host().offsets.contains(&200));

    assert_eq!(d.tick(1_600), Some(200));
    assert!(!d.is_tweening());
    assert!(d.carousel().is_animating());
    d.tick(1_950);
    assert!(!d.carousel().is_animating());
    assert_eq!(d.offset(), 200);
    assert_eq!(d.carousel().current_index(), 2);
}
