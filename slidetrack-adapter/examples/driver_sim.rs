// Example: a tween-emulated carousel driven by a single wake-up timer.
use slidetrack::{CardBox, CarouselOptions, Host, Input, ScrollCommand};
use slidetrack_adapter::{Driver, Easing, Smoothing};

#[derive(Default)]
struct Pane {
    offset: u64,
}

impl Host for Pane {
    fn slide_count(&self) -> usize {
        6
    }

    fn first_card(&self) -> Option<CardBox> {
        Some(CardBox::new(40.0))
    }

    fn card_gap(&self) -> Option<f32> {
        Some(2.0)
    }

    fn scroll_to(&mut self, command: ScrollCommand) {
        self.offset = command.offset;
    }

    fn set_scroll_offset(&mut self, offset: u64) {
        self.offset = offset;
    }
}

fn main() {
    let options = CarouselOptions::new()
        .with_auto_advance_ms(1_000)
        .with_use_scrollend_event(true);
    let smoothing = Smoothing::Emulated {
        duration_ms: 240,
        easing: Easing::EaseOutCubic,
    };
    let mut driver =
        Driver::mount(options, Pane::default(), smoothing, 0).expect("pane has slides");

    let mut now_ms = 0u64;
    while now_ms < 4_000 {
        if let Some(off) = driver.tick(now_ms) {
            println!("t={now_ms}ms frame offset={off}");
        }
        if now_ms == 1_500 {
            // A swipe arrives mid-way; it is dropped if a motion is in flight.
            driver.dispatch(Input::TouchStart { x: 200.0 }, now_ms);
            driver.dispatch(Input::TouchMove { x: 100.0 }, now_ms);
            let r = driver.dispatch(Input::TouchEnd, now_ms);
            println!("t={now_ms}ms swipe -> {r:?}");
        }
        let Some(next) = driver.next_wakeup(now_ms) else {
            break;
        };
        now_ms = next.max(now_ms + 1);
    }

    println!(
        "index={} offset={}",
        driver.carousel().current_index(),
        driver.host().offset
    );
}
