// Example: drive a carousel from a simulated page with a fixed clock.
use slidetrack::{
    Activation, CardBox, Carousel, CarouselOptions, Direction, Host, Input, ScrollCommand,
};

struct PrintHost {
    offset: u64,
}

impl Host for PrintHost {
    fn slide_count(&self) -> usize {
        5
    }

    fn first_card(&self) -> Option<CardBox> {
        Some(CardBox::new(320.0).with_margins(8.0, 8.0))
    }

    fn scroll_to(&mut self, command: ScrollCommand) {
        println!("scroll_to {:?}", command);
        self.offset = command.offset;
    }

    fn set_scroll_offset(&mut self, offset: u64) {
        self.offset = offset;
    }

    fn sync_indicators(&mut self, active: usize, count: usize) {
        let dots: String = (0..count)
            .map(|i| if i == active { '●' } else { '○' })
            .collect();
        println!("dots {dots}");
    }
}

fn main() {
    let mut host = PrintHost { offset: 0 };
    let mut carousel = Carousel::mount(CarouselOptions::default(), &mut host, 0)
        .expect("carousel has slides");

    let mut now_ms = 0u64;
    carousel.tick(&mut host, now_ms);

    // Two quick clicks: the second lands while the first is still moving and is dropped.
    for _ in 0..2 {
        now_ms += 100;
        let r = carousel.handle(
            &mut host,
            Input::Control {
                direction: Direction::Next,
                activation: Activation::Pointer,
            },
            now_ms,
        );
        println!("t={now_ms}ms click next -> {r:?}");
    }

    // Let timers run: motion completion, then a few auto-advances.
    while now_ms < 16_000 {
        let Some(deadline) = carousel.next_deadline() else {
            break;
        };
        now_ms = deadline.max(now_ms);
        if carousel.tick(&mut host, now_ms) {
            println!("t={now_ms}ms auto-advance -> {}", carousel.current_index());
        }
    }

    println!("final {:?} (host offset {})", carousel.state(), host.offset);
}
