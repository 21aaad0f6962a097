//! End-to-end behaviour of the ticket widget through the public API.

use lottery::audio::tones::{click_tone, victory_tone};
use lottery::audio::{AudioFeedback, SAMPLE_RATE};
use lottery::drag::{Bounds, Position};
use lottery::widget::TicketWidget;
use lottery::{is_winning, Ticket, TicketGenerator, TicketSource, WIN_TARGET};
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Counts cues instead of playing them.
#[derive(Default)]
struct Recorder {
    clicks: usize,
    victories: usize,
}

impl AudioFeedback for Recorder {
    fn play_click(&mut self) {
        self.clicks += 1;
    }

    fn play_victory(&mut self) {
        self.victories += 1;
    }
}

fn card() -> Bounds {
    Bounds { x: 10, y: 4, width: 30, height: 12 }
}

/// Keeps drawing until the widget wins, observing every frame like the UI does.
fn play_until_win<S: TicketSource>(widget: &mut TicketWidget<S, Recorder>) -> u64 {
    widget.observe();
    while !widget.is_won() {
        let before = widget.attempts();
        assert!(widget.regenerate());
        assert_eq!(widget.attempts(), before + 1);
        widget.observe();
        assert!(widget.attempts() < 10_000, "no win after 10k draws");
    }
    widget.attempts()
}

#[test]
fn seeded_game_eventually_wins_and_locks() {
    let mut widget = TicketWidget::new(TicketGenerator::seeded(2024), Recorder::default());
    let attempts = play_until_win(&mut widget);

    assert_eq!(widget.ticket().sum(), WIN_TARGET);
    assert_eq!(widget.audio().clicks as u64, attempts);
    assert_eq!(widget.audio().victories, 1);

    let locked = *widget.ticket();
    for _ in 0..5 {
        assert!(!widget.regenerate());
        widget.observe();
    }
    assert_eq!(*widget.ticket(), locked);
    assert_eq!(widget.attempts(), attempts);
    assert_eq!(widget.audio().victories, 1);
}

#[test]
fn same_seed_same_game() {
    let mut a = TicketWidget::new(TicketGenerator::seeded(99), Recorder::default());
    let mut b = TicketWidget::new(
        TicketGenerator::with_rng(Xoshiro256PlusPlus::seed_from_u64(99)),
        Recorder::default(),
    );
    assert_eq!(play_until_win(&mut a), play_until_win(&mut b));
    assert_eq!(a.ticket(), b.ticket());
}

#[test]
fn pointer_events_ignored_until_win() {
    struct Losers;

    impl TicketSource for Losers {
        fn draw(&mut self) -> Ticket {
            Ticket::new([1, 2, 3]).unwrap()
        }
    }

    let mut widget = TicketWidget::new(Losers, Recorder::default());
    for _ in 0..3 {
        widget.observe();
        assert!(!widget.pointer_down(Position::new(12, 6), card()));
        assert_eq!(widget.pointer_move(Position::new(0, 0)), None);
        widget.pointer_up();
        widget.regenerate();
    }
    assert_eq!(widget.card_position(), None);
    assert!(!widget.drag().is_attached());
    assert_eq!(widget.audio().victories, 0);
}

#[test]
fn winning_ticket_follows_the_pointer() {
    let mut widget = TicketWidget::new(TicketGenerator::seeded(31), Recorder::default());
    play_until_win(&mut widget);
    assert!(widget.drag().is_attached());

    assert!(widget.pointer_down(Position::new(15, 5), card()));
    for step in 0..5 {
        let moved = widget.pointer_move(Position::new(15 + step * 3, 5 + step));
        assert_eq!(moved, Some(Position::new(10 + step * 3, 4 + step)));
    }
    widget.pointer_up();
    assert!(!widget.is_dragging());
    assert_eq!(widget.card_position(), Some(Position::new(22, 8)));

    widget.teardown();
    assert!(!widget.drag().is_attached());
}

#[test]
fn free_function_matches_method() {
    for digits in [[3, 3, 4], [1, 2, 3], [0, 0, 0], [9, 0, 1], [9, 9, 9]] {
        let ticket = Ticket::new(digits).unwrap();
        assert_eq!(is_winning(&ticket), ticket.is_winning());
    }
}

#[test]
fn cues_render_to_expected_lengths() {
    let click = click_tone().render(SAMPLE_RATE);
    let victory = victory_tone().render(SAMPLE_RATE);
    let samples = |secs: f64| (secs * f64::from(SAMPLE_RATE)).round() as usize;
    assert!(click.len().abs_diff(samples(0.12)) <= 1);
    assert!(victory.len().abs_diff(samples(0.75)) <= 1);
    assert!(click.iter().chain(victory.iter()).all(|s| s.abs() <= 1.0));
}
