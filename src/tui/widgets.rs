//! # UI Widgets Module
//!
//! Draws one frame: attempt counter, win banner, the ticket card and the key
//! hints. The card is drawn last so it covers the banner until it is dragged away.

use crate::app::App;
use crate::tui::layout::{card_sections, ScreenLayout};
use lottery::TicketSource;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

pub fn render<S: TicketSource>(app: &App<S>, frame: &mut Frame) {
    let layout = app.layout(frame.size());

    if app.widget.is_won() {
        draw_banner(frame, app, layout.banner);
    }
    draw_counter(frame, app, layout.counter);
    draw_footer(frame, app, layout);
    draw_card(frame, app, layout.card);
}

/// Message written "behind" the winning ticket.
pub fn banner_text(attempts: u64) -> String {
    let n = attempts + 1;
    format!("You won on try #{}, so you owe {} treats!", n, n)
}

fn draw_banner<S: TicketSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let text = banner_text(app.widget.attempts());
    let padding = (area.height / 2).saturating_sub(1) as usize;
    let mut lines: Vec<Line> = vec![Line::from(""); padding];
    lines.push(Line::from(Span::styled(
        text,
        Style::default().fg(Color::LightMagenta).add_modifier(Modifier::BOLD),
    )));

    let banner = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().style(Style::default().bg(Color::Rgb(40, 16, 48))));
    f.render_widget(banner, area);
}

fn draw_counter<S: TicketSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let counter = Paragraph::new(format!("Attempts: {} ", app.widget.attempts()))
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(counter, area);
}

fn draw_footer<S: TicketSource>(f: &mut Frame, app: &App<S>, layout: ScreenLayout) {
    let hint = if app.widget.is_won() {
        "drag the ticket: move it   q/Esc: quit"
    } else {
        "n/Space/Enter or click New Ticket: draw again   q/Esc: quit"
    };
    let footer = Paragraph::new(hint).style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, layout.footer);
}

fn draw_card<S: TicketSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let won = app.widget.is_won();
    let dragging = app.widget.is_dragging();

    let (border_type, border_style) = if dragging {
        // "grabbing"
        (BorderType::Double, Style::default().fg(Color::LightYellow).add_modifier(Modifier::BOLD))
    } else if won {
        (BorderType::Rounded, Style::default().fg(Color::Yellow))
    } else {
        (BorderType::Plain, Style::default().fg(Color::White))
    };

    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .title(" Lottery Ticket ")
        .title_alignment(Alignment::Center);
    f.render_widget(block, area);

    let sections = card_sections(area);

    if won {
        let badge = Paragraph::new(Span::styled(
            " YOU WON! ",
            Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        f.render_widget(badge, sections.badge);
    }

    let mut digits: Vec<Span> = Vec::new();
    for (i, digit) in app.widget.ticket().digits().iter().enumerate() {
        if i > 0 {
            digits.push(Span::raw("  "));
        }
        digits.push(Span::styled(
            format!(" {} ", digit),
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
        ));
    }
    f.render_widget(
        Paragraph::new(Line::from(digits)).alignment(Alignment::Center),
        sections.digits,
    );

    let message = if won {
        Span::styled(
            "🎉 Congratulations, you won! 🎉",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("Try again!")
    };
    f.render_widget(Paragraph::new(message).alignment(Alignment::Center), sections.message);

    if won {
        let hint = Paragraph::new(Span::styled(
            "Drag me to see what's written behind",
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center);
        f.render_widget(hint, sections.hint);
    }

    let button_style = if won {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
    };
    f.render_widget(
        Paragraph::new("[ New Ticket ]").alignment(Alignment::Center).style(button_style),
        sections.button,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::app_with;
    use crate::tui::layout::to_bounds;
    use lottery::drag::Position;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn draw<S: TicketSource>(app: &App<S>, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(app, f)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buf: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    fn corner(buf: &Buffer, card: Rect) -> &str {
        buf.get(card.x, card.y).symbol()
    }

    #[test]
    fn test_banner_counts_the_winning_try() {
        assert_eq!(banner_text(0), "You won on try #1, so you owe 1 treats!");
        assert_eq!(banner_text(6), "You won on try #7, so you owe 7 treats!");
    }

    #[test]
    fn test_losing_frame() {
        let mut app = app_with(&[[1, 2, 3]]);
        app.update();
        let card = app.layout(Rect::new(0, 0, 80, 24)).card;
        let buf = draw(&app, 80, 24);
        let text = screen_text(&buf);

        assert!(text.contains("Try again!"));
        assert!(text.contains("[ New Ticket ]"));
        assert!(text.contains("Attempts: 0"));
        assert!(!text.contains("YOU WON!"));
        assert!(!text.contains("treats"));
        assert_eq!(corner(&buf, card), "┌");

        let button = card_sections(card).button;
        assert_eq!(buf.get(button.x, button.y).bg, Color::Green);
    }

    #[test]
    fn test_winning_frame_hides_banner_behind_card() {
        let mut app = app_with(&[[1, 2, 3], [5, 5, 0]]);
        app.update();
        app.new_ticket();
        app.update();
        let card = app.layout(Rect::new(0, 0, 80, 24)).card;
        let buf = draw(&app, 80, 24);
        let text = screen_text(&buf);

        assert!(text.contains("YOU WON!"));
        assert!(text.contains("Congratulations, you won!"));
        assert!(text.contains("Drag me to see what's written behind"));
        assert!(text.contains("Attempts: 1"));
        assert!(!text.contains("Try again!"));
        assert!(!text.contains("treats"));
        assert_eq!(corner(&buf, card), "╭");

        let button = card_sections(card).button;
        let cell = buf.get(button.x, button.y);
        assert_eq!(cell.fg, Color::DarkGray);
        assert_ne!(cell.bg, Color::Green);
    }

    #[test]
    fn test_dragging_frame_reveals_banner() {
        let area = Rect::new(0, 0, 120, 40);
        let mut app = app_with(&[[1, 2, 3], [5, 5, 0]]);
        app.update();
        app.new_ticket();
        app.update();

        let card = app.layout(area).card;
        let grab = Position::new(i32::from(card.x) + 1, i32::from(card.y) + 1);
        assert!(app.widget.pointer_down(grab, to_bounds(card)));
        app.widget.pointer_move(Position::new(1, 1));

        let moved = app.layout(area).card;
        assert_eq!((moved.x, moved.y), (0, 0));
        let buf = draw(&app, area.width, area.height);
        assert_eq!(corner(&buf, moved), "╔");
        assert!(screen_text(&buf).contains("You won on try #2, so you owe 2 treats!"));

        app.widget.pointer_up();
        let buf = draw(&app, area.width, area.height);
        assert_eq!(corner(&buf, moved), "╭");
    }
}
