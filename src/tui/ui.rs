use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, ThemeMode};
use crate::tui::input::InputState;

const HELP_LINE: &str =
    "Enter: convert | Tab: direction | Ctrl+P: play | Ctrl+L: clear | Ctrl+Y: copy | Ctrl+T: theme | Esc: quit";

struct Palette {
    bg: Color,
    fg: Color,
}

fn palette(theme: ThemeMode) -> Palette {
    match theme {
        ThemeMode::Light => Palette {
            bg: Color::Rgb(240, 240, 240),
            fg: Color::Rgb(0, 0, 0),
        },
        ThemeMode::Dark => Palette {
            bg: Color::Rgb(30, 30, 30),
            fg: Color::Rgb(255, 255, 255),
        },
    }
}

pub fn draw(frame: &mut Frame, app: &App, input: &InputState) {
    use Constraint::{Length, Min};

    let p = palette(app.theme);
    let style = Style::default().bg(p.bg).fg(p.fg);

    // Paint the whole frame so the theme covers unused cells too
    frame.render_widget(Block::new().style(style), frame.area());

    let layout = Layout::vertical([Length(1), Length(3), Min(0), Length(1), Length(1)]);
    let [title_area, input_area, output_area, status_area, help_area] =
        layout.areas(frame.area());

    let title = format!("Text ↔ Morse Code Converter | {}", app.direction.label());
    frame.render_widget(Paragraph::new(title).style(style), title_area);

    // Entry line scrolls horizontally so the cursor stays visible
    let inner_width = input_area.width.saturating_sub(2) as usize;
    let cursor_col = input.cursor_column();
    let scroll = cursor_col.saturating_sub(inner_width.saturating_sub(1).max(1));
    let entry = Paragraph::new(input.text())
        .style(style)
        .scroll((0, scroll as u16))
        .block(Block::bordered().title("Enter Text or Morse Code:"));
    frame.render_widget(entry, input_area);
    frame.set_cursor_position((
        input_area.x + 1 + (cursor_col - scroll) as u16,
        input_area.y + 1,
    ));

    let output = Paragraph::new(app.output.as_str())
        .style(style)
        .wrap(Wrap { trim: false })
        .block(Block::bordered().title("Output:"));
    frame.render_widget(output, output_area);

    frame.render_widget(
        Paragraph::new(app.status_message.as_str()).style(style),
        status_area,
    );
    frame.render_widget(Paragraph::new(HELP_LINE).style(style), help_area);
}
