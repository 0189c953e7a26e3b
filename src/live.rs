//! Interactive preview for picking the output size before rendering.

use std::{
    io::{self, stdout, Stdout},
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    widgets::{canvas::*, *},
};

use crate::converter::{AsciiOptions, ImageConverter, ToAsciiArt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Width,
    Height,
    Invert,
    Finish,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Field::Width => Field::Height,
            Field::Height => Field::Invert,
            Field::Invert => Field::Finish,
            Field::Finish => Field::Width,
        }
    }

    fn previous(self) -> Self {
        match self {
            Field::Width => Field::Finish,
            Field::Height => Field::Width,
            Field::Invert => Field::Height,
            Field::Finish => Field::Invert,
        }
    }
}

struct App<'a> {
    converter: &'a ImageConverter,
    options: AsciiOptions,
    art: String,
    selected_field: Field,
    done: bool,
}

impl<'a> App<'a> {
    fn new(converter: &'a ImageConverter, initial: AsciiOptions) -> Self {
        let grid = converter.grid();
        let options = AsciiOptions {
            width: initial.width.clamp(1, grid.width().max(1)),
            height: initial.height.clamp(1, grid.height().max(1)),
            invert: initial.invert,
        };
        let mut app = Self {
            converter,
            options,
            art: String::new(),
            selected_field: Field::Width,
            done: false,
        };
        app.render_art();
        app
    }

    fn render_art(&mut self) {
        self.art = match self.converter.to_ascii_art(Some(self.options)) {
            Ok(art) => art,
            Err(e) => format!("{}\n", e),
        };
    }

    fn max_width(&self) -> usize {
        self.converter.grid().width().max(1)
    }

    fn max_height(&self) -> usize {
        self.converter.grid().height().max(1)
    }

    fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.done = true;
            return;
        }

        let before = self.options;
        match key.code {
            KeyCode::Up => self.selected_field = self.selected_field.previous(),
            KeyCode::Down => self.selected_field = self.selected_field.next(),
            KeyCode::Right => match self.selected_field {
                Field::Width => self.options.width = (self.options.width + 1).min(self.max_width()),
                Field::Height => {
                    self.options.height = (self.options.height + 1).min(self.max_height())
                }
                Field::Invert => self.options.invert = !self.options.invert,
                Field::Finish => {}
            },
            KeyCode::Left => match self.selected_field {
                Field::Width => self.options.width = self.options.width.saturating_sub(1).max(1),
                Field::Height => self.options.height = self.options.height.saturating_sub(1).max(1),
                Field::Invert => self.options.invert = !self.options.invert,
                Field::Finish => {}
            },
            KeyCode::Enter if self.selected_field == Field::Finish => self.done = true,
            KeyCode::Char('q') | KeyCode::Esc => self.done = true,
            _ => {}
        }
        if self.options != before {
            self.render_art();
        }
    }

    fn ui(&self, frame: &mut Frame) {
        let main_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(80), Constraint::Percentage(20)].as_ref())
            .split(frame.size());

        frame.render_widget(self.art_canvas(main_layout[0]), main_layout[0]);
        frame.render_widget(self.options_canvas(main_layout[1]), main_layout[1]);
    }

    fn marker(&self, field: Field) -> &'static str {
        if self.selected_field == field {
            "<"
        } else {
            ""
        }
    }

    fn options_canvas(&self, area: Rect) -> impl Widget {
        let (left, right, bottom, top) = (0.0, area.width as f64, 0.0, area.height as f64);

        let width_text = format!("Width: {} {}", self.options.width, self.marker(Field::Width));
        let height_text = format!("Height: {} {}", self.options.height, self.marker(Field::Height));
        let invert_text = format!("Invert: {} {}", self.options.invert, self.marker(Field::Invert));
        let confirm_text = format!("Confirm {}", self.marker(Field::Finish));

        Canvas::default()
            .block(Block::default().borders(Borders::ALL).title("Options"))
            .x_bounds([left, right])
            .y_bounds([bottom, top])
            .paint(move |ctx| {
                ctx.print(1.0, top - 2.0, width_text.clone());
                ctx.print(1.0, top - 3.0, height_text.clone());
                ctx.print(1.0, top - 4.0, invert_text.clone());
                ctx.print(1.0, bottom + 1.0, confirm_text.clone());
            })
    }

    fn art_canvas(&self, area: Rect) -> impl Widget {
        let (left, right, bottom, top) = (0.0, area.width as f64, 0.0, area.height as f64);
        let lines: Vec<String> = self.art.lines().map(str::to_owned).collect();

        Canvas::default()
            .block(Block::default().borders(Borders::ALL).title("Art"))
            .x_bounds([left, right])
            .y_bounds([bottom, top])
            .paint(move |ctx| {
                let mut y = top - 2.0;
                for line in &lines {
                    if y < bottom {
                        break;
                    }
                    ctx.print(1.0, y, line.clone());
                    y -= 1.0;
                }
            })
    }
}

/// Run the preview until the user confirms, returning the chosen options.
pub fn run(converter: &ImageConverter, initial: AsciiOptions) -> io::Result<AsciiOptions> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, App::new(converter, initial));
    restore_terminal()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App<'_>,
) -> io::Result<AsciiOptions> {
    let tick_rate = Duration::from_millis(33);
    let mut last_tick = Instant::now();

    while !app.done {
        terminal.draw(|frame| app.ui(frame))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    log::debug!("live preview confirmed {:?}", app.options);
    Ok(app.options)
}

fn init_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout()))
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::BrightnessGrid;

    fn press(app: &mut App<'_>, code: KeyCode) {
        app.on_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn converter() -> ImageConverter {
        ImageConverter::from_grid(BrightnessGrid::from_fn(20, 10, |x, _| (x * 12) as u8))
    }

    #[test]
    fn test_initial_size_is_clamped_to_source() {
        let converter = converter();
        let app = App::new(&converter, AsciiOptions::new(90, 10, false));
        assert_eq!(app.options, AsciiOptions::new(20, 10, false));
        assert_eq!(app.art.lines().count(), 10);
    }

    #[test]
    fn test_keys_adjust_selected_field() {
        let converter = converter();
        let mut app = App::new(&converter, AsciiOptions::new(10, 5, false));

        press(&mut app, KeyCode::Left);
        assert_eq!(app.options.width, 9);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.options.height, 6);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        assert!(app.options.invert);
        assert_eq!(app.art.lines().count(), 6);
        assert!(app.art.lines().all(|line| line.len() == 9));
    }

    #[test]
    fn test_adjustments_stay_in_bounds() {
        let converter = converter();
        let mut app = App::new(&converter, AsciiOptions::new(1, 10, false));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.options.width, 1);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.options.height, 10);
    }

    #[test]
    fn test_confirm_only_from_finish() {
        let converter = converter();
        let mut app = App::new(&converter, AsciiOptions::new(4, 4, false));
        press(&mut app, KeyCode::Enter);
        assert!(!app.done);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert!(app.done);
    }

    #[test]
    fn test_ctrl_c_leaves_preview() {
        let converter = converter();
        let mut app = App::new(&converter, AsciiOptions::new(4, 4, false));
        press(&mut app, KeyCode::Char('c'));
        assert!(!app.done);
        app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.done);
    }
}
