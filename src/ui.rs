pub mod charting;
pub mod screen;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Chart, Dataset, GraphType, Paragraph, Widget, Wrap},
    Frame,
};
use typo::{
    config::WordCount, metrics::RenderClass, session::Phase, time_series::word_speed_series,
};
use unicode_width::UnicodeWidthStr;

use crate::{ui::screen::current_screen, App};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

pub fn draw(app: &App, f: &mut Frame) {
    f.render_widget(app, f.area());
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // header
                Constraint::Length(1), // padding
                Constraint::Min(0),
            ])
            .split(area);

        render_header(self, chunks[0], buf);
        current_screen(&self.state).render(self, chunks[2], buf);
    }
}

fn render_header(app: &App, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let dim_style = Style::default().add_modifier(Modifier::DIM);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(" typo ", bold_style),
        Span::styled(" typing test ", Style::default().add_modifier(Modifier::REVERSED)),
        Span::styled(format!("  {}", app.test.phase()), dim_style),
    ]));
    title.render(area, buf);

    let mut selector = vec![Span::styled("words ", dim_style)];
    for wc in WordCount::ALL {
        selector.push(if wc == app.config.word_count {
            Span::styled(format!("[{wc}]"), bold_style.fg(Color::Magenta))
        } else {
            Span::styled(format!(" {wc} "), dim_style)
        });
    }
    Paragraph::new(Line::from(selector))
        .alignment(Alignment::Right)
        .render(area, buf);
}

pub(crate) fn render_typing(app: &App, area: Rect, buf: &mut Buffer) {
    let test = &app.test;

    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
    let red_bold_style = Style::default().patch(bold_style).fg(Color::Red);
    let dim_bold_style = Style::default()
        .patch(bold_style)
        .add_modifier(Modifier::DIM);
    let underlined_dim_bold_style = Style::default()
        .patch(dim_bold_style)
        .add_modifier(Modifier::UNDERLINED);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);

    let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
    let prompt_width = test.target.width();
    let prompt_occupied_lines = if prompt_width <= max_chars_per_line as usize {
        1
    } else {
        ((prompt_width as f64 / max_chars_per_line as f64).ceil() + 1.0) as u16
    };

    let padding = area.height.saturating_sub(prompt_occupied_lines + 2) / 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints([
            Constraint::Length(padding),
            Constraint::Length(prompt_occupied_lines),
            Constraint::Length(1),
            Constraint::Length(1), // status
            Constraint::Min(0),
        ])
        .split(area);

    let finished = test.has_finished();
    let cursor = test.input().chars().count();

    let spans = test
        .target
        .chars()
        .zip(test.render_classes())
        .enumerate()
        .map(|(idx, (expected, class))| match class {
            RenderClass::Space if idx == cursor && !finished => {
                Span::styled(" ", underlined_dim_bold_style)
            }
            RenderClass::Space => Span::raw(" "),
            RenderClass::Correct => Span::styled(expected.to_string(), green_bold_style),
            RenderClass::Incorrect => Span::styled(expected.to_string(), red_bold_style),
            RenderClass::Current => Span::styled(expected.to_string(), underlined_dim_bold_style),
            RenderClass::Pending => Span::styled(expected.to_string(), dim_bold_style),
        })
        .collect::<Vec<Span>>();

    Paragraph::new(Line::from(spans))
        .alignment(if prompt_occupied_lines == 1 {
            // when the prompt is small enough to fit on one line
            // centering the text gives a nice zen feeling
            Alignment::Center
        } else {
            Alignment::Left
        })
        .wrap(Wrap { trim: true })
        .render(chunks[1], buf);

    let status = match test.phase() {
        Phase::Idle => Span::styled("start typing / (tab) words / (esc)ape", italic_style),
        Phase::Running => Span::styled(
            format!("{} wpm", test.live_wpm().unwrap_or(0)),
            Style::default().fg(Color::Magenta),
        ),
        Phase::Finished => Span::styled(
            "(r)estart / (enter) results / (tab) words / (esc)ape",
            italic_style,
        ),
    };

    Paragraph::new(status)
        .alignment(Alignment::Center)
        .render(chunks[3], buf);
}

pub(crate) fn render_results(app: &App, area: Rect, buf: &mut Buffer) {
    let Some(results) = app.test.results() else {
        Paragraph::new("no results yet")
            .alignment(Alignment::Center)
            .render(area, buf);
        return;
    };

    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(Color::Gray);
    let highlight_style = Style::default().fg(Color::Cyan);
    let error_style = Style::default().fg(Color::Magenta);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let headline = vec![
        Line::from(Span::styled(results.wpm.to_string(), bold_style.fg(Color::Cyan))),
        Line::from(Span::styled("wpm", label_style)),
        Line::default(),
        Line::from(Span::styled(
            format!("{}%", results.accuracy),
            bold_style.fg(Color::Magenta),
        )),
        Line::from(Span::styled("acc", label_style)),
        Line::default(),
        Line::from(vec![
            Span::styled("test type: ", bold_style),
            Span::styled("words", highlight_style),
        ]),
        Line::from(vec![
            Span::styled("time: ", bold_style),
            Span::styled(format!("{}s", results.total_secs), highlight_style),
        ]),
        Line::from(vec![
            Span::styled("raw: ", bold_style),
            Span::styled(results.raw_wpm.to_string(), highlight_style),
        ]),
    ];
    Paragraph::new(headline)
        .alignment(Alignment::Center)
        .render(columns[0], buf);

    let details = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // chart
            Constraint::Length(1), // characters / errors
            Constraint::Length(1), // consistency
            Constraint::Length(1), // padding
            Constraint::Length(1), // legend
        ])
        .split(columns[1]);

    let points = word_speed_series(results);
    let tuples: Vec<(f64, f64)> = points.iter().map(|&p| p.into()).collect();
    let (overall_duration, highest_wpm) = charting::compute_chart_params(&points);

    let datasets = vec![Dataset::default()
        .marker(Marker::Braille)
        .style(Style::default().fg(Color::Magenta))
        .graph_type(GraphType::Line)
        .data(&tuples)];

    Chart::new(datasets)
        .block(Block::default().title("wpm per word"))
        .x_axis(
            Axis::default()
                .title("seconds")
                .bounds([0.0, overall_duration])
                .labels(vec![
                    Span::styled("0", bold_style),
                    Span::styled(charting::format_label(overall_duration), bold_style),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("wpm")
                .bounds([0.0, highest_wpm])
                .labels(vec![
                    Span::styled("0", bold_style),
                    Span::styled(charting::format_label(highest_wpm), bold_style),
                ]),
        )
        .render(details[0], buf);

    let chars = results.chars;
    Paragraph::new(Line::from(vec![
        Span::styled("characters ", bold_style),
        Span::styled(chars.correct.to_string(), highlight_style),
        Span::raw("/"),
        Span::styled(chars.incorrect.to_string(), error_style),
        Span::raw("/"),
        Span::styled(chars.extra.to_string(), label_style),
        Span::raw("/"),
        Span::styled(chars.missed.to_string(), label_style),
        Span::styled("   errors: ", bold_style),
        Span::styled(results.error_count.to_string(), error_style),
    ]))
    .render(details[1], buf);

    Paragraph::new(Line::from(vec![
        Span::styled("consistency: ", bold_style),
        Span::styled(format!("{}%", results.consistency), highlight_style),
    ]))
    .render(details[2], buf);

    Paragraph::new(Span::styled(
        "(r)estart / (c)lose / (tab) words / (esc)ape",
        italic_style,
    ))
    .render(details[4], buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{tests::test_app, AppState};
    use std::time::{Duration, Instant};
    use typo::typing_test::TypingTest;

    fn render_to_string(app: &App, area: Rect) -> String {
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    fn app_with_prompt(prompt: &str) -> (App, tempfile::TempDir) {
        let (mut app, dir) = test_app(WordCount::Ten);
        app.test = TypingTest::new(prompt.to_string(), WordCount::Ten);
        (app, dir)
    }

    fn finished_app(prompt: &str, typed: &str) -> (App, tempfile::TempDir) {
        let (mut app, dir) = app_with_prompt(prompt);
        let t0 = Instant::now();
        app.test.update_input_at(&typed[..1], t0);
        app.test.update_input_at(typed, t0 + Duration::from_secs(60));
        app.state = AppState::Results;
        (app, dir)
    }

    #[test]
    fn test_typing_screen_shows_prompt() {
        let (app, _dir) = app_with_prompt("hello world");
        let rendered = render_to_string(&app, Rect::new(0, 0, 80, 24));

        assert!(rendered.contains("hello world"));
        assert!(rendered.contains("start typing"));
    }

    #[test]
    fn test_header_marks_selected_word_count() {
        let (app, _dir) = app_with_prompt("hello");
        let rendered = render_to_string(&app, Rect::new(0, 0, 80, 24));

        assert!(rendered.contains("[10]"));
        assert!(rendered.contains(" 25 "));
        assert!(rendered.contains("idle"));
    }

    #[test]
    fn test_typing_screen_shows_live_wpm() {
        let (mut app, _dir) = app_with_prompt("aa bb cc");
        let t0 = Instant::now();
        app.test.update_input_at("aa", t0);
        app.test.on_tick_at(t0 + Duration::from_secs(1));

        let rendered = render_to_string(&app, Rect::new(0, 0, 80, 24));
        assert!(rendered.contains("60 wpm"));
        assert!(rendered.contains("running"));
    }

    #[test]
    fn test_incorrect_char_is_red() {
        let (mut app, _dir) = app_with_prompt("test");
        app.test.update_input("tx");

        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        (&app).render(area, &mut buffer);

        let red = buffer
            .content()
            .iter()
            .filter(|c| c.fg == Color::Red)
            .map(|c| c.symbol())
            .collect::<String>();
        assert_eq!(red, "e");
    }

    #[test]
    fn test_results_screen() {
        let (app, _dir) = finished_app("cat dog", "cbt dog");
        let rendered = render_to_string(&app, Rect::new(0, 0, 100, 30));

        assert!(rendered.contains("86%"));
        assert!(rendered.contains("characters 6/1/0/0"));
        assert!(rendered.contains("errors: 1"));
        assert!(rendered.contains("time: 60s"));
        assert!(rendered.contains("consistency:"));
        assert!(rendered.contains("(r)estart"));
    }

    #[test]
    fn test_closed_results_show_restart_hint() {
        let (mut app, _dir) = finished_app("cat dog", "cat dog");
        app.state = AppState::Typing;

        let rendered = render_to_string(&app, Rect::new(0, 0, 80, 24));
        assert!(rendered.contains("(enter) results"));
        assert!(rendered.contains("finished"));
    }

    #[test]
    fn test_results_state_without_results() {
        let (mut app, _dir) = app_with_prompt("abc");
        app.state = AppState::Results;

        let rendered = render_to_string(&app, Rect::new(0, 0, 80, 24));
        assert!(rendered.contains("no results yet"));
    }

    #[test]
    fn test_render_extreme_sizes() {
        let (app, _dir) = finished_app("the quick brown", "the quick brown");
        for area in [
            Rect::new(0, 0, 1, 1),
            Rect::new(0, 0, 10, 5),
            Rect::new(0, 0, 200, 5),
            Rect::new(0, 0, 20, 50),
        ] {
            let mut buffer = Buffer::empty(area);
            (&app).render(area, &mut buffer);
            assert_eq!(*buffer.area(), area);
        }

        let (app, _dir) = app_with_prompt(&"word ".repeat(200));
        let area = Rect::new(0, 0, 40, 10);
        let mut buffer = Buffer::empty(area);
        (&app).render(area, &mut buffer);
        assert_eq!(*buffer.area(), area);
    }
}
