use std::io::{self, Write};

use boomfield_core::{CellIndex, CellView, GameSession, GameStatus};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{PrintStyledContent, StyledContent, Stylize},
    terminal::{Clear, ClearType},
};

pub type Span = StyledContent<String>;

/// One screen row.
pub type Line = Vec<Span>;

fn plain(text: &str) -> Span {
    text.to_string().stylize()
}

/// Glyph for a cell, colored the way the count reads best on dark terminals.
pub fn cell_span(view: CellView, detonated: bool) -> Span {
    match view {
        CellView::Hidden => plain("#"),
        CellView::Flagged => plain("?").dark_yellow().dim(),
        CellView::Mine if detonated => plain("*").red().bold(),
        CellView::Mine => plain("*"),
        CellView::Revealed(0) => plain(" "),
        CellView::Revealed(count) => {
            let digit = count.to_string().stylize();
            match count {
                1 => digit.blue(),
                2 => digit.green(),
                3 => digit.yellow(),
                4 => digit.magenta(),
                5 => digit.cyan(),
                6 => digit.white(),
                7 => digit.magenta().dim(),
                _ => digit,
            }
        }
    }
}

pub fn status_line(session: &GameSession) -> String {
    match session.status() {
        GameStatus::Won => "-- YOU WIN --".to_string(),
        GameStatus::Lost => "-- BOOM --".to_string(),
        GameStatus::InProgress => format!("mines left: {}", session.mines_left()),
    }
}

/// Grid rows followed by the status line. Every cell takes three columns and
/// the selected one is bracketed.
pub fn lines(session: &GameSession) -> Vec<Line> {
    let board = session.board();
    let width = usize::from(board.width());
    let selected = session.selected();

    let mut lines: Vec<Line> = (0..board.len())
        .collect::<Vec<CellIndex>>()
        .chunks(width)
        .map(|row| {
            row.iter()
                .flat_map(|&index| {
                    let (open, close) = if index == selected {
                        ("[", "]")
                    } else {
                        (" ", " ")
                    };
                    let view = board[index].view();
                    [
                        plain(open),
                        cell_span(view, session.detonated() == Some(index)),
                        plain(close),
                    ]
                })
                .collect()
        })
        .collect();

    lines.push(vec![plain(&status_line(session))]);
    lines
}

/// Redraws the whole screen, dropping lines that do not fit in `rows`.
pub fn draw(out: &mut impl Write, session: &GameSession, rows: u16) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    for (y, line) in (0..rows).zip(lines(session)) {
        queue!(out, MoveTo(0, y))?;
        for span in line {
            queue!(out, PrintStyledContent(span))?;
        }
    }
    out.flush()
}
