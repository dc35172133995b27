//! Replay log - one line per committed placement.

use std::io::{self, Write};

use crate::Action;

/// Replay text for `history`: every rendering action on its own line, in order
pub fn render_replay(history: &[Action]) -> String {
    history
        .iter()
        .filter_map(Action::render)
        .map(|line| line + "\n")
        .collect()
}

/// Write the replay for `history` to `writer`
pub fn write_replay<W: Write>(mut writer: W, history: &[Action]) -> io::Result<()> {
    for line in history.iter().filter_map(Action::render) {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces;

    fn history() -> Vec<Action> {
        let line = pieces::by_name('1').unwrap();
        let square = pieces::by_name('2').unwrap();
        vec![
            Action::AddToBuffer { piece: line },
            Action::PlaceNextPiece {
                piece: square,
                left_offset: 3,
            },
            Action::DoNothing,
            Action::PlaceFromBuffer {
                piece: line.rotate(),
                left_offset: 5,
                original: line,
            },
        ]
    }

    #[test]
    fn test_skips_silent_actions() {
        assert_eq!(render_replay(&history()), "2 0 3\n1 3 5\n");
    }

    #[test]
    fn test_writer_matches_rendered_text() {
        let mut out = Vec::new();
        write_replay(&mut out, &history()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), render_replay(&history()));
    }

    #[test]
    fn test_empty_history_writes_nothing() {
        assert_eq!(render_replay(&[]), "");
    }
}
