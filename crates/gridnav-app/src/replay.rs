//! Key replay: feed parsed directions through a `GridFocus`.

use gridnav_core::{Direction, FocusOutcome, GridFocus, GridLayout, Result};

/// One replayed key press and where it left the selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub direction: Direction,
    pub outcome: FocusOutcome,
    pub selected: Option<usize>,
}

/// Parse a comma or whitespace separated direction list.
pub fn parse_keys(src: &str) -> Result<Vec<Direction>> {
    src.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::parse::<Direction>)
        .collect()
}

pub fn run(focus: &mut GridFocus, keys: &[Direction]) -> Result<Vec<Step>> {
    keys.iter()
        .map(|&direction| {
            let outcome = focus.move_focus(direction)?;
            Ok(Step {
                direction,
                outcome,
                selected: focus.selected(),
            })
        })
        .collect()
}

/// Human-readable lines, naming cells by id where the layout has one.
pub fn report(layout: &GridLayout, steps: &[Step]) -> Vec<String> {
    let name = |index: Option<usize>| match index {
        Some(i) => layout
            .id_of(i)
            .map_or_else(|| format!("#{i}"), str::to_string),
        None => "-".to_string(),
    };
    steps
        .iter()
        .map(|step| match step.outcome {
            FocusOutcome::Moved { from, to } => {
                format!(
                    "{:<5} {} -> {}",
                    step.direction,
                    name(Some(from)),
                    name(Some(to))
                )
            },
            FocusOutcome::Unhandled => {
                format!("{:<5} unhandled (stays on {})", step.direction, name(step.selected))
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridnav_core::NavError;

    const ROW: &str = r#"
name = "row"
[[cell]]
id = "guide"
x = 0
y = 0
w = 100
h = 50
[[cell]]
x = 100
y = 0
w = 100
h = 50
"#;

    #[test]
    fn parse_mixed_separators() {
        let keys = parse_keys("down, right up,,l").unwrap();
        assert_eq!(
            keys,
            vec![
                Direction::Down,
                Direction::Right,
                Direction::Up,
                Direction::Left
            ]
        );
    }

    #[test]
    fn parse_empty_is_no_keys() {
        assert!(parse_keys("").unwrap().is_empty());
    }

    #[test]
    fn parse_rejects_unknown_key() {
        let err = parse_keys("up,jump").unwrap_err();
        assert!(matches!(err, NavError::InvalidDirection(ref s) if s == "jump"));
    }

    #[test]
    fn replay_and_report() {
        let layout = GridLayout::from_toml(ROW).unwrap();
        let mut focus = GridFocus::from_layout(&layout);
        let steps = run(
            &mut focus,
            &[Direction::Right, Direction::Right, Direction::Left],
        )
        .unwrap();
        assert_eq!(steps[0].outcome, FocusOutcome::Moved { from: 0, to: 1 });
        assert_eq!(steps[1].outcome, FocusOutcome::Unhandled);
        assert_eq!(steps[2].selected, Some(0));

        let lines = report(&layout, &steps);
        assert_eq!(lines[0], "right guide -> #1");
        assert_eq!(lines[1], "right unhandled (stays on #1)");
        assert_eq!(lines[2], "left  #1 -> guide");
    }
}
