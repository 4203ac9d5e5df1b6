use hanoi_core::{AppViewModel, LayoutMode, MoveRejection, Notice, Phase, TowerView};

use super::constants::*;
use super::layout::{board_width, column_width, gutter};

/// Draws the whole screen for one view model.
pub fn render(view: &AppViewModel) -> String {
    let mut lines = header_lines(view);
    lines.push(RULE.to_string().repeat(board_width(view.layout, view.disk_count)));

    let width = column_width(view.disk_count);
    if view.layout.is_stacked() {
        for tower in &view.towers {
            lines.extend(draw_towers(std::slice::from_ref(tower), view.disk_count, width, 0));
        }
    } else {
        lines.extend(draw_towers(
            &view.towers,
            view.disk_count,
            width,
            gutter(view.layout),
        ));
    }

    lines.push(String::new());
    lines.extend(status_lines(view));
    lines.push(COMMANDS_LINE.to_string());

    let mut screen = lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n");
    screen.push('\n');
    screen
}

fn header_lines(view: &AppViewModel) -> Vec<String> {
    let level = format!(
        "{} ({} disks)",
        view.difficulty.label(),
        view.disk_count
    );
    let counters = format!("Moves: {}   Optimal: {}", view.moves, view.optimal_moves);
    match view.layout {
        LayoutMode::Desktop | LayoutMode::Tablet => vec![format!("{TITLE}   {level}   {counters}")],
        LayoutMode::MobileLandscape | LayoutMode::MobilePortrait => {
            vec![TITLE.to_string(), level, counters]
        }
    }
}

/// Draws towers side by side, separated by `gap` blank cells.
fn draw_towers(towers: &[TowerView], disk_count: u8, width: usize, gap: usize) -> Vec<String> {
    let spacer = " ".repeat(gap);
    let height = usize::from(disk_count);
    let mut lines = Vec::with_capacity(height + 3);

    // One pole cell above a full stack.
    for level in (0..=height).rev() {
        let cells: Vec<String> = towers
            .iter()
            .map(|tower| centered(&tower_cell(tower, level), width))
            .collect();
        lines.push(cells.join(&spacer));
    }

    let base: Vec<String> = towers
        .iter()
        .map(|_| BASE.to_string().repeat(width))
        .collect();
    lines.push(base.join(&spacer));

    let labels: Vec<String> = towers
        .iter()
        .map(|tower| centered(&format!("{} {}", tower.id + 1, tower.label), width))
        .collect();
    lines.push(labels.join(&spacer));
    lines
}

/// What tower shows at `level`, counted from the base.
fn tower_cell(tower: &TowerView, level: usize) -> String {
    let Some(&size) = tower.disk_sizes.get(level) else {
        return POLE.to_string();
    };
    let disk = disk_text(size);
    let is_top = level + 1 == tower.disk_sizes.len();
    if tower.selected && is_top {
        format!("{SELECTED_LEFT}{disk}{SELECTED_RIGHT}")
    } else {
        disk
    }
}

/// A disk of size `s` is `2s - 1` cells wide with its size in the middle.
fn disk_text(size: u8) -> String {
    let fill = DISK_FILL
        .to_string()
        .repeat(usize::from(size.saturating_sub(1)));
    format!("{fill}{size}{fill}")
}

fn centered(text: &str, width: usize) -> String {
    format!("{text:^width$}")
}

fn status_lines(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    if let (Phase::Solved, Some(performance)) = (view.phase, view.performance) {
        lines.push(format!(
            "Solved in {} moves (best possible: {}). {}",
            view.moves,
            view.optimal_moves,
            performance.label()
        ));
        lines.push(PLAY_AGAIN_TEXT.to_string());
    } else if let Some(tower) = view
        .selected_tower
        .and_then(|id| view.towers.iter().find(|tower| tower.id == id))
    {
        if let Some(size) = tower.disk_sizes.last() {
            lines.push(format!(
                "Holding disk {} from tower {}. Pick a destination.",
                size,
                tower.id + 1
            ));
        }
    }

    if let Some(hint) = view.hint {
        lines.push(format!(
            "Hint: move the top disk from tower {} to tower {}.",
            hint.from + 1,
            hint.to + 1
        ));
    }

    if let Some(notice) = &view.notice {
        lines.push(notice_text(notice));
    }

    if view.info_visible {
        lines.push(String::new());
        lines.push("Rules".to_string());
        lines.extend(RULES.iter().map(|rule| format!("  - {rule}")));
    }

    if view.hint_banner_visible {
        lines.push(String::new());
        lines.push(TIP_TEXT.to_string());
    }

    lines
}

/// Notices are phrased with the 1-based tower numbers shown on screen.
fn notice_text(notice: &Notice) -> String {
    match notice {
        Notice::Rejected(rejection) => rejection_text(*rejection),
        Notice::UnsupportedDifficulty(disks) => {
            format!("{disks} disks is not offered. Choose between 3 and 6.")
        }
        Notice::UnknownCommand(message) => message.clone(),
        Notice::HintUnavailable => "No hint: the puzzle is already solved.".to_string(),
    }
}

fn rejection_text(rejection: MoveRejection) -> String {
    match rejection {
        MoveRejection::UnknownTower { index } => {
            format!("There is no tower {}.", index.saturating_add(1))
        }
        MoveRejection::AlreadySolved => "The puzzle is already solved.".to_string(),
        MoveRejection::EmptySource { tower } => {
            format!("Tower {} has no disk to move.", tower + 1)
        }
        MoveRejection::SameTower { tower, disk } => {
            format!("Disk {disk} is already on tower {}.", tower + 1)
        }
        MoveRejection::OntoSmallerDisk { disk, onto } => {
            format!("Disk {disk} cannot go on top of the smaller disk {onto}.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanoi_core::{update, AppState, Difficulty, Msg};
    use pretty_assertions::assert_eq;

    fn view_after(msgs: impl IntoIterator<Item = Msg>) -> AppViewModel {
        let mut state = AppState::new(Difficulty::Easy);
        for msg in msgs {
            state = update(state, msg).0;
        }
        state.view()
    }

    fn line_with<'a>(screen: &'a str, needle: &str) -> &'a str {
        screen
            .lines()
            .find(|line| line.contains(needle))
            .unwrap_or_else(|| panic!("no line contains {needle:?} in\n{screen}"))
    }

    #[test]
    fn disks_are_drawn_with_their_size_in_the_middle() {
        assert_eq!(disk_text(1), "1");
        assert_eq!(disk_text(3), "##3##");
    }

    #[test]
    fn fresh_board_stacks_everything_on_the_source() {
        let screen = render(&view_after([]));

        assert!(screen.contains("Easy (3 disks)"));
        assert!(screen.contains("Moves: 0   Optimal: 7"));
        let labels = line_with(&screen, "1 Source");
        assert!(labels.contains("2 Auxiliary"));
        assert!(labels.contains("3 Destination"));
        assert!(line_with(&screen, "##3##").contains('|'));
        assert!(screen.contains(TIP_TEXT));
    }

    #[test]
    fn selected_top_disk_is_marked() {
        let screen = render(&view_after([Msg::TowerTapped(0)]));

        assert!(screen.contains("<1>"));
        assert!(screen.contains("Holding disk 1 from tower 1."));
    }

    #[test]
    fn rejections_use_screen_numbers() {
        let screen = render(&view_after([Msg::MoveRequested { from: 1, to: 2 }]));
        assert!(screen.contains("Tower 2 has no disk to move."));

        let screen = render(&view_after([Msg::TowerTapped(7)]));
        assert!(screen.contains("There is no tower 8."));
    }

    #[test]
    fn solved_board_shows_the_rating() {
        let solution = [(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)]
            .map(|(from, to)| Msg::MoveRequested { from, to });
        let screen = render(&view_after(solution));

        assert!(screen.contains("Solved in 7 moves (best possible: 7). Perfect!"));
        assert!(screen.contains(PLAY_AGAIN_TEXT));
        assert!(line_with(&screen, "##3##").starts_with(' '));
    }

    #[test]
    fn rules_and_hint_panels() {
        let screen = render(&view_after([
            Msg::InfoOpened,
            Msg::HintRequested,
            Msg::HintBannerDismissed { permanently: false },
        ]));

        assert!(screen.contains(RULES[0]));
        assert!(screen.contains("Hint: move the top disk from tower 1 to tower 3."));
        assert!(!screen.contains(TIP_TEXT));
    }

    #[test]
    fn portrait_phones_list_towers_one_below_another() {
        let screen = render(&view_after([Msg::ViewportResized {
            columns: 40,
            rows: 40,
        }]));

        let source = line_with(&screen, "1 Source");
        assert!(!source.contains("2 Auxiliary"));
        assert_eq!(screen.matches(BASE.to_string().repeat(13).as_str()).count(), 3);
        assert_eq!(line_with(&screen, "Moves:"), "Moves: 0   Optimal: 7");
    }

    #[test]
    fn no_line_has_trailing_spaces() {
        let screen = render(&view_after([Msg::TowerTapped(0), Msg::InfoOpened]));
        assert!(screen.lines().all(|line| line == line.trim_end()));
    }
}
