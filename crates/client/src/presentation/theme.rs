//! Colors for the duel panels.
use game_core::{BattlePhase, Vitality};
use ratatui::style::{Color, Modifier, Style};

pub fn label() -> Style {
    Style::default().fg(Color::White)
}

/// Green above half, yellow above a quarter, red below.
pub fn stamina(current: u32, initial: u32) -> Style {
    let (current, initial) = (u64::from(current), u64::from(initial));
    let color = if initial == 0 || current == 0 {
        Color::DarkGray
    } else if current * 2 > initial {
        Color::Green
    } else if current * 4 > initial {
        Color::Yellow
    } else {
        Color::Red
    };
    Style::default().fg(color)
}

pub fn vitality(vitality: Vitality) -> Style {
    match vitality {
        Vitality::Alive => Style::default().fg(Color::Green),
        Vitality::Defeated => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT),
    }
}

pub fn phase(phase: BattlePhase) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match phase {
        BattlePhase::InProgress => style.fg(Color::Cyan),
        BattlePhase::Won => style.fg(Color::Green),
        BattlePhase::Lost => style.fg(Color::Red),
    }
}

pub fn resolving() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamina_color_tracks_ratio() {
        assert_eq!(stamina(20, 20).fg, Some(Color::Green));
        assert_eq!(stamina(10, 20).fg, Some(Color::Yellow));
        assert_eq!(stamina(5, 20).fg, Some(Color::Red));
        assert_eq!(stamina(0, 20).fg, Some(Color::DarkGray));
    }

    #[test]
    fn stamina_color_handles_huge_pools() {
        assert_eq!(stamina(u32::MAX, u32::MAX).fg, Some(Color::Green));
        assert_eq!(stamina(u32::MAX / 3, u32::MAX).fg, Some(Color::Yellow));
    }
}
