//! Duel screen layout.
//!
//! ```text
//! ┌ Arena ─────────────────────────────┐
//! ├ Hero ───────────┬ Enemy ───────────┤
//! │ strength/stamina│ archetype/stamina│
//! ├ Battle ─────────┴──────────────────┤
//! │ round message                      │
//! └────────────────────────────────────┘
//!   key help
//! ```
use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use runtime::{BattleView, EnemyView};

use super::{terminal::Tui, theme};

/// Rendering context containing all state needed for one frame.
pub struct RenderContext<'a> {
    pub view: &'a BattleView,
    /// A round task is still waiting on the enemy.
    pub resolving: bool,
    /// Last runtime error worth showing to the player.
    pub status: Option<&'a str>,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| draw(frame, ctx))?;
    Ok(())
}

pub fn draw(frame: &mut Frame, ctx: &RenderContext) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(6), // Combatants
            Constraint::Min(4),    // Message
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0], ctx);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_hero(frame, panels[0], ctx.view);
    render_enemy(frame, panels[1], ctx.view.enemy.as_ref());

    render_message(frame, chunks[2], ctx);
    render_footer(frame, chunks[3], ctx.view);
}

fn render_header(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let mut spans = vec![
        Span::styled(format!("Round {}  ", ctx.view.round), theme::label()),
        Span::styled(ctx.view.phase.as_str(), theme::phase(ctx.view.phase)),
    ];
    if ctx.resolving {
        spans.push(Span::styled("  resolving...", theme::resolving()));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Arena "));
    frame.render_widget(header, area);
}

fn render_hero(frame: &mut Frame, area: Rect, view: &BattleView) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Strength: ", theme::label()),
            Span::raw(view.player_strength.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Stamina: ", theme::label()),
            Span::styled(
                format!("{}/{}", view.player_stamina, view.player_initial_stamina),
                theme::stamina(view.player_stamina, view.player_initial_stamina),
            ),
        ]),
    ];

    let panel = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Hero "));
    frame.render_widget(panel, area);
}

fn render_enemy(frame: &mut Frame, area: Rect, enemy: Option<&EnemyView>) {
    let lines = match enemy {
        Some(enemy) => vec![
            Line::from(vec![
                Span::styled("Kind: ", theme::label()),
                Span::styled(enemy.archetype.as_str(), theme::vitality(enemy.vitality)),
            ]),
            Line::from(vec![
                Span::styled("Strength: ", theme::label()),
                Span::raw(enemy.strength.to_string()),
            ]),
            Line::from(vec![
                Span::styled("Stamina: ", theme::label()),
                Span::styled(
                    format!("{}/{}", enemy.stamina, enemy.initial_stamina),
                    theme::stamina(enemy.stamina, enemy.initial_stamina),
                ),
            ]),
            Line::from(Span::styled(
                if enemy.vitality.is_alive() { "alive" } else { "defeated" },
                theme::vitality(enemy.vitality),
            )),
        ],
        None => vec![Line::from("enemy unavailable")],
    };

    let panel =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Enemy "));
    frame.render_widget(panel, area);
}

fn render_message(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let mut lines: Vec<Line> = ctx.view.message.lines().map(Line::from).collect();
    if let Some(status) = ctx.status {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(status, theme::resolving())));
    }

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Battle "));
    frame.render_widget(panel, area);
}

fn render_footer(frame: &mut Frame, area: Rect, view: &BattleView) {
    let help = if view.is_over() {
        "[n] new battle  [q] quit"
    } else {
        "[r/space/enter] round  [n] new battle  [q] quit"
    };
    frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), area);
}
