// src/ui/page.rs - Teletext-style page for standings, playoff and widget output

use crossterm::{execute, style::Print};
use std::io::{Stdout, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::colors::*;
use super::view_models::{PlayoffWeekView, StandingsRow};
use crate::constants::display::{DEFAULT_WIDTH, PLAYOFF_START_WEEK, TEAM_NAME_WIDTH};
use crate::data_fetcher::models::League;
use crate::data_fetcher::processors::{PlayoffStatus, RankedTeam};
use crate::error::AppError;

const TITLE_WIDTH: usize = 20;
const CONTENT_MARGIN: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum HubRow {
    SectionHeader(String),
    StandingsHeader,
    Standings(StandingsRow),
    WeekTabs { weeks: Vec<u32>, selected: u32 },
    PlayoffHeader,
    Playoff {
        display_rank: usize,
        team: String,
        score: String,
        status: PlayoffStatus,
    },
    LeagueEntry { league: League, selected: bool },
    Message(String),
    ErrorMessage(String),
    /// Server-rendered document shown line by line without reformatting.
    Preformatted(String),
}

#[derive(Debug)]
pub struct HubPage {
    page_number: u16,
    title: String,
    subheader: String,
    rows: Vec<HubRow>,
    use_colors: bool,
    width: usize,
}

/// Pads or truncates `text` to exactly `width` terminal columns.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

fn right_align(text: &str, width: usize) -> String {
    let w = text.width();
    if w >= width {
        text.to_string()
    } else {
        format!("{}{}", " ".repeat(width - w), text)
    }
}

impl HubPage {
    /// Creates an empty page.
    ///
    /// # Example
    /// ```
    /// use big_playoff_hub::ui::HubPage;
    ///
    /// let mut page = HubPage::new(301, "STANDINGS", "Main League (2025)", false);
    /// page.add_message("No teams yet");
    /// assert!(page.render_to_string().contains("No teams yet"));
    /// ```
    pub fn new(
        page_number: u16,
        title: impl Into<String>,
        subheader: impl Into<String>,
        use_colors: bool,
    ) -> Self {
        Self {
            page_number,
            title: title.into(),
            subheader: subheader.into(),
            rows: Vec::new(),
            use_colors,
            width: DEFAULT_WIDTH,
        }
    }

    pub fn rows(&self) -> &[HubRow] {
        &self.rows
    }

    pub fn add_section_header(&mut self, text: impl Into<String>) {
        self.rows.push(HubRow::SectionHeader(text.into()));
    }

    pub fn add_message(&mut self, text: impl Into<String>) {
        self.rows.push(HubRow::Message(text.into()));
    }

    pub fn add_error_message(&mut self, text: impl Into<String>) {
        self.rows.push(HubRow::ErrorMessage(text.into()));
    }

    /// Adds the standings table. An empty league shows a message instead.
    pub fn add_standings(&mut self, standings: &[RankedTeam]) {
        if standings.is_empty() {
            self.add_message("No teams in this league yet.");
            return;
        }
        self.rows.push(HubRow::StandingsHeader);
        self.rows
            .extend(standings.iter().map(|t| HubRow::Standings(StandingsRow::from(t))));
    }

    /// Adds one playoff week, or the not-started message when `view` is `None`.
    pub fn add_playoff_week(&mut self, view: Option<&PlayoffWeekView>) {
        let Some(view) = view else {
            self.add_message(format!(
                "The BIG Playoff has not started yet. Check back after Week {PLAYOFF_START_WEEK}!"
            ));
            return;
        };

        self.rows.push(HubRow::WeekTabs {
            weeks: view.weeks.clone(),
            selected: view.week,
        });
        self.rows.push(HubRow::PlayoffHeader);
        self.rows.extend(view.rows.iter().map(|r| HubRow::Playoff {
            display_rank: r.display_rank,
            team: r.team.clone(),
            score: r.score.clone(),
            status: r.status,
        }));
    }

    pub fn add_leagues(&mut self, leagues: &[League], selected: Option<i64>) {
        if leagues.is_empty() {
            self.add_message("No leagues found.");
            return;
        }
        self.rows.extend(leagues.iter().map(|league| HubRow::LeagueEntry {
            selected: Some(league.id) == selected,
            league: league.clone(),
        }));
    }

    pub fn add_preformatted(&mut self, text: impl Into<String>) {
        self.rows.push(HubRow::Preformatted(text.into()));
    }

    fn paint(&self, text: &str, fg: u8) -> String {
        if self.use_colors {
            format!("\x1b[38;5;{fg}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    fn render_header(&self, buffer: &mut String) {
        let header_width = self.width.saturating_sub(TITLE_WIDTH);
        let page_text = format!(
            "BIG HUB {} {}",
            self.page_number,
            chrono::Local::now().format("%d.%m.%Y")
        );
        let title = fit_to_width(&self.title, TITLE_WIDTH);
        let right = right_align(&page_text, header_width);

        if self.use_colors {
            buffer.push_str(&format!(
                "\x1b[48;5;{}m\x1b[38;5;{}m{}\x1b[48;5;{}m\x1b[38;5;{}m{}\x1b[0m\n",
                get_ansi_code(title_bg(), 46),
                get_ansi_code(header_bg(), 21),
                title,
                get_ansi_code(header_bg(), 21),
                get_ansi_code(text_fg(), 231),
                right
            ));
        } else {
            buffer.push_str(&format!("{title}{right}\n"));
        }

        let subheader = fit_to_width(&self.subheader, self.width);
        buffer.push_str(&self.paint(subheader.trim_end(), get_ansi_code(subheader_fg(), 46)));
        buffer.push_str("\n\n");
    }

    fn render_row(&self, row: &HubRow, buffer: &mut String) {
        let margin = " ".repeat(CONTENT_MARGIN);
        let text_fg_code = get_ansi_code(text_fg(), 231);
        let subheader_fg_code = get_ansi_code(subheader_fg(), 46);

        match row {
            HubRow::SectionHeader(text) => {
                buffer.push_str(&margin);
                buffer.push_str(&self.paint(text, subheader_fg_code));
                buffer.push('\n');
            }
            HubRow::StandingsHeader => {
                let line = format!(
                    "{margin} #  {}{}{}{}",
                    fit_to_width("Team", TEAM_NAME_WIDTH + 1),
                    fit_to_width("Owner", 13),
                    right_align("W-L-T", 8),
                    right_align("PF", 10)
                );
                buffer.push_str(&self.paint(&line, subheader_fg_code));
                buffer.push('\n');
            }
            HubRow::Standings(standings_row) => {
                let marker = if standings_row.made_league_playoffs { "*" } else { " " };
                let line = format!(
                    "{margin}{:>2}.{marker}{}{}{}{}",
                    standings_row.rank,
                    fit_to_width(&standings_row.team_name, TEAM_NAME_WIDTH + 1),
                    fit_to_width(&standings_row.owner, 13),
                    right_align(&standings_row.record, 8),
                    right_align(&standings_row.points_for, 10)
                );
                buffer.push_str(&self.paint(&line, text_fg_code));
                buffer.push('\n');

                if !standings_row.badges.is_empty() {
                    let badges = standings_row
                        .badges
                        .iter()
                        .map(|b| format!("{} ({})", b.name, b.detail))
                        .collect::<Vec<_>>()
                        .join("  ");
                    let indent = " ".repeat(CONTENT_MARGIN + 5);
                    let available = self.width.saturating_sub(indent.len());
                    let badges = fit_to_width(&badges, available);
                    buffer.push_str(&indent);
                    buffer.push_str(
                        &self.paint(badges.trim_end(), get_ansi_code(badge_fg(), 51)),
                    );
                    buffer.push('\n');
                }
            }
            HubRow::WeekTabs { weeks, selected } => {
                buffer.push_str(&margin);
                let tabs = weeks
                    .iter()
                    .map(|w| {
                        if w == selected {
                            self.paint(&format!("[Week {w}]"), subheader_fg_code)
                        } else {
                            self.paint(&format!(" Week {w} "), text_fg_code)
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                buffer.push_str(&tabs);
                buffer.push_str("\n\n");
            }
            HubRow::PlayoffHeader => {
                let line = format!(
                    "{margin} #  {}{}  {}",
                    fit_to_width("Team", TEAM_NAME_WIDTH + 1),
                    right_align("Score", 9),
                    "Status"
                );
                buffer.push_str(&self.paint(&line, subheader_fg_code));
                buffer.push('\n');
            }
            HubRow::Playoff {
                display_rank,
                team,
                score,
                status,
            } => {
                let line = format!(
                    "{margin}{:>2}. {}",
                    display_rank,
                    fit_to_width(team, TEAM_NAME_WIDTH + 1)
                );
                buffer.push_str(&self.paint(&line, text_fg_code));
                buffer.push_str(&self.paint(&right_align(score, 9), get_ansi_code(score_fg(), 226)));
                buffer.push_str("  ");
                buffer.push_str(&self.paint(status.label(), get_ansi_code(status_fg(*status), 46)));
                buffer.push('\n');
            }
            HubRow::LeagueEntry { league, selected } => {
                let marker = if *selected { ">" } else { " " };
                let line = format!("{margin}{marker}{:>4}  {}", league.id, league.label());
                let fg = if *selected { subheader_fg_code } else { text_fg_code };
                buffer.push_str(&self.paint(&line, fg));
                buffer.push('\n');
            }
            HubRow::Message(text) => {
                buffer.push_str(&margin);
                buffer.push_str(&self.paint(text, text_fg_code));
                buffer.push('\n');
            }
            HubRow::ErrorMessage(text) => {
                buffer.push_str(&margin);
                buffer.push_str(&self.paint(text, get_ansi_code(error_fg(), 196)));
                buffer.push('\n');
            }
            HubRow::Preformatted(text) => {
                for line in text.lines() {
                    buffer.push_str(&margin);
                    buffer.push_str(&self.paint(line, text_fg_code));
                    buffer.push('\n');
                }
            }
        }
    }

    /// Renders the whole page into a string. Colors follow the page setting.
    pub fn render_to_string(&self) -> String {
        let mut buffer = String::with_capacity(self.width * (self.rows.len() + 4));
        self.render_header(&mut buffer);
        for row in &self.rows {
            self.render_row(row, &mut buffer);
        }
        buffer
    }

    /// Writes the page to stdout in one operation.
    pub fn render_buffered(&self, stdout: &mut Stdout) -> Result<(), AppError> {
        let buffer = self.render_to_string();
        execute!(stdout, Print(buffer))?;
        stdout.flush()?;
        Ok(())
    }
}
