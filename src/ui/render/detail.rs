use super::search::media_row;
use super::Frame;
use crate::api::{Genre, MovieDetail, PersonDetail, TvDetail};
use crate::state::{CreditsData, DetailData, State};
use crate::store::ApiResponse;
use crate::ui::theme::Theme;
use crate::ui::widgets::{spinner::spinner, styling};
use crate::utils::dates::{format_age, format_runtime, format_short_month_date, format_year};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

/// Render the open movie, TV show or person with its credits.
///
pub fn detail(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let detail = match state.detail() {
        Some(detail) => detail,
        None => return,
    };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(size);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(state.current_view().title())
        .border_style(styling::normal_block_border_style(theme));
    let lines = match detail.detail() {
        ApiResponse::Pending => vec![Line::from(spinner(
            state.get_spinner_index(),
            "Loading",
            theme,
        ))],
        ApiResponse::Rejected(error) => vec![Line::from(Span::styled(
            error
                .as_ref()
                .map(|error| error.message())
                .unwrap_or_else(|| "Unable to load details".to_string()),
            styling::error_text_style(theme),
        ))],
        ApiResponse::Resolved(DetailData::Movie(movie)) => movie_lines(movie, theme),
        ApiResponse::Resolved(DetailData::Tv(tv)) => tv_lines(tv, theme),
        ApiResponse::Resolved(DetailData::Person(person)) => person_lines(person, theme),
    };
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    credits(frame, chunks[1], state);
}

fn credits(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let detail = match state.detail() {
        Some(detail) => detail,
        None => return,
    };
    let title = match detail.credits() {
        ApiResponse::Resolved(CreditsData::Filmography(_)) => "Known for",
        _ => "Cast",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(styling::active_block_border_style(theme));

    let credits = match detail.credits() {
        ApiResponse::Resolved(credits) if !credits.is_empty() => credits,
        response => {
            let line = match response {
                ApiResponse::Pending if detail.detail().is_resolved() => Line::from(spinner(
                    state.get_spinner_index(),
                    "Loading credits",
                    theme,
                )),
                ApiResponse::Pending => Line::from(""),
                ApiResponse::Rejected(_) => Line::from(Span::styled(
                    "Unable to load credits",
                    styling::error_text_style(theme),
                )),
                ApiResponse::Resolved(_) => Line::from(Span::styled(
                    "No credits",
                    styling::muted_text_style(theme),
                )),
            };
            frame.render_widget(
                Paragraph::new(line).alignment(Alignment::Center).block(block),
                size,
            );
            return;
        }
    };

    let items: Vec<ListItem> = match credits {
        CreditsData::Cast(credits) => credits
            .cast
            .iter()
            .map(|member| {
                let mut spans = vec![Span::styled(
                    member.name.clone().unwrap_or_else(|| "Unknown name".to_string()),
                    styling::normal_text_style(theme).add_modifier(Modifier::BOLD),
                )];
                if let Some(character) = member.character.as_ref().filter(|c| !c.is_empty()) {
                    spans.push(Span::styled(
                        format!("  as {}", character),
                        styling::muted_text_style(theme),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect(),
        CreditsData::Filmography(items) => items.iter().map(|item| media_row(item, state)).collect(),
    };
    let mut list_state = ListState::default();
    list_state.select(Some(detail.selected_credit()));
    let list = List::new(items)
        .block(block)
        .highlight_style(styling::highlight_style(theme))
        .highlight_symbol("› ");
    frame.render_stateful_widget(list, size, &mut list_state);
}

fn title_line(title: &str, year: Option<String>, theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::styled(title.to_string(), styling::heading_style(theme))];
    if let Some(year) = year {
        spans.push(Span::styled(
            format!(" ({})", year),
            styling::muted_text_style(theme),
        ));
    }
    Line::from(spans)
}

fn field_line(label: &str, value: Option<String>, theme: &Theme) -> Option<Line<'static>> {
    value.map(|value| {
        Line::from(vec![
            Span::styled(format!("{}: ", label), styling::muted_text_style(theme)),
            Span::styled(value, styling::normal_text_style(theme)),
        ])
    })
}

fn genres(genres: &[Genre]) -> Option<String> {
    if genres.is_empty() {
        return None;
    }
    Some(
        genres
            .iter()
            .map(|genre| genre.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    )
}

fn rating(vote_average: Option<f64>) -> Option<String> {
    vote_average
        .filter(|vote| *vote > 0.0)
        .map(|vote| format!("{:.1}/10", vote))
}

fn overview_lines(overview: Option<&String>, theme: &Theme) -> Vec<Line<'static>> {
    match overview.filter(|text| !text.trim().is_empty()) {
        Some(text) => vec![
            Line::from(""),
            Line::from(Span::styled(text.clone(), styling::normal_text_style(theme))),
        ],
        None => vec![],
    }
}

fn tagline_line(tagline: Option<&String>, theme: &Theme) -> Option<Line<'static>> {
    tagline.filter(|text| !text.is_empty()).map(|text| {
        Line::from(Span::styled(
            text.clone(),
            styling::muted_text_style(theme).add_modifier(Modifier::ITALIC),
        ))
    })
}

fn movie_lines(movie: &MovieDetail, theme: &Theme) -> Vec<Line<'static>> {
    let release = movie.release_date.as_deref();
    let mut lines = vec![title_line(
        movie.title.as_deref().unwrap_or("Unknown title"),
        format_year(release),
        theme,
    )];
    lines.extend(tagline_line(movie.tagline.as_ref(), theme));
    lines.push(Line::from(""));
    lines.extend(
        [
            field_line("Released", format_short_month_date(release), theme),
            field_line("Runtime", format_runtime(movie.runtime), theme),
            field_line("Genres", genres(&movie.genres), theme),
            field_line("Rating", rating(movie.vote_average), theme),
        ]
        .into_iter()
        .flatten(),
    );
    lines.extend(overview_lines(movie.overview.as_ref(), theme));
    lines
}

fn tv_lines(tv: &TvDetail, theme: &Theme) -> Vec<Line<'static>> {
    let first_aired = tv.first_air_date.as_deref();
    let mut lines = vec![title_line(
        tv.name.as_deref().unwrap_or("Unknown title"),
        format_year(first_aired),
        theme,
    )];
    lines.extend(tagline_line(tv.tagline.as_ref(), theme));
    lines.push(Line::from(""));
    lines.extend(
        [
            field_line("First aired", format_short_month_date(first_aired), theme),
            field_line(
                "Last aired",
                format_short_month_date(tv.last_air_date.as_deref()),
                theme,
            ),
            field_line(
                "Seasons",
                tv.number_of_seasons.map(|seasons| seasons.to_string()),
                theme,
            ),
            field_line(
                "Episodes",
                tv.number_of_episodes.map(|episodes| episodes.to_string()),
                theme,
            ),
            field_line(
                "Runtime",
                format_runtime(tv.episode_run_time.first().copied()),
                theme,
            ),
            field_line("Genres", genres(&tv.genres), theme),
            field_line("Rating", rating(tv.vote_average), theme),
        ]
        .into_iter()
        .flatten(),
    );
    lines.extend(overview_lines(tv.overview.as_ref(), theme));
    lines
}

fn person_lines(person: &PersonDetail, theme: &Theme) -> Vec<Line<'static>> {
    let birthday = person.birthday.as_deref();
    let deathday = person.deathday.as_deref();
    let mut lines = vec![title_line(
        person.name.as_deref().unwrap_or("Unknown name"),
        None,
        theme,
    )];
    lines.push(Line::from(""));
    lines.extend(
        [
            field_line("Known for", person.known_for_department.clone(), theme),
            field_line("Born", format_short_month_date(birthday), theme),
            field_line("Died", format_short_month_date(deathday), theme),
            field_line(
                "Age",
                format_age(birthday, deathday).map(|age| age.to_string()),
                theme,
            ),
            field_line("Place of birth", person.place_of_birth.clone(), theme),
        ]
        .into_iter()
        .flatten(),
    );
    lines.extend(overview_lines(person.biography.as_ref(), theme));
    lines
}
