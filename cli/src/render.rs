use loader::{format_duration, EpisodeListing, HomeListing};
use state::State;
use std::fmt::Write;

pub fn render_home(home: &HomeListing) -> String {
    let mut out = String::new();

    out.push_str("Últimos lançamentos\n");
    for (row, episode) in home.latest_episodes().iter().enumerate() {
        push_row(&mut out, row, episode);
    }

    out.push_str("\nTodos episódios\n");
    let offset = home.latest_episodes().len();
    for (row, episode) in home.all_episodes().iter().enumerate() {
        push_row(&mut out, offset + row, episode);
    }

    out
}

fn push_row(out: &mut String, row: usize, episode: &EpisodeListing) {
    let _ = writeln!(
        out,
        "{:>3}. {} | {} | {} | {}",
        row + 1,
        episode.title,
        episode.members,
        episode.published_at,
        episode.duration_as_string
    );
}

pub fn render_episode(episode: &EpisodeListing) -> String {
    let mut out = format!("{}\n{}\n", episode.title, episode.members);
    let _ = writeln!(
        out,
        "{} · {}",
        episode.published_at, episode.duration_as_string
    );
    if !episode.url.is_empty() {
        let _ = writeln!(out, "{}", episode.url);
    }

    out
}

/// The player bar.
pub fn render_player(state: &State) -> String {
    let player = state.player_state();

    let mut out = match player.current_episode() {
        Some(episode) => format!(
            "{} Tocando agora: {} | {} | {} [{}/{}]",
            if player.is_playing() { "▶" } else { "⏸" },
            episode.title(),
            episode.members(),
            format_duration(episode.duration()),
            player.current_index() + 1,
            player.episode_queue().len()
        ),
        None => String::from("Selecione um podcast para ouvir"),
    };

    if player.is_looping() {
        out.push_str(" [loop]");
    }
    if player.is_shuffling() {
        out.push_str(" [shuffle]");
    }
    if state.loading() {
        out.push_str(" (loading)");
    } else if let Some(error) = state.listing_error() {
        let _ = write!(out, " ({})", error);
    }

    out
}
