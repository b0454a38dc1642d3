use anyhow::{anyhow, bail};
use loader::HomeListing;
use state::PlayerController;
use std::str::FromStr;

pub const HELP: &str = "\
list              show the episode listing
refresh           fetch the listing again
episode <n>       show episode n
play <n>          play episode n on its own
playlist <n>      play the whole listing, starting at episode n
next, prev        move through the queue
toggle            play/pause
pause, resume     set the playing state
loop, shuffle     toggle loop or shuffle
ended             the current episode finished
clear             empty the player
state             show the player
quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    Refresh,
    /// Zero-based listing row.
    Episode(usize),
    Play(usize),
    PlayList(usize),
    Next,
    Previous,
    Toggle,
    Pause,
    Resume,
    Loop,
    Shuffle,
    Ended,
    Clear,
    State,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default().to_lowercase();
        let mut row = || -> anyhow::Result<usize> {
            let word = words
                .next()
                .ok_or_else(|| anyhow!("{} needs an episode number", name))?;
            match word.parse::<usize>() {
                Ok(n) if n > 0 => Ok(n - 1),
                _ => bail!("{:?} is not an episode number", word),
            }
        };

        let command = match name.as_str() {
            "list" | "ls" => Command::List,
            "refresh" => Command::Refresh,
            "episode" | "ep" => Command::Episode(row()?),
            "play" => Command::Play(row()?),
            "playlist" => Command::PlayList(row()?),
            "next" | "n" => Command::Next,
            "prev" | "previous" | "p" => Command::Previous,
            "toggle" | "t" => Command::Toggle,
            "pause" => Command::Pause,
            "resume" => Command::Resume,
            "loop" => Command::Loop,
            "shuffle" => Command::Shuffle,
            "ended" => Command::Ended,
            "clear" => Command::Clear,
            "state" => Command::State,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => bail!("Unknown command {:?}, try help", other),
        };

        Ok(command)
    }
}

/// Runs a player command. Returns a message for the user when the command
/// could not be carried out.
pub fn execute<C: PlayerController + ?Sized>(
    player: &C,
    home: Option<&HomeListing>,
    command: Command,
) -> Option<String> {
    match command {
        Command::Play(row) | Command::PlayList(row) => {
            let home = match home {
                Some(home) => home,
                None => return Some(String::from("The listing is not loaded yet")),
            };
            let listing = match home.get(row) {
                Some(listing) => listing,
                None => return Some(format!("There is no episode {}", row + 1)),
            };

            if matches!(command, Command::Play(_)) {
                player.play(listing.to_episode());
            } else {
                player.play_list(home.playlist(), row);
            }
        }
        Command::Next => player.play_next(),
        Command::Previous => player.play_previous(),
        Command::Toggle => player.toggle_play(),
        Command::Pause => player.set_playing_state(false),
        Command::Resume => player.set_playing_state(true),
        Command::Loop => player.toggle_loop(),
        Command::Shuffle => player.toggle_shuffle(),
        Command::Ended => player.episode_ended(),
        Command::Clear => player.clear_player_state(),
        Command::List
        | Command::Refresh
        | Command::Episode(_)
        | Command::State
        | Command::Help
        | Command::Quit => {}
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use loader::{ApiEpisode, ApiFile, EpisodeListing};
    use state::CurrentState;

    fn home() -> HomeListing {
        let rows = (0..4)
            .map(|n| {
                EpisodeListing::from(ApiEpisode {
                    id: n.to_string(),
                    title: format!("Episode {}", n),
                    members: String::from("Diego e Richard"),
                    thumbnail: String::new(),
                    published_at: String::from("2021-01-08"),
                    file: ApiFile {
                        url: format!("https://example.com/{}.m4a", n),
                        duration: 60,
                    },
                })
            })
            .collect();

        HomeListing::new(rows, 2)
    }

    #[test]
    fn parses_commands() {
        assert_eq!("play 3".parse::<Command>().unwrap(), Command::Play(2));
        assert_eq!("  PLAYLIST 1 ".parse::<Command>().unwrap(), Command::PlayList(0));
        assert_eq!("ep 4".parse::<Command>().unwrap(), Command::Episode(3));
        assert_eq!("n".parse::<Command>().unwrap(), Command::Next);
        assert_eq!("prev".parse::<Command>().unwrap(), Command::Previous);
        assert_eq!("quit".parse::<Command>().unwrap(), Command::Quit);

        assert!("play".parse::<Command>().is_err());
        assert!("play 0".parse::<Command>().is_err());
        assert!("play two".parse::<Command>().is_err());
        assert!("episode".parse::<Command>().is_err());
        assert!("rewind".parse::<Command>().is_err());
    }

    #[test]
    fn plays_from_listing() {
        let (current, _waiter) = CurrentState::new();
        let home = home();

        assert_eq!(execute(&*current, Some(&home), Command::Play(1)), None);
        let player = current.player_state();
        assert_eq!(player.episode_queue().len(), 1);
        assert_eq!(player.current_episode().unwrap().title(), "Episode 1");
        assert!(player.is_playing());

        execute(&*current, Some(&home), Command::PlayList(2));
        execute(&*current, Some(&home), Command::Next);
        let player = current.player_state();
        assert_eq!(player.episode_queue().len(), 4);
        assert_eq!(player.current_index(), 3);
        assert!(!player.has_next());

        execute(&*current, Some(&home), Command::Pause);
        assert!(!current.player_state().is_playing());

        execute(&*current, Some(&home), Command::Ended);
        assert!(current.player_state().episode_queue().is_empty());
    }

    #[test]
    fn reports_missing_rows() {
        let (current, _waiter) = CurrentState::new();

        assert!(execute(&*current, None, Command::Play(0)).is_some());
        assert!(execute(&*current, Some(&home()), Command::PlayList(9)).is_some());
        assert!(current.player_state().episode_queue().is_empty());
    }
}
