#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Something the player can play. Built once, never mutated afterwards.
pub struct Episode {
    title: String,
    members: String,
    thumbnail: String,
    /// Seconds.
    duration: u64,
    url: String,
}

impl Episode {
    pub fn new(title: String) -> Self {
        Episode {
            title,
            ..Default::default()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn with_title(mut self, title: String) -> Self {
        self.title = title;
        self
    }

    pub fn members(&self) -> &str {
        &self.members
    }

    pub fn with_members(mut self, members: String) -> Self {
        self.members = members;
        self
    }

    pub fn thumbnail(&self) -> &str {
        &self.thumbnail
    }

    pub fn with_thumbnail(mut self, thumbnail: String) -> Self {
        self.thumbnail = thumbnail;
        self
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn with_duration(mut self, duration: u64) -> Self {
        self.duration = duration;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn with_url(mut self, url: String) -> Self {
        self.url = url;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        let episode = Episode::new(String::from("Faladev #30"))
            .with_members(String::from("Diego e Richard"))
            .with_thumbnail(String::from("https://example.com/thumb.jpg"))
            .with_duration(3981)
            .with_url(String::from("https://example.com/ep.m4a"));

        assert_eq!(episode.title(), "Faladev #30");
        assert_eq!(episode.members(), "Diego e Richard");
        assert_eq!(episode.thumbnail(), "https://example.com/thumb.jpg");
        assert_eq!(episode.duration(), 3981);
        assert_eq!(episode.url(), "https://example.com/ep.m4a");
    }
}
