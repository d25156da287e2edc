/// Shared types used across the application
///
/// These describe the static social data shown by the feed and profile
/// views and printed by the CLI commands.
use crate::calendar::ArtRef;

/// Application name shown in headers
pub const APP_NAME: &str = "Replay.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserStats {
    pub days_tracked: u32,
    pub total_plays: u32,
    pub hours_listened: u32,
    pub unique_artists: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: &'static str,
    pub username: &'static str,
    pub display_name: &'static str,
    pub profile_picture: ArtRef,
    pub bio: &'static str,
    pub stats: UserStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Friend {
    pub id: &'static str,
    pub username: &'static str,
    pub avatar: ArtRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Song {
    pub name: &'static str,
    pub artist: &'static str,
    pub album: &'static str,
    pub art: ArtRef,
    pub duration: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reaction {
    pub user: &'static Friend,
    pub emoji: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Post {
    pub id: &'static str,
    pub user: &'static Friend,
    pub song: Song,
    /// How late the post was relative to the daily prompt ("2h late")
    pub timestamp: &'static str,
    pub play_count: u32,
    pub reactions: &'static [Reaction],
}

/// At most this many reactions are shown around a post's artwork
pub const VISIBLE_REACTIONS: usize = 3;

impl Post {
    pub fn visible_reactions(&self) -> &'static [Reaction] {
        let count = self.reactions.len().min(VISIBLE_REACTIONS);
        &self.reactions[..count]
    }
}

/// Summary shown in the day-detail overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayDetail {
    pub headline: &'static str,
    pub play_count: u32,
    pub hours_listened: u32,
    pub action_label: &'static str,
}

impl DayDetail {
    /// "42 plays • 3h listened"
    pub fn summary(&self, bullet: &str) -> String {
        format!("{} plays {} {}h listened", self.play_count, bullet, self.hours_listened)
    }
}
