/// Mock fixture data
///
/// The application has no backend: every view renders from the constants in
/// this module. They are also used by the CLI commands, tests and benchmarks
/// so all of them see the same data.
use crate::calendar::ArtRef;
use crate::types::{CurrentUser, DayDetail, Friend, Post, Reaction, Song, UserStats};

pub static CURRENT_USER: CurrentUser = CurrentUser {
    id: "user_1",
    username: "alex_listener",
    display_name: "Alex",
    profile_picture: ArtRef("https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=100&h=100&fit=crop"),
    bio: "Indie rock enthusiast & vinyl collector 🎧",
    stats: UserStats {
        days_tracked: 142,
        total_plays: 3429,
        hours_listened: 124,
        unique_artists: 89,
    },
};

pub static FRIENDS: [Friend; 3] = [
    Friend {
        id: "u2",
        username: "sarah_j",
        avatar: ArtRef("https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=100&h=100&fit=crop"),
    },
    Friend {
        id: "u3",
        username: "mike_beats",
        avatar: ArtRef("https://images.unsplash.com/photo-1599566150163-29194dcaad36?w=100&h=100&fit=crop"),
    },
    Friend {
        id: "u4",
        username: "emma_w",
        avatar: ArtRef("https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop"),
    },
];

static POST_1_REACTIONS: [Reaction; 2] = [
    Reaction { user: &FRIENDS[1], emoji: "🔥" },
    Reaction { user: &FRIENDS[2], emoji: "😍" },
];

static POST_2_REACTIONS: [Reaction; 1] = [Reaction { user: &FRIENDS[0], emoji: "⚡️" }];

pub static POSTS: [Post; 3] = [
    Post {
        id: "post_1",
        user: &FRIENDS[0],
        song: Song {
            name: "Midnight City",
            artist: "M83",
            album: "Hurry Up, We're Dreaming",
            art: ArtRef("https://images.unsplash.com/photo-1614613535308-eb5fbd3d2c17?w=600&h=600&fit=crop"),
            duration: "4:03",
        },
        timestamp: "2h late",
        play_count: 42,
        reactions: &POST_1_REACTIONS,
    },
    Post {
        id: "post_2",
        user: &FRIENDS[1],
        song: Song {
            name: "As It Was",
            artist: "Harry Styles",
            album: "Harry's House",
            art: ArtRef("https://images.unsplash.com/photo-1621360841013-c768371e93cf?w=600&h=600&fit=crop"),
            duration: "2:47",
        },
        timestamp: "On time",
        play_count: 156,
        reactions: &POST_2_REACTIONS,
    },
    Post {
        id: "post_3",
        user: &FRIENDS[2],
        song: Song {
            name: "Vampire",
            artist: "Olivia Rodrigo",
            album: "GUTS",
            art: ArtRef("https://images.unsplash.com/photo-1493225255756-d9584f8606e9?w=600&h=600&fit=crop"),
            duration: "3:39",
        },
        timestamp: "5h late",
        play_count: 8,
        reactions: &[],
    },
];

/// Emoji offered by the reaction picker
pub const REACTION_PALETTE: [&str; 3] = ["⚡️", "🔥", "😍"];

/// Tiles shown under "Recent Vibes" on the profile
pub const RECENT_VIBES_COUNT: usize = 9;

const VIBE_ART_ODD: ArtRef = ArtRef("https://images.unsplash.com/photo-1470225620780-dba8ba36b745?w=300&h=300&fit=crop");
const VIBE_ART_EVEN: ArtRef = ArtRef("https://images.unsplash.com/photo-1493225255756-d9584f8606e9?w=300&h=300&fit=crop");

/// Artwork for the `index`th recent-vibe tile (1-based)
pub fn recent_vibe_art(index: usize) -> ArtRef {
    if index % 2 == 1 {
        VIBE_ART_ODD
    } else {
        VIBE_ART_EVEN
    }
}

pub static DAY_DETAIL: DayDetail = DayDetail {
    headline: "Top Track",
    play_count: 42,
    hours_listened: 3,
    action_label: "Share Memory",
};
