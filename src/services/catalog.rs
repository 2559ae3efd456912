use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::recommendation::{Difficulty, Recommendation, RecommendationType};
use crate::models::MoodLabel;

use MoodLabel::*;

static BUILTIN: &[Recommendation] = &[
    Recommendation {
        image_url: Some("https://images.pexels.com/photos/1770809/pexels-photo-1770809.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1"),
        ..Recommendation::basic(
            "1",
            "Take a nature walk",
            "Spending time in nature can reduce stress and improve your mood. Even a short 15-minute walk can make a difference.",
            RecommendationType::Activity,
            &[Sad, Anxious, Tired],
        )
    },
    Recommendation {
        image_url: Some("https://images.pexels.com/photos/3560044/pexels-photo-3560044.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1"),
        ..Recommendation::basic(
            "2",
            "Practice deep breathing",
            "Try the 4-7-8 breathing technique: Inhale for 4 seconds, hold for 7 seconds, exhale for 8 seconds. Repeat 4 times.",
            RecommendationType::Mindfulness,
            &[Anxious, Angry],
        )
    },
    Recommendation {
        image_url: Some("https://images.pexels.com/photos/6249/nature-notebook-outside-notes.jpg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1"),
        ..Recommendation::basic(
            "3",
            "Gratitude journaling",
            "Write down three things you're grateful for today, no matter how small. This practice can shift your focus to positive aspects of life.",
            RecommendationType::Reflection,
            &[Sad, Neutral, Anxious],
        )
    },
    // Yoga
    Recommendation {
        image_url: Some("https://images.pexels.com/photos/4056535/pexels-photo-4056535.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1"),
        difficulty: Some(Difficulty::Beginner),
        duration: Some("5-10 minutes"),
        ..Recommendation::basic(
            "yoga1",
            "Child's Pose (Balasana)",
            "A gentle resting pose that helps calm the mind and relieve stress.",
            RecommendationType::Yoga,
            &[Anxious, Tired],
        )
    },
    Recommendation {
        image_url: Some("https://images.pexels.com/photos/6698513/pexels-photo-6698513.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1"),
        difficulty: Some(Difficulty::Intermediate),
        duration: Some("3-5 minutes per side"),
        ..Recommendation::basic(
            "yoga2",
            "Warrior II (Virabhadrasana II)",
            "An energizing pose that builds confidence and strength.",
            RecommendationType::Yoga,
            &[Tired, Sad, Neutral],
        )
    },
    // Quotes
    Recommendation {
        category: Some("Motivation"),
        ..Recommendation::basic(
            "quote1",
            "On Resilience",
            "\"The only way out is through.\" - Robert Frost",
            RecommendationType::Quote,
            &[Anxious, Sad, Tired],
        )
    },
    Recommendation {
        category: Some("Happiness"),
        ..Recommendation::basic(
            "quote2",
            "On Joy",
            "\"Happiness is not something ready made. It comes from your own actions.\" - Dalai Lama",
            RecommendationType::Quote,
            &[Happy, Content, Neutral],
        )
    },
    // Music
    Recommendation {
        artist: Some("Marconi Union"),
        genre: Some("Ambient"),
        ..Recommendation::basic(
            "music1",
            "Weightless",
            "A calming ambient track scientifically designed to reduce anxiety.",
            RecommendationType::Music,
            &[Anxious],
        )
    },
    Recommendation {
        artist: Some("The Beatles"),
        genre: Some("Rock"),
        year: Some(1969),
        ..Recommendation::basic(
            "music2",
            "Here Comes the Sun",
            "An uplifting classic to brighten your mood.",
            RecommendationType::Music,
            &[Sad, Tired],
        )
    },
    // Movies
    Recommendation {
        genre: Some("Adventure/Comedy"),
        year: Some(2013),
        ..Recommendation::basic(
            "movie1",
            "The Secret Life of Walter Mitty",
            "An inspiring adventure that reminds us to embrace life's possibilities.",
            RecommendationType::Movie,
            &[Sad, Anxious, Neutral],
        )
    },
    Recommendation {
        genre: Some("Animation"),
        year: Some(2015),
        ..Recommendation::basic(
            "movie2",
            "Inside Out",
            "A heartwarming exploration of emotions and their importance in our lives.",
            RecommendationType::Movie,
            &[Sad, Happy, Content],
        )
    },
];

/// Read-only view over a list of recommendations.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    entries: &'a [Recommendation],
}

impl Catalog<'static> {
    pub fn builtin() -> Self {
        Self { entries: BUILTIN }
    }
}

impl<'a> Catalog<'a> {
    pub fn new(entries: &'a [Recommendation]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'a [Recommendation] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries relevant to `label`, in declaration order.
    pub fn for_mood(&self, label: MoodLabel) -> Vec<&'a Recommendation> {
        self.entries.iter().filter(|r| r.is_for(label)).collect()
    }

    pub fn of_type(&self, kind: RecommendationType) -> Vec<&'a Recommendation> {
        self.entries.iter().filter(|r| r.kind == kind).collect()
    }

    /// Uniform sample without replacement of `min(count, candidates)` entries.
    pub fn random<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
        kind: Option<RecommendationType>,
    ) -> Vec<&'a Recommendation> {
        let mut candidates: Vec<&'a Recommendation> = match kind {
            Some(kind) => self.of_type(kind),
            None => self.entries.iter().collect(),
        };
        candidates.shuffle(rng);
        candidates.truncate(count);
        candidates
    }
}

pub fn recommendations_for_mood(label: MoodLabel) -> Vec<&'static Recommendation> {
    Catalog::builtin().for_mood(label)
}

pub fn random_recommendations<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    kind: Option<RecommendationType>,
) -> Vec<&'static Recommendation> {
    Catalog::builtin().random(rng, count, kind)
}
