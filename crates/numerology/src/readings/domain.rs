use serde::Serialize;
use std::fmt;

/// Qualitative fortune tier, most favorable first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FortuneLevel {
    DaJi,
    Ji,
    XiaoJi,
    Ping,
    XiaoXiong,
    Xiong,
}

impl FortuneLevel {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::DaJi,
            Self::Ji,
            Self::XiaoJi,
            Self::Ping,
            Self::XiaoXiong,
            Self::Xiong,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::DaJi => "大吉",
            Self::Ji => "吉",
            Self::XiaoJi => "小吉",
            Self::Ping => "平",
            Self::XiaoXiong => "小凶",
            Self::Xiong => "凶",
        }
    }

    /// Threshold ladder, highest tier checked first. Total over the
    /// whole score range even though scores below 60 cannot be
    /// produced by the scorer.
    pub const fn for_score(score: u8) -> Self {
        match score {
            90.. => Self::DaJi,
            80..=89 => Self::Ji,
            70..=79 => Self::XiaoJi,
            60..=69 => Self::Ping,
            50..=59 => Self::XiaoXiong,
            _ => Self::Xiong,
        }
    }
}

impl fmt::Display for FortuneLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadingError {
    InvalidInput(String),
    MissingTrait(u8),
    MissingRecommendations(FortuneLevel),
}

impl fmt::Display for ReadingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadingError::InvalidInput(reason) => write!(f, "invalid input: {}", reason),
            ReadingError::MissingTrait(digit) => {
                write!(f, "no trait phrase for digit {} (expected 1-9)", digit)
            }
            ReadingError::MissingRecommendations(level) => {
                write!(f, "no recommendations for level {}", level)
            }
        }
    }
}

impl std::error::Error for ReadingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_boundaries_select_the_higher_tier() {
        assert_eq!(FortuneLevel::for_score(98), FortuneLevel::DaJi);
        assert_eq!(FortuneLevel::for_score(90), FortuneLevel::DaJi);
        assert_eq!(FortuneLevel::for_score(89), FortuneLevel::Ji);
        assert_eq!(FortuneLevel::for_score(80), FortuneLevel::Ji);
        assert_eq!(FortuneLevel::for_score(79), FortuneLevel::XiaoJi);
        assert_eq!(FortuneLevel::for_score(70), FortuneLevel::XiaoJi);
        assert_eq!(FortuneLevel::for_score(69), FortuneLevel::Ping);
        assert_eq!(FortuneLevel::for_score(60), FortuneLevel::Ping);
        assert_eq!(FortuneLevel::for_score(59), FortuneLevel::XiaoXiong);
        assert_eq!(FortuneLevel::for_score(50), FortuneLevel::XiaoXiong);
        assert_eq!(FortuneLevel::for_score(49), FortuneLevel::Xiong);
        assert_eq!(FortuneLevel::for_score(0), FortuneLevel::Xiong);
    }

    #[test]
    fn ladder_is_monotonic_in_score() {
        let rank = |level: FortuneLevel| {
            FortuneLevel::ordered()
                .iter()
                .position(|candidate| *candidate == level)
                .expect("level present in ordering")
        };

        let mut previous = rank(FortuneLevel::for_score(0));
        for score in 1..=u8::MAX {
            let current = rank(FortuneLevel::for_score(score));
            assert!(
                current <= previous,
                "score {} regressed from tier rank {} to {}",
                score,
                previous,
                current
            );
            previous = current;
        }
    }

    #[test]
    fn labels_match_the_fixed_vocabulary() {
        let labels: Vec<&str> = FortuneLevel::ordered()
            .iter()
            .map(|level| level.label())
            .collect();
        assert_eq!(labels, ["大吉", "吉", "小吉", "平", "小凶", "凶"]);
    }
}
