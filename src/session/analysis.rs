use crate::Probability;
use crate::TREND_SLICE;
use crate::gesture::Gesture;
use crate::pattern::Pattern;

/// Read-only projection of the opponent model for display.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Analysis {
    pub observed: usize,
    pub frequency: Percentages,
    pub trend: Vec<Gesture>,
}

/// Lifetime share of each gesture, in percent. All zero before any round.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Percentages {
    pub scissors: Probability,
    pub rock: Probability,
    pub paper: Probability,
}

impl From<&Pattern> for Analysis {
    fn from(pattern: &Pattern) -> Self {
        let overall = pattern.overall();
        let percent = |g: Gesture| overall.share(g) * 100.;
        Self {
            observed: overall.total(),
            frequency: Percentages {
                scissors: percent(Gesture::Scissors),
                rock: percent(Gesture::Rock),
                paper: percent(Gesture::Paper),
            },
            trend: pattern.trailing(TREND_SLICE).collect(),
        }
    }
}

impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Analyzing your decision patterns:")?;
        if self.observed > 0 {
            write!(
                f,
                "\n- You chose Scissors {:.1}%, Rock {:.1}%, Paper {:.1}%",
                self.frequency.scissors, self.frequency.rock, self.frequency.paper
            )?;
        }
        if self.trend.len() >= TREND_SLICE {
            let trend = self
                .trend
                .iter()
                .map(|g| g.to_string())
                .collect::<Vec<_>>()
                .join(" → ");
            write!(f, "\n- Last {} choices: {}", TREND_SLICE, trend)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Outcome;

    #[test]
    fn empty_pattern_has_no_lines() {
        let analysis = Analysis::from(&Pattern::default());
        assert_eq!(analysis.observed, 0);
        assert_eq!(analysis.frequency, Percentages::default());
        assert!(analysis.trend.is_empty());
        assert_eq!(analysis.to_string(), "Analyzing your decision patterns:");
    }

    #[test]
    fn percentages_and_trend() {
        let mut pattern = Pattern::default();
        pattern.update(Gesture::Scissors, None);
        for g in [Gesture::Rock, Gesture::Paper, Gesture::Rock] {
            pattern.update(g, Some(Outcome::Draw));
        }
        let analysis = Analysis::from(&pattern);
        assert_eq!(analysis.frequency.rock, 50.0);
        assert_eq!(analysis.frequency.scissors, 25.0);
        assert_eq!(analysis.trend, vec![Gesture::Rock, Gesture::Paper, Gesture::Rock]);
        let text = analysis.to_string();
        assert!(text.contains("Scissors 25.0%, Rock 50.0%, Paper 25.0%"));
        assert!(text.contains("Last 3 choices: Rock → Paper → Rock"));
    }

    #[test]
    fn short_trend_is_not_printed() {
        let mut pattern = Pattern::default();
        pattern.update(Gesture::Paper, None);
        let analysis = Analysis::from(&pattern);
        assert_eq!(analysis.trend, vec![Gesture::Paper]);
        assert!(!analysis.to_string().contains("Last"));
    }
}
