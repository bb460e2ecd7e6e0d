use super::domain::FortuneLevel;
use super::reporter::FortuneReading;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FortuneAnalysisView {
    pub life_number: u8,
    pub life_trait: &'static str,
    pub life_sentence: String,
    pub name_number: u8,
    pub name_trait: &'static str,
    pub name_sentence: String,
}

/// Presentation shape of a reading: the raw values plus the rendered
/// sentences clients display verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct FortuneReadingView {
    pub score: u8,
    pub level: FortuneLevel,
    pub level_label: &'static str,
    pub summary: String,
    pub analysis: FortuneAnalysisView,
    pub recommendations: Vec<&'static str>,
    pub lucky: Vec<&'static str>,
    pub unlucky: Vec<&'static str>,
}

impl FortuneReading {
    pub fn to_view(&self) -> FortuneReadingView {
        FortuneReadingView {
            score: self.score,
            level: self.level,
            level_label: self.level.label(),
            summary: format!(
                "您的运势评级为「{}」，综合分数为{}分。",
                self.level.label(),
                self.score
            ),
            analysis: FortuneAnalysisView {
                life_number: self.life_number,
                life_trait: self.life_trait,
                life_sentence: format!(
                    "您的生命数字为{}，显示您具有{}的特质。",
                    self.life_number, self.life_trait
                ),
                name_number: self.name_number,
                name_trait: self.name_trait,
                name_sentence: format!(
                    "您的姓名数理为{}，暗示您在事业上{}。",
                    self.name_number, self.name_trait
                ),
            },
            recommendations: self.recommendations.clone(),
            lucky: self.lucky.clone(),
            unlucky: self.unlucky.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::calculate_fortune;
    use chrono::NaiveDate;

    #[test]
    fn view_renders_the_display_sentences() {
        let birthdate = NaiveDate::from_ymd_opt(2000, 1, 15).expect("valid birthdate");
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).expect("valid date");
        let view = calculate_fortune("Alice", birthdate, today)
            .expect("reading computes")
            .to_view();

        assert_eq!(view.level_label, "平");
        assert_eq!(view.summary, "您的运势评级为「平」，综合分数为66分。");
        assert_eq!(
            view.analysis.life_sentence,
            "您的生命数字为9，显示您具有博爱和奉献精神的特质。"
        );
        assert_eq!(
            view.analysis.name_sentence,
            "您的姓名数理为1，暗示您在事业上适合独立创业。"
        );
    }
}
