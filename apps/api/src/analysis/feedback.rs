use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Low,
    Good,
    Excellent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub band: ScoreBand,
    pub message: String,
}

pub const IMPROVEMENT_TIPS: &[&str] = &[
    "Tailor Your Resume: Always customize your resume for each specific job application.",
    "Use Keywords Naturally: Integrate keywords from the job description into your experience, skills, and summary sections. Don't just stuff them in.",
    "Quantify Achievements: Use numbers and data to showcase your accomplishments (e.g., 'Increased sales by 15%').",
    "Action Verbs: Start bullet points with strong action verbs (e.g., 'Managed', 'Developed', 'Implemented').",
    "Check for Typos: Proofread carefully for any grammatical errors or typos.",
    "ATS-Friendly Formatting: Use a clean, simple format. Avoid tables, columns, images, headers/footers that might confuse some ATS.",
    "Relevance is Key: Only include keywords and skills that are genuinely relevant to your experience and the role.",
];

pub const DISCLAIMER: &str = "This tool provides a basic keyword analysis. ATS systems vary, and human recruiters also play a crucial role. This is a helper, not a guarantee.";

/// Bands: < 50 low, < 75 good, otherwise excellent.
pub fn verdict_for(score: f64) -> Verdict {
    let (band, message) = if score < 50.0 {
        (
            ScoreBand::Low,
            "Your resume has a lower match. Consider incorporating more keywords from the job description.",
        )
    } else if score < 75.0 {
        (
            ScoreBand::Good,
            "Good match! A few tweaks might improve it further.",
        )
    } else {
        (
            ScoreBand::Excellent,
            "Excellent match! Your resume aligns well with the job description's keywords.",
        )
    };

    Verdict {
        band,
        message: message.to_string(),
    }
}

pub fn improvement_tips() -> Vec<String> {
    IMPROVEMENT_TIPS.iter().map(|t| t.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(verdict_for(0.0).band, ScoreBand::Low);
        assert_eq!(verdict_for(49.99).band, ScoreBand::Low);
        assert_eq!(verdict_for(50.0).band, ScoreBand::Good);
        assert_eq!(verdict_for(74.99).band, ScoreBand::Good);
        assert_eq!(verdict_for(75.0).band, ScoreBand::Excellent);
        assert_eq!(verdict_for(100.0).band, ScoreBand::Excellent);
    }

    #[test]
    fn test_low_verdict_suggests_more_keywords() {
        assert!(verdict_for(10.0).message.contains("more keywords"));
    }

    #[test]
    fn test_tips_are_returned_in_order() {
        let tips = improvement_tips();
        assert_eq!(tips.len(), 7);
        assert!(tips[0].starts_with("Tailor Your Resume"));
        assert!(tips[6].starts_with("Relevance is Key"));
    }
}
