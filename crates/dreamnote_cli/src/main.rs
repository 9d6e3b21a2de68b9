//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `dreamnote_core` linkage with a deterministic ping.
//! - Interpret one dream from positional arguments:
//!   `dreamnote_cli <emotion> <context> <narrative...>`.

use dreamnote_core::{
    additional_insights, core_version, init_with, ping, EmotionTag, InterpretationEngine,
    InvalidEmotion, LogConfig,
};
use std::fmt::Write as _;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("dreamnote_core ping={}", ping());
    println!("dreamnote_core version={}", core_version());

    match LogConfig::from_env().and_then(|config| config.map_or(Ok(()), init_with)) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("logging disabled: {err}");
        }
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [emotion, context, narrative @ ..] = args.as_slice() else {
        return ExitCode::SUCCESS;
    };

    let engine = InterpretationEngine::canonical();
    match render(&engine, emotion, context, &narrative.join(" ")) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Builds the printable report for one dream.
fn render(
    engine: &InterpretationEngine,
    emotion_label: &str,
    context: &str,
    narrative: &str,
) -> Result<String, InvalidEmotion> {
    let emotion = EmotionTag::parse_label(emotion_label)?;
    let interpretation = engine.interpret(narrative, emotion, context);
    let insights = additional_insights(emotion);

    let mut report = String::new();
    let _ = writeln!(report);
    let _ = writeln!(report, "{}", interpretation.explanation);

    if !interpretation.symbols.is_empty() {
        let _ = writeln!(report);
        for symbol in &interpretation.symbols {
            let _ = writeln!(report, "- {}: {}", symbol.term, symbol.meaning);
        }
    }

    let _ = writeln!(report);
    let _ = writeln!(report, "{}", insights.emotional_significance);
    for recommendation in insights.recommendations {
        let _ = writeln!(report, "* {recommendation}");
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::render;
    use dreamnote_core::{additional_insights, EmotionTag, InterpretationEngine};

    #[test]
    fn render_lists_symbols_and_insights() {
        let engine = InterpretationEngine::canonical();
        let report = render(&engine, " anxious ", "exam week", "a snake by the door").unwrap();

        assert!(report.contains("- snake: "));
        assert!(report.contains("- door: "));
        let insights = additional_insights(EmotionTag::Anxious);
        assert!(report.contains(insights.emotional_significance));
        assert_eq!(report.matches("\n* ").count(), insights.recommendations.len());
    }

    #[test]
    fn render_rejects_unknown_emotion() {
        let engine = InterpretationEngine::canonical();
        let err = render(&engine, "Furious", "", "flying").unwrap_err();
        assert!(err.to_string().contains("Furious"));
    }
}
