/// Fixed instruction block appended after the transcript
///
/// Spells out every response field with its name and range. The closing line
/// forbids markdown wrapping; the parser still tolerates it when the model
/// disobeys.
const ANALYSIS_INSTRUCTIONS: &str = r#"Analyze this sales call and provide a comprehensive JSON response with:

1. Overall Performance Score (0-100)
2. Strengths (array of strings)
3. Areas for Improvement (array of strings)
4. Objection Handling:
   - Score (0-100)
   - Objections Handled (count)
   - Objections Missed (count)
   - Recommendations (array)
5. Meeting Booking:
   - Attempted (boolean)
   - Successful (boolean)
   - Attempts (count)
   - Recommendations (array)
6. Closing:
   - Attempted (boolean)
   - Successful (boolean)
   - Attempts (count)
   - Recommendations (array)
7. Communication Quality:
   - Talk-to-Listen Ratio (number)
   - Energy Level (0-100)
   - Clarity Score (0-100)
   - Recommendations (array)
8. Key Moments (array of objects with timestamp, type, description)

Use these exact JSON keys: overall_score, strengths, areas_for_improvement,
objection_handling (score, objections_handled, objections_missed, recommendations),
meeting_booking (attempted, successful, attempts, recommendations),
closing (attempted, successful, attempts, recommendations),
communication (talk_to_listen_ratio, energy_level, clarity_score, recommendations),
key_moments.

Return ONLY valid JSON, no markdown or extra text."#;

/// Build the analysis prompt for one call
///
/// Deterministic template assembly: the scenario identifier and transcript
/// are embedded verbatim between the role preamble and the instruction block.
pub fn build_analysis_prompt(transcript: &str, scenario_id: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str("You are an expert sales trainer analyzing a sales call transcript.\n\n");
    prompt.push_str(&format!("SCENARIO: {}\n\n", scenario_id));
    prompt.push_str("TRANSCRIPT:\n");
    prompt.push_str(transcript);
    prompt.push_str("\n\n");
    prompt.push_str(ANALYSIS_INSTRUCTIONS);

    prompt
}
