//! Prompt templates for the three generator-backed stages
//!
//! Placeholders in `{braces}` are substituted with `str::replace`.

use crate::types::{Reading, Verdict};

/// Mechanic agent: technical root-cause diagnosis
const DIAGNOSIS_PROMPT: &str = r#"You are an automotive diagnostic AI. Analyze the following vehicle sensor data and provide a concise technical diagnosis.

Sensor Readings:
- Engine Temperature: {temperature}°C
- Vibration Level: {vibration}G
- Battery Voltage: {voltage}V

Detected Anomalies:
{anomalies}

Provide a diagnosis in 2-3 sentences identifying the most likely root cause and its impact on vehicle operation."#;

/// Concierge agent: customer-facing message
const CUSTOMER_MESSAGE_PROMPT: &str = r#"You are a friendly and empathetic automotive customer service agent. Draft a brief, WhatsApp-style message (3-4 sentences) to inform a customer about a vehicle issue and offer immediate assistance.

Technical Diagnosis:
{diagnosis}

Customer Name: {customer_name}

Guidelines:
- Use a warm, professional tone
- Be honest about the issue but remain reassuring
- Mention immediate next steps (service booking)
- Keep it concise for messaging platform

Generate ONLY the message text, no additional commentary."#;

/// Manufacturing feedback: structured design-iteration record
const MANUFACTURING_PROMPT: &str = r#"You are an automotive manufacturing quality engineer. Analyze this field failure data and generate a JSON response with improvement suggestions for design iteration.

Sensor Readings:
- Engine Temperature: {temperature}°C
- Vibration Level: {vibration}G
- Battery Voltage: {voltage}V

Detected Anomalies:
{anomalies}

Return ONLY a valid JSON object (no markdown, no explanation) with these exact fields:
{
    "Root_Cause": "specific technical root cause",
    "Defect_Cluster_ID": "CLUSTER_XXX",
    "Design_Improvement_Suggestion": "actionable engineering improvement for next design iteration"
}"#;

/// Findings rendered as a pretty JSON array of messages
fn anomalies_json(verdict: &Verdict) -> String {
    serde_json::to_string_pretty(&verdict.messages()).unwrap_or_else(|_| "[]".to_string())
}

fn fill_sensor_prompt(template: &str, reading: &Reading, verdict: &Verdict) -> String {
    template
        .replace("{temperature}", &format!("{:.1}", reading.temperature))
        .replace("{vibration}", &format!("{:.2}", reading.vibration))
        .replace("{voltage}", &format!("{:.2}", reading.voltage))
        .replace("{anomalies}", &anomalies_json(verdict))
}

pub fn diagnosis_prompt(reading: &Reading, verdict: &Verdict) -> String {
    fill_sensor_prompt(DIAGNOSIS_PROMPT, reading, verdict)
}

pub fn customer_message_prompt(diagnosis: &str, customer_name: &str) -> String {
    CUSTOMER_MESSAGE_PROMPT
        .replace("{diagnosis}", diagnosis)
        .replace("{customer_name}", customer_name)
}

pub fn manufacturing_prompt(reading: &Reading, verdict: &Verdict) -> String {
    fill_sensor_prompt(MANUFACTURING_PROMPT, reading, verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::classify;

    #[test]
    fn test_diagnosis_prompt_contains_readings_and_findings() {
        let reading = Reading::now(115.0, 9.0, 10.0);
        let verdict = classify(&reading);
        let prompt = diagnosis_prompt(&reading, &verdict);
        assert!(prompt.contains("Engine Temperature: 115.0°C"));
        assert!(prompt.contains("Vibration Level: 9.00G"));
        assert!(prompt.contains("Battery Voltage: 10.00V"));
        assert!(prompt.contains("CRITICAL: Engine Temperature 115.0°C (threshold: 110°C)"));
        assert!(!prompt.contains("{anomalies}"));
    }

    #[test]
    fn test_manufacturing_prompt_keeps_json_skeleton() {
        let reading = Reading::now(101.0, 2.0, 13.0);
        let prompt = manufacturing_prompt(&reading, &classify(&reading));
        assert!(prompt.contains("\"Defect_Cluster_ID\": \"CLUSTER_XXX\""));
    }

    #[test]
    fn test_customer_prompt_names_customer() {
        let prompt = customer_message_prompt("Diagnosis: worn mounts", "Ada");
        assert!(prompt.contains("Customer Name: Ada"));
        assert!(prompt.contains("Diagnosis: worn mounts"));
    }
}
