//! Care guide prompt template.

/// JSON structure the completion model is asked to fill in.
pub const CARE_GUIDE_SCHEMA: &str = r#"{
  "plant": {
    "common_name": "string",
    "scientific_name": "string",
    "watering": {"frequency": "string", "tips": ["string"]},
    "care_tips": ["string"],
    "humidity_level": {"preferred": "string", "tolerance": "string"},
    "light_requirements": {"type": "string", "ideal_conditions": "string"},
    "potting": {"container_type": "string", "drainage": "string"},
    "repotting": {"frequency": "string", "when_to_repote": "string"},
    "pests_diseases": {"common_pests": ["string"], "prevention_tips": ["string"]}
  }
}"#;

const PREAMBLE: &str =
    "Give me data in JSON format (only output json as a result, nothing else) for the plant type: ";

const STRUCTURE_LEAD: &str = " using this json structure: ";

/// Build the single user message asking for a care guide for `plant_name`.
pub fn care_guide_prompt(plant_name: &str) -> String {
    let mut prompt = String::with_capacity(
        PREAMBLE.len() + plant_name.len() + STRUCTURE_LEAD.len() + CARE_GUIDE_SCHEMA.len(),
    );
    prompt.push_str(PREAMBLE);
    prompt.push_str(plant_name);
    prompt.push_str(STRUCTURE_LEAD);
    prompt.push_str(CARE_GUIDE_SCHEMA);
    prompt
}
