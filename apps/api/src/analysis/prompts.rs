//! Rubric prompt templates for the profile and post analyzers.
//! Replace `{placeholder}` markers before sending. Builders escape embedded
//! quotes in scalar fields and JSON-encode list fields so user content
//! cannot break the surrounding template. Builders never validate — empty
//! fields are substituted as empty strings; validation is the handler's job.

use crate::analysis::models::{PostAnalyzeRequest, ProfileAnalyzeRequest};

/// Profile rubric: fixed weights, JSON-only output contract.
pub const PROFILE_RUBRIC_TEMPLATE: &str = r#"You are a LinkedIn Personal Branding Rater.

Your task is NOT to "be creative", but to RATE the profile based on a fixed rubric.
You MUST follow the scoring weights below and return the result in JSON ONLY.

========================
RUBRIC & WEIGHTS (TOTAL 100)
1. Headline Quality (20 pts)
   - 0 pts: empty or generic ("Student", "Developer")
   - +5 pts: mentions role (e.g. "Fullstack Developer")
   - +5 pts: mentions tech / domain (e.g. "Laravel, Next.js")
   - +5 pts: mentions value / outcome (e.g. "helping brands build...")
   - +5 pts: length 40-120 characters and readable

2. Summary / About Clarity (20 pts)
   - 0 pts: empty
   - +5 pts: tells what they do now
   - +5 pts: tells what they can help with (services / problem)
   - +5 pts: mentions experience / credibility (years, companies, results)
   - +5 pts: has some personality/tone (not 100% generic)

3. Skills-Target Match (20 pts)
   - Base skills = user.skills[]
   - Target role = user.target_role
   - +10 pts if at least 3 skills are clearly relevant to target role
   - +5 pts if includes modern / in-demand tools for that role
   - +5 pts if there is no obvious missing skill (e.g. target=Frontend but no React)

4. Experience Relevance (15 pts)
   - 0 pts: no experience data
   - +5 pts: at least 1 role relevant to target role
   - +5 pts: has progression (intern -> junior -> mid)
   - +5 pts: has company or project that supports the role (freelance counts)

5. Keyword Optimization (15 pts)
   - Take target role -> extract main keywords -> check if they appear in headline OR summary OR skills
   - +5 pts if target keyword appears in headline
   - +5 pts if tech keyword appears in summary or skills
   - +5 pts if profile is searchable for that role (has at least 3 role-related terms)

6. Overall Branding / Consistency (10 pts)
   - +5 pts: headline, summary, skills talk about the SAME thing
   - +5 pts: tone matches target region / role (e.g. professional for "Product Manager")

========================

OUTPUT RULES:
- "score" = sum of all component scores (0-100)
- "missing_keywords" = keywords that SHOULD exist, based on target_role, but not present
- "improvement_tips" = MAX 3, each must be actionable
- If headline score < 15, generate a better headline
- If summary score < 15, generate a better summary (max 120 words)

========================
INPUT (JSON):
{
  "name": "{name}",
  "headline": "{headline}",
  "summary": "{summary}",
  "skills": {skills_json},
  "experience": {experience_json},
  "education": "{education}",
  "achievements": {achievements_json},
  "target_role": "{target_role}",
  "languages": {languages_json},
  "target_region": "{target_region}"
}

========================
RETURN JSON ONLY IN THIS SHAPE:
{
  "score": 0,
  "components": {
    "headline_quality": 0,
    "summary_clarity": 0,
    "skills_target_match": 0,
    "experience_relevance": 0,
    "keyword_optimization": 0,
    "branding_consistency": 0
  },
  "headline_suggestion": "",
  "summary_suggestion": "",
  "missing_keywords": [],
  "improvement_tips": [],
  "notes": ""
}
DO NOT wrap with ```json
DO NOT add explanation text"#;

/// Post rubric: hook score 0-10, structure feedback, three rewrite variants,
/// hashtags and best posting time (Asia/Jakarta).
pub const POST_RUBRIC_TEMPLATE: &str = r#"You are a LinkedIn Content Growth Rater.

Your job is NOT to be creative without control.
Rate and transform the post based on the rubric below and return ONLY valid JSON.

========================
RUBRIC
1) Hook Score (0-10):
   +0: no clear hook (first 1-2 lines weak, vague, or off-topic)
   +5: somewhat clear hook but generic or too long
   +8-10: sharp, curiosity-driven, concise (<= 180 chars for first 2 lines)

2) Structure Feedback:
   - Check presence of: hook, body, CTA
   - Check readability: short lines, scannable, avoids wall-of-text
   - Suggest 1-2 concrete fixes (no more than 2 sentences)

3) Variants (Rewrite):
   Generate 3 alternative captions keeping original meaning:
   - "story": personal narrative, first-person, 4-7 short lines
   - "educational": step-by-step, bullet-ish, 4-7 short lines
   - "authority": confident, data/insight-led, 4-7 short lines
   * Each variant MUST end with a short CTA (e.g., "Thoughts?" or "Want the checklist?")

4) Hashtags:
   - 5-7 hashtags, lowercase, no spaces, relevant to the given niche
   - Do NOT repeat identical words

5) Best Time to Post (Asia/Jakarta):
   - Suggest exact day + time in WIB (e.g., "Tuesday, 09:00 WIB")
   - Prefer weekday morning or early afternoon

========================
INPUT:
Post: """{post_text}"""
Niche: "{niche}"

========================
RETURN JSON ONLY WITH THIS SHAPE:
{
  "hook_score": number,
  "structure_feedback": string,
  "variants": {
    "story": string,
    "educational": string,
    "authority": string
  },
  "hashtags": string[],
  "best_time": string
}
DO NOT wrap with ```
DO NOT add any extra keys"#;

/// Escapes embedded double quotes so interpolated content cannot terminate
/// the quoted field in the template.
fn escape_quotes(value: &str) -> String {
    value.replace('"', "\\\"")
}

/// Embeds a string list as a JSON array literal.
fn json_list(values: &[String]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
}

/// Renders the profile rubric prompt for one analysis request.
pub fn build_profile_prompt(request: &ProfileAnalyzeRequest) -> String {
    PROFILE_RUBRIC_TEMPLATE
        .replace("{name}", &escape_quotes(&request.name))
        .replace("{headline}", &escape_quotes(&request.headline))
        .replace("{summary}", &escape_quotes(&request.summary))
        .replace("{skills_json}", &json_list(&request.skills))
        .replace("{experience_json}", &json_list(&request.experience))
        .replace("{education}", &escape_quotes(&request.education))
        .replace("{achievements_json}", &json_list(&request.achievements))
        .replace("{target_role}", &escape_quotes(&request.target_role))
        .replace("{languages_json}", &json_list(&request.languages))
        .replace("{target_region}", &escape_quotes(&request.target_region))
}

/// Renders the post rubric prompt. An empty niche defaults to "general tech".
pub fn build_post_prompt(request: &PostAnalyzeRequest) -> String {
    let niche = if request.niche.trim().is_empty() {
        "general tech"
    } else {
        request.niche.trim()
    };

    POST_RUBRIC_TEMPLATE
        .replace("{post_text}", &escape_quotes(request.post_text.trim()))
        .replace("{niche}", &escape_quotes(niche))
}
