// All LLM prompt templates for the Generation module.
// Placeholders are `{name}`-style and filled with `str::replace`; missing values
// render as empty strings. Output-format fragments come from llm_client::prompts.

/// Build mode: write a resume from scratch out of the typed fields.
/// Replace: {name}, {email}, {web_link}, {linkedin}, {job_target}, {job_description},
///          {format_rules}, {html_only}
pub const BUILD_PROMPT_TEMPLATE: &str = r#"You are a professional resume rewriter. Create a complete, ATS-friendly HTML resume for the user based on the following information:

PERSONAL INFORMATION:
- Name: {name}
- Email: {email}
- Website: {web_link}
- LinkedIn: {linkedin}

TARGET POSITION: {job_target}

JOB DESCRIPTION TO MATCH:
{job_description}

REQUIREMENTS:
1. Formatting:
{format_rules}
2. Include these sections in order:
   - Header with name and contact info
   - Professional Summary
   - Core Skills/Technical Skills (relevant to job description)
   - Professional Experience
   - Education (relevant degree)
   - Additional sections if relevant
3. Bullet points with quantified achievements where possible
4. Keywords from job description naturally integrated
5. Ensure content is relevant and realistic for the target role

{html_only}"#;

/// Refine mode: tailor the attached resume PDF to the job description.
/// Replace: {job_description}, {format_rules}, {html_only}
pub const REFINE_PROMPT_TEMPLATE: &str = r#"You are a professional resume rewriter. Analyze the uploaded resume and rewrite it to perfectly match this job description:

JOB DESCRIPTION:
{job_description}

REQUIREMENTS:
1. Keep the same personal information (name, contact details)
2. Tailor EVERYTHING to match the job description:
   - Rewrite professional summary to highlight relevant experience
   - Modify job titles and descriptions to emphasize relevant skills
   - Reorganize and enhance skills section with job-relevant keywords
   - Add quantified achievements that would appeal to this role
   - Maintain professional experience chronology but enhance relevance

3. FORMATTING REQUIREMENTS:
{format_rules}

4. CONTENT OPTIMIZATION:
   - Integrate keywords from job description naturally
   - Quantify achievements with metrics/percentages where relevant
   - Make skills section highly relevant to the target role
   - Ensure all experience demonstrates value for the target position

5. Keep the same overall structure and length as the original resume
6. Preserve any important metrics or achievements that are relevant

{html_only}"#;

/// Chat build: write a resume from the profile collected in conversation.
/// Replace: {profile_json}, {format_rules}, {html_only}
pub const CHAT_BUILD_PROMPT_TEMPLATE: &str = r#"You are a professional resume builder. Create a complete, ATS-friendly HTML resume using this extracted data:

{profile_json}

REQUIREMENTS:
1. Formatting:
{format_rules}
2. Include relevant sections based on available data
3. Fill in realistic details where data is sparse but keep it professional
4. Keywords naturally integrated

{html_only}"#;
