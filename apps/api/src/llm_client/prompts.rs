// Shared prompt fragments.
// Each module that needs LLM calls defines its own prompts.rs alongside it.
// This file contains the cross-cutting output-format instructions.

/// Closing instruction for every prompt that must return an HTML document.
pub const HTML_ONLY_INSTRUCTION: &str =
    "Return ONLY the complete HTML document. No explanations, no markdown, no code blocks.";

/// Closing instruction for every prompt that must return JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "Return ONLY valid JSON, no explanations or formatting.";

/// Formatting requirements shared by every HTML resume prompt.
pub const HTML_FORMAT_RULES: &str = "\
   - Return complete HTML document with inline CSS - MUST include <!DOCTYPE html>, <html>, <head>, and <body> tags
   - Use ONLY black text on white background (no colors except black/gray)
   - Professional ATS-friendly layout
   - Clean typography with Arial/Helvetica fonts
   - Proper spacing and hierarchy
   - No tables for layout - use divs and CSS
   - Add proper page margins and spacing for PDF generation";
