// Shared prompt fragments.
// Each service that needs model calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments.

/// Appended to every prompt that expects a machine-readable reply.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    Return ONLY the JSON object. \
    Do NOT wrap it in markdown code fences. \
    Do NOT include an introduction, explanation, or closing remarks.";
