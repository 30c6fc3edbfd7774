//! Prompts for web-search-grounded generation

/// Build the overview prompt for web research on a topic
pub fn build_overview_prompt(
    topic: &str,
    context_json: &str,
    industry_focus: Option<&str>,
    recency_preference: &str,
) -> String {
    let industry_clause = match industry_focus {
        Some(industry) => format!("Focus on {industry} industry perspective."),
        None => String::new(),
    };
    let recency_clause = if recency_preference == "recent" {
        "Prioritize recent information from the last 1-2 years."
    } else {
        ""
    };

    format!(
        r#"Research the following topic on the web and provide a high-level overview:

Topic: "{topic}"
Context: {context_json}
{industry_clause}
{recency_clause}

Please return a JSON response with the following structure:
{{
    "summary": "A 2-3 paragraph summary of key findings from web research",
    "key_themes": [
        {{
            "theme_name": "string",
            "description": "string",
            "perspective": "mainstream|emerging|contrarian",
            "supporting_sources": ["url1", "url2"]
        }}
    ],
    "top_sources": [
        {{
            "title": "Article or page title",
            "url": "https://...",
            "domain": "example.com",
            "source_type": "news|academic|industry|government|blog",
            "published_date": "2024-01-15 or null",
            "reliability_indicator": "high|medium|low",
            "key_insight": "What this source uniquely contributes"
        }}
    ],
    "suggested_angles": [
        "Angle 1: Description of perspective to consider",
        "Angle 2: Another perspective"
    ],
    "coverage_assessment": "Brief assessment of how well this topic is covered online and quality of available sources"
}}

Important:
- Identify 3-5 main themes from diverse sources
- Include only the 3-5 most reliable and relevant sources
- Assess source reliability (prefer news, academic, government, industry over blogs)
- Suggest different angles that could be taken in a presentation
- Be specific about what each source contributes"#
    )
}

/// Build the detailed prompt for specific facts from the web
pub fn build_detailed_prompt(
    query: &str,
    context_json: &str,
    data_types: &[String],
    recency_required: bool,
) -> String {
    let data_types_str = data_types.join(", ");
    let recency_clause = if recency_required {
        "Prioritize the most recent information available (last 1-2 years)."
    } else {
        ""
    };

    format!(
        r#"Find specific, factual information from the web for:

Query: "{query}"
Context: {context_json}
Data types needed: {data_types_str}
{recency_clause}

Please return a JSON response with the following structure:
{{
    "facts": [
        {{
            "fact_type": "statistic|quote|date|definition|claim",
            "content": "The exact fact, statistic, or quote",
            "source_url": "https://...",
            "source_domain": "example.com",
            "source_title": "Article title",
            "published_date": "2024-01-15 or null",
            "verification_status": "verified|unverified|conflicting",
            "confidence_score": 0.0-1.0
        }}
    ],
    "synthesized_content": "A coherent paragraph synthesizing the facts, suitable for direct use in a presentation slide",
    "data_recency": "current|recent|dated",
    "source_diversity": "diverse|limited|single"
}}

Important:
- Extract 5-8 most relevant and verifiable facts
- Mark facts as "verified" only if found in multiple authoritative sources
- Include exact statistics and numbers when available
- Prioritize authoritative sources (government, academic, major news)
- The synthesized_content should be suitable for a presentation slide
- Be specific about dates and sources for each fact"#
    )
}
