//! Prompts for file-grounded generation

/// Build the overview prompt for the Director Agent use case
pub fn build_overview_prompt(topic: &str, context_json: &str, max_themes: u32) -> String {
    format!(
        r#"Analyze the uploaded documents and provide a high-level overview for the topic: "{topic}"

Context: {context_json}

Please identify and return a JSON response with the following structure:
{{
    "themes": [
        {{
            "theme_name": "string",
            "description": "string",
            "relevance_score": 0.0-1.0,
            "source_files": ["file1.pdf", "file2.docx"],
            "key_points": ["point1", "point2", "point3"]
        }}
    ],
    "data_points": [
        {{
            "category": "Financial|Customer|Product|etc",
            "available_metrics": ["metric1", "metric2"],
            "time_periods": ["Q1 2024", "Q2 2024"],
            "source_file": "filename.xlsx"
        }}
    ],
    "document_structures": [
        {{
            "file_name": "string",
            "document_type": "report|spreadsheet|presentation",
            "sections": ["section1", "section2"],
            "page_count": null,
            "has_tables": true/false,
            "has_charts": true/false
        }}
    ],
    "relevance_summary": "A 2-3 sentence summary of how relevant the uploaded content is to the specified topic"
}}

Important:
- Identify up to {max_themes} main themes
- Focus on content that would be useful for building a presentation
- Include all available data points and metrics
- Be specific about which files contain what information"#
    )
}

/// Build the detailed prompt for the Text Service use case
pub fn build_detailed_prompt(
    query: &str,
    context_json: &str,
    max_chunks: u32,
    min_confidence: f64,
) -> String {
    format!(
        r#"Find specific content from the uploaded documents for the following query:

Query: "{query}"
Context: {context_json}

Please return a JSON response with the following structure:
{{
    "content_chunks": [
        {{
            "content": "Exact text or data from the document",
            "content_type": "text|data|quote|statistic",
            "source_file": "filename.pdf",
            "source_uri": "file URI if available",
            "page_reference": 3,
            "section_reference": "Section name if available",
            "confidence_score": 0.0-1.0,
            "relevance_to_query": 0.0-1.0
        }}
    ],
    "synthesized_content": "A coherent paragraph synthesizing the key information from the chunks that directly answers the query",
    "query_interpretation": "Brief description of how you understood and approached the query"
}}

Important:
- Extract up to {max_chunks} most relevant content chunks
- Only include chunks with confidence >= {min_confidence}
- For each chunk, provide exact page or section references when available
- The synthesized_content should be suitable for direct use in a presentation slide
- Prioritize factual, specific information over general statements"#
    )
}
