use pirabel_core::{Property, RecommendationCategory, RecommendationType, Schema, SearchIntent};

fn strings() -> Schema {
    Schema::array(Schema::string())
}

fn percentage() -> Schema {
    Schema::number_between(0.0, 100.0)
}

pub fn audit_report() -> Schema {
    Schema::object(vec![
        Property::required("score", percentage()),
        Property::required(
            "metaTags",
            Schema::object(vec![
                Property::required("title", Schema::string()),
                Property::required("description", Schema::string()),
                Property::optional("keywords", Schema::string()),
                Property::optional("canonical", Schema::string()),
                Property::optional("robots", Schema::string()),
            ]),
        ),
        Property::required(
            "headings",
            Schema::object(vec![
                Property::required("h1", strings()),
                Property::required("h2", strings()),
                Property::required("h3", strings()),
                Property::required("hierarchyScore", percentage()),
            ]),
        ),
        Property::required(
            "performance",
            Schema::object(vec![
                Property::required("loadSpeed", Schema::number_at_least(0.0)),
                Property::required("pageSize", Schema::string()),
                Property::required("requestCount", Schema::number_at_least(0.0)),
            ]),
        ),
        Property::required(
            "coreWebVitals",
            Schema::object(vec![
                Property::required("lcp", Schema::number_at_least(0.0)),
                Property::required("fid", Schema::number_at_least(0.0)),
                Property::required("cls", Schema::number_at_least(0.0)),
            ]),
        ),
        Property::required(
            "security",
            Schema::object(vec![
                Property::required("https", Schema::boolean()),
                Property::optional("sslExpiry", Schema::string()),
                Property::required("securityHeaders", strings()),
            ]),
        ),
        Property::required(
            "recommendations",
            Schema::array(Schema::object(vec![
                Property::required("type", Schema::one_of(&RecommendationType::ALL)),
                Property::required("category", Schema::one_of(&RecommendationCategory::ALL)),
                Property::required("message", Schema::string()),
                Property::required("suggestion", Schema::string()),
                Property::required("impact", percentage()),
            ])),
        ),
        Property::required(
            "images",
            Schema::object(vec![
                Property::required("total", Schema::number_at_least(0.0)),
                Property::required("missingAlt", Schema::number_at_least(0.0)),
            ]),
        ),
    ])
}

pub fn keyword_metric() -> Schema {
    Schema::object(vec![
        Property::required("keyword", Schema::string()),
        Property::required("volume", Schema::number_at_least(0.0)),
        Property::required("kd", percentage()),
        Property::required("cpc", Schema::number_at_least(0.0)),
        Property::required("intent", Schema::one_of(&SearchIntent::ALL)),
        Property::required("trend", Schema::array(Schema::number())),
    ])
}

pub fn keyword_set() -> Schema {
    Schema::array(keyword_metric())
}

pub fn article_draft() -> Schema {
    Schema::object(vec![
        Property::required("title", Schema::string()),
        Property::required("content", Schema::string()),
        Property::required("outline", strings()),
        Property::optional("targetKeywords", strings()),
        Property::optional("seoScore", percentage()),
    ])
}
